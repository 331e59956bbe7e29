use serde::{Deserialize, Serialize};

use crate::domain::{errors::DomainError, session::SessionStats};

/// Cuerpo de error del backend: `{"error": "<mensaje>"}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

impl ErrorBody {
    /// Sin campo `error` se usa la línea de estado HTTP. Un `error` vacío se respeta tal cual.
    pub fn into_domain(self, status: u16, status_line: &str) -> DomainError {
        let message = self.error.unwrap_or_else(|| status_line.to_string());
        DomainError::Server { status, message }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OkResponse {
    pub ok: bool,
}

/// Estadísticas de sesión que imprime `run` al terminar el lote.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StatsSummary {
    pub total_detections: u64,
    pub processed_images: u64,
    pub processed_videos: u64,
    pub avg_inference_ms: i64,
}

impl From<&SessionStats> for StatsSummary {
    fn from(s: &SessionStats) -> Self {
        Self {
            total_detections: s.total_detections,
            processed_images: s.processed_images,
            processed_videos: s.processed_videos,
            avg_inference_ms: s.mean_inference_ms(),
        }
    }
}
