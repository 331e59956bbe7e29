use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ModelInfo {
    pub model_name: String, // p. ej. "YOLOv8n"
    pub model_size: String, // texto libre, p. ej. "nano (lightweight)"
    pub num_classes: u32,
    pub classes: Vec<String>, // en el orden del backend
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HealthStatus {
    pub status: String,
    pub service: String,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}

/// Estado del panel de información del modelo. La carga es única: no hay reintento.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ModelPanel {
    #[default]
    Loading,
    Loaded(ModelInfo),
    Failed(String),
}
