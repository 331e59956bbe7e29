use std::time::Duration;

pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8090";
pub const DEFAULT_MAX_UPLOAD_MB: usize = 512;

#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// URL base del backend de inferencia, sin el prefijo `/api/cv`.
    pub backend_url: String,

    /// Timeout por petición. `None` = sin timeout: una petición colgada deja el control deshabilitado.
    pub request_timeout: Option<Duration>,

    /// Dirección del front-end (`serve`).
    pub bind_addr: String,

    /// Tamaño máximo del cuerpo de `/upload/:modality` en bytes.
    pub max_upload_bytes: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            request_timeout: None,
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_MB * 1024 * 1024,
        }
    }
}

impl ClientConfig {
    pub fn new(backend_url: impl Into<String>, timeout_secs: Option<u64>) -> Self {
        Self {
            backend_url: backend_url.into(),
            request_timeout: timeout_secs.filter(|s| *s > 0).map(Duration::from_secs),
            ..Self::default()
        }
    }

    pub fn with_bind_addr(mut self, bind_addr: impl Into<String>) -> Self {
        self.bind_addr = bind_addr.into();
        self
    }

    pub fn with_max_upload_mb(mut self, mb: usize) -> Self {
        self.max_upload_bytes = mb.saturating_mul(1024 * 1024);
        self
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/api/cv/{}", self.backend_url.trim_end_matches('/'), path)
    }

    pub fn model_info_url(&self) -> String {
        self.api_url("model_info")
    }

    pub fn detect_url(&self) -> String {
        self.api_url("detect")
    }

    pub fn detect_video_url(&self) -> String {
        self.api_url("detect_video")
    }

    pub fn health_url(&self) -> String {
        self.api_url("health")
    }
}
