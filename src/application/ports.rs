use async_trait::async_trait;
use crate::domain::{
    detection::{DetectionResult, VideoResult},
    errors::DomainResult,
    media::MediaFile,
    model::{HealthStatus, ModelInfo},
};

/// Backend de inferencia (API `/api/cv/*`).
#[async_trait]
pub trait DetectionApiPort: Send + Sync {
    async fn model_info(&self) -> DomainResult<ModelInfo>;
    async fn detect_image(&self, file: MediaFile) -> DomainResult<DetectionResult>;
    async fn detect_video(&self, file: MediaFile) -> DomainResult<VideoResult>;
    async fn health(&self) -> DomainResult<HealthStatus>;
}

/// Canal de la alerta bloqueante que ve el usuario cuando un flujo falla.
pub trait NotifierPort: Send + Sync {
    fn alert(&self, message: &str);
}
