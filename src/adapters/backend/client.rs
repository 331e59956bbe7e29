use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Response;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::application::dto::ErrorBody;
use crate::application::ports::DetectionApiPort;
use crate::config::ClientConfig;
use crate::domain::{
    detection::{DetectionResult, VideoResult},
    errors::{DomainError, DomainResult},
    media::{MediaFile, Modality},
    model::{HealthStatus, ModelInfo},
};

/// Cliente HTTP del backend `/api/cv/*`.
#[derive(Clone)]
pub struct HttpDetectionApi {
    client: reqwest::Client,
    config: ClientConfig,
}

impl HttpDetectionApi {
    pub fn new(config: ClientConfig) -> DomainResult<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| DomainError::OperationFailed(format!("http client: {}", e)))?;
        Ok(Self { client, config })
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> DomainResult<T> {
        debug!("GET {}", url);
        let res = self.client.get(url).send().await.map_err(transport)?;
        decode(res).await
    }

    async fn post_file<T: DeserializeOwned>(
        &self,
        url: &str,
        modality: Modality,
        file: MediaFile,
    ) -> DomainResult<T> {
        debug!("POST {} ({} bytes as '{}')", url, file.size(), modality.form_field());
        let part = Part::bytes(file.bytes)
            .file_name(file.name)
            .mime_str(&file.mime)
            .map_err(|e| DomainError::InvalidInput(format!("mime '{}': {}", file.mime, e)))?;
        let form = Form::new().part(modality.form_field(), part);

        let res = self
            .client
            .post(url)
            .multipart(form)
            .send()
            .await
            .map_err(transport)?;
        decode(res).await
    }
}

#[async_trait]
impl DetectionApiPort for HttpDetectionApi {
    async fn model_info(&self) -> DomainResult<ModelInfo> {
        self.get_json(&self.config.model_info_url()).await
    }

    async fn detect_image(&self, file: MediaFile) -> DomainResult<DetectionResult> {
        self.post_file(&self.config.detect_url(), Modality::Image, file).await
    }

    async fn detect_video(&self, file: MediaFile) -> DomainResult<VideoResult> {
        self.post_file(&self.config.detect_video_url(), Modality::Video, file).await
    }

    async fn health(&self) -> DomainResult<HealthStatus> {
        self.get_json(&self.config.health_url()).await
    }
}

fn transport(e: reqwest::Error) -> DomainError {
    DomainError::Transport(e.to_string())
}

/// 2xx: parsea `T`. Si no, extrae el campo `error` del cuerpo (o usa la línea de estado).
async fn decode<T: DeserializeOwned>(res: Response) -> DomainResult<T> {
    let status = res.status();
    if status.is_success() {
        return res.json::<T>().await.map_err(transport);
    }
    let body = res.json::<ErrorBody>().await.unwrap_or_default();
    Err(body.into_domain(status.as_u16(), &status.to_string()))
}
