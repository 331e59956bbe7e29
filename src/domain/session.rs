use serde::Serialize;

use super::detection::{DetectionResult, VideoResult};

/// Estadísticas acumuladas durante la vida del servicio. Solo se actualizan con
/// los reductores de abajo: reciben el valor anterior y devuelven el siguiente.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SessionStats {
    pub total_detections: u64,
    pub processed_images: u64,
    pub processed_videos: u64,
    pub inference_times: Vec<f64>,
}

impl SessionStats {
    pub fn with_image(mut self, result: &DetectionResult) -> Self {
        self.total_detections += result.total_objects;
        self.processed_images += 1;
        self.inference_times.push(result.inference_time);
        self
    }

    pub fn with_video(mut self, result: &VideoResult) -> Self {
        self.total_detections += result.total_detections;
        self.processed_videos += 1;
        self.inference_times.push(result.avg_processing_time);
        self
    }

    /// Media de `inference_times` en segundos; 0 si está vacío.
    pub fn mean_inference_secs(&self) -> f64 {
        if self.inference_times.is_empty() {
            return 0.0;
        }
        self.inference_times.iter().sum::<f64>() / self.inference_times.len() as f64
    }

    pub fn mean_inference_ms(&self) -> i64 {
        (self.mean_inference_secs() * 1000.0).round() as i64
    }

    pub fn completed(&self) -> u64 {
        self.processed_images + self.processed_videos
    }
}
