use serde::{Deserialize, Serialize};

/// Una instancia de objeto reconocida.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Detection {
    #[serde(rename = "class")]
    pub label: String,
    pub confidence: f64,
    /// [x1, y1, x2, y2] en píxeles de la imagen enviada, si el backend lo manda.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bbox: Option<[f32; 4]>,
}

impl Detection {
    /// Confianza escalada a [0, 100]; se usa para el ancho de la barra y para la etiqueta.
    pub fn percent(&self) -> f64 {
        self.confidence * 100.0
    }
}

/// Resultado de una petición de imagen.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DetectionResult {
    pub annotated_image: String,
    pub detections: Vec<Detection>,
    pub total_objects: u64,
    /// Segundos, medidos en el servidor.
    pub inference_time: f64,
}

/// Resultado de una petición de vídeo.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VideoResult {
    pub total_frames: u64,
    pub processed_frames: u64,
    pub total_detections: u64,
    pub fps: f64,
    pub avg_processing_time: f64,
}

pub fn summarize_detections(detections: &[Detection]) -> String {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for det in detections {
        match counts.iter().position(|(label, _)| *label == det.label) {
            Some(i) => counts[i].1 += 1,
            None => counts.push((det.label.as_str(), 1)),
        }
    }
    counts
        .iter()
        .map(|(label, count)| format!("{} {}", count, label))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn det(label: &str, confidence: f64) -> Detection {
        Detection { label: label.into(), confidence, bbox: None }
    }

    #[test]
    fn deserializes_backend_payload_with_class_key() {
        let raw = r#"{
            "annotated_image": "data:image/jpeg;base64,AAAA",
            "detections": [{"class": "cat", "confidence": 0.92, "bbox": [1.0, 2.0, 30.0, 40.0]}],
            "total_objects": 1,
            "inference_time": 0.045
        }"#;
        let result: DetectionResult = serde_json::from_str(raw).unwrap();
        assert_eq!(result.detections[0].label, "cat");
        assert_eq!(result.detections[0].confidence, 0.92);
        assert_eq!(result.detections[0].bbox, Some([1.0, 2.0, 30.0, 40.0]));
        assert_eq!(result.total_objects, 1);
    }

    #[test]
    fn percent_keeps_full_precision() {
        assert_eq!(det("dog", 0.8125).percent(), 81.25);
    }

    #[test]
    fn summary_keeps_first_seen_order() {
        let dets = vec![det("dog", 0.9), det("cat", 0.8), det("dog", 0.7)];
        assert_eq!(summarize_detections(&dets), "2 dog, 1 cat");
        assert_eq!(summarize_detections(&[]), "");
    }
}
