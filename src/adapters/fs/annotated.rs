use base64::{prelude::BASE64_STANDARD, Engine};
use std::path::Path;

use crate::domain::errors::{DomainError, DomainResult};

/// Decodifica la referencia `data:<mime>;base64,<payload>` que devuelve el backend
/// para la imagen anotada.
pub fn decode_data_uri(reference: &str) -> DomainResult<Vec<u8>> {
    let rest = reference
        .strip_prefix("data:")
        .ok_or_else(|| DomainError::InvalidInput("annotated image is not a data: URI".into()))?;
    let (meta, payload) = rest
        .split_once(',')
        .ok_or_else(|| DomainError::InvalidInput("data: URI without payload".into()))?;
    if !meta.ends_with(";base64") {
        return Err(DomainError::InvalidInput(format!("unsupported data: URI encoding '{}'", meta)));
    }
    BASE64_STANDARD
        .decode(payload.trim())
        .map_err(|e| DomainError::InvalidInput(format!("base64: {}", e)))
}

/// Escribe la imagen anotada en disco. Rechaza payloads que no sean una imagen reconocible.
pub async fn save_annotated(reference: &str, out: &Path) -> DomainResult<()> {
    let bytes = decode_data_uri(reference)?;
    let format = image::guess_format(&bytes)
        .map_err(|e| DomainError::InvalidInput(format!("annotated image: {}", e)))?;
    tracing::info!("💾 Saving annotated image ({:?}, {} bytes) to {}", format, bytes.len(), out.display());
    tokio::fs::write(out, bytes)
        .await
        .map_err(|e| DomainError::OperationFailed(format!("{}: {}", out.display(), e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    // Cabecera PNG mínima: basta para guess_format.
    const PNG_MAGIC: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0, 0, 0, 0];

    #[test]
    fn rejects_non_data_references() {
        assert!(matches!(decode_data_uri("http://host/x.jpg"), Err(DomainError::InvalidInput(_))));
        assert!(matches!(decode_data_uri("data:image/jpeg,raw"), Err(DomainError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn writes_decoded_image() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("annotated.png");
        let uri = format!("data:image/png;base64,{}", BASE64_STANDARD.encode(PNG_MAGIC));

        save_annotated(&uri, &out).await.unwrap();
        assert_eq!(std::fs::read(&out).unwrap(), PNG_MAGIC);

        let text = format!("data:image/png;base64,{}", BASE64_STANDARD.encode(b"hello"));
        assert!(save_annotated(&text, &out).await.is_err());
    }
}
