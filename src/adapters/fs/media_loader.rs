use std::io::ErrorKind;
use std::path::Path;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::media::MediaFile;

/// Tipo MIME según la extensión, como lo reportaría el navegador.
pub fn guess_mime(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "bmp" => "image/bmp",
        "webp" => "image/webp",
        "tif" | "tiff" => "image/tiff",
        "mp4" | "m4v" => "video/mp4",
        "mov" => "video/quicktime",
        "avi" => "video/x-msvideo",
        "mkv" => "video/x-matroska",
        "webm" => "video/webm",
        _ => "application/octet-stream",
    }
}

pub async fn load_media(path: &Path) -> DomainResult<MediaFile> {
    let bytes = tokio::fs::read(path).await.map_err(|e| match e.kind() {
        ErrorKind::NotFound => DomainError::NotFound(path.display().to_string()),
        _ => DomainError::OperationFailed(format!("{}: {}", path.display(), e)),
    })?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    Ok(MediaFile::new(name, guess_mime(path), bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn mime_follows_extension_case_insensitively() {
        assert_eq!(guess_mime(&PathBuf::from("a/CAT.JPG")), "image/jpeg");
        assert_eq!(guess_mime(&PathBuf::from("clip.webm")), "video/webm");
        assert_eq!(guess_mime(&PathBuf::from("notes")), "application/octet-stream");
    }

    #[tokio::test]
    async fn loads_name_mime_and_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("street.png");
        std::fs::write(&path, b"not really a png").unwrap();

        let file = load_media(&path).await.unwrap();
        assert_eq!(file.name, "street.png");
        assert_eq!(file.mime, "image/png");
        assert_eq!(file.size(), 16);

        let missing = load_media(&dir.path().join("gone.mp4")).await.unwrap_err();
        assert!(matches!(missing, DomainError::NotFound(_)));
    }
}
