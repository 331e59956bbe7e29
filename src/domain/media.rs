use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modality {
    Image,
    Video,
}

impl Modality {
    /// Prefijo MIME aceptado en un drop.
    pub fn mime_prefix(self) -> &'static str {
        match self {
            Modality::Image => "image/",
            Modality::Video => "video/",
        }
    }

    /// Nombre del campo multipart que espera el backend.
    pub fn form_field(self) -> &'static str {
        match self {
            Modality::Image => "image",
            Modality::Video => "video",
        }
    }

    pub fn accepts(self, mime: &str) -> bool {
        mime.starts_with(self.mime_prefix())
    }
}

impl fmt::Display for Modality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.form_field())
    }
}

/// Archivo elegido por el usuario; se guarda en memoria hasta enviarlo.
#[derive(Clone, PartialEq)]
pub struct MediaFile {
    pub name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl MediaFile {
    pub fn new(name: impl Into<String>, mime: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self { name: name.into(), mime: mime.into(), bytes }
    }

    pub fn size(&self) -> usize {
        self.bytes.len()
    }

    pub fn size_mib(&self) -> f64 {
        self.size() as f64 / 1024.0 / 1024.0
    }
}

impl fmt::Debug for MediaFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MediaFile")
            .field("name", &self.name)
            .field("mime", &self.mime)
            .field("size", &self.size())
            .finish()
    }
}

/// Widget de subida de una modalidad: la selección pendiente y el indicador de arrastre.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadArea {
    pub modality: Modality,
    pub selected: Option<MediaFile>,
    pub drag_over: bool,
}

impl UploadArea {
    pub fn new(modality: Modality) -> Self {
        Self { modality, selected: None, drag_over: false }
    }

    /// Selección por explorador: reemplaza el archivo actual sin comprobar el MIME.
    pub fn select(&mut self, file: MediaFile) {
        self.selected = Some(file);
    }

    /// Drag-and-drop: solo cuenta el primer archivo, y solo si su MIME coincide.
    /// Devuelve si se aceptó. Un drop rechazado no toca la selección.
    pub fn drop_files(&mut self, mut files: Vec<MediaFile>) -> bool {
        self.drag_over = false;
        if files.is_empty() || !self.modality.accepts(&files[0].mime) {
            return false;
        }
        self.selected = Some(files.swap_remove(0));
        true
    }

    pub fn drag_enter(&mut self) {
        self.drag_over = true;
    }

    pub fn drag_leave(&mut self) {
        self.drag_over = false;
    }

    pub fn has_selection(&self) -> bool {
        self.selected.is_some()
    }
}
