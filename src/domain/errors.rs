use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// Respuesta no-2xx del backend. `message` es el campo `error` del cuerpo, tal cual.
    #[error("{message}")]
    Server { status: u16, message: String },
    /// Fallo de red o de parseo de la respuesta.
    #[error("{0}")]
    Transport(String),
    #[error("Entrada inválida: {0}")]
    InvalidInput(String),
    #[error("No encontrado: {0}")]
    NotFound(String),
    #[error("Error de operación: {0}")]
    OperationFailed(String),
}

impl DomainError {
    /// Texto que se muestra en la alerta bloqueante.
    pub fn alert_text(&self) -> String {
        format!("Error: {}", self)
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
