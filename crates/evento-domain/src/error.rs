use thiserror::Error;

/// Error de dominio para la construcción y decodificación de eventos.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{0}")]
    ValidationError(String),
}
