//! Errores del almacén (simples por ahora).

use evento_domain::DomainError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("event is required")] EventRequired,
    #[error("{0}")] Validation(#[from] DomainError),
}
