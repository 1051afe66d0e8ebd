//! Errores del dominio de sesión (simples por ahora).

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum DomainError {
    #[error("validation error: {0}")] ValidationError(String),
}
