//! Errores específicos del motor (simples por ahora).
//!
//! Los resultados normales de control de flujo (`None` en adyacencia, ruta
//! sin paso localizado) son valores, no errores. Sólo los wrappers estrictos
//! de `flow::resolve` producen estas variantes, para los call sites donde un
//! `None` a mitad de flujo es un bug y no una frontera terminal.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ProgressError {
    #[error("no step matches pathname '{0}'")] UnknownPathname(String),
    #[error("no navigable step after '{0}'")] EndOfFlow(String),
    #[error("no navigable step before '{0}'")] StartOfFlow(String),
    #[error("flow definition contains no steps")] EmptyFlow,
}
