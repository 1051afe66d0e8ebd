//! Resolución del mejor paso navegable (adelante / atrás).
//!
//! La búsqueda parte de la adyacencia cruda y salta pasos según la sesión.
//! En el original la búsqueda es recursiva sobre `relative_step`; aquí se
//! expresa como un bucle con índice explícito. Ambas formas son equivalentes
//! (la recursión es de cola) y la terminación está garantizada porque el
//! índice avanza estrictamente sobre una lista finita.

use crate::errors::ProgressError;
use crate::flow::ProgressFlow;
use crate::step::ProgressStep;

impl<S> ProgressFlow<S> {
    /// Mejor paso siguiente: el primer paso posterior al localizado cuyo
    /// predicado de salto no es verdadero. `None` al final del flujo o si
    /// `pathname` no se localiza.
    pub fn best_next_step(&self, session: &S, pathname: &str) -> Option<&ProgressStep<S>> {
        let mut idx = self.locate(pathname)?;
        loop {
            idx += 1;
            let step = self.steps().get(idx)?;
            if !step.is_skipped(session) {
                return Some(step);
            }
        }
    }

    /// Mejor paso anterior: el primer paso previo al localizado que sea un
    /// destino válido para "atrás". Se descartan los pasos con completitud
    /// declarada en falso (su dato aún no está registrado de forma durable,
    /// y mostrarlos como destino de "atrás" sería inconsistente), los
    /// saltados para esta sesión y los marcados `never_go_back_to`.
    pub fn best_prev_step(&self, session: &S, pathname: &str) -> Option<&ProgressStep<S>> {
        let mut idx = self.locate(pathname)?;
        loop {
            idx = idx.checked_sub(1)?;
            let step = &self.steps()[idx];
            if step.never_go_back_to || step.is_skipped(session) || !step.is_marked_complete(session) {
                continue;
            }
            return Some(step);
        }
    }

    /// Variante estricta de `best_next_step` para call sites donde el final
    /// del flujo no es un resultado esperado.
    pub fn require_next_step(&self, session: &S, pathname: &str) -> Result<&ProgressStep<S>, ProgressError> {
        if self.locate(pathname).is_none() {
            return Err(ProgressError::UnknownPathname(pathname.to_string()));
        }
        self.best_next_step(session, pathname)
            .ok_or_else(|| ProgressError::EndOfFlow(pathname.to_string()))
    }

    /// Variante estricta de `best_prev_step`.
    pub fn require_prev_step(&self, session: &S, pathname: &str) -> Result<&ProgressStep<S>, ProgressError> {
        if self.locate(pathname).is_none() {
            return Err(ProgressError::UnknownPathname(pathname.to_string()));
        }
        self.best_prev_step(session, pathname)
            .ok_or_else(|| ProgressError::StartOfFlow(pathname.to_string()))
    }
}
