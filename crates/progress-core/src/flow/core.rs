//! Core ProgressFlow implementation

use log::warn;

use crate::step::ProgressStep;

/// Dirección de adyacencia cruda sobre la lista de pasos.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Prev,
}

/// Lista ordenada e inmutable de pasos de un flujo.
///
/// El orden de los índices ES el orden del flujo: los localizadores y
/// resolutores dependen de adyacencia por índice, no de aristas de grafo.
/// La lista se construye una vez por render mediante el builder y no se
/// muta después.
pub struct ProgressFlow<S> {
    steps: Vec<ProgressStep<S>>,
}

impl<S> ProgressFlow<S> {
    pub(crate) fn from_steps(steps: Vec<ProgressStep<S>>) -> Self {
        Self { steps }
    }

    pub fn steps(&self) -> &[ProgressStep<S>] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Localiza el índice del primer paso cuya ruta coincide estructuralmente
    /// con `pathname`.
    ///
    /// El primer match es autoritativo: las listas están ordenadas y quien
    /// configura el flujo debe evitar patrones ambiguos. Un `None` no es
    /// fatal: es un error de configuración que el router superior resuelve
    /// cayendo a su página not-found. El único diagnóstico es un warning en
    /// builds de desarrollo.
    pub fn locate(&self, pathname: &str) -> Option<usize> {
        let found = self.steps.iter().position(|s| s.matches_pathname(pathname));
        if found.is_none() && cfg!(debug_assertions) {
            warn!("ningún paso del flujo coincide con el pathname '{}'", pathname);
        }
        found
    }

    /// Paso adyacente por índice crudo (`index ± 1`), sin consultar sesión.
    ///
    /// Retorna `None` si `pathname` no se localiza o si el índice adyacente
    /// queda fuera de la lista (frontera del flujo).
    pub fn relative_step(&self, pathname: &str, direction: Direction) -> Option<&ProgressStep<S>> {
        let idx = self.locate(pathname)?;
        match direction {
            Direction::Next => self.steps.get(idx + 1),
            Direction::Prev => idx.checked_sub(1).and_then(|i| self.steps.get(i)),
        }
    }
}

// Los pasos no derivan Debug por sus closures; delegamos en su Debug manual.
impl<S> std::fmt::Debug for ProgressFlow<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProgressFlow").field("steps", &self.steps).finish()
    }
}
