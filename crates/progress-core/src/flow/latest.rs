//! Paso de reanudación: dónde aterriza quien visita la URL genérica del
//! flujo.

use crate::errors::ProgressError;
use crate::flow::ProgressFlow;

impl<S> ProgressFlow<S> {
    /// Calcula la ruta de reanudación del flujo.
    ///
    /// Parte del primer paso y recorre la lista por pares `(prev, step)`:
    /// cada vez que `prev` tiene predicado de completitud y éste es
    /// verdadero, el objetivo avanza a la ruta de `step`. Sólo los pasos que
    /// declaran criterio de completitud pueden mover el puntero; una lista
    /// sin predicados reanuda siempre en el primer paso.
    ///
    /// Nota: a diferencia de `best_next_step`, aquí NO se consultan los
    /// predicados de salto. La redirección de reanudación es un primer pase
    /// grueso que el resolutor refina al renderizar el paso concreto.
    ///
    /// `None` únicamente para un flujo vacío.
    pub fn latest_step(&self, session: &S) -> Option<&str> {
        let mut target = self.steps().first()?.path.as_str();
        for pair in self.steps().windows(2) {
            let (prev, step) = (&pair[0], &pair[1]);
            if prev.is_complete.as_ref().map_or(false, |p| p(session)) {
                target = step.path.as_str();
            }
        }
        Some(target)
    }

    /// Variante estricta: un flujo vacío es un error de configuración.
    pub fn require_latest_step(&self, session: &S) -> Result<&str, ProgressError> {
        self.latest_step(session).ok_or(ProgressError::EmptyFlow)
    }
}
