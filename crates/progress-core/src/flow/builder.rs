//! Builder para `ProgressFlow`.
//!
//! Un flujo se ensambla a partir de tres fases concatenadas en orden fijo:
//! pasos de bienvenida, pasos de captura y pasos de confirmación. El orden
//! relativo dentro de cada fase se preserva tal cual. El resultado es una
//! lista inmutable: barata de reconstruir en cada render y nunca mutada
//! después de `build()`.
//!
//! Ejemplo de uso (comentario):
//!
//! ```ignore
//! // let flow = ProgressFlowBuilder::new()
//! //     .welcome_steps(vec![splash, name])
//! //     .fill_out_steps(skip_steps_if(already_onboarded, account_steps()))
//! //     .confirmation_steps(vec![confirmation])
//! //     .build();
//! ```

use crate::flow::ProgressFlow;
use crate::step::ProgressStep;

#[derive(Debug)]
pub struct ProgressFlowBuilder<S> {
    welcome: Vec<ProgressStep<S>>,
    fill_out: Vec<ProgressStep<S>>,
    confirmation: Vec<ProgressStep<S>>,
}

impl<S> ProgressFlowBuilder<S> {
    pub fn new() -> Self {
        Self { welcome: Vec::new(),
               fill_out: Vec::new(),
               confirmation: Vec::new() }
    }

    /// Fase de bienvenida: splash, login, pasos embebidos de cuenta.
    pub fn welcome_steps(mut self, steps: Vec<ProgressStep<S>>) -> Self {
        self.welcome = steps;
        self
    }

    /// Fase de captura: los formularios propios del producto.
    pub fn fill_out_steps(mut self, steps: Vec<ProgressStep<S>>) -> Self {
        self.fill_out = steps;
        self
    }

    /// Fase de confirmación: pantallas posteriores al envío.
    pub fn confirmation_steps(mut self, steps: Vec<ProgressStep<S>>) -> Self {
        self.confirmation = steps;
        self
    }

    /// Concatena las fases y produce la lista final.
    ///
    /// La aserción ayuda durante el desarrollo a detectar rutas malformadas
    /// (un peligro de configuración, no de runtime); en builds release queda
    /// desactivada.
    pub fn build(self) -> ProgressFlow<S> {
        let mut steps = self.welcome;
        steps.extend(self.fill_out);
        steps.extend(self.confirmation);

        debug_assert!(steps.iter().all(|s| s.path.starts_with('/')),
                      "todas las rutas de un flujo deben empezar con '/'");

        ProgressFlow::from_steps(steps)
    }
}

impl<S> Default for ProgressFlowBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}
