//! Pasos compartidos de cuenta (onboarding) embebidos por los productos.
//!
//! Composición entre flujos: cada producto monta estos pasos bajo su propio
//! prefijo de rutas, normalmente envueltos en `skip_steps_if` para que un
//! usuario que ya completó el onboarding no vuelva a verlos.

use progress_core::ProgressStep;
use progress_domain::Session;

/// Construye los pasos de cuenta bajo `prefix` (p. ej. `/norent`).
///
/// Los tres pasos capturan un único registro de onboarding en el backend,
/// así que comparten el mismo criterio de completitud.
pub fn account_steps(prefix: &str) -> Vec<ProgressStep<Session>> {
    vec![ProgressStep::new(format!("{prefix}/name")).exact()
                                                    .complete_when(Session::has_onboarding_info)
                                                    .renders("AccountNamePage"),
         ProgressStep::new(format!("{prefix}/address")).exact()
                                                       .complete_when(Session::has_onboarding_info)
                                                       .renders("AccountAddressPage"),
         ProgressStep::new(format!("{prefix}/contact")).exact()
                                                       .complete_when(Session::has_onboarding_info)
                                                       .renders("AccountContactPage")]
}
