//! Flujo EvictionFree: declaración de dificultad (hardship declaration).

use progress_core::{skip_steps_if, ProgressFlow, ProgressFlowBuilder, ProgressStep};
use progress_domain::Session;

use crate::account::account_steps;
use crate::routes::evictionfree as routes;

/// Construye el flujo EvictionFree.
///
/// El paso del número de índice sólo aplica a inquilinos con caso judicial
/// activo; para el resto se salta.
pub fn evictionfree_flow() -> ProgressFlow<Session> {
    ProgressFlowBuilder::new()
        .welcome_steps(vec![ProgressStep::new(routes::SPLASH).exact()
                                                             .complete_when(Session::is_logged_in)
                                                             .renders("EvictionFreeSplashPage")])
        .fill_out_steps(fill_out_steps())
        .confirmation_steps(vec![ProgressStep::new(routes::CONFIRMATION).exact()
                                                                        .never_go_back()
                                                                        .renders("EvictionFreeConfirmationPage")])
        .build()
}

fn fill_out_steps() -> Vec<ProgressStep<Session>> {
    let mut steps = skip_steps_if(Session::has_onboarding_info, account_steps(routes::PREFIX));
    steps.extend(vec![ProgressStep::new(routes::INDEX_NUMBER).exact()
                                                             .skip_when(|s: &Session| !s.has_active_eviction_case())
                                                             .complete_when(Session::has_case_index_number)
                                                             .renders("EvictionFreeIndexNumberPage"),
                      ProgressStep::new(routes::PREVIEW).complete_when(Session::has_submitted_hardship_declaration)
                                                        .renders("EvictionFreePreviewPage")]);
    steps
}
