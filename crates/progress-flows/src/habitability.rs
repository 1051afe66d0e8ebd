//! Flujo del letter builder de habitabilidad (LA).

use progress_core::{ProgressFlow, ProgressFlowBuilder, ProgressStep};
use progress_domain::Session;

use crate::routes::habitability as routes;

/// Construye el flujo de habitabilidad.
///
/// El paso de problemas usa ruta por prefijo: cada problema abre un modal
/// de detalle un nivel por debajo (`/habitability/issues/mold-modal`) que
/// sigue localizando al paso padre.
pub fn habitability_flow() -> ProgressFlow<Session> {
    ProgressFlowBuilder::new()
        .welcome_steps(vec![ProgressStep::new(routes::SPLASH).exact()
                                                             .complete_when(Session::is_logged_in)
                                                             .renders("HabitabilitySplashPage")])
        .fill_out_steps(vec![ProgressStep::new(routes::ISSUES).complete_when(Session::has_reported_habitability_issues)
                                                              .renders("HabitabilityIssuesPage"),
                             ProgressStep::new(routes::ACCESS_DATES).exact()
                                                                    .complete_when(Session::has_habitability_access_dates)
                                                                    .renders("HabitabilityAccessDatesPage"),
                             ProgressStep::new(routes::PREVIEW).complete_when(Session::has_downloaded_habitability_letter)
                                                               .renders("HabitabilityLetterPreviewPage")])
        .confirmation_steps(vec![ProgressStep::new(routes::CONFIRMATION).exact()
                                                                        .never_go_back()
                                                                        .renders("HabitabilityConfirmationPage")])
        .build()
}
