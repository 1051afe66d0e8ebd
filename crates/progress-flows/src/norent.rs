//! Flujo NoRent: carta de no-pago al arrendador.

use progress_core::{skip_steps_if, ProgressFlow, ProgressFlowBuilder, ProgressStep};
use progress_domain::Session;

use crate::account::account_steps;
use crate::routes::norent as routes;

/// Construye el flujo NoRent completo.
///
/// Fase de captura:
/// - Los pasos de cuenta embebidos se saltan en bloque para quien ya tiene
///   onboarding.
/// - La dirección del arrendador se salta si vino del registro público.
/// - El preview usa ruta por prefijo para alojar su modal de confirmación
///   de envío un nivel por debajo.
pub fn norent_flow() -> ProgressFlow<Session> {
    ProgressFlowBuilder::new()
        .welcome_steps(vec![ProgressStep::new(routes::SPLASH).exact()
                                                             .complete_when(Session::is_logged_in)
                                                             .renders("NorentSplashPage")])
        .fill_out_steps(fill_out_steps())
        .confirmation_steps(vec![ProgressStep::new(routes::CONFIRMATION).exact()
                                                                        .never_go_back()
                                                                        .renders("NorentConfirmationPage")])
        .build()
}

fn fill_out_steps() -> Vec<ProgressStep<Session>> {
    let mut steps = skip_steps_if(Session::has_onboarding_info, account_steps(routes::PREFIX));
    steps.extend(vec![ProgressStep::new(routes::LANDLORD_NAME).exact()
                                                              .complete_when(Session::has_landlord_details)
                                                              .renders("NorentLandlordNamePage"),
                      ProgressStep::new(routes::LANDLORD_ADDRESS).exact()
                                                                 .skip_when(Session::landlord_is_looked_up)
                                                                 .complete_when(Session::landlord_has_mailing_address)
                                                                 .renders("NorentLandlordAddressPage"),
                      ProgressStep::new(routes::PREVIEW).complete_when(Session::has_sent_norent_letter)
                                                        .renders("NorentLetterPreviewPage")]);
    steps
}
