//! progress-core: motor declarativo de pasos de progreso
pub mod errors;
pub mod flow;
pub mod step;

pub use errors::ProgressError;
pub use flow::{Direction, ProgressFlow, ProgressFlowBuilder};
pub use step::{skip_steps_if, ProgressStep, StepPredicate};

#[cfg(test)]
mod tests {
    use super::*;

    // Sesión mínima para ejercitar el motor sin depender del dominio real.
    #[derive(Default)]
    struct FakeSession {
        onboarded: bool,
        landlord_looked_up: bool,
        letter_sent: bool,
    }

    fn letter_flow() -> ProgressFlow<FakeSession> {
        ProgressFlowBuilder::new()
            .welcome_steps(vec![ProgressStep::new("/letter/splash").exact()
                                                                   .complete_when(|s: &FakeSession| s.onboarded)])
            .fill_out_steps(vec![ProgressStep::new("/letter/landlord").skip_when(|s: &FakeSession| s.landlord_looked_up),
                                 ProgressStep::new("/letter/preview").complete_when(|s: &FakeSession| s.letter_sent)])
            .confirmation_steps(vec![ProgressStep::new("/letter/confirmation").exact().never_go_back()])
            .build()
    }

    #[test]
    fn builder_concatenates_phases_in_order() {
        let flow = letter_flow();
        let paths: Vec<&str> = flow.steps().iter().map(|s| s.path.as_str()).collect();
        assert_eq!(paths,
                   vec!["/letter/splash", "/letter/landlord", "/letter/preview", "/letter/confirmation"]);
    }

    #[test]
    fn forward_walk_skips_looked_up_landlord() {
        let flow = letter_flow();
        let session = FakeSession { onboarded: true,
                                    landlord_looked_up: true,
                                    ..FakeSession::default() };
        let next = flow.best_next_step(&session, "/letter/splash").expect("preview expected");
        assert_eq!(next.path, "/letter/preview");
    }

    #[test]
    fn backward_walk_skips_the_skipped_landlord_step() {
        // Atrás desde el preview debe aterrizar en el splash cuando el paso
        // del landlord está saltado para esta sesión.
        let flow = letter_flow();
        let session = FakeSession { onboarded: true,
                                    landlord_looked_up: true,
                                    ..FakeSession::default() };
        let prev = flow.best_prev_step(&session, "/letter/preview").expect("splash expected");
        assert_eq!(prev.path, "/letter/splash");
    }

    #[test]
    fn latest_step_resumes_where_completion_chain_breaks() {
        let flow = letter_flow();
        let fresh = FakeSession::default();
        assert_eq!(flow.latest_step(&fresh), Some("/letter/splash"));

        let onboarded = FakeSession { onboarded: true, ..FakeSession::default() };
        assert_eq!(flow.latest_step(&onboarded), Some("/letter/landlord"));
    }
}
