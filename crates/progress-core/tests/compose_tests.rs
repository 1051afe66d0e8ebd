use std::cell::Cell;
use std::rc::Rc;

use progress_core::{skip_steps_if, ProgressFlowBuilder, ProgressStep};

#[derive(Default)]
struct FakeSession {
    group_skip: bool,
    own_skip: bool,
}

#[test]
fn group_predicate_applies_to_every_wrapped_step() {
    let steps = skip_steps_if(|s: &FakeSession| s.group_skip,
                              vec![ProgressStep::new("/a"), ProgressStep::new("/b")]);
    let session = FakeSession { group_skip: true, ..FakeSession::default() };
    assert!(steps.iter().all(|s| s.is_skipped(&session)));

    let session = FakeSession::default();
    assert!(steps.iter().all(|s| !s.is_skipped(&session)));
}

#[test]
fn own_predicate_survives_the_wrapping() {
    // El predicado compuesto es OR: la condición individual más estricta se
    // preserva aunque la del grupo sea falsa.
    let steps = skip_steps_if(|s: &FakeSession| s.group_skip,
                              vec![ProgressStep::new("/a").skip_when(|s: &FakeSession| s.own_skip),
                                   ProgressStep::new("/b")]);
    let session = FakeSession { own_skip: true, ..FakeSession::default() };
    assert!(steps[0].is_skipped(&session), "own skip condition must survive");
    assert!(!steps[1].is_skipped(&session));
}

#[test]
fn group_predicate_short_circuits_before_own() {
    // Si el grupo decide saltar, el predicado propio ni se evalúa.
    let own_evaluations = Rc::new(Cell::new(0u32));
    let counter = Rc::clone(&own_evaluations);
    let steps = skip_steps_if(|s: &FakeSession| s.group_skip,
                              vec![ProgressStep::new("/a").skip_when(move |_s: &FakeSession| {
                                                              counter.set(counter.get() + 1);
                                                              false
                                                          })]);

    let session = FakeSession { group_skip: true, ..FakeSession::default() };
    assert!(steps[0].is_skipped(&session));
    assert_eq!(own_evaluations.get(), 0, "group predicate must short-circuit");

    let session = FakeSession::default();
    assert!(!steps[0].is_skipped(&session));
    assert_eq!(own_evaluations.get(), 1);
}

#[test]
fn wrapping_preserves_other_step_metadata() {
    let steps = skip_steps_if(|_s: &FakeSession| false,
                              vec![ProgressStep::new("/a").exact().never_go_back()]);
    assert!(steps[0].exact);
    assert!(steps[0].never_go_back_to);
    assert_eq!(steps[0].path, "/a");
}

#[test]
fn wrapped_steps_compose_with_the_builder() {
    let flow = ProgressFlowBuilder::new()
        .welcome_steps(vec![ProgressStep::new("/splash")])
        .fill_out_steps(skip_steps_if(|s: &FakeSession| s.group_skip,
                                      vec![ProgressStep::new("/name"), ProgressStep::new("/address")]))
        .build();
    let session = FakeSession { group_skip: true, ..FakeSession::default() };
    // Todo el grupo saltado: después del splash no hay paso navegable.
    assert!(flow.best_next_step(&session, "/splash").is_none());
}
