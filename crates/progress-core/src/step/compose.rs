//! Composición de predicados de salto sobre grupos de pasos.

use std::rc::Rc;

use crate::step::{ProgressStep, StepPredicate};

/// Envuelve un grupo de pasos con un predicado de salto compartido.
///
/// Cada descriptor resultante se salta cuando el predicado del grupo es
/// verdadero O cuando su predicado propio preexistente lo es. El predicado
/// del grupo se evalúa primero (corto-circuito), preservando cualquier
/// condición individual más estricta.
pub fn skip_steps_if<S: 'static>(predicate: impl Fn(&S) -> bool + 'static,
                                 steps: Vec<ProgressStep<S>>)
                                 -> Vec<ProgressStep<S>> {
    let group = Rc::new(predicate);
    steps.into_iter()
         .map(|mut step| {
             let own: Option<StepPredicate<S>> = step.should_be_skipped.take();
             let group = Rc::clone(&group);
             step.should_be_skipped =
                 Some(Box::new(move |session| (*group)(session) || own.as_ref().map_or(false, |p| p(session))));
             step
         })
         .collect()
}
