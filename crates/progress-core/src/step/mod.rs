//! Definiciones relacionadas a Steps.
//!
//! Un paso es un registro plano que describe una pantalla de un flujo
//! multipágina: su ruta URL, si la ruta se compara exacta o por prefijo, y
//! los predicados opcionales que gobiernan la navegación. Este módulo define:
//! - `ProgressStep`: el descriptor de paso, genérico sobre el tipo de sesión.
//! - `StepPredicate`: predicado de primera clase sobre la sesión.
//! - `skip_steps_if`: composición de un predicado de salto sobre un grupo.

pub mod compose;
pub mod descriptor;

pub use compose::skip_steps_if;
pub use descriptor::{ProgressStep, StepPredicate};
