//! Núcleo del flujo: lista inmutable de pasos y algoritmos de navegación.
//!
//! - `core`: el tipo `ProgressFlow` con la localización de pasos por ruta.
//! - `builder`: ensamblado por fases (bienvenida, captura, confirmación).
//! - `resolve`: búsqueda del mejor paso siguiente/anterior saltando pasos.
//! - `latest`: cálculo del paso de reanudación genérico del flujo.

pub mod builder;
mod core;
mod latest;
mod resolve;

pub use builder::ProgressFlowBuilder;
pub use core::{Direction, ProgressFlow};
