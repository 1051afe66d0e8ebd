//! progress-flows: Flujos concretos por producto sobre progress-core.
//!
//! Este crate es la configuración de rutas autorizada por la aplicación:
//! - Pasos compartidos de cuenta (`account`) embebidos por cada producto.
//! - Un flujo por producto: NoRent, EvictionFree y el letter builder de
//!   habitabilidad.
//! - Un registro por nombre usado por la CLI y el binario demo.
//!
//! Los flujos se reconstruyen en cada llamada (son puros y baratos); el
//! registro sólo guarda los punteros a función constructores.

pub mod account;
pub mod evictionfree;
pub mod habitability;
pub mod norent;
pub mod routes;

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use progress_core::ProgressFlow;
use progress_domain::Session;

pub use evictionfree::evictionfree_flow;
pub use habitability::habitability_flow;
pub use norent::norent_flow;

/// Constructor de flujo registrado por nombre.
pub type FlowBuilderFn = fn() -> ProgressFlow<Session>;

static FLOWS: Lazy<BTreeMap<&'static str, FlowBuilderFn>> = Lazy::new(|| {
    let mut table: BTreeMap<&'static str, FlowBuilderFn> = BTreeMap::new();
    table.insert("norent", norent_flow as FlowBuilderFn);
    table.insert("evictionfree", evictionfree_flow as FlowBuilderFn);
    table.insert("habitability", habitability_flow as FlowBuilderFn);
    table
});

/// Construye el flujo registrado bajo `name`, si existe.
pub fn flow_by_name(name: &str) -> Option<ProgressFlow<Session>> {
    FLOWS.get(name).map(|build| build())
}

/// Nombres registrados, en orden estable.
pub fn flow_names() -> Vec<&'static str> {
    FLOWS.keys().copied().collect()
}
