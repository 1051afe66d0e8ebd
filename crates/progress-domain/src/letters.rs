//! Registros por producto: cartas enviadas y casos abiertos.
//!
//! Cada producto aporta su propio registro al snapshot de sesión:
//! - NoRent: cartas de no-pago enviadas por correo certificado.
//! - EvictionFree: la declaración de dificultad (hardship declaration).
//! - LA Letter Builder: el caso de habitabilidad en curso.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Una carta NoRent ya enviada (el backend registra el tracking del correo).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NorentLetter {
    pub tracking_number: String,
    pub sent_at: DateTime<Utc>,
}

/// Declaración de dificultad del producto EvictionFree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HardshipDeclaration {
    /// Número de índice del caso judicial, si el inquilino tiene uno activo.
    pub index_number: Option<String>,
    pub has_current_case: bool,
    pub submitted_at: Option<DateTime<Utc>>,
}

impl HardshipDeclaration {
    pub fn is_submitted(&self) -> bool {
        self.submitted_at.is_some()
    }
}

/// Caso de habitabilidad del LA Letter Builder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HabitabilityCase {
    /// Problemas reportados, como identificadores estables ("mold", "heating").
    pub issues: Vec<String>,
    /// Fechas propuestas para dar acceso al arrendador.
    pub access_dates: Vec<NaiveDate>,
    pub letter_downloaded_at: Option<DateTime<Utc>>,
}

impl HabitabilityCase {
    pub fn has_reported_issues(&self) -> bool {
        !self.issues.is_empty()
    }

    pub fn has_access_dates(&self) -> bool {
        !self.access_dates.is_empty()
    }
}
