use serde::{Deserialize, Serialize};

use crate::DomainError;

/// Datos del arrendador a quien se dirigen las cartas.
///
/// `is_looked_up` indica que la dirección proviene del registro público de
/// edificios y no fue tecleada por el inquilino; los flujos usan esa marca
/// para saltarse los pasos de captura manual.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LandlordDetails {
    name: String,
    primary_line: String,
    city: String,
    state: String,
    zip_code: String,
    is_looked_up: bool,
}

impl LandlordDetails {
    pub fn new(name: &str,
               primary_line: &str,
               city: &str,
               state: &str,
               zip_code: &str)
               -> Result<Self, DomainError> {
        Self::build(name, primary_line, city, state, zip_code, false)
    }

    /// Variante para direcciones resueltas automáticamente contra el
    /// registro de edificios.
    pub fn from_lookup(name: &str,
                       primary_line: &str,
                       city: &str,
                       state: &str,
                       zip_code: &str)
                       -> Result<Self, DomainError> {
        Self::build(name, primary_line, city, state, zip_code, true)
    }

    fn build(name: &str,
             primary_line: &str,
             city: &str,
             state: &str,
             zip_code: &str,
             is_looked_up: bool)
             -> Result<Self, DomainError> {
        if name.trim().is_empty() {
            return Err(DomainError::ValidationError("landlord name cannot be empty".to_string()));
        }
        if state.len() != 2 || !state.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(DomainError::ValidationError("state must be a 2-letter code".to_string()));
        }
        if zip_code.len() != 5 || !zip_code.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DomainError::ValidationError("zip code must be 5 digits".to_string()));
        }
        Ok(LandlordDetails { name: name.to_string(),
                             primary_line: primary_line.to_string(),
                             city: city.to_string(),
                             state: state.to_string(),
                             zip_code: zip_code.to_string(),
                             is_looked_up })
    }

    pub fn name(&self) -> &str { &self.name }
    pub fn primary_line(&self) -> &str { &self.primary_line }
    pub fn city(&self) -> &str { &self.city }
    pub fn state(&self) -> &str { &self.state }
    pub fn zip_code(&self) -> &str { &self.zip_code }
    pub fn is_looked_up(&self) -> bool { self.is_looked_up }

    /// Una dirección postal se considera completa cuando todas sus líneas
    /// están presentes.
    pub fn has_mailing_address(&self) -> bool {
        !self.primary_line.is_empty() && !self.city.is_empty()
    }
}
