use serde::{Deserialize, Serialize};

use crate::DomainError;
use std::fmt;

/// Tipo de contrato de alquiler declarado durante el onboarding.
///
/// Se serializa en snake_case porque así llega en el snapshot JSON del
/// backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaseType {
    RentStabilized,
    MarketRate,
    Nycha,
    NotSure,
}

/// Datos capturados por los pasos de onboarding (nombre, dirección y
/// contacto del inquilino).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnboardingInfo {
    first_name: String,
    last_name: String,
    street_address: String,
    apt_number: Option<String>,
    zip_code: String,
    phone_number: String,
    lease_type: LeaseType,
    receives_public_assistance: bool,
}

impl OnboardingInfo {
    /// Construye la información de onboarding validando código postal y
    /// teléfono. El backend ya valida estos campos; la validación aquí
    /// protege a los constructores locales (tests, demos, CLI).
    #[allow(clippy::too_many_arguments)]
    pub fn new(first_name: &str,
               last_name: &str,
               street_address: &str,
               apt_number: Option<&str>,
               zip_code: &str,
               phone_number: &str,
               lease_type: LeaseType,
               receives_public_assistance: bool)
               -> Result<Self, DomainError> {
        if zip_code.len() != 5 || !zip_code.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DomainError::ValidationError("zip code must be 5 digits".to_string()));
        }
        if phone_number.len() != 10 || !phone_number.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DomainError::ValidationError("phone number must be 10 digits".to_string()));
        }
        if first_name.trim().is_empty() || last_name.trim().is_empty() {
            return Err(DomainError::ValidationError("name fields cannot be empty".to_string()));
        }
        Ok(OnboardingInfo { first_name: first_name.to_string(),
                            last_name: last_name.to_string(),
                            street_address: street_address.to_string(),
                            apt_number: apt_number.map(|a| a.to_string()),
                            zip_code: zip_code.to_string(),
                            phone_number: phone_number.to_string(),
                            lease_type,
                            receives_public_assistance })
    }

    pub fn first_name(&self) -> &str { &self.first_name }
    pub fn last_name(&self) -> &str { &self.last_name }
    pub fn street_address(&self) -> &str { &self.street_address }
    pub fn apt_number(&self) -> Option<&str> { self.apt_number.as_deref() }
    pub fn zip_code(&self) -> &str { &self.zip_code }
    pub fn phone_number(&self) -> &str { &self.phone_number }
    pub fn lease_type(&self) -> LeaseType { self.lease_type }
    pub fn receives_public_assistance(&self) -> bool { self.receives_public_assistance }

    /// Nombre completo para pantallas de confirmación.
    pub fn full_legal_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl fmt::Display for OnboardingInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<tenant: {}, {}>", self.full_legal_name(), self.street_address)
    }
}
