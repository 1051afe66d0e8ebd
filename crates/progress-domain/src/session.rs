//! Snapshot de sesión consultado por los predicados de los flujos.
//!
//! El dueño real del estado es el backend: el snapshot llega como JSON y se
//! deserializa aquí. El motor de pasos nunca lo muta; sólo lo lee a través
//! de los predicados declarados en cada paso. Por eso todos los métodos de
//! este tipo son consultas de sólo lectura.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::landlord::LandlordDetails;
use crate::letters::{HabitabilityCase, HardshipDeclaration, NorentLetter};
use crate::onboarding::OnboardingInfo;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Session {
    pub user_id: Option<Uuid>,
    pub onboarding: Option<OnboardingInfo>,
    pub landlord: Option<LandlordDetails>,
    pub norent_letters: Vec<NorentLetter>,
    pub hardship_declaration: Option<HardshipDeclaration>,
    pub habitability: Option<HabitabilityCase>,
}

impl Session {
    /// Sesión vacía: visitante anónimo sin datos capturados.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_logged_in(&self) -> bool {
        self.user_id.is_some()
    }

    pub fn has_onboarding_info(&self) -> bool {
        self.onboarding.is_some()
    }

    pub fn has_landlord_details(&self) -> bool {
        self.landlord.is_some()
    }

    /// La dirección del arrendador proviene del registro público; los pasos
    /// de captura manual pueden saltarse.
    pub fn landlord_is_looked_up(&self) -> bool {
        self.landlord.as_ref().map_or(false, |l| l.is_looked_up())
    }

    pub fn landlord_has_mailing_address(&self) -> bool {
        self.landlord.as_ref().map_or(false, |l| l.has_mailing_address())
    }

    pub fn has_sent_norent_letter(&self) -> bool {
        !self.norent_letters.is_empty()
    }

    pub fn has_active_eviction_case(&self) -> bool {
        self.hardship_declaration
            .as_ref()
            .map_or(false, |d| d.has_current_case)
    }

    pub fn has_case_index_number(&self) -> bool {
        self.hardship_declaration
            .as_ref()
            .map_or(false, |d| d.index_number.is_some())
    }

    pub fn has_submitted_hardship_declaration(&self) -> bool {
        self.hardship_declaration
            .as_ref()
            .map_or(false, |d| d.is_submitted())
    }

    pub fn has_reported_habitability_issues(&self) -> bool {
        self.habitability
            .as_ref()
            .map_or(false, |h| h.has_reported_issues())
    }

    pub fn has_habitability_access_dates(&self) -> bool {
        self.habitability
            .as_ref()
            .map_or(false, |h| h.has_access_dates())
    }

    pub fn has_downloaded_habitability_letter(&self) -> bool {
        self.habitability
            .as_ref()
            .map_or(false, |h| h.letter_downloaded_at.is_some())
    }
}
