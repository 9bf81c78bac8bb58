//! Invitation entity - Entità invito
//!
//! Rappresenta un documento della collection `invitations` e le regole di
//! validazione applicate in scrittura (create e update).

use bson::{DateTime, oid::ObjectId};
use serde::{Deserialize, Serialize};
use validator::Validate;

pub const GUEST_NAME_REQUIRED: &str = "Guest name is required";
pub const GUEST_NAME_LENGTH: &str = "Guest name must be between 1 and 100 characters";
pub const COMPANIONS_REQUIRED: &str = "Number of companions is required";
pub const COMPANIONS_RANGE: &str = "Number of companions must be between 0 and 10";

pub const MAX_GUEST_NAME_LENGTH: u64 = 100;
pub const MAX_COMPANIONS: i32 = 10;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Invitation {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub guest_name: String,
    pub number_of_companions: i32,
    // i documenti creati prima dell'introduzione del campo non lo hanno
    #[serde(default)]
    pub confirmed: bool,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl Invitation {
    /// Costruisce un nuovo invito con id e timestamp generati adesso.
    /// `confirmed` parte sempre esplicitamente da `false`.
    pub fn new(data: &NewInvitation) -> Self {
        let now = DateTime::now();
        Self {
            id: ObjectId::new(),
            guest_name: data.guest_name.clone(),
            number_of_companions: data.number_of_companions,
            confirmed: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Applica una patch in memoria, aggiornando `updated_at`.
    /// Usata dal repository in-memory; quello Mongo fa lo stesso con `$set`.
    pub fn apply(&mut self, patch: &InvitationPatch) {
        if let Some(ref guest_name) = patch.guest_name {
            self.guest_name = guest_name.clone();
        }
        if let Some(number_of_companions) = patch.number_of_companions {
            self.number_of_companions = number_of_companions;
        }
        if let Some(confirmed) = patch.confirmed {
            self.confirmed = confirmed;
        }
        // mai prima di created_at, anche con clock non monotono
        self.updated_at = DateTime::now().max(self.created_at);
    }
}

/// Dati validati per la creazione di un invito
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct NewInvitation {
    #[validate(length(min = 1, max = 100, message = "Guest name must be between 1 and 100 characters"))]
    pub guest_name: String,
    #[validate(range(min = 0, max = 10, message = "Number of companions must be between 0 and 10"))]
    pub number_of_companions: i32,
}

impl NewInvitation {
    /// Normalizza il nome (trim) prima della validazione
    pub fn new(guest_name: &str, number_of_companions: i32) -> Self {
        Self {
            guest_name: guest_name.trim().to_string(),
            number_of_companions,
        }
    }
}

/// Aggiornamento parziale: ogni campo è presente (`Some`) o assente (`None`).
/// I campi assenti mantengono il valore precedente.
#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct InvitationPatch {
    #[validate(length(min = 1, max = 100, message = "Guest name must be between 1 and 100 characters"))]
    pub guest_name: Option<String>,
    #[validate(range(min = 0, max = 10, message = "Number of companions must be between 0 and 10"))]
    pub number_of_companions: Option<i32>,
    pub confirmed: Option<bool>,
}

impl InvitationPatch {
    pub fn details(guest_name: Option<&str>, number_of_companions: Option<i32>) -> Self {
        Self {
            guest_name: guest_name.map(|name| name.trim().to_string()),
            number_of_companions,
            confirmed: None,
        }
    }

    pub fn confirmation(confirmed: bool) -> Self {
        Self {
            confirmed: Some(confirmed),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.guest_name.is_none() && self.number_of_companions.is_none() && self.confirmed.is_none()
    }
}

/// Converte il numero ricevuto dal client nel tipo persistito.
/// Valori fuori da `i32` sono comunque fuori range.
pub fn companions_from_wire(value: i64) -> Result<i32, &'static str> {
    i32::try_from(value).map_err(|_| COMPANIONS_RANGE)
}

/// Raccoglie i messaggi di `ValidationErrors` in una stringa leggibile,
/// in ordine stabile.
pub fn describe_validation_errors(errors: &validator::ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(_, errs)| errs.iter())
        .map(|err| match err.message {
            Some(ref message) => message.to_string(),
            None => err.code.to_string(),
        })
        .collect();
    messages.sort();
    messages.dedup();
    messages.join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_invitation_trims_guest_name() {
        let data = NewInvitation::new("   Jane Doe  ", 2);
        assert_eq!(data.guest_name, "Jane Doe");
        assert!(data.validate().is_ok());
    }

    #[test]
    fn blank_guest_name_is_rejected() {
        let data = NewInvitation::new("    ", 1);
        let err = data.validate().unwrap_err();
        assert_eq!(describe_validation_errors(&err), GUEST_NAME_LENGTH);
    }

    #[test]
    fn guest_name_length_is_counted_in_characters() {
        let exactly_max = "é".repeat(MAX_GUEST_NAME_LENGTH as usize);
        assert!(NewInvitation::new(&exactly_max, 0).validate().is_ok());

        let too_long = "a".repeat(MAX_GUEST_NAME_LENGTH as usize + 1);
        assert!(NewInvitation::new(&too_long, 0).validate().is_err());
    }

    #[test]
    fn companions_bounds_are_inclusive() {
        assert!(NewInvitation::new("Ann", 0).validate().is_ok());
        assert!(NewInvitation::new("Ann", MAX_COMPANIONS).validate().is_ok());

        let err = NewInvitation::new("Ann", -1).validate().unwrap_err();
        assert_eq!(describe_validation_errors(&err), COMPANIONS_RANGE);
        assert!(NewInvitation::new("Ann", 11).validate().is_err());
    }

    #[test]
    fn both_violations_are_reported() {
        let err = NewInvitation::new("", 42).validate().unwrap_err();
        let description = describe_validation_errors(&err);
        assert!(description.contains(GUEST_NAME_LENGTH));
        assert!(description.contains(COMPANIONS_RANGE));
    }

    #[test]
    fn patch_only_validates_present_fields() {
        assert!(InvitationPatch::details(None, Some(3)).validate().is_ok());
        assert!(InvitationPatch::details(Some(" "), None).validate().is_err());
        assert!(InvitationPatch::confirmation(true).validate().is_ok());
    }

    #[test]
    fn apply_keeps_missing_fields_and_identity() {
        let mut invitation = Invitation::new(&NewInvitation::new("Jane", 2));
        let before = invitation.clone();

        invitation.apply(&InvitationPatch::details(None, Some(4)));

        assert_eq!(invitation.id, before.id);
        assert_eq!(invitation.guest_name, "Jane");
        assert_eq!(invitation.number_of_companions, 4);
        assert_eq!(invitation.created_at, before.created_at);
        assert!(invitation.updated_at >= invitation.created_at);
    }

    #[test]
    fn new_invitation_starts_unconfirmed() {
        let invitation = Invitation::new(&NewInvitation::new("Jane", 2));
        assert!(!invitation.confirmed);
        assert_eq!(invitation.created_at, invitation.updated_at);
    }

    #[test]
    fn companions_out_of_i32_are_rejected() {
        assert_eq!(companions_from_wire(5), Ok(5));
        assert_eq!(companions_from_wire(i64::MAX), Err(COMPANIONS_RANGE));
    }

    #[test]
    fn missing_confirmed_field_reads_as_false() {
        let id = ObjectId::new();
        let now = DateTime::now();
        let document = bson::doc! {
            "_id": id,
            "guestName": "Jane",
            "numberOfCompanions": 1,
            "createdAt": now,
            "updatedAt": now,
        };
        let invitation: Invitation = bson::from_document(document).unwrap();
        assert!(!invitation.confirmed);
        assert_eq!(invitation.id, id);
    }
}
