//! Invitation DTOs - Data Transfer Objects per inviti

use crate::entities::Invitation;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Pagination;

/// Struct per gestire io col client
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InvitationDTO {
    pub id: String, // ObjectId in formato esadecimale
    pub guest_name: String,
    pub number_of_companions: i32,
    pub confirmed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Invitation> for InvitationDTO {
    fn from(value: Invitation) -> Self {
        Self {
            id: value.id.to_hex(),
            guest_name: value.guest_name,
            number_of_companions: value.number_of_companions,
            confirmed: value.confirmed,
            created_at: value.created_at.to_chrono(),
            updated_at: value.updated_at.to_chrono(),
        }
    }
}

/// DTO per creare un nuovo invito (senza id, confirmed e timestamp).
/// I campi sono opzionali per poter rispondere 400 con un messaggio chiaro
/// quando mancano.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct CreateInvitationDTO {
    pub guest_name: Option<String>,
    pub number_of_companions: Option<i64>,
}

/// DTO per aggiornare un invito (solo i campi presenti vengono modificati)
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateInvitationDTO {
    pub guest_name: Option<String>,
    pub number_of_companions: Option<i64>,
}

/// DTO per la conferma. `confirmed` resta un valore JSON grezzo: deve essere
/// un booleano vero e proprio, "yes" o 1 vengono rifiutati.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct ConfirmInvitationDTO {
    #[serde(default)]
    pub confirmed: Option<serde_json::Value>,
}

impl ConfirmInvitationDTO {
    pub fn as_bool(&self) -> Option<bool> {
        self.confirmed.as_ref().and_then(serde_json::Value::as_bool)
    }
}

/// Risposta per le operazioni su un singolo invito
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct InvitationResponseDTO {
    pub message: String,
    pub invitation: InvitationDTO,
}

impl InvitationResponseDTO {
    pub fn new(message: impl Into<String>, invitation: Invitation) -> Self {
        Self {
            message: message.into(),
            invitation: InvitationDTO::from(invitation),
        }
    }
}

/// Risposta paginata per la lista degli inviti
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct InvitationListDTO {
    pub message: String,
    pub invitations: Vec<InvitationDTO>,
    pub pagination: Pagination,
}
