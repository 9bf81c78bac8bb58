//! Handlers module - Adattamento HTTP sopra i service
//!
//! Ogni handler controlla la forma della richiesta, delega al service e
//! traduce il risultato (o l'errore) in una risposta JSON.

pub mod health;
pub mod invitation;

// Re-exports per facilitare l'import
pub use health::health_check;
pub use invitation::{
    confirm_invitation, create_invitation, delete_invitation, get_invitation, list_invitations,
    update_invitation,
};
