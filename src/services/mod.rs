//! Services module - Operazioni di dominio
//!
//! I service contengono la logica applicativa e non conoscono HTTP:
//! gli handler in `handlers` li invocano e ne traducono i risultati.

pub mod invitation;

// Re-exports per facilitare l'import
pub use invitation::{InvitationError, InvitationPage, InvitationService};
