//! Entities module - Entità del dominio applicativo
//!
//! Questo modulo contiene le entità che rappresentano i dati persistiti nel document store.
//! Ogni entity corrisponde a una collection.

pub mod invitation;

// Re-exports per facilitare l'import
pub use invitation::{Invitation, InvitationPatch, NewInvitation};
