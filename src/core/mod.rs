//! Core Module - Componenti infrastrutturali dell'applicazione
//!
//! Questo modulo contiene tutti i componenti "core" dell'applicazione:
//! - Configurazione
//! - Connessione al document store
//! - Gestione errori
//! - Stato applicazione

pub mod config;
pub mod connector;
pub mod error;
pub mod state;

// Re-exports per facilitare l'import
pub use config::Config;
pub use connector::Connector;
pub use error::AppError;
pub use state::AppState;
