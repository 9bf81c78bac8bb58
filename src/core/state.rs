//! Application State - Stato globale dell'applicazione
//!
//! Contiene i service e lo stato condiviso necessario per gestire le richieste.

use crate::repositories::InvitationStore;
use crate::services::InvitationService;

/// Stato condiviso tra tutte le route, generico sul repository degli inviti
/// (MongoDB in produzione, in-memory nei test)
pub struct AppState<S> {
    /// Operazioni sugli inviti
    pub invitations: InvitationService<S>,
}

impl<S: InvitationStore> AppState<S> {
    /// Crea una nuova istanza di AppState.
    ///
    /// # Arguments
    /// * `repository` - Repository degli inviti, con il connector già iniettato
    /// * `max_page_limit` - Limite massimo di elementi per pagina
    pub fn new(repository: S, max_page_limit: u64) -> Self {
        Self {
            invitations: InvitationService::new(repository, max_page_limit),
        }
    }
}
