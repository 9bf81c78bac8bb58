#![allow(dead_code)]

use axum_test::TestServer;
use bson::oid::ObjectId;
use serde_json::{Value, json};
use std::sync::Arc;
use wedding_invitations::AppState;
use wedding_invitations::entities::{Invitation, InvitationPatch, NewInvitation};
use wedding_invitations::repositories::{
    Create, Delete, MemoryInvitationRepository, Read, ReadPage, StoreError, Update,
};

pub type TestState = Arc<AppState<MemoryInvitationRepository>>;

/// Crea un AppState per i test, con repository in-memory e limite pagina 100
pub fn create_test_state() -> TestState {
    Arc::new(AppState::new(MemoryInvitationRepository::new(), 100))
}

/// Crea un TestServer per i test
///
/// # Arguments
/// * `state` - AppState da utilizzare per il server
///
/// # Returns
/// TestServer configurato e pronto per eseguire richieste
pub fn create_test_server(state: TestState) -> TestServer {
    let app = wedding_invitations::create_router(state);
    TestServer::new(app).expect("Failed to create test server")
}

/// Crea un invito tramite API e restituisce l'oggetto `invitation` della risposta
pub async fn create_invitation(server: &TestServer, guest_name: &str, companions: i64) -> Value {
    let response = server
        .post("/invitations")
        .json(&json!({
            "guestName": guest_name,
            "numberOfCompanions": companions
        }))
        .await;
    response.assert_status(axum::http::StatusCode::CREATED);
    response.json::<Value>()["invitation"].clone()
}

/// Numero di documenti attualmente nello store
pub fn stored_count(state: &TestState) -> usize {
    state.invitations.repository().snapshot().len()
}

/// Store che fallisce ogni operazione come un server MongoDB irraggiungibile
pub struct FailingInvitationRepository;

fn store_unavailable() -> StoreError {
    std::io::Error::new(
        std::io::ErrorKind::ConnectionRefused,
        "connection refused by mongodb://db.internal:27017",
    )
    .into()
}

impl Create<Invitation, NewInvitation> for FailingInvitationRepository {
    async fn create(&self, _data: &NewInvitation) -> Result<Invitation, StoreError> {
        Err(store_unavailable())
    }
}

impl Read<Invitation, ObjectId> for FailingInvitationRepository {
    async fn read(&self, _id: &ObjectId) -> Result<Option<Invitation>, StoreError> {
        Err(store_unavailable())
    }
}

impl ReadPage<Invitation> for FailingInvitationRepository {
    async fn read_page(&self, _skip: u64, _limit: u64) -> Result<Vec<Invitation>, StoreError> {
        Err(store_unavailable())
    }

    async fn count(&self) -> Result<u64, StoreError> {
        Err(store_unavailable())
    }
}

impl Update<Invitation, InvitationPatch, ObjectId> for FailingInvitationRepository {
    async fn update(
        &self,
        _id: &ObjectId,
        _data: &InvitationPatch,
    ) -> Result<Option<Invitation>, StoreError> {
        Err(store_unavailable())
    }
}

impl Delete<Invitation, ObjectId> for FailingInvitationRepository {
    async fn delete(&self, _id: &ObjectId) -> Result<Option<Invitation>, StoreError> {
        Err(store_unavailable())
    }
}

/// TestServer il cui store non risponde mai
pub fn create_failing_server() -> TestServer {
    let state = Arc::new(AppState::new(FailingInvitationRepository, 100));
    TestServer::new(wedding_invitations::create_router(state))
        .expect("Failed to create test server")
}
