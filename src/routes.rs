//! Routing table - (metodo, path) → handler

use crate::core::AppState;
use crate::handlers::*;
use crate::repositories::InvitationStore;
use axum::{
    Router,
    routing::{get, patch, post},
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Crea il router principale dell'applicazione
pub fn create_router<S: InvitationStore>(state: Arc<AppState<S>>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .nest("/invitations", configure_invitation_routes::<S>())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Configura le routes per la gestione degli inviti
fn configure_invitation_routes<S: InvitationStore>() -> Router<Arc<AppState<S>>> {
    Router::new()
        .route("/", post(create_invitation::<S>).get(list_invitations::<S>))
        .route(
            "/{id}",
            get(get_invitation::<S>)
                .put(update_invitation::<S>)
                .delete(delete_invitation::<S>),
        )
        .route("/{id}/confirm", patch(confirm_invitation::<S>))
}
