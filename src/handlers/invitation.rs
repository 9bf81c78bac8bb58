//! Invitation handlers - Endpoint HTTP per gli inviti

use crate::core::{AppError, AppState};
use crate::dtos::{
    ConfirmInvitationDTO, CreateInvitationDTO, InvitationDTO, InvitationListDTO,
    InvitationResponseDTO, PageQuery, UpdateInvitationDTO,
};
use crate::repositories::InvitationStore;
pub use crate::services::invitation::CONFIRMED_MUST_BE_BOOLEAN;
use axum::{
    extract::{
        Json, Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
};
use std::sync::Arc;
use tracing::{debug, instrument, warn};

pub const CREATE_FIELDS_REQUIRED: &str = "Guest name and number of companions are required.";

#[instrument(skip(state, payload))]
pub async fn create_invitation<S: InvitationStore>(
    State(state): State<Arc<AppState<S>>>,
    payload: Result<Json<CreateInvitationDTO>, JsonRejection>,
) -> Result<(StatusCode, Json<InvitationResponseDTO>), AppError> {
    debug!("Handling create invitation request");
    // 1. Il body deve essere JSON valido con entrambi i campi
    let Json(body) = payload?;
    if body.guest_name.is_none() || body.number_of_companions.is_none() {
        warn!("Create invitation request with missing fields");
        return Err(AppError::bad_request(CREATE_FIELDS_REQUIRED));
    }

    // 2. Delegare al service e rispondere 201
    let invitation = state.invitations.create(body).await?;
    Ok((
        StatusCode::CREATED,
        Json(InvitationResponseDTO::new(
            "Invitation created successfully.",
            invitation,
        )),
    ))
}

#[instrument(skip(state))]
pub async fn list_invitations<S: InvitationStore>(
    State(state): State<Arc<AppState<S>>>,
    query: Result<Query<PageQuery>, QueryRejection>, // /invitations?page=2&limit=10
) -> Result<Json<InvitationListDTO>, AppError> {
    // query string non interpretabile (es. `page` ripetuto): valori di default
    let query = match query {
        Ok(Query(query)) => query,
        Err(rejection) => {
            warn!("Ignoring malformed query string: {}", rejection.body_text());
            PageQuery::default()
        }
    };
    let page = state.invitations.list(&query).await?;
    Ok(Json(InvitationListDTO {
        message: "Invitations retrieved successfully.".to_string(),
        invitations: page.invitations.into_iter().map(InvitationDTO::from).collect(),
        pagination: page.pagination,
    }))
}

#[instrument(skip(state))]
pub async fn get_invitation<S: InvitationStore>(
    State(state): State<Arc<AppState<S>>>,
    Path(id): Path<String>, // parametro dalla URL /invitations/{id}
) -> Result<Json<InvitationResponseDTO>, AppError> {
    let invitation = state.invitations.get_by_id(&id).await?;
    Ok(Json(InvitationResponseDTO::new(
        "Invitation retrieved successfully.",
        invitation,
    )))
}

#[instrument(skip(state, payload))]
pub async fn update_invitation<S: InvitationStore>(
    State(state): State<Arc<AppState<S>>>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateInvitationDTO>, JsonRejection>,
) -> Result<Json<InvitationResponseDTO>, AppError> {
    let Json(body) = payload?;
    let invitation = state.invitations.update(&id, body).await?;
    Ok(Json(InvitationResponseDTO::new(
        "Invitation updated successfully.",
        invitation,
    )))
}

#[instrument(skip(state))]
pub async fn delete_invitation<S: InvitationStore>(
    State(state): State<Arc<AppState<S>>>,
    Path(id): Path<String>,
) -> Result<Json<InvitationResponseDTO>, AppError> {
    let invitation = state.invitations.delete(&id).await?;
    Ok(Json(InvitationResponseDTO::new(
        "Invitation deleted successfully.",
        invitation,
    )))
}

#[instrument(skip(state, payload))]
pub async fn confirm_invitation<S: InvitationStore>(
    State(state): State<Arc<AppState<S>>>,
    Path(id): Path<String>,
    payload: Result<Json<ConfirmInvitationDTO>, JsonRejection>,
) -> Result<Json<InvitationResponseDTO>, AppError> {
    // 1. Il body deve essere JSON valido
    let Json(body) = payload?;

    // 2. Il service valida prima l'id, poi che `confirmed` sia un booleano JSON
    let invitation = state.invitations.confirm(&id, body.as_bool()).await?;
    let message = if invitation.confirmed {
        "Invitation confirmed successfully."
    } else {
        "Invitation unconfirmed successfully."
    };
    Ok(Json(InvitationResponseDTO::new(message, invitation)))
}
