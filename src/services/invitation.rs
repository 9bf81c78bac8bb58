//! Invitation services - Operazioni sugli inviti indipendenti dal trasporto
//!
//! Ogni operazione riceve input tipizzati e restituisce
//! `Result<_, InvitationError>`; gli handler HTTP si limitano a tradurre.

use crate::dtos::pagination::skip_for;
use crate::dtos::{CreateInvitationDTO, PageQuery, Pagination, UpdateInvitationDTO};
use crate::entities::invitation::{
    COMPANIONS_REQUIRED, GUEST_NAME_REQUIRED, companions_from_wire, describe_validation_errors,
};
use crate::entities::{Invitation, InvitationPatch, NewInvitation};
use crate::repositories::{InvitationStore, StoreError};
use bson::oid::ObjectId;
use thiserror::Error;
use tracing::{debug, info, instrument, warn};
use validator::Validate;

pub const CONFIRMED_MUST_BE_BOOLEAN: &str = "Confirmed field must be a boolean value.";
pub const UPDATE_FIELDS_REQUIRED: &str =
    "At least one field (guestName or numberOfCompanions) is required for update.";

#[derive(Debug, Error)]
pub enum InvitationError {
    #[error("{0}")]
    Validation(String),
    #[error("Invalid invitation ID format.")]
    InvalidIdentifier,
    #[error("Invitation not found.")]
    NotFound,
    #[error("Document store error: {0}")]
    Store(#[from] StoreError),
}

impl From<validator::ValidationErrors> for InvitationError {
    fn from(err: validator::ValidationErrors) -> Self {
        Self::Validation(describe_validation_errors(&err))
    }
}

/// Una pagina di inviti con i metadati di paginazione
#[derive(Debug, Clone)]
pub struct InvitationPage {
    pub invitations: Vec<Invitation>,
    pub pagination: Pagination,
}

pub struct InvitationService<S> {
    repository: S,
    max_page_limit: u64,
}

impl<S: InvitationStore> InvitationService<S> {
    pub fn new(repository: S, max_page_limit: u64) -> Self {
        Self {
            repository,
            max_page_limit: max_page_limit.max(1),
        }
    }

    pub fn repository(&self) -> &S {
        &self.repository
    }

    #[instrument(skip(self, input))]
    pub async fn create(&self, input: CreateInvitationDTO) -> Result<Invitation, InvitationError> {
        debug!("Creating invitation");
        // 1. Verificare che entrambi i campi siano presenti
        let (guest_name, number_of_companions) =
            match (input.guest_name, input.number_of_companions) {
                (Some(guest_name), Some(number_of_companions)) => {
                    (guest_name, number_of_companions)
                }
                (None, Some(_)) => {
                    return Err(InvitationError::Validation(GUEST_NAME_REQUIRED.to_string()));
                }
                (Some(_), None) => {
                    return Err(InvitationError::Validation(COMPANIONS_REQUIRED.to_string()));
                }
                (None, None) => {
                    return Err(InvitationError::Validation(format!(
                        "{GUEST_NAME_REQUIRED}; {COMPANIONS_REQUIRED}"
                    )));
                }
            };

        // 2. Validare i vincoli dell'entity (nome dopo il trim, range compagni)
        let number_of_companions = companions_from_wire(number_of_companions)
            .map_err(|message| InvitationError::Validation(message.to_string()))?;
        let data = NewInvitation::new(&guest_name, number_of_companions);
        data.validate().inspect_err(|err| warn!("Invalid invitation: {}", err))?;

        // 3. Salvare
        let invitation = self.repository.create(&data).await?;
        info!("Invitation {} created", invitation.id);
        Ok(invitation)
    }

    #[instrument(skip(self))]
    pub async fn list(&self, query: &PageQuery) -> Result<InvitationPage, InvitationError> {
        let page = query.page();
        let limit = query.limit(self.max_page_limit);

        let (invitations, total_count) = match skip_for(page, limit) {
            // pagina e conteggio in parallelo
            Some(skip) => {
                futures::future::try_join(
                    self.repository.read_page(skip, limit),
                    self.repository.count(),
                )
                .await?
            }
            // offset fuori dal range dello store: nessuna query sulla pagina
            None => {
                debug!("Page {} is beyond any stored offset", page);
                (Vec::new(), self.repository.count().await?)
            }
        };

        let pagination = Pagination::new(page, limit, total_count);
        debug!(
            "Retrieved {} invitations (page {} of {})",
            invitations.len(),
            pagination.current_page,
            pagination.total_pages
        );
        Ok(InvitationPage {
            invitations,
            pagination,
        })
    }

    #[instrument(skip(self))]
    pub async fn get_by_id(&self, id: &str) -> Result<Invitation, InvitationError> {
        let id = parse_id(id)?;
        self.repository
            .read(&id)
            .await?
            .ok_or(InvitationError::NotFound)
            .inspect_err(|_| warn!("Invitation {} not found", id))
    }

    #[instrument(skip(self, input))]
    pub async fn update(
        &self,
        id: &str,
        input: UpdateInvitationDTO,
    ) -> Result<Invitation, InvitationError> {
        // 1. Validare l'id prima di qualsiasi accesso allo store
        let id = parse_id(id)?;

        // 2. Almeno un campo deve essere presente
        if input.guest_name.is_none() && input.number_of_companions.is_none() {
            warn!("Update without fields for invitation {}", id);
            return Err(InvitationError::Validation(UPDATE_FIELDS_REQUIRED.to_string()));
        }

        // 3. Validare i soli campi presenti
        let number_of_companions = input
            .number_of_companions
            .map(companions_from_wire)
            .transpose()
            .map_err(|message| InvitationError::Validation(message.to_string()))?;
        let patch = InvitationPatch::details(input.guest_name.as_deref(), number_of_companions);
        patch.validate()?;

        // 4. Applicare la patch
        let invitation = self.apply(&id, &patch).await?;
        info!("Invitation {} updated", id);
        Ok(invitation)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: &str) -> Result<Invitation, InvitationError> {
        let id = parse_id(id)?;
        let invitation = self
            .repository
            .delete(&id)
            .await?
            .ok_or(InvitationError::NotFound)
            .inspect_err(|_| warn!("Invitation {} not found", id))?;
        info!("Invitation {} deleted", id);
        Ok(invitation)
    }

    /// `confirmed` è `None` quando il client non ha inviato un booleano;
    /// l'id viene comunque validato per primo.
    #[instrument(skip(self))]
    pub async fn confirm(
        &self,
        id: &str,
        confirmed: Option<bool>,
    ) -> Result<Invitation, InvitationError> {
        let id = parse_id(id)?;
        let confirmed = confirmed.ok_or_else(|| {
            warn!("Confirm request for {} without a boolean value", id);
            InvitationError::Validation(CONFIRMED_MUST_BE_BOOLEAN.to_string())
        })?;
        let invitation = self
            .apply(&id, &InvitationPatch::confirmation(confirmed))
            .await?;
        info!("Invitation {} confirmed = {}", id, confirmed);
        Ok(invitation)
    }

    async fn apply(
        &self,
        id: &ObjectId,
        patch: &InvitationPatch,
    ) -> Result<Invitation, InvitationError> {
        self.repository
            .update(id, patch)
            .await?
            .ok_or(InvitationError::NotFound)
            .inspect_err(|_| warn!("Invitation {} not found", id))
    }
}

/// Accetta solo ObjectId nella forma esadecimale a 24 caratteri
fn parse_id(raw: &str) -> Result<ObjectId, InvitationError> {
    ObjectId::parse_str(raw).map_err(|_| {
        warn!("Invalid invitation id: {:?}", raw);
        InvitationError::InvalidIdentifier
    })
}
