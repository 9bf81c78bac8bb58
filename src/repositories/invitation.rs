//! InvitationRepository - Repository MongoDB per la gestione degli inviti

use super::traits::{Create, Delete, Read, ReadPage, StoreError, Update};
use crate::core::Connector;
use crate::entities::{Invitation, InvitationPatch, NewInvitation};
use futures::TryStreamExt;
use mongodb::bson::{DateTime, Document, doc, oid::ObjectId};
use mongodb::options::ReturnDocument;
use mongodb::{Collection, IndexModel};
use std::sync::Arc;
use tracing::{debug, instrument};

pub const COLLECTION: &str = "invitations";

//INVITATION REPOSITORY
pub struct InvitationRepository {
    connector: Arc<Connector>,
}

impl InvitationRepository {
    pub fn new(connector: Arc<Connector>) -> Self {
        Self { connector }
    }

    /// La collection viene risolta a ogni operazione: il connector restituisce
    /// l'handle in cache o riprova se l'ultimo tentativo era fallito
    async fn collection(&self) -> Result<Collection<Invitation>, StoreError> {
        let database = self.connector.connect().await?;
        Ok(database.collection::<Invitation>(COLLECTION))
    }

    /// Crea l'indice usato dall'ordinamento della lista (idempotente)
    pub async fn ensure_indexes(&self) -> Result<(), StoreError> {
        let index = IndexModel::builder()
            .keys(doc! { "createdAt": -1, "_id": -1 })
            .build();
        self.collection().await?.create_index(index).await?;
        debug!("Invitation indexes ensured");
        Ok(())
    }
}

/// Documento `$set` con i soli campi presenti nella patch più `updatedAt`
fn set_document(patch: &InvitationPatch) -> Document {
    let mut set = doc! { "updatedAt": DateTime::now() };
    if let Some(ref guest_name) = patch.guest_name {
        set.insert("guestName", guest_name.as_str());
    }
    if let Some(number_of_companions) = patch.number_of_companions {
        set.insert("numberOfCompanions", number_of_companions);
    }
    if let Some(confirmed) = patch.confirmed {
        set.insert("confirmed", confirmed);
    }
    set
}

impl Create<Invitation, NewInvitation> for InvitationRepository {
    #[instrument(skip(self, data))]
    async fn create(&self, data: &NewInvitation) -> Result<Invitation, StoreError> {
        // id, confirmed e timestamp vengono assegnati qui, non dal client
        let invitation = Invitation::new(data);
        self.collection().await?.insert_one(&invitation).await?;
        debug!("Inserted invitation {}", invitation.id);
        Ok(invitation)
    }
}

impl Read<Invitation, ObjectId> for InvitationRepository {
    #[instrument(skip(self))]
    async fn read(&self, id: &ObjectId) -> Result<Option<Invitation>, StoreError> {
        self.collection().await?.find_one(doc! { "_id": *id }).await
    }
}

impl ReadPage<Invitation> for InvitationRepository {
    #[instrument(skip(self))]
    async fn read_page(&self, skip: u64, limit: u64) -> Result<Vec<Invitation>, StoreError> {
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);
        self.collection()
            .await?
            .find(doc! {})
            .sort(doc! { "createdAt": -1, "_id": -1 })
            .skip(skip)
            .limit(limit)
            .await?
            .try_collect()
            .await
    }

    async fn count(&self) -> Result<u64, StoreError> {
        self.collection().await?.count_documents(doc! {}).await
    }
}

impl Update<Invitation, InvitationPatch, ObjectId> for InvitationRepository {
    #[instrument(skip(self, data))]
    async fn update(
        &self,
        id: &ObjectId,
        data: &InvitationPatch,
    ) -> Result<Option<Invitation>, StoreError> {
        // singolo find-and-update: atomico sul documento
        self.collection()
            .await?
            .find_one_and_update(doc! { "_id": *id }, doc! { "$set": set_document(data) })
            .return_document(ReturnDocument::After)
            .await
    }
}

impl Delete<Invitation, ObjectId> for InvitationRepository {
    #[instrument(skip(self))]
    async fn delete(&self, id: &ObjectId) -> Result<Option<Invitation>, StoreError> {
        self.collection()
            .await?
            .find_one_and_delete(doc! { "_id": *id })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_document_only_contains_present_fields() {
        let set = set_document(&InvitationPatch::details(None, Some(3)));
        assert!(set.contains_key("updatedAt"));
        assert_eq!(set.get_i32("numberOfCompanions").ok(), Some(3));
        assert!(!set.contains_key("guestName"));
        assert!(!set.contains_key("confirmed"));
    }

    #[test]
    fn set_document_for_confirmation() {
        let set = set_document(&InvitationPatch::confirmation(false));
        assert_eq!(set.get_bool("confirmed").ok(), Some(false));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn set_document_never_touches_identity_or_creation() {
        let patch = InvitationPatch {
            guest_name: Some("Jane".into()),
            number_of_companions: Some(1),
            confirmed: Some(true),
        };
        let set = set_document(&patch);
        assert!(!set.contains_key("_id"));
        assert!(!set.contains_key("createdAt"));
        assert_eq!(set.get_str("guestName").ok(), Some("Jane"));
    }
}
