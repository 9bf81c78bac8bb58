//! In-memory repository - Stessa semantica del repository MongoDB, senza database.
//! Usato dai test di integrazione sull'API.

use super::traits::{Create, Delete, Read, ReadPage, StoreError, Update};
use crate::dtos::pagination::MAX_SKIP;
use crate::entities::{Invitation, InvitationPatch, NewInvitation};
use bson::oid::ObjectId;
use std::cmp::Reverse;
use std::sync::{Mutex, MutexGuard, PoisonError};

#[derive(Default)]
pub struct MemoryInvitationRepository {
    documents: Mutex<Vec<Invitation>>,
}

impl MemoryInvitationRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copia di tutti i documenti, in ordine di inserimento
    pub fn snapshot(&self) -> Vec<Invitation> {
        self.lock().clone()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Invitation>> {
        self.documents.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Create<Invitation, NewInvitation> for MemoryInvitationRepository {
    async fn create(&self, data: &NewInvitation) -> Result<Invitation, StoreError> {
        let invitation = Invitation::new(data);
        self.lock().push(invitation.clone());
        Ok(invitation)
    }
}

impl Read<Invitation, ObjectId> for MemoryInvitationRepository {
    async fn read(&self, id: &ObjectId) -> Result<Option<Invitation>, StoreError> {
        Ok(self.lock().iter().find(|inv| inv.id == *id).cloned())
    }
}

impl ReadPage<Invitation> for MemoryInvitationRepository {
    async fn read_page(&self, skip: u64, limit: u64) -> Result<Vec<Invitation>, StoreError> {
        // come il server Mongo: lo skip viaggia come i64
        if skip > MAX_SKIP {
            return Err(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("skip {skip} does not fit in a 64-bit signed integer"),
            )
            .into());
        }
        let mut documents = self.snapshot();
        documents.sort_by_key(|inv| Reverse((inv.created_at, inv.id)));
        let skip = usize::try_from(skip).unwrap_or(usize::MAX);
        let limit = usize::try_from(limit).unwrap_or(usize::MAX);
        Ok(documents.into_iter().skip(skip).take(limit).collect())
    }

    async fn count(&self) -> Result<u64, StoreError> {
        Ok(self.lock().len() as u64)
    }
}

impl Update<Invitation, InvitationPatch, ObjectId> for MemoryInvitationRepository {
    async fn update(
        &self,
        id: &ObjectId,
        data: &InvitationPatch,
    ) -> Result<Option<Invitation>, StoreError> {
        let mut documents = self.lock();
        Ok(documents.iter_mut().find(|inv| inv.id == *id).map(|inv| {
            inv.apply(data);
            inv.clone()
        }))
    }
}

impl Delete<Invitation, ObjectId> for MemoryInvitationRepository {
    async fn delete(&self, id: &ObjectId) -> Result<Option<Invitation>, StoreError> {
        let mut documents = self.lock();
        Ok(documents
            .iter()
            .position(|inv| inv.id == *id)
            .map(|index| documents.remove(index)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn read_page_rejects_skip_out_of_store_range() {
        let repository = MemoryInvitationRepository::new();
        repository.create(&NewInvitation::new("Jane", 1)).await.unwrap();

        assert_eq!(repository.read_page(MAX_SKIP, 10).await.unwrap().len(), 0);
        assert!(repository.read_page(MAX_SKIP + 1, 10).await.is_err());
    }
}
