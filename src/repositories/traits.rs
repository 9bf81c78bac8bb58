//! Common repository traits
//!
//! This module defines generic interfaces for document store operations.
//! Every method returns a `Send` future so repositories can be shared across
//! axum handlers behind an `Arc`.

use crate::entities::{Invitation, InvitationPatch, NewInvitation};
use bson::oid::ObjectId;
use std::future::Future;

/// Error type shared by all repositories
pub type StoreError = mongodb::error::Error;

/// Trait for creating new entities in the store
///
/// # Type Parameters
/// * `Entity` - Type of the returned entity (with ID assigned on insertion)
/// * `CreateDTO` - Validated data for creation (without ID)
pub trait Create<Entity, CreateDTO> {
    /// Creates a new entity in the store
    ///
    /// # Returns
    /// * `Ok(Entity)` - Created entity with ID and timestamps assigned
    /// * `Err(StoreError)` - Error during insertion
    fn create(&self, data: &CreateDTO) -> impl Future<Output = Result<Entity, StoreError>> + Send;
}

/// Trait for reading a single entity by primary key
pub trait Read<Entity, Id> {
    /// # Returns
    /// * `Ok(Some(Entity))` - Entity found
    /// * `Ok(None)` - No entity with that ID
    /// * `Err(StoreError)` - Error during reading
    fn read(&self, id: &Id) -> impl Future<Output = Result<Option<Entity>, StoreError>> + Send;
}

/// Trait for reading a slice of entities, newest first
pub trait ReadPage<Entity> {
    /// Reads at most `limit` entities after skipping `skip`, ordered by
    /// creation time descending
    fn read_page(
        &self,
        skip: u64,
        limit: u64,
    ) -> impl Future<Output = Result<Vec<Entity>, StoreError>> + Send;

    /// Total number of entities in the store
    fn count(&self) -> impl Future<Output = Result<u64, StoreError>> + Send;
}

/// Trait for updating existing entities
///
/// # Type Parameters
/// * `Entity` - Type of the updated entity
/// * `UpdateDTO` - Patch with optional fields (only `Some(_)` fields are modified)
/// * `Id` - Type of the primary key
pub trait Update<Entity, UpdateDTO, Id> {
    /// Atomically applies `data` to the entity and refreshes its update timestamp
    ///
    /// # Returns
    /// * `Ok(Some(Entity))` - Entity as it is after the update
    /// * `Ok(None)` - No entity with that ID
    /// * `Err(StoreError)` - Error during update
    fn update(
        &self,
        id: &Id,
        data: &UpdateDTO,
    ) -> impl Future<Output = Result<Option<Entity>, StoreError>> + Send;
}

/// Trait for deleting entities
pub trait Delete<Entity, Id> {
    /// Permanently removes an entity from the store
    ///
    /// # Returns
    /// * `Ok(Some(Entity))` - Entity as it was right before deletion
    /// * `Ok(None)` - No entity with that ID
    /// * `Err(StoreError)` - Error during deletion
    fn delete(&self, id: &Id) -> impl Future<Output = Result<Option<Entity>, StoreError>> + Send;
}

/// Everything the invitation service needs from a store
pub trait InvitationStore:
    Create<Invitation, NewInvitation>
    + Read<Invitation, ObjectId>
    + ReadPage<Invitation>
    + Update<Invitation, InvitationPatch, ObjectId>
    + Delete<Invitation, ObjectId>
    + Send
    + Sync
    + 'static
{
}

impl<T> InvitationStore for T where
    T: Create<Invitation, NewInvitation>
        + Read<Invitation, ObjectId>
        + ReadPage<Invitation>
        + Update<Invitation, InvitationPatch, ObjectId>
        + Delete<Invitation, ObjectId>
        + Send
        + Sync
        + 'static
{
}
