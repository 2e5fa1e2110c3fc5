use crate::domain::{ClientId, Cpf};
use crate::error::RegistryResult;
use crate::models::{Client, ClientDraft};
use async_trait::async_trait;

/// Repository for managing registered clients.
///
/// Provides abstraction over client storage so services can be tested
/// against a mock that records calls.
#[async_trait]
pub trait ClientRepository: Send + Sync {
    /// Store a validated draft, assigning it the next ID.
    ///
    /// Fails with `RegistryError::DuplicateCpf` if a stored client already
    /// has the draft's CPF. The check and the store happen atomically.
    async fn insert(&self, draft: ClientDraft) -> RegistryResult<Client>;

    /// Retrieve a single client by ID.
    async fn get(&self, id: ClientId) -> RegistryResult<Client>;

    /// Retrieve all clients in registration order.
    async fn list(&self) -> RegistryResult<Vec<Client>>;

    /// Replace a stored client with the given value.
    async fn update(&self, client: &Client) -> RegistryResult<Client>;

    /// Remove a client, returning the removed record.
    async fn remove(&self, id: ClientId) -> RegistryResult<Client>;

    /// Look up a client by CPF digits.
    async fn find_by_cpf(&self, cpf: &Cpf) -> RegistryResult<Option<Client>>;
}
