use async_trait::async_trait;
use client_registry::domain::{ClientId, Cpf};
use client_registry::error::RegistryResult;
use client_registry::models::{Client, ClientDraft};
use client_registry::repositories::ClientRepository;
use std::sync::Arc;

/// Repository wrapper that yields to the scheduler after every CPF lookup.
///
/// Lets a test interleave two registrations between the duplicate check
/// and the insert on a single-threaded runtime.
#[allow(dead_code)]
pub struct YieldingClientRepository {
    inner: Arc<dyn ClientRepository>,
}

#[allow(dead_code)]
impl YieldingClientRepository {
    pub fn new(inner: Arc<dyn ClientRepository>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ClientRepository for YieldingClientRepository {
    async fn insert(&self, draft: ClientDraft) -> RegistryResult<Client> {
        self.inner.insert(draft).await
    }

    async fn get(&self, id: ClientId) -> RegistryResult<Client> {
        self.inner.get(id).await
    }

    async fn list(&self) -> RegistryResult<Vec<Client>> {
        self.inner.list().await
    }

    async fn update(&self, client: &Client) -> RegistryResult<Client> {
        self.inner.update(client).await
    }

    async fn remove(&self, id: ClientId) -> RegistryResult<Client> {
        self.inner.remove(id).await
    }

    async fn find_by_cpf(&self, cpf: &Cpf) -> RegistryResult<Option<Client>> {
        let found = self.inner.find_by_cpf(cpf).await?;
        tokio::task::yield_now().await;
        Ok(found)
    }
}
