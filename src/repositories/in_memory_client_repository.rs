use crate::domain::{ClientId, Cpf};
use crate::error::{RegistryError, RegistryResult};
use crate::models::{Client, ClientDraft};
use crate::repositories::traits::ClientRepository;
use async_trait::async_trait;
use tokio::sync::RwLock;

/// Client repository that keeps everything in process memory.
///
/// IDs are assigned sequentially starting at 1 and are never reused, even
/// after a client is removed. Clients are kept in registration order.
pub struct InMemoryClientRepository {
    state: RwLock<State>,
}

struct State {
    next_id: u64,
    clients: Vec<Client>,
}

impl InMemoryClientRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self {
            state: RwLock::new(State {
                next_id: 1,
                clients: Vec::new(),
            }),
        }
    }
}

impl Default for InMemoryClientRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ClientRepository for InMemoryClientRepository {
    async fn insert(&self, draft: ClientDraft) -> RegistryResult<Client> {
        let mut state = self.state.write().await;
        if state.clients.iter().any(|c| c.cpf == draft.cpf) {
            return Err(RegistryError::DuplicateCpf(draft.cpf.formatted()));
        }

        let id = ClientId::new(state.next_id)?;
        state.next_id += 1;

        let client = Client::from_draft(id, draft);
        state.clients.push(client.clone());
        Ok(client)
    }

    async fn get(&self, id: ClientId) -> RegistryResult<Client> {
        let state = self.state.read().await;
        state
            .clients
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or(RegistryError::NotFound(id))
    }

    async fn list(&self) -> RegistryResult<Vec<Client>> {
        Ok(self.state.read().await.clients.clone())
    }

    async fn update(&self, client: &Client) -> RegistryResult<Client> {
        let mut state = self.state.write().await;
        let slot = state
            .clients
            .iter_mut()
            .find(|c| c.id == client.id)
            .ok_or(RegistryError::NotFound(client.id))?;
        *slot = client.clone();
        Ok(client.clone())
    }

    async fn remove(&self, id: ClientId) -> RegistryResult<Client> {
        let mut state = self.state.write().await;
        let index = state
            .clients
            .iter()
            .position(|c| c.id == id)
            .ok_or(RegistryError::NotFound(id))?;
        Ok(state.clients.remove(index))
    }

    async fn find_by_cpf(&self, cpf: &Cpf) -> RegistryResult<Option<Client>> {
        let state = self.state.read().await;
        Ok(state.clients.iter().find(|c| &c.cpf == cpf).cloned())
    }
}
