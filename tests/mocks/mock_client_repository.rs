use async_trait::async_trait;
use client_registry::domain::{ClientId, Cpf};
use client_registry::error::{RegistryError, RegistryResult};
use client_registry::models::{Client, ClientDraft};
use client_registry::repositories::ClientRepository;
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex};

/// Mock client repository for testing.
///
/// Provides an in-memory implementation of ClientRepository that can be
/// seeded with test data and tracks method calls for verification.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockClientRepository {
    clients: Arc<Mutex<BTreeMap<ClientId, Client>>>,
    next_id: Arc<Mutex<u64>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MockClientRepository {
    /// Create a new empty MockClientRepository.
    pub fn new() -> Self {
        Self {
            clients: Arc::new(Mutex::new(BTreeMap::new())),
            next_id: Arc::new(Mutex::new(1)),
            call_counts: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Add a client directly, bypassing registration rules.
    pub fn add_client(&self, client: Client) {
        let mut clients = self.clients.lock().unwrap();
        let mut next_id = self.next_id.lock().unwrap();
        *next_id = (*next_id).max(client.id.get() + 1);
        clients.insert(client.id, client);
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    /// Reset all call counts.
    pub fn reset_call_counts(&self) {
        self.call_counts.lock().unwrap().clear();
    }

    /// Number of stored clients.
    pub fn len(&self) -> usize {
        self.clients.lock().unwrap().len()
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl Default for MockClientRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ClientRepository for MockClientRepository {
    async fn insert(&self, draft: ClientDraft) -> RegistryResult<Client> {
        self.track_call("insert");

        let mut clients = self.clients.lock().unwrap();
        if clients.values().any(|c| c.cpf == draft.cpf) {
            return Err(RegistryError::DuplicateCpf(draft.cpf.formatted()));
        }

        let mut next_id = self.next_id.lock().unwrap();
        let id = ClientId::new(*next_id)?;
        *next_id += 1;

        let client = Client::from_draft(id, draft);
        clients.insert(id, client.clone());
        Ok(client)
    }

    async fn get(&self, id: ClientId) -> RegistryResult<Client> {
        self.track_call("get");

        self.clients
            .lock()
            .unwrap()
            .get(&id)
            .cloned()
            .ok_or(RegistryError::NotFound(id))
    }

    async fn list(&self) -> RegistryResult<Vec<Client>> {
        self.track_call("list");
        Ok(self.clients.lock().unwrap().values().cloned().collect())
    }

    async fn update(&self, client: &Client) -> RegistryResult<Client> {
        self.track_call("update");

        let mut clients = self.clients.lock().unwrap();
        if !clients.contains_key(&client.id) {
            return Err(RegistryError::NotFound(client.id));
        }
        clients.insert(client.id, client.clone());
        Ok(client.clone())
    }

    async fn remove(&self, id: ClientId) -> RegistryResult<Client> {
        self.track_call("remove");

        self.clients
            .lock()
            .unwrap()
            .remove(&id)
            .ok_or(RegistryError::NotFound(id))
    }

    async fn find_by_cpf(&self, cpf: &Cpf) -> RegistryResult<Option<Client>> {
        self.track_call("find_by_cpf");

        let clients = self.clients.lock().unwrap();
        Ok(clients.values().find(|c| &c.cpf == cpf).cloned())
    }
}
