//! Client service layer.
//!
//! Business logic for registering, listing, searching and reporting on clients.

use crate::domain::{ClientId, Cpf, PhoneNumber};
use crate::error::{RegistryError, RegistryResult};
use crate::matching::{ClientMatcher, MatchResult};
use crate::models::{Client, ClientDraft, NewClient};
use crate::report::DailyReport;
use crate::repositories::ClientRepository;
use crate::services::clock::Clock;
use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::Arc;

/// Client service trait for business operations.
#[async_trait]
pub trait ClientService: Send + Sync {
    /// Validate form input and register a new client.
    ///
    /// Checks run in a fixed order and the first failure is returned:
    /// required fields, CPF check digits, phone length, birth date for
    /// antibiotic treatment, duplicate CPF.
    async fn register(&self, input: NewClient) -> RegistryResult<Client>;

    /// All clients in registration order.
    async fn list(&self) -> RegistryResult<Vec<Client>>;

    /// A single client by ID.
    async fn get(&self, id: ClientId) -> RegistryResult<Client>;

    /// Remove a client, returning the removed record.
    async fn remove(&self, id: ClientId) -> RegistryResult<Client>;

    /// Flip the "support done" flag and return the updated client.
    async fn toggle_support(&self, id: ClientId) -> RegistryResult<Client>;

    /// Clients registered on the current local day, in registration order.
    async fn registered_today(&self) -> RegistryResult<Vec<Client>>;

    /// Find clients by fuzzy name, or exactly by CPF or phone digits.
    async fn search(
        &self,
        query: String,
        max_results: Option<usize>,
        min_confidence: Option<u8>,
    ) -> RegistryResult<Vec<MatchResult>>;

    /// Report of the clients registered today.
    async fn daily_report(&self) -> RegistryResult<DailyReport>;
}

/// Default implementation of ClientService.
pub struct ClientServiceImpl {
    client_repo: Arc<dyn ClientRepository>,
    clock: Arc<dyn Clock>,
    matcher: ClientMatcher,
    max_match_results: usize,
    match_confidence_threshold: u8,
}

/// Validation helper functions.
impl ClientServiceImpl {
    /// Validate search query.
    fn validate_search_query(query: &str) -> Result<(), String> {
        if query.trim().is_empty() {
            return Err("Search query cannot be empty".to_string());
        }
        if query.len() > 200 {
            return Err("Search query too long (max 200 characters)".to_string());
        }
        Ok(())
    }

    /// Birth date is only kept (and only checked) for antibiotic treatment.
    fn parse_birth_date(antibiotic: bool, raw: Option<&str>) -> RegistryResult<Option<NaiveDate>> {
        if !antibiotic {
            return Ok(None);
        }

        let raw = raw
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or(RegistryError::BirthDateRequired)?;

        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map(Some)
            .map_err(|_| RegistryError::InvalidBirthDate(raw.to_string()))
    }
}

impl ClientServiceImpl {
    /// Create a new client service.
    ///
    /// # Arguments
    /// * `client_repo` - Storage for registered clients
    /// * `clock` - Source of registration timestamps and of "today"
    /// * `max_match_results` - Default cap on search results
    /// * `match_confidence_threshold` - Default minimum search confidence (0-100)
    pub fn new(
        client_repo: Arc<dyn ClientRepository>,
        clock: Arc<dyn Clock>,
        max_match_results: usize,
        match_confidence_threshold: u8,
    ) -> Self {
        Self {
            client_repo,
            clock,
            matcher: ClientMatcher::new(),
            max_match_results,
            match_confidence_threshold,
        }
    }
}

#[async_trait]
impl ClientService for ClientServiceImpl {
    async fn register(&self, input: NewClient) -> RegistryResult<Client> {
        let name = input.name.trim();
        if input.cpf.trim().is_empty() || name.is_empty() || input.phone.trim().is_empty() {
            return Err(RegistryError::MissingRequiredFields);
        }

        let cpf = Cpf::parse(&input.cpf)?;
        let phone = PhoneNumber::parse(&input.phone)?;
        let birth_date =
            Self::parse_birth_date(input.treatment.antibiotic, input.birth_date.as_deref())?;

        // Insert repeats this check atomically
        if let Some(existing) = self.client_repo.find_by_cpf(&cpf).await? {
            tracing::warn!(existing_id = %existing.id, "Rejected duplicate CPF registration");
            return Err(RegistryError::DuplicateCpf(cpf.formatted()));
        }

        let medication = input
            .medication
            .map(|m| m.trim().to_string())
            .filter(|m| !m.is_empty());

        let draft = ClientDraft {
            cpf,
            name: name.to_string(),
            phone,
            registered_at: self.clock.now(),
            treatment: input.treatment,
            birth_date,
            medication,
        };

        let client = self.client_repo.insert(draft).await.map_err(|e| {
            if matches!(e, RegistryError::DuplicateCpf(_)) {
                tracing::warn!("Concurrent registration with the same CPF rejected");
            }
            e
        })?;
        tracing::info!(client_id = %client.id, "Client registered");
        Ok(client)
    }

    async fn list(&self) -> RegistryResult<Vec<Client>> {
        self.client_repo.list().await
    }

    async fn get(&self, id: ClientId) -> RegistryResult<Client> {
        self.client_repo.get(id).await
    }

    async fn remove(&self, id: ClientId) -> RegistryResult<Client> {
        let removed = self.client_repo.remove(id).await?;
        tracing::info!(client_id = %id, "Client removed");
        Ok(removed)
    }

    async fn toggle_support(&self, id: ClientId) -> RegistryResult<Client> {
        let mut client = self.client_repo.get(id).await?;
        client.support_done = !client.support_done;

        let updated = self.client_repo.update(&client).await?;
        tracing::debug!(
            client_id = %id,
            support_done = updated.support_done,
            "Support status toggled"
        );
        Ok(updated)
    }

    async fn registered_today(&self) -> RegistryResult<Vec<Client>> {
        let today = self.clock.now().date_naive();
        let clients = self.client_repo.list().await?;
        Ok(clients
            .into_iter()
            .filter(|c| c.registered_on(today))
            .collect())
    }

    async fn search(
        &self,
        query: String,
        max_results: Option<usize>,
        min_confidence: Option<u8>,
    ) -> RegistryResult<Vec<MatchResult>> {
        Self::validate_search_query(&query).map_err(RegistryError::InvalidRequest)?;

        let min_confidence = min_confidence.unwrap_or(self.match_confidence_threshold);
        if min_confidence > 100 {
            return Err(RegistryError::InvalidRequest(
                "min_confidence must be between 0 and 100".to_string(),
            ));
        }

        let clients = self.client_repo.list().await?;
        let matches = self.matcher.find_matches(
            &query,
            &clients,
            max_results.unwrap_or(self.max_match_results),
            min_confidence,
        );

        tracing::debug!(
            candidates = clients.len(),
            matches = matches.len(),
            "Client search complete"
        );
        Ok(matches)
    }

    async fn daily_report(&self) -> RegistryResult<DailyReport> {
        let now = self.clock.now();
        let clients = self.registered_today().await?;
        tracing::info!(total = clients.len(), "Daily report built");
        Ok(DailyReport::build(now.date_naive(), now, &clients))
    }
}
