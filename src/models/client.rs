//! Client model representing a person registered at the support desk.

use crate::domain::{ClientId, Cpf, PhoneNumber};
use chrono::{DateTime, Local, NaiveDate};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Treatment categories a client can be registered under.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[serde(default)]
pub struct TreatmentFlags {
    /// First visit for a new treatment
    pub treatment_start: bool,

    /// Ongoing treatment
    pub continuous_treatment: bool,

    /// Antibiotic treatment (requires a birth date)
    pub antibiotic: bool,
}

impl TreatmentFlags {
    /// Whether no category is set.
    pub fn is_empty(&self) -> bool {
        !self.treatment_start && !self.continuous_treatment && !self.antibiotic
    }

    fn join_labels(&self, labels: [&str; 3]) -> String {
        let set = [self.treatment_start, self.continuous_treatment, self.antibiotic];
        let joined = labels
            .iter()
            .zip(set)
            .filter(|(_, on)| *on)
            .map(|(label, _)| *label)
            .collect::<Vec<_>>()
            .join(", ");

        if joined.is_empty() {
            "-".to_string()
        } else {
            joined
        }
    }
}

/// A registered client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Client {
    /// Registry-assigned identifier
    pub id: ClientId,

    /// Taxpayer number
    pub cpf: Cpf,

    /// Full name
    pub name: String,

    /// Contact phone
    pub phone: PhoneNumber,

    /// When the client was registered (local time)
    pub registered_at: DateTime<Local>,

    /// Treatment categories
    #[serde(flatten)]
    pub treatment: TreatmentFlags,

    /// Birth date, recorded only for antibiotic treatment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<NaiveDate>,

    /// Medication code or name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medication: Option<String>,

    /// Whether a desk attendant has followed up
    #[serde(default)]
    pub support_done: bool,
}

impl Client {
    /// Build a client from a validated draft and its assigned ID.
    pub fn from_draft(id: ClientId, draft: ClientDraft) -> Self {
        Self {
            id,
            cpf: draft.cpf,
            name: draft.name,
            phone: draft.phone,
            registered_at: draft.registered_at,
            treatment: draft.treatment,
            birth_date: draft.birth_date,
            medication: draft.medication,
            support_done: false,
        }
    }

    /// Treatment categories with full labels, or `-` when none apply.
    pub fn treatment_status(&self) -> String {
        self.treatment
            .join_labels(["Treatment start", "Continuous treatment", "Antibiotic"])
    }

    /// Treatment categories with short labels, as printed on the daily report.
    pub fn short_treatment_status(&self) -> String {
        self.treatment
            .join_labels(["Start", "Continuous", "Antibiotic"])
    }

    /// Whether the client was registered on the given local calendar day.
    pub fn registered_on(&self, date: NaiveDate) -> bool {
        self.registered_at.date_naive() == date
    }
}

/// A validated client that has not been assigned an ID yet.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientDraft {
    pub cpf: Cpf,
    pub name: String,
    pub phone: PhoneNumber,
    pub registered_at: DateTime<Local>,
    pub treatment: TreatmentFlags,
    pub birth_date: Option<NaiveDate>,
    pub medication: Option<String>,
}

/// Raw registration input, exactly as typed into the form.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct NewClient {
    /// CPF, with or without punctuation
    pub cpf: String,

    /// Full name
    pub name: String,

    /// Phone with area code, with or without punctuation
    pub phone: String,

    /// Treatment categories
    #[serde(flatten)]
    pub treatment: TreatmentFlags,

    /// Birth date as YYYY-MM-DD (required for antibiotic treatment)
    #[serde(default)]
    pub birth_date: Option<String>,

    /// Medication code or name
    #[serde(default)]
    pub medication: Option<String>,
}
