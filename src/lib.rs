//! Client Registry - CPF validation, input masks and an in-memory client registry.
//!
//! The core of this library is a pair of pure input masks (CPF and Brazilian
//! phone numbers) and the CPF check digit validator. Around it sits a small
//! registration desk: an in-memory client registry, fuzzy client lookup and a
//! printable daily report, exposed to AI assistants over MCP.
//!
//! # Architecture
//!
//! - **domain**: Input masks, CPF validation and value objects
//! - **models**: Client records and raw registration input
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **repositories**: Client storage abstraction and in-memory implementation
//! - **services**: Registration rules, search and reporting
//! - **matching**: Fuzzy name and exact CPF/phone matching
//! - **report**: Daily report layout for portrait, landscape and receipt printing
//! - **server**: MCP protocol server

pub mod config;
pub mod domain;
pub mod error;
pub mod matching;
pub mod models;
pub mod report;
pub mod repositories;
pub mod server;
pub mod services;

// Re-export commonly used types
pub use config::Config;
pub use domain::{format_identifier, format_phone, validate_identifier, Cpf, PhoneNumber};
pub use error::{ConfigError, RegistryError, RegistryResult};
pub use matching::{ClientMatcher, MatchResult};
pub use models::{Client, NewClient, TreatmentFlags};
pub use report::{DailyReport, PrintFormat};
pub use server::RegistryMcpServer;
