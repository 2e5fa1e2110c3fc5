//! Domain value objects and types.
//!
//! This module contains the input masks and checksum validation for the two
//! identifiers a registration form collects (CPF and phone number), plus the
//! type-safe wrappers built on them. The value objects validate at
//! construction time so an invalid CPF or phone number cannot be stored.

pub mod client_id;
pub mod cpf;
pub mod digits;
pub mod errors;
pub mod phone;

pub use client_id::ClientId;
pub use cpf::{check_digits, format_identifier, validate_identifier, Cpf};
pub use digits::digits_only;
pub use errors::ValidationError;
pub use phone::{format_phone, PhoneKind, PhoneNumber};
