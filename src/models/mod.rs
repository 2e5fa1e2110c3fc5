//! Data models for registry entities.
//!
//! This module contains the registered client record, the raw form input it
//! is built from, and the validated draft that sits between the two.

pub mod client;

pub use client::{Client, ClientDraft, NewClient, TreatmentFlags};
