//! Fuzzy matching utilities for client lookup.
//!
//! This module provides fuzzy name matching and exact CPF/phone matching
//! over the registered clients.

pub mod client_matcher;

pub use client_matcher::{ClientMatcher, MatchResult, MatchType};
