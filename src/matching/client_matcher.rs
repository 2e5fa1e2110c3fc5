//! Fuzzy matching implementation for finding registered clients.
//!
//! This module provides client lookup with:
//! - Exact matching on CPF and phone digits
//! - Fuzzy name matching (substring and Levenshtein distance)
//! - Confidence scoring (0-100 scale)

use crate::domain::digits_only;
use crate::models::Client;

/// A match result containing a client and its confidence score.
#[derive(Debug, Clone)]
pub struct MatchResult {
    /// The matched client
    pub client: Client,

    /// Confidence score (0-100, where 100 is an exact match)
    pub confidence: u8,

    /// Type of match that produced this result
    pub match_type: MatchType,
}

/// The type of match that was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchType {
    /// Query digits equal the client's CPF
    ExactCpf,

    /// Query digits equal the client's phone
    ExactPhone,

    /// Fuzzy name match
    FuzzyName,
}

/// Client matcher with fuzzy and exact matching capabilities.
#[derive(Debug, Default)]
pub struct ClientMatcher;

impl ClientMatcher {
    /// Create a new ClientMatcher.
    pub fn new() -> Self {
        Self
    }

    /// Find clients matching a free-text query.
    ///
    /// A query that strips down to 10 or 11 digits is first compared against
    /// CPF and phone digits; otherwise (or when nothing matches exactly) the
    /// query is fuzzy matched against the client name.
    ///
    /// # Returns
    /// At most `max_results` matches at or above `min_confidence`, sorted by
    /// confidence (highest first) and then by name.
    pub fn find_matches(
        &self,
        query: &str,
        clients: &[Client],
        max_results: usize,
        min_confidence: u8,
    ) -> Vec<MatchResult> {
        let query_digits = digits_only(query);
        let mut results: Vec<MatchResult> = Vec::new();

        for client in clients {
            if let Some(match_type) = Self::match_digits(&query_digits, client) {
                results.push(MatchResult {
                    client: client.clone(),
                    confidence: 100,
                    match_type,
                });
                continue;
            }

            if let Some(confidence) = self.fuzzy_match_name(query, &client.name) {
                if confidence >= min_confidence {
                    results.push(MatchResult {
                        client: client.clone(),
                        confidence,
                        match_type: MatchType::FuzzyName,
                    });
                }
            }
        }

        results.sort_by(|a, b| {
            b.confidence
                .cmp(&a.confidence)
                .then_with(|| a.client.name.cmp(&b.client.name))
        });
        results.truncate(max_results);

        results
    }

    /// Exact match of the query digits against CPF, then phone.
    fn match_digits(query_digits: &str, client: &Client) -> Option<MatchType> {
        if query_digits.len() < 10 {
            return None;
        }
        if client.cpf.digits() == query_digits {
            return Some(MatchType::ExactCpf);
        }
        if client.phone.digits() == query_digits {
            return Some(MatchType::ExactPhone);
        }
        None
    }

    /// Fuzzy match names.
    ///
    /// Returns confidence score (0-95) if matched, None otherwise.
    fn fuzzy_match_name(&self, query: &str, client_name: &str) -> Option<u8> {
        let query_normalized = Self::normalize_name(query);
        let name_normalized = Self::normalize_name(client_name);

        match Self::calculate_fuzzy_score(&query_normalized, &name_normalized) {
            0 => None,
            score => Some(score),
        }
    }

    /// Score a normalized query against a normalized name.
    ///
    /// Returns a confidence score from 0-95 (95 max to reserve 100 for exact
    /// CPF and phone matches).
    fn calculate_fuzzy_score(query: &str, target: &str) -> u8 {
        if query.is_empty() || target.is_empty() {
            return 0;
        }

        if query == target {
            return 95;
        }

        let query_len = query.chars().count();
        let target_len = target.chars().count();

        // 10-95 range for substring matches, longer coverage scores higher
        if target.contains(query) {
            let ratio = query_len as f64 / target_len as f64;
            return (85.0 * ratio + 10.0) as u8;
        }

        if query.contains(target) {
            return 85;
        }

        let distance = Self::levenshtein_distance(query, target);
        let max_len = query_len.max(target_len);

        if distance as f64 / max_len as f64 > 0.5 {
            return 0;
        }

        let similarity = 1.0 - (distance as f64 / max_len as f64);
        (similarity * 85.0) as u8
    }

    /// Calculate Levenshtein distance between two strings, by characters.
    fn levenshtein_distance(s1: &str, s2: &str) -> usize {
        let s1_chars: Vec<char> = s1.chars().collect();
        let s2_chars: Vec<char> = s2.chars().collect();

        if s1_chars.is_empty() {
            return s2_chars.len();
        }
        if s2_chars.is_empty() {
            return s1_chars.len();
        }

        // Single rolling row of the edit matrix
        let mut previous: Vec<usize> = (0..=s2_chars.len()).collect();
        let mut current = vec![0; s2_chars.len() + 1];

        for (i, c1) in s1_chars.iter().enumerate() {
            current[0] = i + 1;
            for (j, c2) in s2_chars.iter().enumerate() {
                let cost = if c1 == c2 { 0 } else { 1 };
                current[j + 1] = (previous[j + 1] + 1)
                    .min(current[j] + 1)
                    .min(previous[j] + cost);
            }
            std::mem::swap(&mut previous, &mut current);
        }

        previous[s2_chars.len()]
    }

    /// Normalize a name for fuzzy matching.
    ///
    /// Converts to lowercase and collapses whitespace.
    pub fn normalize_name(name: &str) -> String {
        name.trim()
            .to_lowercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
    }
}
