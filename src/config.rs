//! Configuration management for the client registry.
//!
//! This module handles loading and validating configuration from environment
//! variables. A `.env` file in the working directory is loaded first if
//! present; it is read without printing to stdout, which MCP uses for
//! communication.

use crate::error::{ConfigError, ConfigResult};
use crate::report::PrintFormat;
use std::env;

/// Configuration for the client registry server.
#[derive(Debug, Clone)]
pub struct Config {
    /// Print format used when a report request does not name one
    /// (default: portrait)
    pub report_print_format: PrintFormat,

    /// Maximum number of client search results to return (default: 5)
    pub max_match_results: usize,

    /// Client search confidence threshold (0-100, default: 30)
    pub match_confidence_threshold: u8,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `REPORT_PRINT_FORMAT`: portrait, landscape or receipt (default: portrait)
    /// - `MAX_MATCH_RESULTS`: Max search results (default: 5)
    /// - `MATCH_CONFIDENCE_THRESHOLD`: Min confidence score (default: 30)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        match dotenvy::dotenv() {
            Ok(_) => {}
            Err(e) if e.not_found() => {}
            Err(e) => return Err(ConfigError::DotenvError(e.to_string())),
        }

        let report_print_format = match env::var("REPORT_PRINT_FORMAT") {
            Ok(val) => val
                .parse::<PrintFormat>()
                .map_err(|reason| ConfigError::InvalidValue {
                    var: "REPORT_PRINT_FORMAT".to_string(),
                    reason,
                })?,
            Err(_) => PrintFormat::default(),
        };

        let max_match_results = Self::parse_env_usize("MAX_MATCH_RESULTS", 5)?;
        if max_match_results == 0 {
            return Err(ConfigError::InvalidValue {
                var: "MAX_MATCH_RESULTS".to_string(),
                reason: "Must be at least 1".to_string(),
            });
        }

        let match_confidence_threshold = Self::parse_env_u8("MATCH_CONFIDENCE_THRESHOLD", 30)?;

        // Validate confidence threshold is 0-100
        if match_confidence_threshold > 100 {
            return Err(ConfigError::InvalidValue {
                var: "MATCH_CONFIDENCE_THRESHOLD".to_string(),
                reason: "Must be between 0 and 100".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            report_print_format,
            max_match_results,
            match_confidence_threshold,
            log_level,
        })
    }

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as u8 with a default value.
    fn parse_env_u8(var_name: &str, default: u8) -> ConfigResult<u8> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u8>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a number between 0-255, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            report_print_format: PrintFormat::Portrait,
            max_match_results: 5,
            match_confidence_threshold: 30,
            log_level: "error".to_string(),
        }
    }
}
