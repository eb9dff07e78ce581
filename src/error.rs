//! Error types for the GitHub batch source
//!
//! This module defines the error hierarchy for the entire crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use crate::config::ValidationFailure;
use thiserror::Error;

/// The main error type for the GitHub batch source
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid configuration: {}", join_failures(.failures))]
    InvalidConfig { failures: Vec<ValidationFailure> },

    #[error("Unsupported dataset name: '{label}'")]
    UnknownDataset { label: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // Transport / Decode Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Failed to decode response: {message}")]
    Decode { message: String },

    // ============================================================================
    // Contract Errors
    // ============================================================================
    #[error("Reader contract violated: {operation} called in state {state}")]
    ReaderState {
        operation: &'static str,
        state: &'static str,
    },

    #[error("Schema/instance mismatch on {entity}.{field}: {message}")]
    ShapeMismatch {
        entity: String,
        field: String,
        message: String,
    },

    #[error("Schema for '{entity}' exceeds maximum nesting depth {max_depth}")]
    SchemaDepth { entity: String, max_depth: usize },

    // ============================================================================
    // Output Errors
    // ============================================================================
    #[error("Arrow error: {0}")]
    Arrow(#[from] arrow::error::ArrowError),

    #[error("Parquet error: {0}")]
    Parquet(#[from] parquet::errors::ParquetError),

    #[error("Output error: {message}")]
    Output { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn join_failures(failures: &[ValidationFailure]) -> String {
    failures
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an unknown dataset error
    pub fn unknown_dataset(label: impl Into<String>) -> Self {
        Self::UnknownDataset {
            label: label.into(),
        }
    }

    /// Create an HTTP status error
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    /// Create a decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Create a reader state error
    pub fn reader_state(operation: &'static str, state: &'static str) -> Self {
        Self::ReaderState { operation, state }
    }

    /// Create a shape mismatch error
    pub fn shape_mismatch(
        entity: impl Into<String>,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::ShapeMismatch {
            entity: entity.into(),
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create an output error
    pub fn output(message: impl Into<String>) -> Self {
        Self::Output {
            message: message.into(),
        }
    }

    /// Configuration problems detected before any fetch
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            Error::Config { .. }
                | Error::InvalidConfig { .. }
                | Error::UnknownDataset { .. }
                | Error::YamlParse(_)
                | Error::JsonParse(_)
        )
    }

    /// Failures of a single page fetch (transport, status or payload shape)
    pub fn is_transport_error(&self) -> bool {
        matches!(
            self,
            Error::Http(_) | Error::HttpStatus { .. } | Error::Decode { .. } | Error::InvalidUrl(_)
        )
    }

    /// Defects in engine wiring or the entity model
    pub fn is_contract_violation(&self) -> bool {
        matches!(
            self,
            Error::ReaderState { .. } | Error::ShapeMismatch { .. } | Error::SchemaDepth { .. }
        )
    }
}

/// Result type alias for the GitHub batch source
pub type Result<T> = std::result::Result<T, Error>;
