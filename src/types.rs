//! Common types used throughout the crate
//!
//! Shared type aliases and small utility traits used across modules.

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// Default API root used when no hostname override is configured
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Page size requested per cursor, also the progress denominator
pub const DEFAULT_PAGE_SIZE: u32 = 100;

// ============================================================================
// Utilities
// ============================================================================

/// Extension trait for Option<String> to handle blank strings
pub trait OptionStringExt {
    /// Returns None if the string is empty or whitespace only
    fn none_if_blank(self) -> Option<String>;
}

impl OptionStringExt for Option<String> {
    fn none_if_blank(self) -> Option<String> {
        self.filter(|s| !s.trim().is_empty())
    }
}
