//! Source configuration
//!
//! The raw [`SourceConfig`] is deserialized from JSON or YAML using the
//! plugin's camelCase property keys. [`SourceConfig::validate`] reports every
//! blank required property at once; [`SourceConfig::validated`] turns a clean
//! config into an immutable [`ValidatedConfig`] shared by the engine.

use crate::error::{Error, Result};
use crate::model::EntityKind;
use crate::types::{OptionStringExt, DEFAULT_API_BASE};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use url::Url;

// ============================================================================
// Property Keys
// ============================================================================

pub const AUTHORIZATION_TOKEN: &str = "authorizationToken";
pub const REPOSITORY_OWNER: &str = "repoOwner";
pub const REPOSITORY_NAME: &str = "repoName";
pub const DATASET_NAME: &str = "datasetName";
pub const HOSTNAME: &str = "hostname";
pub const REFERENCE_NAME: &str = "referenceName";

/// Description of one configuration property
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigProperty {
    pub key: &'static str,
    pub display_name: &'static str,
    pub description: &'static str,
    pub required: bool,
    pub secret: bool,
    pub macro_enabled: bool,
}

/// Every property the source accepts
pub const CONFIG_PROPERTIES: &[ConfigProperty] = &[
    ConfigProperty {
        key: REFERENCE_NAME,
        display_name: "Reference name",
        description: "Name used to identify this source for lineage",
        required: false,
        secret: false,
        macro_enabled: false,
    },
    ConfigProperty {
        key: AUTHORIZATION_TOKEN,
        display_name: "Authorization token",
        description: "Authorization token to access GitHub API",
        required: true,
        secret: true,
        macro_enabled: true,
    },
    ConfigProperty {
        key: REPOSITORY_OWNER,
        display_name: "Repository owner name",
        description: "GitHub repository owner",
        required: true,
        secret: false,
        macro_enabled: true,
    },
    ConfigProperty {
        key: REPOSITORY_NAME,
        display_name: "Repository name",
        description: "GitHub repository name",
        required: true,
        secret: false,
        macro_enabled: true,
    },
    ConfigProperty {
        key: DATASET_NAME,
        display_name: "Dataset name",
        description: "Dataset name that you would like to retrieve",
        required: true,
        secret: false,
        macro_enabled: true,
    },
    ConfigProperty {
        key: HOSTNAME,
        display_name: "Hostname",
        description: "GitHub API hostname",
        required: false,
        secret: false,
        macro_enabled: true,
    },
];

/// Look up a property description by key
pub fn property(key: &str) -> Option<&'static ConfigProperty> {
    CONFIG_PROPERTIES.iter().find(|p| p.key == key)
}

fn display_name(key: &'static str) -> &'static str {
    property(key).map_or(key, |p| p.display_name)
}

/// Matches `${...}` macro references
static MACRO_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\$\{[^}]*\}").unwrap());

/// Whether a value holds a runtime macro that is substituted later
pub fn contains_macro(value: Option<&str>) -> bool {
    value.is_some_and(|v| MACRO_PATTERN.is_match(v))
}

// ============================================================================
// Validation Failures
// ============================================================================

/// One configuration problem, tagged with the offending property key
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationFailure {
    pub message: String,
    pub property: &'static str,
}

impl ValidationFailure {
    pub fn new(message: impl Into<String>, property: &'static str) -> Self {
        Self {
            message: message.into(),
            property,
        }
    }
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.message, self.property)
    }
}

/// Accumulates validation failures so all of them surface together
#[derive(Debug, Default)]
pub struct FailureCollector {
    failures: Vec<ValidationFailure>,
}

impl FailureCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_failure(&mut self, message: impl Into<String>, property: &'static str) {
        self.failures.push(ValidationFailure::new(message, property));
    }

    pub fn failures(&self) -> &[ValidationFailure] {
        &self.failures
    }

    pub fn len(&self) -> usize {
        self.failures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.failures.is_empty()
    }

    /// Fail with every collected problem, or succeed when none were found
    pub fn into_result(self) -> Result<()> {
        if self.failures.is_empty() {
            Ok(())
        } else {
            Err(Error::InvalidConfig {
                failures: self.failures,
            })
        }
    }
}

// ============================================================================
// Raw Config
// ============================================================================

/// Configuration as supplied by the user
#[derive(Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceConfig {
    #[serde(default)]
    pub reference_name: Option<String>,

    #[serde(default)]
    pub authorization_token: Option<String>,

    #[serde(default)]
    pub repo_owner: Option<String>,

    #[serde(default)]
    pub repo_name: Option<String>,

    #[serde(default)]
    pub dataset_name: Option<String>,

    #[serde(default)]
    pub hostname: Option<String>,
}

impl fmt::Debug for SourceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SourceConfig")
            .field("reference_name", &self.reference_name)
            .field(
                "authorization_token",
                &self.authorization_token.as_ref().map(|_| "[REDACTED]"),
            )
            .field("repo_owner", &self.repo_owner)
            .field("repo_name", &self.repo_name)
            .field("dataset_name", &self.dataset_name)
            .field("hostname", &self.hostname)
            .finish()
    }
}

impl SourceConfig {
    /// Load from a `.json`, `.yaml` or `.yml` file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            Error::config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json_str(&content),
            _ => Self::from_yaml_str(&content),
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Record a failure for each blank required property
    ///
    /// Properties holding an unresolved macro are skipped. A non-blank
    /// hostname that is not a usable API base is reported as well.
    pub fn validate(&self, collector: &mut FailureCollector) {
        let required = [
            (AUTHORIZATION_TOKEN, &self.authorization_token),
            (REPOSITORY_OWNER, &self.repo_owner),
            (REPOSITORY_NAME, &self.repo_name),
            (DATASET_NAME, &self.dataset_name),
        ];

        for (key, value) in required {
            let value = value.as_deref();
            if !contains_macro(value) && is_blank(value) {
                collector.add_failure(format!("{} must be specified.", display_name(key)), key);
            }
        }

        let hostname = self.hostname.as_deref();
        if !contains_macro(hostname) && !is_blank(hostname) {
            if let Err(message) = parse_api_base(hostname.unwrap_or_default()) {
                collector.add_failure(message, HOSTNAME);
            }
        }
    }

    /// Map the dataset label to its entity kind
    pub fn resolve_kind(&self) -> Result<EntityKind> {
        EntityKind::from_label(self.dataset_name.as_deref().unwrap_or_default())
    }

    /// API root to send requests to
    pub fn api_base(&self) -> Result<Url> {
        match self.hostname.clone().none_if_blank() {
            Some(host) => parse_api_base(&host).map_err(Error::config),
            None => Ok(Url::parse(DEFAULT_API_BASE)?),
        }
    }

    /// Validate and freeze the configuration
    pub fn validated(&self) -> Result<ValidatedConfig> {
        let mut collector = FailureCollector::new();
        self.validate(&mut collector);
        collector.into_result()?;

        let fields = [
            (AUTHORIZATION_TOKEN, &self.authorization_token),
            (REPOSITORY_OWNER, &self.repo_owner),
            (REPOSITORY_NAME, &self.repo_name),
            (DATASET_NAME, &self.dataset_name),
            (HOSTNAME, &self.hostname),
        ];
        if let Some((key, _)) = fields.iter().find(|(_, v)| contains_macro(v.as_deref())) {
            return Err(Error::config(format!(
                "Property '{key}' still contains an unresolved macro"
            )));
        }

        let kind = self.resolve_kind()?;
        let api_base = self.api_base()?;

        Ok(ValidatedConfig {
            token: self.authorization_token.clone().unwrap_or_default(),
            owner: self.repo_owner.clone().unwrap_or_default(),
            repo: self.repo_name.clone().unwrap_or_default(),
            kind,
            api_base,
            reference_name: self.reference_name.clone().none_if_blank(),
        })
    }
}

fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}

/// Parse a hostname override into an API base URL
///
/// Bare host names get an `https://` scheme; a path such as `/api/v3` is kept.
fn parse_api_base(hostname: &str) -> std::result::Result<Url, String> {
    let hostname = hostname.trim();
    let candidate = if hostname.contains("://") {
        hostname.to_string()
    } else {
        format!("https://{hostname}")
    };

    let url = Url::parse(&candidate)
        .map_err(|e| format!("Hostname '{hostname}' is not a valid URL: {e}"))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(format!(
            "Hostname '{hostname}' must use http or https, not '{}'",
            url.scheme()
        ));
    }
    if url.host_str().map_or(true, str::is_empty) {
        return Err(format!("Hostname '{hostname}' has no host"));
    }
    Ok(url)
}

// ============================================================================
// Validated Config
// ============================================================================

/// Immutable configuration the engine runs with
#[derive(Clone)]
pub struct ValidatedConfig {
    pub token: String,
    pub owner: String,
    pub repo: String,
    pub kind: EntityKind,
    pub api_base: Url,
    pub reference_name: Option<String>,
}

impl ValidatedConfig {
    /// Build directly, against the public GitHub API
    pub fn new(
        token: impl Into<String>,
        owner: impl Into<String>,
        repo: impl Into<String>,
        kind: EntityKind,
    ) -> Result<Self> {
        Ok(Self {
            token: token.into(),
            owner: owner.into(),
            repo: repo.into(),
            kind,
            api_base: Url::parse(DEFAULT_API_BASE)?,
            reference_name: None,
        })
    }

    #[must_use]
    pub fn with_api_base(mut self, api_base: Url) -> Self {
        self.api_base = api_base;
        self
    }

    /// Dataset label of the configured kind
    pub fn label(&self) -> &'static str {
        self.kind.label()
    }
}

impl fmt::Debug for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatedConfig")
            .field("token", &"[REDACTED]")
            .field("owner", &self.owner)
            .field("repo", &self.repo)
            .field("kind", &self.kind)
            .field("api_base", &self.api_base.as_str())
            .field("reference_name", &self.reference_name)
            .finish()
    }
}
