//! Site configuration module.
//!
//! Handles loading `config.json`, the single per-site metadata record. The
//! config is read once at the start of a build and passed by reference to
//! every downstream stage — nothing mutates it after load.
//!
//! ## Config File Format
//!
//! ```json
//! {
//!   "domain": "example.com",
//!   "title": "Example Site",
//!   "description": "An example site"
//! }
//! ```
//!
//! `domain` and `title` are required; a config missing either fails at load
//! with a field-level serde error. `description` is optional (JSON-LD emits
//! an empty string for it). Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Site metadata loaded from `config.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// Domain the site is served from, without scheme (e.g. `example.com`).
    /// All absolute URLs — canonical links, JSON-LD, sitemap, robots — are
    /// derived from it.
    pub domain: String,
    /// Site title. Used as the homepage name and the publisher name in
    /// structured data.
    pub title: String,
    /// Site description for the homepage meta tag and WebSite schema.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl SiteConfig {
    /// The absolute URL root for the site, without a trailing slash:
    /// `https://{domain}`.
    pub fn base_url(&self) -> String {
        format!("https://{}", self.domain)
    }
}

/// Load `config.json` from the given path.
///
/// Fails on a missing or unreadable file (`Io`) and on malformed JSON or
/// missing required keys (`Json`).
pub fn load_config(path: &Path) -> Result<SiteConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: SiteConfig = serde_json::from_str(&content)?;
    Ok(config)
}

/// A starter `config.json` with every option present, for `gen-config`.
pub fn starter_config_json() -> String {
    let starter = SiteConfig {
        domain: "example.com".to_string(),
        title: "My Site".to_string(),
        description: Some("What this site is about".to_string()),
    };
    // A struct this small cannot fail to serialize
    let mut json = serde_json::to_string_pretty(&starter).unwrap_or_default();
    json.push('\n');
    json
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_config_parses() {
        let config: SiteConfig = serde_json::from_str(
            r#"{"domain": "example.com", "title": "Example", "description": "A site"}"#,
        )
        .unwrap();
        assert_eq!(config.domain, "example.com");
        assert_eq!(config.title, "Example");
        assert_eq!(config.description.as_deref(), Some("A site"));
    }

    #[test]
    fn description_is_optional() {
        let config: SiteConfig =
            serde_json::from_str(r#"{"domain": "example.com", "title": "Example"}"#).unwrap();
        assert_eq!(config.description, None);
    }

    #[test]
    fn missing_domain_is_rejected() {
        let result = serde_json::from_str::<SiteConfig>(r#"{"title": "Example"}"#);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("domain"));
    }

    #[test]
    fn missing_title_is_rejected() {
        let result = serde_json::from_str::<SiteConfig>(r#"{"domain": "example.com"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let result = serde_json::from_str::<SiteConfig>(
            r#"{"domain": "example.com", "title": "Example", "domian": "typo.com"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn base_url_has_no_trailing_slash() {
        let config: SiteConfig =
            serde_json::from_str(r#"{"domain": "example.com", "title": "Example"}"#).unwrap();
        assert_eq!(config.base_url(), "https://example.com");
    }

    #[test]
    fn load_config_missing_file_is_io_error() {
        let err = load_config(Path::new("/nonexistent/config.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn starter_config_round_trips() {
        let json = starter_config_json();
        let config: SiteConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config.domain, "example.com");
        assert!(config.description.is_some());
    }
}
