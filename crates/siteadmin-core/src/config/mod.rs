//! Runtime configuration for siteadmin clients.
//!
//! The settings API base URL is resolved from an explicit override (CLI flag),
//! then the `SITEADMIN_API_BASE_URL` environment variable, then a local
//! development default.

use crate::error::{Error, Result};

/// Environment variable holding the settings API base URL.
pub const API_BASE_URL_ENV: &str = "SITEADMIN_API_BASE_URL";

/// Base URL used when nothing else is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminConfig {
    /// Origin serving `/api/settings`, without a trailing slash
    pub api_base_url: String,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }
}

impl AdminConfig {
    /// Resolves configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::resolve(None, std::env::var(API_BASE_URL_ENV).ok())
    }

    /// Resolves configuration, preferring `explicit` over `from_env`.
    ///
    /// Blank values count as unset.
    pub fn resolve(explicit: Option<String>, from_env: Option<String>) -> Result<Self> {
        let raw = non_blank(explicit)
            .or_else(|| non_blank(from_env))
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
        Ok(Self {
            api_base_url: normalize_base_url(&raw)?,
        })
    }
}

/// Trims a base URL, strips trailing slashes and requires an HTTP scheme.
pub fn normalize_base_url(raw: &str) -> Result<String> {
    let base = raw.trim().trim_end_matches('/');
    if base.is_empty() {
        return Err(Error::InvalidConfiguration(
            "API base URL must not be empty".to_string(),
        ));
    }
    if !(base.starts_with("https://") || base.starts_with("http://")) {
        return Err(Error::InvalidConfiguration(format!(
            "API base URL must include http:// or https:// (got {base})"
        )));
    }
    Ok(base.to_string())
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.trim().is_empty())
}
