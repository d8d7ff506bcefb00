use std::env;

use siteadmin_core::api::SettingsClient;
use siteadmin_core::auth::{KeyringTokenStore, StaticToken, TokenSource};
use siteadmin_core::config::{AdminConfig, API_BASE_URL_ENV};
use siteadmin_core::models::find_field;
use siteadmin_core::{FieldKind, FieldSpec, FormSession, FormState, SettingsForm, GENERAL_FIELDS};

use crate::error::CliError;

/// Token from `--token` when given, otherwise the keychain entry.
#[derive(Debug, Clone)]
pub enum CliTokenSource {
    Keyring(KeyringTokenStore),
    Explicit(StaticToken),
}

impl CliTokenSource {
    pub fn resolve(explicit: Option<String>) -> Self {
        match explicit.filter(|token| !token.trim().is_empty()) {
            Some(token) => Self::Explicit(StaticToken::new(token.trim())),
            None => Self::Keyring(KeyringTokenStore::default()),
        }
    }
}

impl TokenSource for CliTokenSource {
    fn token(&self) -> siteadmin_core::Result<Option<String>> {
        match self {
            Self::Keyring(store) => store.token(),
            Self::Explicit(token) => token.token(),
        }
    }
}

pub type CliSession = FormSession<SettingsClient, CliTokenSource>;

/// Builds an unmounted general settings session.
pub fn open_session(
    api_base_url: Option<String>,
    token: Option<String>,
) -> Result<CliSession, CliError> {
    let config = AdminConfig::resolve(api_base_url, env::var(API_BASE_URL_ENV).ok())?;
    tracing::debug!("Using settings API at {}", config.api_base_url);
    let client = SettingsClient::new(config.api_base_url)?;
    Ok(FormSession::new(SettingsForm::general(
        client,
        CliTokenSource::resolve(token),
    )))
}

/// Parses `FIELD=VALUE`, accepting only fields of the general schema.
///
/// The value may be empty and may itself contain `=`.
pub fn parse_assignment(raw: &str) -> Result<(&'static str, String), CliError> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| CliError::MalformedAssignment(raw.to_string()))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(CliError::MalformedAssignment(raw.to_string()));
    }
    let field =
        find_field(GENERAL_FIELDS, name).ok_or_else(|| CliError::UnknownField(name.to_string()))?;
    Ok((field.name, value.to_string()))
}

/// `name: value` lines, padded to the widest field name.
pub fn format_settings_lines(state: &FormState) -> Vec<String> {
    let width = state
        .fields()
        .iter()
        .map(|field| field.name.len())
        .max()
        .unwrap_or(0);
    state
        .entries()
        .map(|(field, value)| format!("{:<width$}  {}", field.name, value))
        .collect()
}

pub fn format_field_lines(fields: &[FieldSpec]) -> Vec<String> {
    fields
        .iter()
        .map(|field| {
            let kind = match field.kind {
                FieldKind::Text => field.kind.as_str().to_string(),
                FieldKind::Choice(_) => {
                    let values: Vec<_> = field
                        .kind
                        .options()
                        .iter()
                        .map(|option| option.value)
                        .collect();
                    format!("{}{{{}}}", field.kind.as_str(), values.join(","))
                }
            };
            format!(
                "{}\t{}\t{}\tdefault={:?}",
                field.name, field.label, kind, field.default
            )
        })
        .collect()
}
