//! Settings form backed by the HTTP settings API and the OS keyring token.

use siteadmin_core::api::SettingsClient;
use siteadmin_core::auth::KeyringTokenStore;
use siteadmin_core::config::AdminConfig;
use siteadmin_core::SettingsForm;

pub type DesktopSettingsForm = SettingsForm<SettingsClient, KeyringTokenStore>;

/// Builds the general settings form from environment configuration.
pub fn build_settings_form() -> Result<DesktopSettingsForm, String> {
    let config = AdminConfig::from_env().map_err(|error| error.to_string())?;
    tracing::info!("Using settings API at {}", config.api_base_url);
    let client = SettingsClient::new(config.api_base_url)
        .map_err(|error| format!("Failed to construct HTTP client: {error}"))?;
    Ok(SettingsForm::general(client, KeyringTokenStore::default()))
}
