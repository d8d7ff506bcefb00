//! Load and save orchestration for the settings form.

use futures::future::join_all;
use thiserror::Error;

use crate::api::SettingsApi;
use crate::auth::TokenSource;
use crate::error::Result;
use crate::models::{FieldSpec, SettingRecord, GENERAL_FIELDS, GENERAL_GROUP};

use super::state::FormState;
use super::status::SAVE_FAILED_MESSAGE;

/// A save batch in which at least one write failed.
///
/// Does not record which writes failed; writes that succeeded
/// stay applied on the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{}", SAVE_FAILED_MESSAGE)]
pub struct SaveError {
    pub failed: usize,
    pub attempted: usize,
}

/// Drives a fixed-schema settings group against a key/value backend.
#[derive(Debug, Clone)]
pub struct SettingsForm<A, T> {
    api: A,
    tokens: T,
    group: &'static str,
    fields: &'static [FieldSpec],
}

impl<A: SettingsApi, T: TokenSource> SettingsForm<A, T> {
    /// Form for the `general` settings group.
    pub const fn general(api: A, tokens: T) -> Self {
        Self::new(api, tokens, GENERAL_GROUP, GENERAL_FIELDS)
    }

    pub const fn new(api: A, tokens: T, group: &'static str, fields: &'static [FieldSpec]) -> Self {
        Self {
            api,
            tokens,
            group,
            fields,
        }
    }

    pub const fn group(&self) -> &'static str {
        self.group
    }

    /// Form state before anything has been loaded.
    pub fn initial_state(&self) -> FormState {
        FormState::from_schema(self.fields)
    }

    /// Fetches the group and overlays it onto the defaults.
    ///
    /// Never fails: any fetch, status or parse error yields the defaults.
    pub async fn load(&self) -> FormState {
        match self.try_load().await {
            Ok(state) => state,
            Err(error) => {
                // Load failures are not surfaced; the form keeps its defaults.
                tracing::debug!("Ignoring '{}' settings load failure: {}", self.group, error);
                self.initial_state()
            }
        }
    }

    /// Fetches the group and overlays it onto the defaults, reporting failures.
    pub async fn try_load(&self) -> Result<FormState> {
        let records = self.fetch_records().await?;
        tracing::info!("Loaded {} '{}' settings", records.len(), self.group);
        Ok(self.initial_state().overlay(records))
    }

    /// Writes every field of `form`, one concurrent request per field.
    ///
    /// Waits for all writes to settle. Fails as a whole if any single write
    /// fails.
    pub async fn save(&self, form: &FormState) -> std::result::Result<(), SaveError> {
        let writes = form
            .entries()
            .map(|(field, value)| self.write_field(field.name, value.to_string()));
        let results = join_all(writes).await;

        let attempted = results.len();
        let failed = results.iter().filter(|result| result.is_err()).count();
        if failed == 0 {
            tracing::info!("Saved {} '{}' settings", attempted, self.group);
            Ok(())
        } else {
            tracing::warn!(
                "{} of {} '{}' settings writes failed",
                failed,
                attempted,
                self.group
            );
            Err(SaveError { failed, attempted })
        }
    }

    async fn fetch_records(&self) -> Result<Vec<SettingRecord>> {
        let token = self.bearer_token()?;
        self.api.fetch_group(&token, self.group).await
    }

    async fn write_field(&self, key: &'static str, value: String) -> Result<()> {
        let token = self.bearer_token()?;
        let record = SettingRecord::new(self.group, key, value);
        self.api
            .upsert(&token, &record)
            .await
            .inspect_err(|error| tracing::warn!("Failed to save setting '{}': {}", key, error))
    }

    /// Reads the token fresh; a missing token is sent as an empty bearer.
    fn bearer_token(&self) -> Result<String> {
        Ok(self.tokens.token()?.unwrap_or_default())
    }
}
