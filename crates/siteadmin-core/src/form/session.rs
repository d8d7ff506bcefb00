//! Headless form session: the settings form without a renderer.

use crate::api::SettingsApi;
use crate::auth::TokenSource;
use crate::error::Result;

use super::controller::{SaveError, SettingsForm};
use super::state::FormState;
use super::status::FormStatus;

/// Form state plus status flags, driven through mount, edits and submits.
#[derive(Debug)]
pub struct FormSession<A, T> {
    form: SettingsForm<A, T>,
    state: FormState,
    status: FormStatus,
}

impl<A: SettingsApi, T: TokenSource> FormSession<A, T> {
    pub fn new(form: SettingsForm<A, T>) -> Self {
        let state = form.initial_state();
        Self {
            form,
            state,
            status: FormStatus::Idle,
        }
    }

    /// Runs the initial load; only the first call has any effect.
    pub async fn mount(&mut self) {
        if !self.begin_mount() {
            return;
        }
        self.state = self.form.load().await;
        self.status = self.status.on_load_settled();
    }

    /// Like [`Self::mount`], but a failed load is returned instead of hidden.
    ///
    /// On failure the state keeps its defaults.
    pub async fn mount_strict(&mut self) -> Result<()> {
        if !self.begin_mount() {
            return Ok(());
        }
        let loaded = self.form.try_load().await;
        self.status = self.status.on_load_settled();
        self.state = loaded?;
        Ok(())
    }

    fn begin_mount(&mut self) -> bool {
        if self.status != FormStatus::Idle {
            return false;
        }
        self.status = self.status.on_mount();
        true
    }

    /// Replaces a single field's value.
    pub fn edit(&mut self, name: &str, value: impl Into<String>) {
        self.state = self.state.with_value(name, value);
    }

    /// Saves a snapshot of the current state, one write per field.
    pub async fn submit(&mut self) -> std::result::Result<(), SaveError> {
        self.status = self.status.on_submit();
        let snapshot = self.state.clone();
        let outcome = self.form.save(&snapshot).await;
        self.status = self.status.on_save_settled(outcome.is_ok());
        outcome
    }

    pub const fn state(&self) -> &FormState {
        &self.state
    }

    pub const fn status(&self) -> FormStatus {
        self.status
    }

    pub const fn loading(&self) -> bool {
        self.status.loading()
    }

    pub const fn saving(&self) -> bool {
        self.status.saving()
    }

    pub const fn error(&self) -> Option<&'static str> {
        self.status.error()
    }

    pub const fn success(&self) -> bool {
        self.status.success()
    }

    pub const fn shows_placeholder(&self) -> bool {
        self.status.shows_placeholder()
    }

    pub const fn submit_disabled(&self) -> bool {
        self.status.submit_disabled()
    }

    pub const fn submit_label(&self) -> &'static str {
        self.status.submit_label()
    }
}
