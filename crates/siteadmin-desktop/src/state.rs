//! Application state management
//!
//! Global state accessible via Dioxus context providers.

use std::rc::Rc;

use crate::services::DesktopSettingsForm;

/// Global application state
#[derive(Clone)]
pub struct AppState {
    /// Settings form service, absent when configuration failed
    pub settings_form: Option<Rc<DesktopSettingsForm>>,
    /// Configuration error for UI display
    pub init_error: Option<String>,
}

impl AppState {
    pub fn from_build(result: Result<DesktopSettingsForm, String>) -> Self {
        match result {
            Ok(form) => Self {
                settings_form: Some(Rc::new(form)),
                init_error: None,
            },
            Err(error) => {
                tracing::error!("Failed to initialize settings form: {}", error);
                Self {
                    settings_form: None,
                    init_error: Some(error),
                }
            }
        }
    }
}
