//! Application services
//!
//! Wiring between desktop configuration and the core settings form.

mod settings;

pub use settings::{build_settings_form, DesktopSettingsForm};
