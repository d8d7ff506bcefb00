//! Main application component

use dioxus::prelude::*;

use crate::components::{GeneralSettingsForm, STYLES};
use crate::services::build_settings_form;
use crate::state::AppState;

/// Root application component
#[component]
pub fn App() -> Element {
    let state = use_context_provider(|| AppState::from_build(build_settings_form()));

    rsx! {
        style { {STYLES} }

        div {
            class: "app-container",

            h1 {
                class: "settings-heading",
                "General Settings"
            }

            if let Some(error) = state.init_error {
                div {
                    class: "settings-error",
                    "{error}"
                }
            } else {
                GeneralSettingsForm {}
            }
        }
    }
}
