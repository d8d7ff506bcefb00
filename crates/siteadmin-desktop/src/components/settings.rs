//! General settings form component

mod field_row;

use dioxus::prelude::*;

use siteadmin_core::{FormState, FormStatus};

use crate::state::AppState;
use field_row::FieldRow;

/// Schema-driven editor for the `general` settings group.
#[component]
pub fn GeneralSettingsForm() -> Element {
    let state = use_context::<AppState>();
    let mut form = use_signal(FormState::general);
    // Mounting starts the initial load
    let mut status = use_signal(|| FormStatus::Idle.on_mount());

    // Initial load (only once)
    let load_service = state.settings_form.clone();
    use_hook(move || {
        let Some(service) = load_service else {
            return;
        };
        spawn(async move {
            let loaded = service.load().await;
            form.set(loaded);
            let settled = status.peek().on_load_settled();
            status.set(settled);
        });
    });

    let save_service = state.settings_form.clone();
    let submit = move |event: FormEvent| {
        event.prevent_default();
        let Some(service) = save_service.clone() else {
            return;
        };
        let snapshot = form();
        let saving = status.peek().on_submit();
        status.set(saving);
        spawn(async move {
            let outcome = service.save(&snapshot).await;
            let settled = status.peek().on_save_settled(outcome.is_ok());
            status.set(settled);
        });
    };

    let current_status = status();
    if current_status.shows_placeholder() {
        return rsx! {
            div {
                class: "settings-loading",
                "Loading..."
            }
        };
    }

    let current_form = form();

    rsx! {
        form {
            class: "settings-form",
            onsubmit: submit,

            for (field, value) in current_form.entries() {
                FieldRow {
                    key: "{field.name}",
                    field,
                    value,
                    on_change: move |(name, value): (&'static str, String)| {
                        let next = form.peek().with_value(name, value);
                        form.set(next);
                    },
                }
            }

            div {
                class: "settings-actions",

                button {
                    r#type: "submit",
                    disabled: current_status.submit_disabled(),
                    "{current_status.submit_label()}"
                }

                if let Some(message) = current_status.error() {
                    div {
                        class: "settings-error",
                        "{message}"
                    }
                }

                if current_status.success() {
                    div {
                        class: "settings-success",
                        "Settings saved."
                    }
                }
            }
        }
    }
}
