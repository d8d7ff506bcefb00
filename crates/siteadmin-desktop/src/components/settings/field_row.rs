use dioxus::prelude::*;

use siteadmin_core::{FieldKind, FieldSpec};

/// One labelled input, rendered from the field's schema entry.
#[component]
pub(super) fn FieldRow(
    field: &'static FieldSpec,
    #[props(into)] value: String,
    on_change: EventHandler<(&'static str, String)>,
) -> Element {
    let name = field.name;

    rsx! {
        div {
            class: "settings-row",

            label {
                class: "settings-row-label",
                r#for: "{name}",
                "{field.label}"
            }
            div {
                class: "settings-row-control",

                match field.kind {
                    FieldKind::Text => rsx! {
                        input {
                            id: "{name}",
                            name: "{name}",
                            r#type: "text",
                            value: "{value}",
                            oninput: move |event: FormEvent| on_change.call((name, event.value())),
                        }
                    },
                    FieldKind::Choice(options) => rsx! {
                        select {
                            id: "{name}",
                            name: "{name}",
                            value: "{value}",
                            onchange: move |event: FormEvent| on_change.call((name, event.value())),
                            for choice in options {
                                option {
                                    key: "{choice.value}",
                                    value: "{choice.value}",
                                    selected: choice.value == value,
                                    "{choice.label}"
                                }
                            }
                        }
                    },
                }
            }
        }
    }
}
