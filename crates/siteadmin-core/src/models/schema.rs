//! Static field schema for the settings form
//!
//! The ordered field list drives both form state initialization and
//! rendering; adding a field is a single entry in [`GENERAL_FIELDS`].

/// Settings group edited by the general settings form
pub const GENERAL_GROUP: &str = "general";

/// A selectable value of a choice field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChoiceOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// Input kind of a form field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text input
    Text,
    /// Selector over a fixed set of values
    Choice(&'static [ChoiceOption]),
}

impl FieldKind {
    /// Short name used in listings.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Choice(_) => "choice",
        }
    }

    /// Options offered by a choice field; empty for text fields.
    pub const fn options(self) -> &'static [ChoiceOption] {
        match self {
            Self::Text => &[],
            Self::Choice(options) => options,
        }
    }
}

/// One named field of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Setting key and form field name
    pub name: &'static str,
    /// Human readable label
    pub label: &'static str,
    pub kind: FieldKind,
    /// Value used until the backend supplies one
    pub default: &'static str,
}

impl FieldSpec {
    const fn text(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::Text,
            default: "",
        }
    }
}

const HOMEPAGE_TEMPLATES: &[ChoiceOption] = &[
    ChoiceOption {
        value: "all",
        label: "All",
    },
    ChoiceOption {
        value: "category",
        label: "Category",
    },
];

/// Fields of the `general` settings group, in display order.
pub const GENERAL_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("site_name", "Site Name"),
    FieldSpec::text("site_title", "Site Title"),
    FieldSpec::text("phone", "Phone"),
    FieldSpec::text("whatsapp", "WhatsApp"),
    FieldSpec::text("email", "Email"),
    FieldSpec::text("address", "Address"),
    FieldSpec {
        name: "homepage_template",
        label: "Homepage Template",
        kind: FieldKind::Choice(HOMEPAGE_TEMPLATES),
        default: "all",
    },
    FieldSpec::text("invoice_string", "Invoice String"),
];

/// Looks up a field by name.
pub fn find_field(fields: &'static [FieldSpec], name: &str) -> Option<&'static FieldSpec> {
    fields.iter().find(|field| field.name == name)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn general_fields_are_in_display_order() {
        let names: Vec<_> = GENERAL_FIELDS.iter().map(|field| field.name).collect();
        assert_eq!(
            names,
            vec![
                "site_name",
                "site_title",
                "phone",
                "whatsapp",
                "email",
                "address",
                "homepage_template",
                "invoice_string",
            ]
        );
    }

    #[test]
    fn field_names_are_unique() {
        let names: HashSet<_> = GENERAL_FIELDS.iter().map(|field| field.name).collect();
        assert_eq!(names.len(), GENERAL_FIELDS.len());
    }

    #[test]
    fn homepage_template_defaults_to_all() {
        let field = find_field(GENERAL_FIELDS, "homepage_template").unwrap();
        let values: Vec<_> = field.kind.options().iter().map(|option| option.value).collect();
        assert_eq!(values, vec!["all", "category"]);
        assert_eq!(field.default, "all");
    }

    #[test]
    fn text_fields_default_to_empty() {
        for field in GENERAL_FIELDS.iter().filter(|field| field.kind == FieldKind::Text) {
            assert_eq!(field.default, "", "{} should default to empty", field.name);
            assert!(field.kind.options().is_empty());
        }
    }
}
