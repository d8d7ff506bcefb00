//! Settings record exchanged with the settings API

use serde::{Deserialize, Serialize};

/// A single `{group, key, value}` setting.
///
/// The read endpoint may omit `group`; it is ignored on read and always
/// present on writes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingRecord {
    /// Partition name, e.g. `general`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    /// Identifier, unique within its group
    pub key: String,
    /// Unconstrained string value
    pub value: String,
}

impl SettingRecord {
    /// Builds a record addressed to `group`, as sent by the upsert endpoint.
    pub fn new(group: impl Into<String>, key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            group: Some(group.into()),
            key: key.into(),
            value: value.into(),
        }
    }
}
