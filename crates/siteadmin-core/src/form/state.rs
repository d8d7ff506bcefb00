//! Editable form state

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::models::{FieldSpec, SettingRecord, GENERAL_FIELDS};

/// Field name to value mapping over a fixed schema.
///
/// Every schema field always has a value; updates produce a new state and
/// leave the original untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    fields: &'static [FieldSpec],
    values: Vec<String>,
}

impl Default for FormState {
    fn default() -> Self {
        Self::general()
    }
}

impl FormState {
    /// State holding each field's schema default.
    pub fn from_schema(fields: &'static [FieldSpec]) -> Self {
        Self {
            fields,
            values: fields.iter().map(|field| field.default.to_string()).collect(),
        }
    }

    /// Defaults of the `general` settings group.
    pub fn general() -> Self {
        Self::from_schema(GENERAL_FIELDS)
    }

    pub const fn fields(&self) -> &'static [FieldSpec] {
        self.fields
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.position(name).map(|index| self.values[index].as_str())
    }

    /// Returns a copy with `name` set to `value`.
    ///
    /// Names outside the schema leave the state unchanged.
    #[must_use]
    pub fn with_value(&self, name: &str, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        match self.position(name) {
            Some(index) => next.values[index] = value.into(),
            None => tracing::warn!("Ignoring edit of unknown settings field '{}'", name),
        }
        next
    }

    /// Returns a copy with every recognized record's value applied.
    ///
    /// Fields without a record keep their current value.
    #[must_use]
    pub fn overlay<I>(&self, records: I) -> Self
    where
        I: IntoIterator<Item = SettingRecord>,
    {
        let mut next = self.clone();
        for record in records {
            if let Some(index) = self.position(&record.key) {
                next.values[index] = record.value;
            } else {
                tracing::debug!("Skipping unrecognized setting '{}'", record.key);
            }
        }
        next
    }

    /// Fields paired with their current values, in schema order.
    pub fn entries(&self) -> impl Iterator<Item = (&'static FieldSpec, &str)> + '_ {
        self.fields
            .iter()
            .zip(self.values.iter().map(String::as_str))
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|field| field.name == name)
    }
}

impl Serialize for FormState {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (field, value) in self.entries() {
            map.serialize_entry(field.name, value)?;
        }
        map.end()
    }
}
