//! Data models for siteadmin

mod schema;
mod setting;

pub use schema::{find_field, ChoiceOption, FieldKind, FieldSpec, GENERAL_FIELDS, GENERAL_GROUP};
pub use setting::SettingRecord;
