//! siteadmin-core - Core library for siteadmin
//!
//! This crate contains the settings schema, the editable form state, and the
//! HTTP client shared by the siteadmin interfaces (desktop, CLI).

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod form;
pub mod models;

pub use error::{Error, Result};
pub use form::{FormSession, FormState, FormStatus, SaveError, SettingsForm};
pub use models::{FieldKind, FieldSpec, SettingRecord, GENERAL_FIELDS, GENERAL_GROUP};
