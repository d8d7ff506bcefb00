//! Settings form: editable state, status flags, and load/save orchestration.

mod controller;
mod session;
mod state;
mod status;

pub use controller::{SaveError, SettingsForm};
pub use session::FormSession;
pub use state::FormState;
pub use status::{FormStatus, SAVE_FAILED_MESSAGE};

#[cfg(test)]
pub(crate) mod testing;
