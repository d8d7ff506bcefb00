//! Load/save status of the settings form

/// Message shown when any write of a save batch fails.
pub const SAVE_FAILED_MESSAGE: &str = "Save failed";

/// Where the form is in its load/save lifecycle.
///
/// The UI flags (`loading`, `saving`, `error`, `success`) are all derived
/// from this single value, so `success` and `error` can never both be set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormStatus {
    /// Not mounted yet
    #[default]
    Idle,
    /// Initial fetch in flight
    Loading,
    /// Loaded (or load failed silently); nothing submitted yet
    Ready,
    /// Save batch in flight
    Saving,
    SaveSucceeded,
    SaveFailed,
}

impl FormStatus {
    /// Mount starts the initial load.
    #[must_use]
    pub const fn on_mount(self) -> Self {
        match self {
            Self::Idle => Self::Loading,
            other => other,
        }
    }

    /// The initial load settled, whether it succeeded or not.
    #[must_use]
    pub const fn on_load_settled(self) -> Self {
        match self {
            Self::Loading => Self::Ready,
            other => other,
        }
    }

    /// A submit resets the previous outcome and starts a save.
    ///
    /// There is no guard against submitting while already saving.
    #[must_use]
    #[allow(clippy::unused_self)]
    pub const fn on_submit(self) -> Self {
        Self::Saving
    }

    /// The save batch settled.
    #[must_use]
    #[allow(clippy::unused_self)]
    pub const fn on_save_settled(self, all_succeeded: bool) -> Self {
        if all_succeeded {
            Self::SaveSucceeded
        } else {
            Self::SaveFailed
        }
    }

    pub const fn loading(self) -> bool {
        matches!(self, Self::Loading)
    }

    pub const fn saving(self) -> bool {
        matches!(self, Self::Saving)
    }

    pub const fn success(self) -> bool {
        matches!(self, Self::SaveSucceeded)
    }

    pub const fn error(self) -> Option<&'static str> {
        match self {
            Self::SaveFailed => Some(SAVE_FAILED_MESSAGE),
            _ => None,
        }
    }

    /// Only the loading state replaces the form with a placeholder.
    pub const fn shows_placeholder(self) -> bool {
        self.loading()
    }

    pub const fn submit_disabled(self) -> bool {
        self.saving()
    }

    pub const fn submit_label(self) -> &'static str {
        if self.saving() {
            "Saving..."
        } else {
            "Save"
        }
    }
}
