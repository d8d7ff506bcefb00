//! UI Components

mod settings;

pub use settings::GeneralSettingsForm;

/// Stylesheet injected by the root component.
pub const STYLES: &str = r"
.app-container { max-width: 640px; margin: 0 auto; padding: 24px; font-family: system-ui, -apple-system, sans-serif; }
.settings-heading { font-size: 20px; margin: 0 0 16px; }
.settings-loading { padding: 24px 0; opacity: 0.7; }
.settings-row { display: flex; align-items: center; gap: 16px; padding: 8px 0; }
.settings-row-label { width: 180px; font-weight: 600; font-size: 13px; }
.settings-row-control { flex: 1; }
.settings-row-control input, .settings-row-control select { width: 100%; padding: 6px 8px; font-size: 13px; }
.settings-actions { display: flex; align-items: center; gap: 12px; margin-top: 16px; }
.settings-error { color: #b91c1c; font-size: 13px; }
.settings-success { color: #15803d; font-size: 13px; }
";
