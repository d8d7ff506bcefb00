use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] siteadmin_core::Error),
    #[error(transparent)]
    Save(#[from] siteadmin_core::SaveError),
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
    #[error("Expected FIELD=VALUE, got '{0}'")]
    MalformedAssignment(String),
    #[error("Unknown settings field '{0}'. Run `siteadmin fields` to list them.")]
    UnknownField(String),
}
