use siteadmin_core::api::SettingsApi;
use siteadmin_core::auth::TokenSource;
use siteadmin_core::FormSession;

use crate::commands::common::{open_session, parse_assignment};
use crate::error::CliError;

pub async fn run_save(
    assignments: &[String],
    api_base_url: Option<String>,
    token: Option<String>,
) -> Result<(), CliError> {
    // Reject bad input before any request goes out
    let edits = assignments
        .iter()
        .map(|raw| parse_assignment(raw))
        .collect::<Result<Vec<_>, _>>()?;

    let mut session = open_session(api_base_url, token)?;
    save_edits(&mut session, edits).await?;
    println!("Saved.");
    Ok(())
}

/// Loads the current values, applies `edits` and writes every field.
///
/// A failed load aborts before any write, so fields that were not edited are
/// never replaced by their defaults.
pub async fn save_edits<A: SettingsApi, T: TokenSource>(
    session: &mut FormSession<A, T>,
    edits: Vec<(&'static str, String)>,
) -> Result<(), CliError> {
    session.mount_strict().await?;
    for (name, value) in edits {
        session.edit(name, value);
    }
    session.submit().await?;
    Ok(())
}
