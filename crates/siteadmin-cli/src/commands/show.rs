use crate::commands::common::{format_settings_lines, open_session};
use crate::error::CliError;

pub async fn run_show(
    json: bool,
    api_base_url: Option<String>,
    token: Option<String>,
) -> Result<(), CliError> {
    let mut session = open_session(api_base_url, token)?;
    session.mount_strict().await?;

    if json {
        println!("{}", serde_json::to_string_pretty(session.state())?);
    } else {
        for line in format_settings_lines(session.state()) {
            println!("{line}");
        }
    }
    Ok(())
}
