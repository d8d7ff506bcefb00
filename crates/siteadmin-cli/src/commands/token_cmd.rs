use siteadmin_core::auth::{KeyringTokenStore, TokenSource};

use crate::cli::TokenCommands;
use crate::error::CliError;

pub fn run_token(command: TokenCommands) -> Result<(), CliError> {
    let store = KeyringTokenStore::default();
    match command {
        TokenCommands::Set { token } => {
            store.save_token(&token)?;
            println!("Token stored in the OS keychain.");
        }
        TokenCommands::Clear => {
            store.clear_token()?;
            println!("Token removed.");
        }
        TokenCommands::Status => {
            if store.token()?.is_some() {
                println!("A token is stored.");
            } else {
                println!("No token is stored.");
            }
        }
    }
    Ok(())
}
