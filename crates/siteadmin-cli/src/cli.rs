use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "siteadmin")]
#[command(about = "Edit the general site settings from the command line")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Settings API base URL (defaults to SITEADMIN_API_BASE_URL)
    #[arg(long, global = true, value_name = "URL")]
    pub api_base_url: Option<String>,

    /// Bearer token to use instead of the one stored in the keychain
    #[arg(long, global = true, value_name = "TOKEN")]
    pub token: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Load and print the general settings
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Apply FIELD=VALUE edits and save every field
    Save {
        /// Edits such as site_name="Acme Store"
        #[arg(value_name = "FIELD=VALUE", required = true)]
        assignments: Vec<String>,
    },
    /// List the editable fields
    Fields,
    /// Manage the stored bearer token
    Token {
        #[command(subcommand)]
        command: TokenCommands,
    },
}

#[derive(Subcommand)]
pub enum TokenCommands {
    /// Store a bearer token in the OS keychain
    Set {
        /// Token value
        token: String,
    },
    /// Remove the stored bearer token
    Clear,
    /// Report whether a token is stored
    Status,
}
