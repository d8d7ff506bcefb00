//! siteadmin CLI - edit the general site settings from the terminal

mod cli;
mod commands;
mod error;


use clap::Parser;

use crate::cli::{Cli, Commands};
use crate::commands::fields::run_fields;
use crate::commands::save::run_save;
use crate::commands::show::run_show;
use crate::commands::token_cmd::run_token;
use crate::error::CliError;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), CliError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("siteadmin=warn".parse().expect("valid directive")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Show { json } => run_show(json, cli.api_base_url, cli.token).await?,
        Commands::Save { assignments } => {
            run_save(&assignments, cli.api_base_url, cli.token).await?;
        }
        Commands::Fields => run_fields(),
        Commands::Token { command } => run_token(command)?,
    }

    Ok(())
}
