// ABOUTME: Folio command-line entry point
// ABOUTME: Serves the API, prints project cards or checks the admin allow-list

use std::process;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use tracing_subscriber::EnvFilter;

use folio_auth::AdminVerifier;
use folio_config::constants::RUST_LOG;
use folio_cli::app::{build_admin_gate, build_pipeline, serve};
use folio_cli::table::project_table;
use folio_cli::Config;
use folio_projects::SummaryCache;

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Folio - portfolio backend that summarizes your GitHub projects")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP API server
    Serve {
        /// Port to listen on (overrides PORT)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Run the portfolio pipeline once and print the project cards
    Projects,
    /// Check whether an email is on the admin allow-list
    CheckAdmin {
        /// Email address to check
        email: String,
    },
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(RUST_LOG).unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let mut config = Config::from_env()?;

    match cli.command {
        Commands::Serve { port } => {
            if let Some(port) = port {
                config.port = port;
            }
            serve(config).await
        }
        Commands::Projects => {
            let pipeline = build_pipeline(&config, SummaryCache::new())?;
            let cards = pipeline.fetch_projects().await?;

            if cards.is_empty() {
                println!(
                    "{}",
                    format!("No repositories marked with '{}'", pipeline.marker()).yellow()
                );
                return Ok(());
            }

            println!("{}", project_table(&cards));
            println!("{}", format!("{} projects", cards.len()).dimmed());
            Ok(())
        }
        Commands::CheckAdmin { email } => {
            let gate = build_admin_gate(&config)?;
            if gate.is_allowed_email(&email) {
                println!("{} {} is an admin", "✓".green(), email.trim());
            } else {
                println!("{} {} is not on the admin allow-list", "✗".red(), email.trim());
            }
            Ok(())
        }
    }
}
