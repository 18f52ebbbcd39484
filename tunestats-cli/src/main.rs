//! Tunestats CLI - personal listening statistics in the terminal.
//!
//! Every view talks to the stats backend through `tunestats-client`. The
//! backend URL and the session token live in `<data dir>/storage.json`.

#![allow(clippy::print_stdout, reason = "CLI tool outputs to stdout")]

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

mod backend_commands;
mod cli;
mod render;
mod session_commands;
mod stats_commands;

use cli::{BackendCommands, Cli, Commands, TopCommands};
use tunestats_client::paths::{self, STORAGE_FILE};
use tunestats_client::{
    ClientConfig, ClientError, EndpointResolver, JsonFileStore, KeyValueStore, SessionStore,
    StatsClient,
};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_new(&cli.log_level).unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("setting default subscriber failed")?;

    if let Err(e) = run(cli).await {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        if e.downcast_ref::<ClientError>().is_some_and(ClientError::needs_login) {
            eprintln!("Sign in with {}", "tunestats login".bold());
        }
        std::process::exit(1);
    }
    Ok(())
}

fn build_client(cli: &Cli) -> Result<StatsClient> {
    let storage = match &cli.data_dir {
        Some(dir) => dir.join(STORAGE_FILE),
        None => paths::storage_path()?,
    };
    tracing::debug!("Using storage at {}", storage.display());

    let store: Arc<dyn KeyValueStore> = Arc::new(JsonFileStore::new(storage));
    let session = SessionStore::new(store.clone());

    // A token passed on the command line is kept for later runs.
    if let Some(token) = &cli.token {
        session.store_token(token, None).context("Failed to store session token")?;
    }

    Ok(StatsClient::new(ClientConfig::default(), EndpointResolver::new(store), session)?)
}

async fn run(cli: Cli) -> Result<()> {
    let client = build_client(&cli)?;
    let json = cli.json;

    match cli.command {
        Commands::Login { redirect } => session_commands::login(&client, redirect).await,
        Commands::Logout => session_commands::logout(&client),
        Commands::Me => stats_commands::show_profile(&client, json).await,
        Commands::Top(top) => match top {
            TopCommands::Artists(args) => stats_commands::top_artists(&client, args, json).await,
            TopCommands::Tracks(args) => stats_commands::top_tracks(&client, args, json).await,
            TopCommands::Albums(args) => stats_commands::top_albums(&client, args, json).await,
        }
        Commands::Recent { limit, watch: None } => {
            stats_commands::recently_played(&client, limit, json).await
        }
        Commands::Recent { limit, watch: Some(secs) } => {
            stats_commands::watch_recently_played(Arc::new(client), limit, secs, json).await
        }
        Commands::Stats { days } => stats_commands::tracking_stats(&client, days, json).await,
        Commands::History { days, limit, offset } => {
            stats_commands::tracking_history(&client, days, limit, offset, json).await
        }
        Commands::Analytics { days, months } => {
            stats_commands::analytics(&client, days, months, json).await
        }
        Commands::Backend(backend) => match backend {
            BackendCommands::Show => backend_commands::show_backend(&client, json),
            BackendCommands::Set { url } => backend_commands::set_backend(&client, &url),
            BackendCommands::Reset => backend_commands::reset_backend(&client),
            BackendCommands::Test { url } => {
                backend_commands::test_backend(&client, url, json).await
            }
        }
    }
}
