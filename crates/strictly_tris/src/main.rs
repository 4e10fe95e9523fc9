//! Strictly Tris - unified CLI

use anyhow::{Context, Result};
use clap::Parser;
use strictly_server::GameClient;
use strictly_tris::{Cli, Command, PlayArgs, ServeArgs};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,strictly_server=debug")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Serve(args) => run_server(args).await,
        Command::Play(args) => run_play(args).await,
    }
}

/// Run the HTTP game server
#[instrument(skip_all)]
async fn run_server(args: ServeArgs) -> Result<()> {
    let config = args.resolve().context("Failed to load server config")?;
    info!(
        host = %config.host(),
        port = config.port(),
        mate_prediction = config.mate_prediction(),
        "Starting Strictly Tris server"
    );
    strictly_server::serve(config).await
}

/// Run the scripted client
#[instrument(skip_all, fields(server_url = %args.server_url))]
async fn run_play(args: PlayArgs) -> Result<()> {
    let moves = args.moves().context("Failed to load moves")?;
    let client = GameClient::new(args.server_url.as_str());

    let mut stdout = std::io::stdout().lock();
    strictly_tris::play(&client, &moves, &mut stdout).await?;
    Ok(())
}
