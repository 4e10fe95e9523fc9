//! Command-line interface for strictly_tris.

use crate::script::{Script, ScriptError, ScriptedMove, load_moves};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use strictly_server::{ConfigError, ServerConfig};
use tracing::{debug, instrument};

/// Strictly Tris - tic-tac-toe over REST
#[derive(Parser, Debug)]
#[command(name = "strictly_tris")]
#[command(about = "Tic-tac-toe game server and scripted client", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP game server
    Serve(ServeArgs),

    /// Play a scripted game against a running server
    Play(PlayArgs),
}

/// Options for `serve`. Flags win over the config file and `PORT`.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct ServeArgs {
    /// TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Host to bind to
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind to
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Seconds a game is kept after its last accepted move
    #[arg(long)]
    pub ttl_secs: Option<u64>,

    /// Serve classic boards without mate counters
    #[arg(long)]
    pub no_mate: bool,
}

impl ServeArgs {
    /// Builds the server config: file (or defaults), then `PORT`, then flags.
    #[instrument(skip(self), fields(config = ?self.config))]
    pub fn resolve(&self) -> Result<ServerConfig, ConfigError> {
        let config = ServerConfig::load(self.config.as_deref())?.with_env_overrides()?;
        Ok(self.apply(config))
    }

    /// Applies the flags that were given on top of `config`.
    pub fn apply(&self, mut config: ServerConfig) -> ServerConfig {
        if let Some(host) = &self.host {
            config = config.with_host(host.as_str());
        }
        if let Some(port) = self.port {
            config = config.with_port(port);
        }
        if let Some(ttl_secs) = self.ttl_secs {
            config = config.with_ttl_secs(ttl_secs);
        }
        if self.no_mate {
            config = config.with_mate_prediction(false);
        }
        debug!(?config, "Server config resolved");
        config
    }
}

/// Options for `play`.
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct PlayArgs {
    /// Game server URL
    #[arg(long, default_value = "http://127.0.0.1:8000")]
    pub server_url: String,

    /// Built-in game to play
    #[arg(long, value_enum, default_value_t = Script::WinOne)]
    pub script: Script,

    /// TOML file with `moves = [[player, row, col], ...]`; replaces --script
    #[arg(long)]
    pub moves: Option<PathBuf>,
}

impl PlayArgs {
    /// The moves to send, from the moves file when given.
    #[instrument(skip(self), fields(script = ?self.script, moves = ?self.moves))]
    pub fn moves(&self) -> Result<Vec<ScriptedMove>, ScriptError> {
        match &self.moves {
            Some(path) => load_moves(path),
            None => Ok(self.script.moves()),
        }
    }
}
