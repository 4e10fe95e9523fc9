//! Strictly Server - REST API for 3x3 games.
//!
//! Boards live in an expiring in-memory cache keyed by a generated id. The
//! HTTP layer loads a board, hands the move to the state machine and stores
//! the board back when the move was accepted.
//!
//! # Architecture
//!
//! - **Repository**: [`BoardRepository`] trait, [`MemoryRepository`] impl
//! - **API**: axum [`router`] over shared [`AppState`]
//! - **Server**: [`serve`] / [`run`] with expiry sweeps and graceful shutdown
//! - **Client**: [`GameClient`] for driving a running server

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod api;
mod client;
mod config;
mod error;
mod id;
mod repository;
mod server;

pub use api::{AppState, CreatedGame, router};
pub use client::{ClientError, GameClient};
pub use config::{ConfigError, ServerConfig};
pub use error::{ApiError, BOARD_NOT_FOUND, ErrorBody, RepositoryError};
pub use id::GameId;
pub use repository::{BoardRepository, MemoryRepository};
pub use server::{run, serve};
