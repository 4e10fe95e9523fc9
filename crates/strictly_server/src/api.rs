//! REST routes.
//!
//! - `POST /game` creates a game and answers `201 {"id": ...}`
//! - `PUT /move/{id}/{player}/{row}/{col}` plays a move and answers with the
//!   board, including refused moves (which carry `err` and `msg`)
//!
//! Failures answer with an [`ErrorBody`](crate::ErrorBody) as JSON.

use crate::config::ServerConfig;
use crate::error::ApiError;
use crate::id::GameId;
use crate::repository::BoardRepository;
use axum::extract::rejection::PathRejection;
use axum::extract::{Path, Request, State};
use axum::http::StatusCode;
use axum::response::Response;
use axum::routing::{post, put};
use axum::{Json, Router};
use derive_new::new;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use strictly_board::BoardView;
use tower::ServiceBuilder;
use tracing::{info, instrument, warn};

/// Shared handler state.
#[derive(Clone, new)]
pub struct AppState {
    repository: Arc<dyn BoardRepository>,
    config: Arc<ServerConfig>,
}

/// Body of a successful create.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedGame {
    /// Id of the new game.
    pub id: GameId,
}

/// Builds the router with request logging.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/game", post(create_game))
        .route("/move/{id}/{player}/{row}/{col}", put(make_move))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .map_request(|req: Request| {
                    info!(method = %req.method(), uri = %req.uri(), "Incoming HTTP request");
                    req
                })
                .map_response(|res: Response| {
                    info!(status = %res.status(), "Response sent");
                    res
                }),
        )
}

#[instrument(skip(state))]
async fn create_game(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<CreatedGame>), ApiError> {
    let id = GameId::generate();
    state.repository.put(id.clone(), state.config.new_board())?;

    info!(game_id = %id, "Game created");
    Ok((StatusCode::CREATED, Json(CreatedGame { id })))
}

#[instrument(skip(state))]
async fn make_move(
    State(state): State<AppState>,
    path: Result<Path<(GameId, i64, i64, i64)>, PathRejection>,
) -> Result<Json<BoardView>, ApiError> {
    let Path((id, player, row, col)) = path.map_err(ApiError::BadPath)?;

    let board = state
        .repository
        .update(&id, &mut |board| board.try_move(player, row, col).is_ok())?
        .ok_or_else(|| {
            warn!(game_id = %id, "Move for unknown game");
            ApiError::NotFound
        })?;

    Ok(Json(board.view()))
}
