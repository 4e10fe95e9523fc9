//! HTTP client for the game API.

use crate::api::CreatedGame;
use crate::error::ErrorBody;
use crate::id::GameId;
use derive_more::{Display, Error};
use strictly_board::BoardView;
use tracing::{debug, info, instrument};

/// Failure talking to the game server.
#[derive(Debug, Display, Error)]
pub enum ClientError {
    /// Transport or decoding failure.
    #[display("HTTP error: {}", _0)]
    Http(reqwest::Error),

    /// The server answered with an error body.
    #[display("Server error {}: {}", code, msg)]
    Api {
        /// Error code from the body.
        code: u8,
        /// Message from the body.
        msg: String,
    },

    /// The server answered with something other than the expected JSON.
    #[display("Unexpected status {}: {}", status, body)]
    Status {
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        body: String,
    },
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        Self::Http(err)
    }
}

/// Client for a running game server.
#[derive(Debug, Clone)]
pub struct GameClient {
    base_url: String,
    client: reqwest::Client,
}

impl GameClient {
    /// Creates a client for the server at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Creates a new game and returns its id.
    #[instrument(skip(self))]
    pub async fn create(&self) -> Result<GameId, ClientError> {
        let url = format!("{}/game", self.base_url);
        info!(url = %url, "POST");

        let response = self.client.post(&url).send().await?;
        let created: CreatedGame = Self::decode(response).await?;

        debug!(game_id = %created.id, "Game created");
        Ok(created.id)
    }

    /// Plays a move and returns the resulting board.
    ///
    /// Refused moves are not errors here: they come back as a board whose
    /// `err` field is set.
    #[instrument(skip(self), fields(game_id = %id))]
    pub async fn make_move(
        &self,
        id: &GameId,
        player: i64,
        row: i64,
        col: i64,
    ) -> Result<BoardView, ClientError> {
        let url = format!("{}/move/{}/{}/{}/{}", self.base_url, id, player, row, col);
        info!(url = %url, "PUT");

        let response = self.client.put(&url).send().await?;
        let board: BoardView = Self::decode(response).await?;

        debug!(next = board.next, err = ?board.err, winner = ?board.winner, "Move answered");
        Ok(board)
    }

    async fn decode<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = response.status();
        let body = response.text().await?;

        if status.is_success() {
            if let Ok(value) = serde_json::from_str(&body) {
                return Ok(value);
            }
        } else if let Ok(ErrorBody { err: Some(code), msg }) = serde_json::from_str(&body) {
            return Err(ClientError::Api { code, msg });
        }

        Err(ClientError::Status {
            status: status.as_u16(),
            body,
        })
    }
}
