//! Plays a scripted game against a running server.

use crate::render::{Verdict, render_board};
use crate::script::ScriptedMove;
use anyhow::{Context, Result};
use std::io::Write;
use strictly_board::BoardView;
use strictly_server::GameClient;
use tracing::{info, instrument, warn};

/// Creates a game, sends every move and writes each resulting board to `out`.
///
/// Refused moves are printed and play continues with the next move. Returns
/// the board answered for each move.
#[instrument(skip(client, moves, out), fields(server = %client.base_url(), count = moves.len()))]
pub async fn play(
    client: &GameClient,
    moves: &[ScriptedMove],
    out: &mut impl Write,
) -> Result<Vec<BoardView>> {
    let id = client.create().await.context("Failed to create game")?;
    info!(game_id = %id, "Game created");
    write!(out, "Game ID is {}\n\n", id)?;

    let mut boards = Vec::with_capacity(moves.len());
    for m in moves {
        let board = client
            .make_move(&id, m.player, m.row, m.col)
            .await
            .with_context(|| format!("Failed to play {:?}", m))?;

        let verdict = Verdict::from(&board);
        if let Verdict::Refused { code, .. } = &verdict {
            warn!(code, player = m.player, row = m.row, col = m.col, "Move refused");
        }

        write!(out, "\n{}\n\n{}\n\n", render_board(&board.board), verdict)?;
        boards.push(board);
    }

    out.flush()?;
    Ok(boards)
}
