//! Cell state of one (row player, column player) pair, as seen by the viewer.

use crate::models::{GameId, GameRef, GameSide, GameStatus, Player, PlayerId};
use serde::{Deserialize, Serialize};

/// What a cross-table cell shows.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Cell {
    /// Diagonal: a player against themselves.
    Empty,
    /// No game yet and the viewer is not in the pair.
    NoGame,
    /// No game yet; the viewer may start one against `opponent_id`.
    Invite { opponent_id: PlayerId },
    /// The viewer's own open game. `awaiting_accept` is set while the
    /// invitation is still pending.
    EnterGame { game_id: GameId, awaiting_accept: bool },
    /// Someone else's live game, or a game in a state we don't know.
    InProgress,
    /// Finished game, showing the row player's score.
    Finished { score: f64 },
}

impl Cell {
    /// Whether clicking the cell does anything.
    pub fn is_interactive(&self) -> bool {
        matches!(self, Cell::Invite { .. } | Cell::EnterGame { .. })
    }
}

/// Resolve the cell for `row` against `column`, given the game found for the
/// pair (if any) and who is looking.
///
/// Only pair members get the interactive variants. A live game watched by
/// anyone else is `InProgress`; a finished game is `Finished` for everyone.
/// The finished score is the row player's, so the two mirrored cells of one
/// game show different numbers.
pub fn resolve(game: Option<&GameRef>, row: &Player, column: &Player, viewer: Option<PlayerId>) -> Cell {
    let viewer_plays = row.is_viewer(viewer) || column.is_viewer(viewer);

    let Some(game) = game else {
        if !viewer_plays {
            return Cell::NoGame;
        }
        let opponent_id = if row.is_viewer(viewer) { column.id } else { row.id };
        return Cell::Invite { opponent_id };
    };

    match &game.status {
        GameStatus::Waiting | GameStatus::Active if viewer_plays => Cell::EnterGame {
            game_id: game.id,
            awaiting_accept: game.status == GameStatus::Waiting,
        },
        GameStatus::Finished => {
            let score = game.side_of(row.id).map_or(0.0, |side| finished_points(game, side));
            Cell::Finished { score }
        }
        _ => Cell::InProgress,
    }
}

/// Score shown in a finished cell, 0 if unreadable.
fn finished_points(game: &GameRef, side: &GameSide) -> f64 {
    side.score.points().unwrap_or_else(|| {
        log::debug!("game {}: showing 0 for unreadable score of player {}", game.id, side.id);
        0.0
    })
}
