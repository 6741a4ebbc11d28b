//! Cross-table construction: one row and one column per roster player, plus
//! a trailing score column.

use crate::logic::cell::{resolve, Cell};
use crate::logic::pairing::find_game;
use crate::logic::score::total_score;
use crate::models::{GameRef, Player, PlayerId};
use serde::{Deserialize, Serialize};

/// Label of the trailing score column.
pub const SCORE_LABEL: &str = "Final Score";

/// Column titles: player names in roster order, then the score label.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct HeaderRow {
    pub columns: Vec<String>,
    pub score_label: String,
}

/// One player's row: a cell per column player, aligned with the header.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatrixRow {
    pub player: Player,
    pub cells: Vec<Cell>,
    pub score: f64,
}

/// The whole cross-table: header plus one row per roster player.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Matrix {
    pub header: HeaderRow,
    pub rows: Vec<MatrixRow>,
}

impl Matrix {
    /// Cell at (row player, column player), looked up by id.
    pub fn cell(&self, row: PlayerId, column: PlayerId) -> Option<&Cell> {
        let col = self.rows.iter().position(|r| r.player.id == column)?;
        self.rows
            .iter()
            .find(|r| r.player.id == row)
            .and_then(|r| r.cells.get(col))
    }

    pub fn score(&self, player: PlayerId) -> Option<f64> {
        self.rows.iter().find(|r| r.player.id == player).map(|r| r.score)
    }
}

/// Build the cross-table for `viewer`.
///
/// Rows and columns keep roster order. Diagonal cells are `Empty` and never
/// looked up against the games. Nothing is cached between calls.
pub fn build(players: &[Player], games: &[GameRef], viewer: Option<PlayerId>) -> Matrix {
    let header = HeaderRow {
        columns: players.iter().map(|p| p.name.clone()).collect(),
        score_label: SCORE_LABEL.to_string(),
    };

    let rows: Vec<MatrixRow> = players
        .iter()
        .map(|row| {
            let cells = players
                .iter()
                .map(|column| {
                    if row.id == column.id {
                        Cell::Empty
                    } else {
                        resolve(find_game(games, row, column), row, column, viewer)
                    }
                })
                .collect();
            MatrixRow {
                player: row.clone(),
                cells,
                score: total_score(games, row),
            }
        })
        .collect();

    log::debug!(
        "built cross-table: {} players, {} games, viewer {:?}",
        players.len(),
        games.len(),
        viewer
    );
    Matrix { header, rows }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GameSide, GameStatus};

    #[test]
    fn empty_roster_gives_empty_table() {
        let m = build(&[], &[], None);
        assert!(m.rows.is_empty());
        assert!(m.header.columns.is_empty());
        assert_eq!(m.header.score_label, SCORE_LABEL);
    }

    #[test]
    fn diagonal_ignores_games_that_pair_a_player_with_themselves() {
        let players = vec![Player::new(1, "A"), Player::new(2, "B")];
        let games = vec![GameRef::new(
            5,
            GameSide::new(1, 1.0),
            GameSide::new(1, 1.0),
            GameStatus::Active,
        )];
        let m = build(&players, &games, Some(1));
        assert_eq!(m.cell(1, 1), Some(&Cell::Empty));
        assert_eq!(m.cell(1, 2), Some(&Cell::Invite { opponent_id: 2 }));
    }

    #[test]
    fn header_follows_roster_order() {
        let players = vec![Player::new(9, "Zed"), Player::new(1, "Amy")];
        let m = build(&players, &[], None);
        assert_eq!(m.header.columns, vec!["Zed".to_string(), "Amy".to_string()]);
        assert_eq!(m.rows[0].player.id, 9);
        assert_eq!(m.rows[0].cells, vec![Cell::Empty, Cell::NoGame]);
    }
}
