//! Cross-table logic: pairing lookup, cell states, scores, matrix, cell actions.

mod actions;
mod cell;
mod matrix;
mod pairing;
mod score;

pub use actions::{game_path, perform, ActionContext, CellAction, CreateGameRequest, GameService};
pub use cell::{resolve, Cell};
pub use matrix::{build, HeaderRow, Matrix, MatrixRow, SCORE_LABEL};
pub use pairing::find_game;
pub use score::total_score;
