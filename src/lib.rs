//! Round-robin tournament cross-table: library with models and business logic.

pub mod config;
pub mod logic;
pub mod models;
pub mod source;
pub mod store;

pub use logic::{
    build, find_game, game_path, perform, resolve, total_score, ActionContext, Cell, CellAction,
    CreateGameRequest, GameService, HeaderRow, Matrix, MatrixRow, SCORE_LABEL,
};
pub use models::{
    GameId, GameRef, GameSide, GameStatus, Player, PlayerId, RawScore, Roster, TimeControl, TournamentConfig,
    TournamentError, TournamentId,
};
pub use source::{load_snapshot, TournamentSnapshot, TournamentSource};
pub use store::MemoryStore;
