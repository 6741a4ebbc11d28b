//! Data structures for the cross-table: players, games, tournament settings.

mod game;
mod player;
mod tournament;

pub use game::{GameId, GameRef, GameSide, GameStatus, RawScore};
pub use player::{Player, PlayerId};
pub use tournament::{Roster, TimeControl, TournamentConfig, TournamentError, TournamentId};
