//! Tournament settings, roster and the crate error type.

use crate::models::game::{GameId, GameStatus};
use crate::models::player::{Player, PlayerId};
use serde::{Deserialize, Serialize};

/// Errors from loading tournament data or acting on a cell.
#[derive(Clone, Debug, PartialEq)]
pub enum TournamentError {
    TournamentNotFound(TournamentId),
    GameNotFound(GameId),
    /// Player is not on the tournament roster.
    PlayerNotFound(PlayerId),
    /// A player with this id is already on the roster.
    DuplicatePlayer(PlayerId),
    InvalidPlayerName,
    /// A game would pair a player with themselves.
    SelfPairing(PlayerId),
    /// These two players already have a game in this tournament.
    GameAlreadyExists { game_id: GameId },
    /// Only waiting games can be accepted.
    GameNotWaiting { game_id: GameId, status: GameStatus },
    /// Game id is already used by another game in the store.
    GameIdInUse { game_id: GameId, tournament_id: TournamentId },
    /// No game id left to hand out after this one.
    GameIdOutOfRange(GameId),
    /// Games need a clock with some time on it.
    InvalidTimeControl,
    /// Shared state could not be locked.
    StoreUnavailable,
}

impl std::fmt::Display for TournamentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TournamentError::TournamentNotFound(id) => write!(f, "Tournament {} not found", id),
            TournamentError::GameNotFound(id) => write!(f, "Game {} not found", id),
            TournamentError::PlayerNotFound(id) => write!(f, "Player {} is not in this tournament", id),
            TournamentError::DuplicatePlayer(id) => write!(f, "Player {} is already in this tournament", id),
            TournamentError::InvalidPlayerName => write!(f, "Player name must not be empty"),
            TournamentError::SelfPairing(id) => write!(f, "Player {} cannot play against themselves", id),
            TournamentError::GameAlreadyExists { game_id } => {
                write!(f, "These players already have a game ({})", game_id)
            }
            TournamentError::GameNotWaiting { game_id, status } => {
                write!(f, "Game {} cannot be accepted (status: {})", game_id, status)
            }
            TournamentError::GameIdInUse { game_id, tournament_id } => {
                write!(f, "Game id {} is already used in tournament {}", game_id, tournament_id)
            }
            TournamentError::GameIdOutOfRange(id) => write!(f, "Game id {} is out of range", id),
            TournamentError::InvalidTimeControl => write!(f, "Time control must be longer than zero"),
            TournamentError::StoreUnavailable => write!(f, "Tournament store unavailable"),
        }
    }
}

impl std::error::Error for TournamentError {}

/// Unique identifier for a tournament.
pub type TournamentId = uuid::Uuid;

/// Clock for every game of the tournament.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct TimeControl {
    #[serde(default, alias = "time_d")]
    pub days: u32,
    #[serde(default, alias = "time_h")]
    pub hours: u32,
    #[serde(default, alias = "time_m")]
    pub minutes: u32,
    #[serde(default, alias = "time_s")]
    pub seconds: u32,
}

impl TimeControl {
    pub fn new(days: u32, hours: u32, minutes: u32, seconds: u32) -> Self {
        Self {
            days,
            hours,
            minutes,
            seconds,
        }
    }

    /// Total thinking time per player.
    pub fn total(&self) -> chrono::Duration {
        let secs = i64::from(self.days) * 86_400
            + i64::from(self.hours) * 3_600
            + i64::from(self.minutes) * 60
            + i64::from(self.seconds);
        chrono::Duration::seconds(secs)
    }

    pub fn validate(&self) -> Result<(), TournamentError> {
        if self.total() <= chrono::Duration::zero() {
            return Err(TournamentError::InvalidTimeControl);
        }
        Ok(())
    }
}

/// Tournament settings. Fixed for the duration of a view.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct TournamentConfig {
    /// Game type passed through when creating games (e.g. "blitz").
    #[serde(alias = "type")]
    pub tournament_type: String,
    #[serde(default, alias = "time_data")]
    pub time_control: TimeControl,
}

/// Participants and settings of one tournament, in roster order.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Roster {
    pub players: Vec<Player>,
    pub config: TournamentConfig,
}

impl Roster {
    pub fn new(config: TournamentConfig) -> Self {
        Self {
            players: Vec::new(),
            config,
        }
    }

    pub fn get_player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn contains(&self, id: PlayerId) -> bool {
        self.get_player(id).is_some()
    }

    /// Append a player. Ids must be unique and names non-blank.
    pub fn add_player(&mut self, player: Player) -> Result<(), TournamentError> {
        let name = player.name.trim();
        if name.is_empty() {
            return Err(TournamentError::InvalidPlayerName);
        }
        if self.contains(player.id) {
            return Err(TournamentError::DuplicatePlayer(player.id));
        }
        let name = name.to_string();
        self.players.push(Player { name, ..player });
        Ok(())
    }
}
