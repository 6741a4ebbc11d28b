//! Game records as reported by the game service: sides, raw scores and status.

use crate::models::player::PlayerId;
use serde::{Deserialize, Serialize};

/// Unique identifier for a game.
pub type GameId = u64;

/// A score exactly as the game service sent it.
///
/// Scores normally arrive as numbers, sometimes as numeric strings. Anything
/// else is kept verbatim so the record still round-trips.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawScore {
    Number(f64),
    Text(String),
    Other(serde_json::Value),
}

impl Default for RawScore {
    fn default() -> Self {
        RawScore::Other(serde_json::Value::Null)
    }
}

impl From<f64> for RawScore {
    fn from(value: f64) -> Self {
        RawScore::Number(value)
    }
}

impl RawScore {
    /// Numeric value of the score, or None if it is not a number.
    /// A blank string counts as zero.
    pub fn points(&self) -> Option<f64> {
        match self {
            RawScore::Number(n) => Some(*n),
            RawScore::Text(s) => {
                let s = s.trim();
                if s.is_empty() {
                    return Some(0.0);
                }
                s.parse::<f64>().ok().filter(|n| n.is_finite())
            }
            RawScore::Other(_) => None,
        }
    }
}

/// One seat of a game: who sits there and what they scored.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSide {
    pub id: PlayerId,
    #[serde(default)]
    pub score: RawScore,
}

impl GameSide {
    pub fn new(id: PlayerId, score: impl Into<RawScore>) -> Self {
        Self {
            id,
            score: score.into(),
        }
    }
}

/// Lifecycle of a game on the game service.
///
/// Wire values: "Waiting", "Active game", "Game Over". Any other value is a
/// live game in some intermediate state and keeps its raw text.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum GameStatus {
    /// Invited, not yet accepted by the opponent.
    Waiting,
    Active,
    InProgress(String),
    Finished,
}

const WAITING: &str = "Waiting";
const ACTIVE: &str = "Active game";
const FINISHED: &str = "Game Over";

impl From<String> for GameStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            WAITING => GameStatus::Waiting,
            ACTIVE => GameStatus::Active,
            FINISHED => GameStatus::Finished,
            _ => GameStatus::InProgress(raw),
        }
    }
}

impl From<GameStatus> for String {
    fn from(status: GameStatus) -> Self {
        match status {
            GameStatus::Waiting => WAITING.to_string(),
            GameStatus::Active => ACTIVE.to_string(),
            GameStatus::Finished => FINISHED.to_string(),
            GameStatus::InProgress(raw) => raw,
        }
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::Waiting => f.write_str(WAITING),
            GameStatus::Active => f.write_str(ACTIVE),
            GameStatus::Finished => f.write_str(FINISHED),
            GameStatus::InProgress(raw) => f.write_str(raw),
        }
    }
}

/// A game between two players. Seats are positions, not ranks: the game
/// stands for the unordered pair `{player1.id, player2.id}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameRef {
    pub id: GameId,
    pub player1: GameSide,
    pub player2: GameSide,
    #[serde(rename = "system_status", alias = "status")]
    pub status: GameStatus,
}

impl GameRef {
    pub fn new(id: GameId, player1: GameSide, player2: GameSide, status: GameStatus) -> Self {
        Self {
            id,
            player1,
            player2,
            status,
        }
    }

    pub fn involves(&self, player: PlayerId) -> bool {
        self.player1.id == player || self.player2.id == player
    }

    /// True if this game is the pairing of `a` and `b`, in either seat order.
    pub fn pairs(&self, a: PlayerId, b: PlayerId) -> bool {
        (self.player1.id == a && self.player2.id == b) || (self.player1.id == b && self.player2.id == a)
    }

    /// The seat occupied by `player`, if they play in this game.
    pub fn side_of(&self, player: PlayerId) -> Option<&GameSide> {
        if self.player1.id == player {
            Some(&self.player1)
        } else if self.player2.id == player {
            Some(&self.player2)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_maps_wire_literals() {
        let parsed: Vec<GameStatus> =
            serde_json::from_str(r#"["Waiting", "Active game", "Game Over", "Draw offered"]"#).unwrap();
        assert_eq!(
            parsed,
            vec![
                GameStatus::Waiting,
                GameStatus::Active,
                GameStatus::Finished,
                GameStatus::InProgress("Draw offered".to_string()),
            ]
        );
        assert_eq!(serde_json::to_string(&GameStatus::Active).unwrap(), r#""Active game""#);
    }

    #[test]
    fn raw_score_coercion() {
        assert_eq!(RawScore::Number(1.5).points(), Some(1.5));
        assert_eq!(RawScore::Text(" 2 ".to_string()).points(), Some(2.0));
        assert_eq!(RawScore::Text(String::new()).points(), Some(0.0));
        assert_eq!(RawScore::Text("win".to_string()).points(), None);
        assert_eq!(RawScore::Text("NaN".to_string()).points(), None);
        assert_eq!(RawScore::default().points(), None);
    }

    #[test]
    fn game_deserializes_from_service_payload() {
        let json = r#"{
            "id": 7,
            "player1": {"id": 1, "score": "0.5"},
            "player2": {"id": 2, "score": 0.5},
            "system_status": "Game Over"
        }"#;
        let game: GameRef = serde_json::from_str(json).unwrap();
        assert_eq!(game.status, GameStatus::Finished);
        assert_eq!(game.player1.score.points(), Some(0.5));
        assert_eq!(game.player2.score.points(), Some(0.5));
        assert!(game.pairs(2, 1));
        assert!(!game.pairs(1, 3));
    }

    #[test]
    fn missing_score_is_kept_as_null() {
        let json = r#"{"id": 1, "player1": {"id": 1}, "player2": {"id": 2}, "status": "Waiting"}"#;
        let game: GameRef = serde_json::from_str(json).unwrap();
        assert_eq!(game.player1.score, RawScore::Other(serde_json::Value::Null));
        assert_eq!(game.side_of(2).map(|s| s.id), Some(2));
        assert!(game.side_of(3).is_none());
    }
}
