//! Player data structure.

use serde::{Deserialize, Serialize};

/// Unique identifier for a player (the upstream user id).
pub type PlayerId = u64;

/// A tournament participant as listed in the roster.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
}

impl Player {
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// True if `viewer` is this player. An anonymous viewer is never anyone.
    pub fn is_viewer(&self, viewer: Option<PlayerId>) -> bool {
        viewer == Some(self.id)
    }
}
