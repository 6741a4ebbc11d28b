//! In-memory tournaments: rosters and games kept in process, keyed by id.
//! Entries that nobody touches for a while can be swept with `remove_inactive`.

use crate::logic::{CreateGameRequest, GameService};
use crate::models::{
    GameId, GameRef, GameSide, GameStatus, Player, Roster, TournamentConfig, TournamentError, TournamentId,
};
use crate::source::TournamentSource;
use std::collections::{HashMap, HashSet};
use std::sync::{RwLock, RwLockWriteGuard};
use std::time::{Duration, Instant};
use uuid::Uuid;

/// One tournament plus its last activity time (for cleanup).
struct TournamentEntry {
    roster: Roster,
    games: Vec<GameRef>,
    last_activity: Instant,
}

impl TournamentEntry {
    fn touch(&mut self) -> &mut Self {
        self.last_activity = Instant::now();
        self
    }
}

struct StoreState {
    tournaments: HashMap<TournamentId, TournamentEntry>,
    next_game_id: GameId,
}

pub struct MemoryStore {
    state: RwLock<StoreState>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(StoreState {
                tournaments: HashMap::new(),
                next_game_id: 1,
            }),
        }
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, StoreState>, TournamentError> {
        self.state.write().map_err(|_| TournamentError::StoreUnavailable)
    }

    /// Create an empty tournament and return its id. The clock must not be zero.
    pub fn create_tournament(&self, config: TournamentConfig) -> Result<TournamentId, TournamentError> {
        config.time_control.validate()?;
        let id = Uuid::new_v4();
        let mut g = self.write()?;
        g.tournaments.insert(
            id,
            TournamentEntry {
                roster: Roster::new(config),
                games: Vec::new(),
                last_activity: Instant::now(),
            },
        );
        log::info!("created tournament {}", id);
        Ok(id)
    }

    /// Add a player to the roster and return the updated roster.
    pub fn add_player(&self, tournament_id: TournamentId, player: Player) -> Result<Roster, TournamentError> {
        let mut g = self.write()?;
        let entry = g
            .tournaments
            .get_mut(&tournament_id)
            .ok_or(TournamentError::TournamentNotFound(tournament_id))?
            .touch();
        entry.roster.add_player(player)?;
        log::info!(
            "tournament {}: roster now has {} players",
            tournament_id,
            entry.roster.players.len()
        );
        Ok(entry.roster.clone())
    }

    /// Replace the tournament's games with a snapshot from the game service.
    /// Every game must pair two different roster players, and game ids must
    /// not be used by any other tournament in the store.
    pub fn replace_games(&self, tournament_id: TournamentId, games: Vec<GameRef>) -> Result<(), TournamentError> {
        let mut g = self.write()?;
        let state = &mut *g;
        let entry = state
            .tournaments
            .get(&tournament_id)
            .ok_or(TournamentError::TournamentNotFound(tournament_id))?;
        let mut ids = HashSet::new();
        for game in &games {
            if game.player1.id == game.player2.id {
                return Err(TournamentError::SelfPairing(game.player1.id));
            }
            for id in [game.player1.id, game.player2.id] {
                if !entry.roster.contains(id) {
                    return Err(TournamentError::PlayerNotFound(id));
                }
            }
            if !ids.insert(game.id) {
                return Err(TournamentError::GameIdInUse {
                    game_id: game.id,
                    tournament_id,
                });
            }
        }
        let clash = state
            .tournaments
            .iter()
            .filter(|(id, _)| **id != tournament_id)
            .find_map(|(id, other)| other.games.iter().find(|g| ids.contains(&g.id)).map(|g| (*id, g.id)));
        if let Some((other_id, game_id)) = clash {
            return Err(TournamentError::GameIdInUse {
                game_id,
                tournament_id: other_id,
            });
        }
        if let Some(max_id) = games.iter().map(|g| g.id).max() {
            let after = max_id
                .checked_add(1)
                .ok_or(TournamentError::GameIdOutOfRange(max_id))?;
            state.next_game_id = state.next_game_id.max(after);
        }

        let entry = state
            .tournaments
            .get_mut(&tournament_id)
            .ok_or(TournamentError::TournamentNotFound(tournament_id))?
            .touch();
        log::info!("tournament {}: imported {} games", tournament_id, games.len());
        entry.games = games;
        Ok(())
    }

    /// Drop tournaments idle for at least `timeout`. Returns how many were removed.
    pub fn remove_inactive(&self, timeout: Duration) -> Result<usize, TournamentError> {
        let mut g = self.write()?;
        let before = g.tournaments.len();
        g.tournaments.retain(|_, entry| entry.last_activity.elapsed() < timeout);
        Ok(before - g.tournaments.len())
    }
}

impl TournamentSource for MemoryStore {
    fn fetch_roster(&self, tournament_id: TournamentId) -> Result<Roster, TournamentError> {
        let mut g = self.write()?;
        g.tournaments
            .get_mut(&tournament_id)
            .map(|entry| entry.touch().roster.clone())
            .ok_or(TournamentError::TournamentNotFound(tournament_id))
    }

    fn fetch_games(&self, tournament_id: TournamentId) -> Result<Vec<GameRef>, TournamentError> {
        let mut g = self.write()?;
        g.tournaments
            .get_mut(&tournament_id)
            .map(|entry| entry.touch().games.clone())
            .ok_or(TournamentError::TournamentNotFound(tournament_id))
    }
}

impl GameService for MemoryStore {
    fn create_game(&self, request: &CreateGameRequest) -> Result<GameId, TournamentError> {
        let (first, second) = (request.first_user_id, request.second_user_id);
        if first == second {
            return Err(TournamentError::SelfPairing(first));
        }
        let mut g = self.write()?;
        let state = &mut *g;
        let entry = state
            .tournaments
            .get_mut(&request.tournament_id)
            .ok_or(TournamentError::TournamentNotFound(request.tournament_id))?
            .touch();
        for id in [first, second] {
            if !entry.roster.contains(id) {
                return Err(TournamentError::PlayerNotFound(id));
            }
        }
        if let Some(existing) = entry.games.iter().find(|g| g.pairs(first, second)) {
            return Err(TournamentError::GameAlreadyExists { game_id: existing.id });
        }

        let game_id = state.next_game_id;
        state.next_game_id = game_id
            .checked_add(1)
            .ok_or(TournamentError::GameIdOutOfRange(game_id))?;
        entry.games.push(GameRef::new(
            game_id,
            GameSide::new(first, 0.0),
            GameSide::new(second, 0.0),
            GameStatus::Waiting,
        ));
        log::info!(
            "tournament {}: game {} created, {} invited {}",
            request.tournament_id,
            game_id,
            first,
            second
        );
        Ok(game_id)
    }

    fn accept_game(&self, game_id: GameId) -> Result<(), TournamentError> {
        let mut g = self.write()?;
        let game = g
            .tournaments
            .values_mut()
            .flat_map(|entry| entry.games.iter_mut())
            .find(|game| game.id == game_id)
            .ok_or(TournamentError::GameNotFound(game_id))?;
        if game.status != GameStatus::Waiting {
            return Err(TournamentError::GameNotWaiting {
                game_id,
                status: game.status.clone(),
            });
        }
        game.status = GameStatus::Active;
        log::info!("game {} accepted", game_id);
        Ok(())
    }
}
