//! Loading a tournament: roster first, then its games, into one snapshot.

use crate::logic::{build, ActionContext, Matrix};
use crate::models::{GameRef, PlayerId, Roster, TournamentError, TournamentId};

/// Where roster and game data come from.
pub trait TournamentSource {
    fn fetch_roster(&self, tournament_id: TournamentId) -> Result<Roster, TournamentError>;
    fn fetch_games(&self, tournament_id: TournamentId) -> Result<Vec<GameRef>, TournamentError>;
}

/// Roster and games of one tournament, read once and not changed afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct TournamentSnapshot {
    pub tournament_id: TournamentId,
    pub roster: Roster,
    pub games: Vec<GameRef>,
}

impl TournamentSnapshot {
    pub fn cross_table(&self, viewer: Option<PlayerId>) -> Matrix {
        build(&self.roster.players, &self.games, viewer)
    }

    pub fn action_context(&self, viewer: Option<PlayerId>) -> ActionContext {
        ActionContext {
            tournament_id: self.tournament_id,
            config: self.roster.config.clone(),
            viewer,
        }
    }
}

/// Fetch the roster, then the games. Games are only requested once the
/// roster has loaded; any failure is returned as is, without retry.
pub fn load_snapshot<S: TournamentSource + ?Sized>(
    source: &S,
    tournament_id: TournamentId,
) -> Result<TournamentSnapshot, TournamentError> {
    let roster = source.fetch_roster(tournament_id)?;
    log::debug!("tournament {}: roster of {} players", tournament_id, roster.players.len());
    let games = source.fetch_games(tournament_id)?;
    log::debug!("tournament {}: {} games", tournament_id, games.len());
    Ok(TournamentSnapshot {
        tournament_id,
        roster,
        games,
    })
}
