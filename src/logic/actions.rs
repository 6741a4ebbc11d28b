//! What clicking an interactive cell does: start a game, accept an invitation
//! or just open the game page.

use crate::logic::cell::Cell;
use crate::models::{GameId, PlayerId, TimeControl, TournamentConfig, TournamentError, TournamentId};
use serde::{Deserialize, Serialize};

/// Page of a single game.
pub fn game_path(game_id: GameId) -> String {
    format!("/game/{}", game_id)
}

/// Everything an `Invite` cell needs besides the opponent.
#[derive(Clone, Debug, PartialEq)]
pub struct ActionContext {
    pub tournament_id: TournamentId,
    pub config: TournamentConfig,
    pub viewer: Option<PlayerId>,
}

/// Request to start a tournament game between the viewer and an opponent.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct CreateGameRequest {
    pub tournament_id: TournamentId,
    pub game_type: String,
    /// The viewer, who sends the invitation.
    pub first_user_id: PlayerId,
    pub second_user_id: PlayerId,
    #[serde(default)]
    pub time_control: TimeControl,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum CellAction {
    CreateGame(CreateGameRequest),
    /// Accept the pending invitation, then open the game.
    AcceptAndEnter { game_id: GameId },
    Enter { game_id: GameId },
}

impl Cell {
    /// Action behind this cell, or None for display-only cells.
    pub fn action(&self, ctx: &ActionContext) -> Option<CellAction> {
        match *self {
            Cell::Invite { opponent_id } => Some(CellAction::CreateGame(CreateGameRequest {
                tournament_id: ctx.tournament_id,
                game_type: ctx.config.tournament_type.clone(),
                first_user_id: ctx.viewer?,
                second_user_id: opponent_id,
                time_control: ctx.config.time_control,
            })),
            Cell::EnterGame {
                game_id,
                awaiting_accept: true,
            } => Some(CellAction::AcceptAndEnter { game_id }),
            Cell::EnterGame {
                game_id,
                awaiting_accept: false,
            } => Some(CellAction::Enter { game_id }),
            Cell::Empty | Cell::NoGame | Cell::InProgress | Cell::Finished { .. } => None,
        }
    }
}

/// Game creation and acceptance, provided by the game service.
pub trait GameService {
    fn create_game(&self, request: &CreateGameRequest) -> Result<GameId, TournamentError>;
    fn accept_game(&self, game_id: GameId) -> Result<(), TournamentError>;
}

/// Run `action` against `service` and return where to send the viewer.
pub fn perform<S: GameService + ?Sized>(action: &CellAction, service: &S) -> Result<String, TournamentError> {
    let game_id = match action {
        CellAction::CreateGame(request) => service.create_game(request)?,
        CellAction::AcceptAndEnter { game_id } => {
            service.accept_game(*game_id)?;
            *game_id
        }
        CellAction::Enter { game_id } => *game_id,
    };
    Ok(game_path(game_id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingService {
        calls: RefCell<Vec<String>>,
    }

    impl GameService for RecordingService {
        fn create_game(&self, request: &CreateGameRequest) -> Result<GameId, TournamentError> {
            self.calls
                .borrow_mut()
                .push(format!("create {} vs {}", request.first_user_id, request.second_user_id));
            Ok(77)
        }

        fn accept_game(&self, game_id: GameId) -> Result<(), TournamentError> {
            self.calls.borrow_mut().push(format!("accept {}", game_id));
            Ok(())
        }
    }

    fn ctx(viewer: Option<PlayerId>) -> ActionContext {
        ActionContext {
            tournament_id: uuid::Uuid::nil(),
            config: TournamentConfig {
                tournament_type: "blitz".to_string(),
                time_control: TimeControl::new(0, 0, 5, 0),
            },
            viewer,
        }
    }

    #[test]
    fn invite_becomes_create_request() {
        let action = Cell::Invite { opponent_id: 2 }.action(&ctx(Some(1))).unwrap();
        let CellAction::CreateGame(req) = &action else {
            panic!("expected create, got {:?}", action);
        };
        assert_eq!(req.first_user_id, 1);
        assert_eq!(req.second_user_id, 2);
        assert_eq!(req.game_type, "blitz");
        assert_eq!(req.time_control, TimeControl::new(0, 0, 5, 0));

        let service = RecordingService::default();
        assert_eq!(perform(&action, &service).unwrap(), "/game/77");
        assert_eq!(*service.calls.borrow(), vec!["create 1 vs 2".to_string()]);
    }

    #[test]
    fn invite_without_viewer_has_no_action() {
        assert_eq!(Cell::Invite { opponent_id: 2 }.action(&ctx(None)), None);
    }

    #[test]
    fn waiting_game_is_accepted_before_entering() {
        let cell = Cell::EnterGame {
            game_id: 5,
            awaiting_accept: true,
        };
        let action = cell.action(&ctx(Some(1))).unwrap();
        let service = RecordingService::default();
        assert_eq!(perform(&action, &service).unwrap(), "/game/5");
        assert_eq!(*service.calls.borrow(), vec!["accept 5".to_string()]);
    }

    #[test]
    fn active_game_is_entered_directly() {
        let cell = Cell::EnterGame {
            game_id: 6,
            awaiting_accept: false,
        };
        let action = cell.action(&ctx(Some(1))).unwrap();
        let service = RecordingService::default();
        assert_eq!(perform(&action, &service).unwrap(), "/game/6");
        assert!(service.calls.borrow().is_empty());
    }

    #[test]
    fn display_cells_have_no_action() {
        for cell in [Cell::Empty, Cell::NoGame, Cell::InProgress, Cell::Finished { score: 1.0 }] {
            assert!(!cell.is_interactive());
            assert_eq!(cell.action(&ctx(Some(1))), None);
        }
    }
}
