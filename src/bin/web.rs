//! Single binary web server: tournament rosters, games and the cross-table via REST.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default. Override with env: HOST, PORT.

use actix_web::{
    get, post, put,
    web::{Data, Json, Path, Query},
    App, HttpResponse, HttpServer, Responder,
};
use serde::{Deserialize, Serialize};
use tournament_table::config::{ServerConfig, CLEANUP_INTERVAL, INACTIVITY_TIMEOUT};
use tournament_table::{
    load_snapshot, perform, Cell, CellAction, GameId, GameRef, Matrix, MemoryStore, Player, PlayerId,
    TournamentConfig, TournamentError, TournamentId, TournamentSource,
};

type AppState = Data<MemoryStore>;

#[derive(Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

/// Path segment: tournament id (e.g. /api/tournaments/{id})
#[derive(Deserialize)]
struct TournamentPath {
    id: TournamentId,
}

#[derive(Deserialize)]
struct GamePath {
    game_id: GameId,
}

#[derive(Deserialize)]
struct TableQuery {
    viewer: Option<PlayerId>,
}

#[derive(Deserialize)]
struct CreateGameBody {
    viewer_id: PlayerId,
    opponent_id: PlayerId,
}

#[derive(Serialize)]
struct CreatedTournament {
    id: TournamentId,
    roster: tournament_table::Roster,
}

/// The table plus, for each cell, what clicking it does.
#[derive(Serialize)]
struct TableResponse {
    matrix: Matrix,
    actions: Vec<Vec<Option<CellAction>>>,
}

#[derive(Serialize)]
struct RedirectResponse {
    redirect: String,
}

fn error_response(e: TournamentError) -> HttpResponse {
    let body = serde_json::json!({ "error": e.to_string() });
    match e {
        TournamentError::TournamentNotFound(_) | TournamentError::GameNotFound(_) => {
            HttpResponse::NotFound().json(body)
        }
        TournamentError::StoreUnavailable => {
            log::error!("tournament store lock poisoned");
            HttpResponse::InternalServerError().json(body)
        }
        _ => HttpResponse::BadRequest().json(body),
    }
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "tournament-table",
    })
}

/// Create a tournament (returns its id; client stores it for subsequent requests).
#[post("/api/tournaments")]
async fn api_create_tournament(state: AppState, body: Json<TournamentConfig>) -> HttpResponse {
    let created = state
        .create_tournament(body.into_inner())
        .and_then(|id| Ok(CreatedTournament { id, roster: state.fetch_roster(id)? }));
    match created {
        Ok(created) => HttpResponse::Ok().json(created),
        Err(e) => error_response(e),
    }
}

#[get("/api/tournaments/{id}")]
async fn api_get_roster(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    match state.fetch_roster(path.id) {
        Ok(roster) => HttpResponse::Ok().json(roster),
        Err(e) => error_response(e),
    }
}

#[post("/api/tournaments/{id}/players")]
async fn api_add_player(state: AppState, path: Path<TournamentPath>, body: Json<Player>) -> HttpResponse {
    match state.add_player(path.id, body.into_inner()) {
        Ok(roster) => HttpResponse::Ok().json(roster),
        Err(e) => error_response(e),
    }
}

#[get("/api/tournaments/{id}/games")]
async fn api_get_games(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    match state.fetch_games(path.id) {
        Ok(games) => HttpResponse::Ok().json(games),
        Err(e) => error_response(e),
    }
}

/// Import the tournament's games as reported by the game service.
#[put("/api/tournaments/{id}/games")]
async fn api_replace_games(state: AppState, path: Path<TournamentPath>, body: Json<Vec<GameRef>>) -> HttpResponse {
    match state.replace_games(path.id, body.into_inner()) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(e) => error_response(e),
    }
}

/// Cross-table as seen by `?viewer=<player id>` (anonymous if omitted).
#[get("/api/tournaments/{id}/table")]
async fn api_get_table(state: AppState, path: Path<TournamentPath>, query: Query<TableQuery>) -> HttpResponse {
    let snapshot = match load_snapshot(state.get_ref(), path.id) {
        Ok(s) => s,
        Err(e) => return error_response(e),
    };
    let matrix = snapshot.cross_table(query.viewer);
    let ctx = snapshot.action_context(query.viewer);
    let actions = matrix
        .rows
        .iter()
        .map(|row| row.cells.iter().map(|cell| cell.action(&ctx)).collect())
        .collect();
    HttpResponse::Ok().json(TableResponse { matrix, actions })
}

/// Start the viewer's game against an opponent (an `Invite` cell click).
#[post("/api/tournaments/{id}/games/create")]
async fn api_create_game(state: AppState, path: Path<TournamentPath>, body: Json<CreateGameBody>) -> HttpResponse {
    let snapshot = match load_snapshot(state.get_ref(), path.id) {
        Ok(s) => s,
        Err(e) => return error_response(e),
    };
    let ctx = snapshot.action_context(Some(body.viewer_id));
    let invite = Cell::Invite {
        opponent_id: body.opponent_id,
    };
    let Some(action) = invite.action(&ctx) else {
        return HttpResponse::BadRequest().json(serde_json::json!({ "error": "Nothing to create" }));
    };
    match perform(&action, state.get_ref()) {
        Ok(redirect) => HttpResponse::Ok().json(RedirectResponse { redirect }),
        Err(e) => error_response(e),
    }
}

/// Accept a pending invitation and enter the game.
#[post("/api/games/{game_id}/accept")]
async fn api_accept_game(state: AppState, path: Path<GamePath>) -> HttpResponse {
    let action = CellAction::AcceptAndEnter { game_id: path.game_id };
    match perform(&action, state.get_ref()) {
        Ok(redirect) => HttpResponse::Ok().json(RedirectResponse { redirect }),
        Err(e) => error_response(e),
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = ServerConfig::from_env();
    log::info!("Starting server at http://{}:{}", config.host, config.port);

    let state = Data::new(MemoryStore::new());

    // Background task: periodically remove tournaments nobody has touched for a while
    let state_cleanup = state.clone();
    actix_web::rt::spawn(async move {
        let mut interval = actix_web::rt::time::interval(CLEANUP_INTERVAL);
        loop {
            interval.tick().await;
            match state_cleanup.remove_inactive(INACTIVITY_TIMEOUT) {
                Ok(0) => {}
                Ok(removed) => log::info!("Cleaned up {} inactive tournament(s)", removed),
                Err(e) => log::warn!("Cleanup skipped: {}", e),
            }
        }
    });

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .service(api_health)
            .service(api_create_tournament)
            .service(api_get_roster)
            .service(api_add_player)
            .service(api_get_games)
            .service(api_replace_games)
            .service(api_get_table)
            .service(api_create_game)
            .service(api_accept_game)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
