//! Single binary web server: JSON API for running phrase game sessions.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default.
//! Override with env: HOST, PORT, GAME_CONFIG (path to the JSON config, created if missing).

use actix_web::{
    get, post,
    web::{Data, Json, Path},
    App, HttpResponse, HttpServer, Responder,
};
use chrono::Utc;
use phrase_party::{
    guess_letter, next_phrase, next_player, select_player, solve, start_game, GameConfig,
    GameSession, SessionId, SessionSnapshot,
};
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};

/// Per-session entry: game state + last activity time (for auto-cleanup).
struct SessionEntry {
    session: GameSession,
    last_activity: Instant,
}

/// Sessions by id, plus the config every new session starts from.
struct Sessions {
    config: GameConfig,
    entries: RwLock<HashMap<SessionId, SessionEntry>>,
}

type AppState = Data<Sessions>;

/// Inactivity threshold: sessions not accessed for this long are removed.
const INACTIVITY_TIMEOUT: Duration = Duration::from_secs(12 * 3600);

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
struct PlayerNameBody {
    name: String,
}

#[derive(Deserialize)]
struct GuessBody {
    letter: char,
}

#[derive(Deserialize)]
struct SolveBody {
    attempt: String,
}

/// Path segment: session id (e.g. /api/sessions/{id})
#[derive(Deserialize)]
struct SessionPath {
    id: SessionId,
}

fn error_json(status: actix_web::http::StatusCode, msg: impl std::fmt::Display) -> HttpResponse {
    HttpResponse::build(status).json(serde_json::json!({ "error": msg.to_string() }))
}

/// Run `action` on one session and answer with its snapshot.
/// Errors from the action become 400; an unknown id is 404.
fn with_session<E, F>(state: &AppState, id: SessionId, action: F) -> HttpResponse
where
    E: std::fmt::Display,
    F: FnOnce(&mut GameSession) -> Result<(), E>,
{
    use actix_web::http::StatusCode;

    let mut g = match state.entries.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&id) {
        Some(e) => e,
        None => return error_json(StatusCode::NOT_FOUND, "No session"),
    };
    entry.last_activity = Instant::now();
    match action(&mut entry.session) {
        Ok(()) => HttpResponse::Ok().json(SessionSnapshot::capture(&entry.session, Utc::now())),
        Err(e) => error_json(StatusCode::BAD_REQUEST, e),
    }
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "phrase-party",
    })
}

/// Create a new session in the lobby (client keeps the id for later requests).
#[post("/api/sessions")]
async fn api_create_session(state: AppState) -> HttpResponse {
    let session = match GameSession::new(&state.config) {
        Ok(s) => s,
        Err(e) => return HttpResponse::InternalServerError().json(serde_json::json!({ "error": e.to_string() })),
    };
    let id = session.id;
    let snapshot = SessionSnapshot::capture(&session, Utc::now());
    let mut g = match state.entries.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    g.insert(
        id,
        SessionEntry {
            session,
            last_activity: Instant::now(),
        },
    );
    log::info!("Created session {}", id);
    HttpResponse::Ok().json(snapshot)
}

/// Get a session snapshot. Touching it refreshes last_activity.
#[get("/api/sessions/{id}")]
async fn api_get_session(state: AppState, path: Path<SessionPath>) -> HttpResponse {
    with_session(&state, path.id, |_| Ok::<(), std::convert::Infallible>(()))
}

/// Add a player. Blank or duplicate names are ignored, the snapshot shows the result.
#[post("/api/sessions/{id}/players")]
async fn api_add_player(state: AppState, path: Path<SessionPath>, body: Json<PlayerNameBody>) -> HttpResponse {
    with_session(&state, path.id, |s| {
        s.add_player(&body.name);
        Ok::<(), std::convert::Infallible>(())
    })
}

/// Remove every player.
#[post("/api/sessions/{id}/reset-players")]
async fn api_reset_players(state: AppState, path: Path<SessionPath>) -> HttpResponse {
    with_session(&state, path.id, |s| {
        s.reset_players();
        Ok::<(), std::convert::Infallible>(())
    })
}

/// Zero all scores, keep players.
#[post("/api/sessions/{id}/reset-scores")]
async fn api_reset_scores(state: AppState, path: Path<SessionPath>) -> HttpResponse {
    with_session(&state, path.id, |s| {
        s.reset_scores();
        Ok::<(), std::convert::Infallible>(())
    })
}

/// Make the named player current.
#[post("/api/sessions/{id}/select")]
async fn api_select_player(state: AppState, path: Path<SessionPath>, body: Json<PlayerNameBody>) -> HttpResponse {
    with_session(&state, path.id, |s| select_player(s, &body.name, Utc::now()))
}

/// Pass the turn on.
#[post("/api/sessions/{id}/next-player")]
async fn api_next_player(state: AppState, path: Path<SessionPath>) -> HttpResponse {
    with_session(&state, path.id, |s| next_player(s, Utc::now()).map(|_| ()))
}

/// Start the game: reset scores and load the first phrase.
#[post("/api/sessions/{id}/start")]
async fn api_start_game(state: AppState, path: Path<SessionPath>) -> HttpResponse {
    with_session(&state, path.id, |s| {
        start_game(s, Utc::now());
        Ok::<(), std::convert::Infallible>(())
    })
}

/// Load the next phrase.
#[post("/api/sessions/{id}/next-phrase")]
async fn api_next_phrase(state: AppState, path: Path<SessionPath>) -> HttpResponse {
    with_session(&state, path.id, |s| {
        next_phrase(s, Utc::now());
        Ok::<(), std::convert::Infallible>(())
    })
}

/// Guess a letter for the current player.
#[post("/api/sessions/{id}/guess")]
async fn api_guess(state: AppState, path: Path<SessionPath>, body: Json<GuessBody>) -> HttpResponse {
    with_session(&state, path.id, |s| guess_letter(s, body.letter, Utc::now()).map(|_| ()))
}

/// Attempt to solve the phrase. A wrong attempt is not an error; the snapshot is unchanged.
#[post("/api/sessions/{id}/solve")]
async fn api_solve(state: AppState, path: Path<SessionPath>, body: Json<SolveBody>) -> HttpResponse {
    with_session(&state, path.id, |s| solve(s, &body.attempt).map(|_| ()))
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_config_path() -> String {
    "game_config.json".to_string()
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let host = std::env::var("HOST").unwrap_or_else(|_| default_host());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or_else(default_port);
    let config_path = std::env::var("GAME_CONFIG").unwrap_or_else(|_| default_config_path());
    let config = GameConfig::load(std::path::Path::new(&config_path)).map_err(|e| {
        log::error!("Cannot load config {}: {}", config_path, e);
        std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
    })?;

    let bind = (host.as_str(), port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    let state = Data::new(Sessions {
        config,
        entries: RwLock::new(HashMap::new()),
    });

    // Background task: every 30 minutes, remove sessions inactive for 12+ hours
    let state_cleanup = state.clone();
    actix_web::rt::spawn(async move {
        let mut interval = actix_web::rt::time::interval(Duration::from_secs(30 * 60));
        loop {
            interval.tick().await;
            let mut g = match state_cleanup.entries.write() {
                Ok(guard) => guard,
                Err(_) => continue,
            };
            let before = g.len();
            g.retain(|_, entry| entry.last_activity.elapsed() < INACTIVITY_TIMEOUT);
            let removed = before - g.len();
            if removed > 0 {
                log::info!("Cleaned up {} inactive session(s) (no activity for 12h)", removed);
            }
        }
    });

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .service(api_health)
            .service(api_create_session)
            .service(api_get_session)
            .service(api_add_player)
            .service(api_reset_players)
            .service(api_reset_scores)
            .service(api_select_player)
            .service(api_next_player)
            .service(api_start_game)
            .service(api_next_phrase)
            .service(api_guess)
            .service(api_solve)
    })
    .bind(bind)?
    .run()
    .await
}
