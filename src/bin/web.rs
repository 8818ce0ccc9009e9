//! Single binary web server: HTML from templates/, static from /static, API via REST.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default. Override with env: HOST (e.g. 0.0.0.0), PORT (e.g. 8080).

use actix_files::Files;
use actix_web::{
    delete, get, post,
    web::{self, Data, Json, Path},
    App, HttpResponse, HttpServer, Responder,
};
use group_draw_web::{
    draw_tournament, group_fixtures, group_standings, parse_csv, submit_results, MemoryStore, Pot,
    ScoreInput, Tournament, TournamentError, TournamentId, TournamentStore,
};
use serde::Deserialize;
use std::sync::{RwLock, RwLockWriteGuard};
use std::time::Duration;

/// In-memory state: many tournaments by ID. Entries are removed after 12h inactivity.
type AppState = Data<RwLock<MemoryStore>>;

/// Inactivity threshold: tournaments not accessed for this long are removed.
const INACTIVITY_TIMEOUT: Duration = Duration::from_secs(12 * 3600);

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
struct CreateTournamentBody {
    #[serde(default)]
    name: String,
    pot_count: u32,
    group_count: u32,
}

/// One pot as typed: one player name per line.
#[derive(Deserialize)]
struct PotBody {
    pot: u32,
    #[serde(default)]
    players: String,
}

#[derive(Deserialize)]
struct DrawBody {
    pots: Vec<PotBody>,
}

#[derive(Deserialize)]
struct SubmitResultsBody {
    results: Vec<ScoreInput>,
}

/// Path segment: tournament id (e.g. /api/tournaments/{id})
#[derive(Deserialize)]
struct TournamentPath {
    id: TournamentId,
}

/// Path segments: tournament id and group number (e.g. /api/tournaments/{id}/groups/{group})
#[derive(Deserialize)]
struct TournamentGroupPath {
    id: TournamentId,
    group: u32,
}

/// 404 for unknown tournaments/groups, 400 for everything else.
fn error_response(e: &TournamentError) -> HttpResponse {
    let body = serde_json::json!({ "error": e.to_string(), "kind": e.kind() });
    if e.is_not_found() {
        HttpResponse::NotFound().json(body)
    } else {
        HttpResponse::BadRequest().json(body)
    }
}

/// Write lock plus activity refresh for one tournament.
fn lock_tournament(
    state: &AppState,
    id: TournamentId,
) -> Result<RwLockWriteGuard<'_, MemoryStore>, HttpResponse> {
    let mut g = state
        .write()
        .map_err(|_| HttpResponse::InternalServerError().body("lock error"))?;
    g.touch(id).map_err(|e| error_response(&e))?;
    Ok(g)
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "group-draw-web",
    })
}

/// Avoid 404 in browser tab: favicon not required for app logic.
#[get("/favicon.ico")]
async fn favicon() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

/// Create a new tournament with a fixed pot and group count.
#[post("/api/tournaments")]
async fn api_create_tournament(state: AppState, body: Json<CreateTournamentBody>) -> HttpResponse {
    let tournament = match Tournament::new(&body.name, body.pot_count, body.group_count) {
        Ok(t) => t,
        Err(e) => return error_response(&e),
    };
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let id = g.insert(tournament);
    log::info!(
        "Created tournament {} ({} pots, {} groups)",
        id,
        body.pot_count,
        body.group_count
    );
    match g.get(id) {
        Ok(t) => HttpResponse::Ok().json(t),
        Err(e) => error_response(&e),
    }
}

/// Get a tournament by id (404 if not found). Touching it refreshes last activity.
#[get("/api/tournaments/{id}")]
async fn api_get_tournament(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    let g = match lock_tournament(&state, path.id) {
        Ok(g) => g,
        Err(resp) => return resp,
    };
    match g.get(path.id) {
        Ok(t) => HttpResponse::Ok().json(t),
        Err(e) => error_response(&e),
    }
}

/// Delete a tournament with all its players and results.
#[delete("/api/tournaments/{id}")]
async fn api_delete_tournament(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.remove(path.id) {
        Ok(_) => HttpResponse::NoContent().finish(),
        Err(e) => error_response(&e),
    }
}

/// Draw players into groups from pot text boxes. Replaces any previous draw.
#[post("/api/tournaments/{id}/draw")]
async fn api_draw(state: AppState, path: Path<TournamentPath>, body: Json<DrawBody>) -> HttpResponse {
    let mut g = match lock_tournament(&state, path.id) {
        Ok(g) => g,
        Err(resp) => return resp,
    };
    let pots: Vec<Pot> = body
        .pots
        .iter()
        .map(|p| Pot::from_lines(p.pot, &p.players))
        .collect();
    let result = draw_tournament(&mut *g, path.id, &pots, &mut rand::thread_rng());
    match result.and_then(|_| g.get(path.id)) {
        Ok(t) => HttpResponse::Ok().json(t.groups()),
        Err(e) => error_response(&e),
    }
}

/// Draw players into groups from a CSV roster (`pot,name` header).
#[post("/api/tournaments/{id}/draw/csv")]
async fn api_draw_csv(state: AppState, path: Path<TournamentPath>, body: String) -> HttpResponse {
    let mut g = match lock_tournament(&state, path.id) {
        Ok(g) => g,
        Err(resp) => return resp,
    };
    let result = g
        .shape(path.id)
        .and_then(|shape| parse_csv(&body, shape.pot_count))
        .and_then(|pots| draw_tournament(&mut *g, path.id, &pots, &mut rand::thread_rng()));
    match result.and_then(|_| g.get(path.id)) {
        Ok(t) => HttpResponse::Ok().json(t.groups()),
        Err(e) => error_response(&e),
    }
}

/// The current draw: every group with its players ordered by pot.
#[get("/api/tournaments/{id}/groups")]
async fn api_groups(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    let g = match lock_tournament(&state, path.id) {
        Ok(g) => g,
        Err(resp) => return resp,
    };
    match g.get(path.id) {
        Ok(t) => HttpResponse::Ok().json(t.groups()),
        Err(e) => error_response(&e),
    }
}

/// Round-robin fixtures of a group, pre-filled with recorded scores.
#[get("/api/tournaments/{id}/groups/{group}/fixtures")]
async fn api_fixtures(state: AppState, path: Path<TournamentGroupPath>) -> HttpResponse {
    let g = match lock_tournament(&state, path.id) {
        Ok(g) => g,
        Err(resp) => return resp,
    };
    match group_fixtures(&*g, path.id, path.group) {
        Ok(fixtures) => HttpResponse::Ok().json(fixtures),
        Err(e) => error_response(&e),
    }
}

/// Submit a batch of scores for a group. Bad lines are reported, the rest recorded.
#[post("/api/tournaments/{id}/groups/{group}/results")]
async fn api_submit_results(
    state: AppState,
    path: Path<TournamentGroupPath>,
    body: Json<SubmitResultsBody>,
) -> HttpResponse {
    let mut g = match lock_tournament(&state, path.id) {
        Ok(g) => g,
        Err(resp) => return resp,
    };
    match submit_results(&mut *g, path.id, path.group, &body.results) {
        Ok(report) => HttpResponse::Ok().json(report),
        Err(e) => error_response(&e),
    }
}

/// Standings table of a group, computed from its recorded results.
#[get("/api/tournaments/{id}/groups/{group}/standings")]
async fn api_standings(state: AppState, path: Path<TournamentGroupPath>) -> HttpResponse {
    let g = match lock_tournament(&state, path.id) {
        Ok(g) => g,
        Err(resp) => return resp,
    };
    match group_standings(&*g, path.id, path.group) {
        Ok(rows) => HttpResponse::Ok().json(rows),
        Err(e) => error_response(&e),
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let host = std::env::var("HOST").unwrap_or_else(|_| default_host());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or_else(default_port);
    let bind = (host.as_str(), port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    let state = Data::new(RwLock::new(MemoryStore::new()));

    // Background task: every 30 minutes, remove tournaments inactive for 12+ hours
    let state_cleanup = state.clone();
    actix_web::rt::spawn(async move {
        let mut interval = actix_web::rt::time::interval(Duration::from_secs(30 * 60));
        loop {
            interval.tick().await;
            let mut g = match state_cleanup.write() {
                Ok(guard) => guard,
                Err(_) => continue,
            };
            match g.purge_inactive(INACTIVITY_TIMEOUT) {
                0 => log::debug!("Inactivity sweep: {} tournament(s) kept", g.len()),
                purged => log::info!(
                    "Inactivity sweep: purged {}, {} tournament(s) kept",
                    purged,
                    g.len()
                ),
            }
        }
    });

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .route("/", web::get().to(serve_index_async))
            .service(api_health)
            .service(favicon)
            .service(api_create_tournament)
            .service(api_get_tournament)
            .service(api_delete_tournament)
            .service(api_draw)
            .service(api_draw_csv)
            .service(api_groups)
            .service(api_fixtures)
            .service(api_submit_results)
            .service(api_standings)
            .service(Files::new("/static", "static").show_files_listing())
    })
    .bind(bind)?
    .run()
    .await
}

async fn serve_index_async() -> HttpResponse {
    let html = include_str!("../../templates/index.html");
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html)
}
