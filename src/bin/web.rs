//! Single binary web server: REST API for the soccer tournament manager.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default so the app is reachable via DNS on a VPS.
//! Override with env: HOST, PORT, SEED_DIR (reference data CSVs),
//! ADMIN_USER / ADMIN_PASSWORD (initial admin account).

use actix_session::{storage::CookieSessionStore, Session, SessionMiddleware};
use actix_web::{
    cookie::Key,
    delete, get, post, put,
    web::{Data, Json, Path},
    App, HttpResponse, HttpServer, Responder,
};
use serde::Deserialize;
use soccer_tournament_web::{
    approve_player, create_played, create_player, create_scheduled, create_team,
    create_tournament, create_venue, delete_played, delete_scheduled, delete_tournament,
    list_tournaments, load_reference_dir, log_in, played_match_views, register_team,
    scheduled_match_views, sign_up, team_roster, transition_to_played, update_played,
    update_scheduled, ErrorKind, League, MatchNo, MatchOutcome, NewAccount, Player,
    PlayedMatchFields, PlayerId, Role, ScheduledMatchFields, Team, TeamId, Tournament,
    TournamentError, TournamentId, Venue,
};
use std::sync::RwLock;

/// In-memory state: accounts, reference data, and the two match stores.
/// One write guard is the scope of a unit of work.
type AppState = Data<RwLock<League>>;

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
struct LoginBody {
    username: String,
    password: String,
}

#[derive(Deserialize)]
struct RegisterTeamBody {
    team_id: TeamId,
    team_group: String,
}

#[derive(Deserialize)]
struct CreateScheduledMatchBody {
    match_no: MatchNo,
    #[serde(flatten)]
    fields: ScheduledMatchFields,
}

#[derive(Deserialize)]
struct CreatePlayedMatchBody {
    match_no: MatchNo,
    #[serde(flatten)]
    fields: PlayedMatchFields,
}

/// Path segment: tournament id (e.g. /api/admin/tournaments/{tr_id})
#[derive(Deserialize)]
struct TournamentPath {
    tr_id: TournamentId,
}

/// Path segments: tournament id and match number.
#[derive(Deserialize)]
struct MatchPath {
    tr_id: TournamentId,
    match_no: MatchNo,
}

/// Path segments: tournament id and team id.
#[derive(Deserialize)]
struct TeamPath {
    tr_id: TournamentId,
    team_id: TeamId,
}

/// Path segments: tournament id, team id and player id.
#[derive(Deserialize)]
struct TeamPlayerPath {
    tr_id: TournamentId,
    team_id: TeamId,
    player_id: PlayerId,
}

/// Map an operation error onto its HTTP response by taxonomy bucket.
fn error_response(err: &TournamentError) -> HttpResponse {
    let body = serde_json::json!({ "error": err.to_string() });
    match err.kind() {
        ErrorKind::NotFound => HttpResponse::NotFound().json(body),
        ErrorKind::InvalidInput => HttpResponse::BadRequest().json(body),
        ErrorKind::Conflict => HttpResponse::Conflict().json(body),
        ErrorKind::TransactionFailed => HttpResponse::InternalServerError().json(body),
    }
}

/// Admin gate: 401 without a session, 403 for a non-admin session.
fn require_admin(session: &Session) -> Result<(), HttpResponse> {
    match session.get::<Role>("role") {
        Ok(Some(Role::Admin)) => Ok(()),
        Ok(Some(_)) => Err(HttpResponse::Forbidden()
            .json(serde_json::json!({ "error": "Admin access required" }))),
        _ => Err(HttpResponse::Unauthorized()
            .json(serde_json::json!({ "error": "Not logged in" }))),
    }
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "soccer-tournament-web",
    })
}

/// Avoid 404 in browser tab: favicon not required for app logic.
#[get("/favicon.ico")]
async fn favicon() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

/// Register a new guest account.
#[post("/api/auth/signup")]
async fn api_signup(state: AppState, body: Json<NewAccount>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match sign_up(&mut g.accounts, body.into_inner(), Role::Guest) {
        Ok(account) => HttpResponse::Created().json(account),
        Err(e) => error_response(&e),
    }
}

/// Log in; stores user id and role in the session cookie.
#[post("/api/auth/login")]
async fn api_login(state: AppState, session: Session, body: Json<LoginBody>) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match log_in(&g.accounts, &body.username, &body.password) {
        Ok(account) => {
            let stored = session
                .insert("user_id", account.kfupm_id)
                .and_then(|_| session.insert("username", account.username.clone()))
                .and_then(|_| session.insert("role", account.role));
            if stored.is_err() {
                return HttpResponse::InternalServerError().body("session error");
            }
            HttpResponse::Ok().json(serde_json::json!({
                "message": "Login successful",
                "user": {
                    "id": account.kfupm_id,
                    "username": account.username,
                    "role": account.role,
                }
            }))
        }
        Err(TournamentError::InvalidCredentials) => HttpResponse::Unauthorized()
            .json(serde_json::json!({ "error": "Invalid credentials" })),
        Err(e) => error_response(&e),
    }
}

#[post("/api/auth/logout")]
async fn api_logout(session: Session) -> HttpResponse {
    session.purge();
    HttpResponse::Ok().json(serde_json::json!({ "message": "Logout successful" }))
}

/// Who am I: 401 when no session is present.
#[get("/api/auth/status")]
async fn api_auth_status(session: Session) -> HttpResponse {
    match (session.get::<String>("username"), session.get::<Role>("role")) {
        (Ok(Some(username)), Ok(Some(role))) => HttpResponse::Ok().json(serde_json::json!({
            "is_logged_in": true,
            "user": { "username": username, "role": role }
        })),
        _ => HttpResponse::Unauthorized()
            .json(serde_json::json!({ "error": "Not logged in" })),
    }
}

/// Create a tournament.
#[post("/api/admin/tournaments")]
async fn api_create_tournament(
    state: AppState,
    session: Session,
    body: Json<Tournament>,
) -> HttpResponse {
    if let Err(resp) = require_admin(&session) {
        return resp;
    }
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match create_tournament(&mut g.refs, body.into_inner()) {
        Ok(t) => HttpResponse::Created().json(t),
        Err(e) => error_response(&e),
    }
}

/// Delete a tournament; cascades to its registrations, rosters and matches.
#[delete("/api/admin/tournaments/{tr_id}")]
async fn api_delete_tournament(
    state: AppState,
    session: Session,
    path: Path<TournamentPath>,
) -> HttpResponse {
    if let Err(resp) = require_admin(&session) {
        return resp;
    }
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let league = &mut *g;
    match delete_tournament(&mut league.refs, &mut league.matches, path.tr_id) {
        Ok(t) => HttpResponse::Ok().json(serde_json::json!({
            "message": "Tournament deleted successfully",
            "tournament": t,
        })),
        Err(e) => error_response(&e),
    }
}

/// Create a team (reference entity).
#[post("/api/admin/teams")]
async fn api_create_team(state: AppState, session: Session, body: Json<Team>) -> HttpResponse {
    if let Err(resp) = require_admin(&session) {
        return resp;
    }
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match create_team(&mut g.refs, body.into_inner()) {
        Ok(t) => HttpResponse::Created().json(t),
        Err(e) => error_response(&e),
    }
}

/// Create a player (reference entity).
#[post("/api/admin/players")]
async fn api_create_player(state: AppState, session: Session, body: Json<Player>) -> HttpResponse {
    if let Err(resp) = require_admin(&session) {
        return resp;
    }
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match create_player(&mut g.refs, body.into_inner()) {
        Ok(p) => HttpResponse::Created().json(p),
        Err(e) => error_response(&e),
    }
}

/// Create a venue (reference entity).
#[post("/api/admin/venues")]
async fn api_create_venue(state: AppState, session: Session, body: Json<Venue>) -> HttpResponse {
    if let Err(resp) = require_admin(&session) {
        return resp;
    }
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match create_venue(&mut g.refs, body.into_inner()) {
        Ok(v) => HttpResponse::Created().json(v),
        Err(e) => error_response(&e),
    }
}

/// All teams, for the registration forms.
#[get("/api/admin/teams")]
async fn api_list_teams(state: AppState, session: Session) -> HttpResponse {
    if let Err(resp) = require_admin(&session) {
        return resp;
    }
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let mut teams: Vec<Team> = g.refs.teams().cloned().collect();
    teams.sort_by_key(|t| t.team_id);
    HttpResponse::Ok().json(teams)
}

/// All players, for the approval forms.
#[get("/api/admin/players")]
async fn api_list_players(state: AppState, session: Session) -> HttpResponse {
    if let Err(resp) = require_admin(&session) {
        return resp;
    }
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let mut players: Vec<Player> = g.refs.players().cloned().collect();
    players.sort_by_key(|p| p.player_id);
    HttpResponse::Ok().json(players)
}

/// Register a team in a tournament.
#[post("/api/admin/tournaments/{tr_id}/teams")]
async fn api_register_team(
    state: AppState,
    session: Session,
    path: Path<TournamentPath>,
    body: Json<RegisterTeamBody>,
) -> HttpResponse {
    if let Err(resp) = require_admin(&session) {
        return resp;
    }
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let body = body.into_inner();
    match register_team(&mut g.refs, path.tr_id, body.team_id, body.team_group) {
        Ok(entry) => HttpResponse::Created().json(entry),
        Err(e) => error_response(&e),
    }
}

/// Approve a player onto a team's roster.
#[post("/api/admin/tournaments/{tr_id}/teams/{team_id}/players/{player_id}")]
async fn api_approve_player(
    state: AppState,
    session: Session,
    path: Path<TeamPlayerPath>,
) -> HttpResponse {
    if let Err(resp) = require_admin(&session) {
        return resp;
    }
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match approve_player(&mut g.refs, path.tr_id, path.team_id, path.player_id) {
        Ok(spot) => HttpResponse::Created().json(serde_json::json!({
            "message": "Player approved and added to team",
            "team_player": spot,
        })),
        Err(e) => error_response(&e),
    }
}

/// Make a player the captain of their team.
#[post("/api/admin/tournaments/{tr_id}/teams/{team_id}/captain/{player_id}")]
async fn api_set_captain(
    state: AppState,
    session: Session,
    path: Path<TeamPlayerPath>,
) -> HttpResponse {
    if let Err(resp) = require_admin(&session) {
        return resp;
    }
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.refs.set_captain(path.tr_id, path.team_id, path.player_id) {
        Ok(spot) => HttpResponse::Ok().json(serde_json::json!({
            "message": "Captain selected successfully",
            "team_player": spot,
        })),
        Err(e) => error_response(&e),
    }
}

/// Record a played match directly (administrative correction path).
#[post("/api/admin/tournaments/{tr_id}/matches")]
async fn api_create_played(
    state: AppState,
    session: Session,
    path: Path<TournamentPath>,
    body: Json<CreatePlayedMatchBody>,
) -> HttpResponse {
    if let Err(resp) = require_admin(&session) {
        return resp;
    }
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let body = body.into_inner();
    let league = &mut *g;
    match create_played(
        &league.refs,
        &mut league.matches,
        path.tr_id,
        body.match_no,
        body.fields,
    ) {
        Ok(m) => HttpResponse::Created().json(m),
        Err(e) => error_response(&e),
    }
}

/// Replace a played match's fields.
#[put("/api/admin/tournaments/{tr_id}/matches/{match_no}")]
async fn api_update_played(
    state: AppState,
    session: Session,
    path: Path<MatchPath>,
    body: Json<PlayedMatchFields>,
) -> HttpResponse {
    if let Err(resp) = require_admin(&session) {
        return resp;
    }
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let league = &mut *g;
    match update_played(
        &league.refs,
        &mut league.matches,
        path.tr_id,
        path.match_no,
        body.into_inner(),
    ) {
        Ok(m) => HttpResponse::Ok().json(m),
        Err(e) => error_response(&e),
    }
}

/// Delete a played match, returning the deleted row.
#[delete("/api/admin/tournaments/{tr_id}/matches/{match_no}")]
async fn api_delete_played(
    state: AppState,
    session: Session,
    path: Path<MatchPath>,
) -> HttpResponse {
    if let Err(resp) = require_admin(&session) {
        return resp;
    }
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match delete_played(&mut g.matches, path.tr_id, path.match_no) {
        Ok(m) => HttpResponse::Ok().json(serde_json::json!({
            "message": "Match deleted successfully",
            "match": m,
        })),
        Err(e) => error_response(&e),
    }
}

/// Schedule a fixture.
#[post("/api/admin/tournaments/{tr_id}/next-matches")]
async fn api_create_scheduled(
    state: AppState,
    session: Session,
    path: Path<TournamentPath>,
    body: Json<CreateScheduledMatchBody>,
) -> HttpResponse {
    if let Err(resp) = require_admin(&session) {
        return resp;
    }
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let body = body.into_inner();
    let league = &mut *g;
    match create_scheduled(
        &league.refs,
        &mut league.matches,
        path.tr_id,
        body.match_no,
        body.fields,
    ) {
        Ok(m) => HttpResponse::Created().json(m),
        Err(e) => error_response(&e),
    }
}

/// Replace a fixture's fields.
#[put("/api/admin/tournaments/{tr_id}/next-matches/{match_no}")]
async fn api_update_scheduled(
    state: AppState,
    session: Session,
    path: Path<MatchPath>,
    body: Json<ScheduledMatchFields>,
) -> HttpResponse {
    if let Err(resp) = require_admin(&session) {
        return resp;
    }
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let league = &mut *g;
    match update_scheduled(
        &league.refs,
        &mut league.matches,
        path.tr_id,
        path.match_no,
        body.into_inner(),
    ) {
        Ok(m) => HttpResponse::Ok().json(m),
        Err(e) => error_response(&e),
    }
}

/// Delete a fixture, returning the deleted row.
#[delete("/api/admin/tournaments/{tr_id}/next-matches/{match_no}")]
async fn api_delete_scheduled(
    state: AppState,
    session: Session,
    path: Path<MatchPath>,
) -> HttpResponse {
    if let Err(resp) = require_admin(&session) {
        return resp;
    }
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match delete_scheduled(&mut g.matches, path.tr_id, path.match_no) {
        Ok(m) => HttpResponse::Ok().json(serde_json::json!({
            "message": "Next match deleted successfully",
            "match": m,
        })),
        Err(e) => error_response(&e),
    }
}

/// Upcoming matches of a tournament (admin view with names resolved).
#[get("/api/admin/tournaments/{tr_id}/next-matches")]
async fn api_admin_next_matches(
    state: AppState,
    session: Session,
    path: Path<TournamentPath>,
) -> HttpResponse {
    if let Err(resp) = require_admin(&session) {
        return resp;
    }
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    HttpResponse::Ok().json(scheduled_match_views(&g.refs, &g.matches, path.tr_id))
}

/// Move a fixture to the played store (the match lifecycle transition).
#[post("/api/admin/tournaments/{tr_id}/next-matches/{match_no}/play")]
async fn api_play_match(
    state: AppState,
    session: Session,
    path: Path<MatchPath>,
    body: Json<MatchOutcome>,
) -> HttpResponse {
    if let Err(resp) = require_admin(&session) {
        return resp;
    }
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match transition_to_played(&mut g.matches, path.tr_id, path.match_no, &body) {
        Ok(m) => {
            log::info!(
                "Match {}/{} moved to played ({})",
                path.tr_id,
                path.match_no,
                m.goal_score
            );
            HttpResponse::Created().json(m)
        }
        Err(e) => error_response(&e),
    }
}

/// All tournaments, for the guest selection list.
#[get("/api/guest/tournaments")]
async fn api_guest_tournaments(state: AppState) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    HttpResponse::Ok().json(list_tournaments(&g.refs))
}

/// Match results of a tournament.
#[get("/api/guest/tournaments/{tr_id}/matches")]
async fn api_guest_matches(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    HttpResponse::Ok().json(played_match_views(&g.refs, &g.matches, path.tr_id))
}

/// Upcoming matches of a tournament.
#[get("/api/guest/tournaments/{tr_id}/next-matches")]
async fn api_guest_next_matches(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    HttpResponse::Ok().json(scheduled_match_views(&g.refs, &g.matches, path.tr_id))
}

/// Roster of a team in a tournament.
#[get("/api/guest/tournaments/{tr_id}/teams/{team_id}/players")]
async fn api_guest_team_players(state: AppState, path: Path<TeamPath>) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    HttpResponse::Ok().json(team_roster(&g.refs, path.tr_id, path.team_id))
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

    let mut league = League::default();

    if let Ok(dir) = std::env::var("SEED_DIR") {
        match load_reference_dir(&mut league.refs, std::path::Path::new(&dir)) {
            Ok(report) => log::info!(
                "Seeded reference data from {}: {} teams, {} players, {} venues",
                dir,
                report.teams,
                report.players,
                report.venues
            ),
            Err(e) => log::error!("Failed to seed reference data from {}: {}", dir, e),
        }
    }

    if let (Ok(user), Ok(pass)) = (std::env::var("ADMIN_USER"), std::env::var("ADMIN_PASSWORD")) {
        let admin = NewAccount {
            kfupm_id: 0,
            username: user,
            password: pass,
            full_name: "Administrator".to_string(),
            date_of_birth: chrono::NaiveDate::default(),
        };
        match sign_up(&mut league.accounts, admin, Role::Admin) {
            Ok(account) => log::info!("Seeded admin account '{}'", account.username),
            Err(e) => log::error!("Failed to seed admin account: {}", e),
        }
    } else {
        log::warn!("ADMIN_USER/ADMIN_PASSWORD not set; no admin account exists");
    }

    let state = Data::new(RwLock::new(league));
    // Cookie signing key is generated per process, so sessions reset on restart.
    let session_key = Key::generate();
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(
                SessionMiddleware::builder(CookieSessionStore::default(), session_key.clone())
                    // Plain http is fine for local development deployments.
                    .cookie_secure(false)
                    .build(),
            )
            .service(api_health)
            .service(favicon)
            .service(api_signup)
            .service(api_login)
            .service(api_logout)
            .service(api_auth_status)
            .service(api_create_tournament)
            .service(api_delete_tournament)
            .service(api_create_team)
            .service(api_create_player)
            .service(api_create_venue)
            .service(api_list_teams)
            .service(api_list_players)
            .service(api_register_team)
            .service(api_approve_player)
            .service(api_set_captain)
            .service(api_create_played)
            .service(api_update_played)
            .service(api_delete_played)
            .service(api_create_scheduled)
            .service(api_update_scheduled)
            .service(api_delete_scheduled)
            .service(api_admin_next_matches)
            .service(api_play_match)
            .service(api_guest_tournaments)
            .service(api_guest_matches)
            .service(api_guest_next_matches)
            .service(api_guest_team_players)
    })
    .bind(bind)?
    .run()
    .await
}
