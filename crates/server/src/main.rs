// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Json, Router,
    extract::{Query, State as AxumState},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post, put},
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::{Mutex, MutexGuard};
use tracing::{error, info};
use vacation_pick::{LoadMode, State};
use vacation_pick_api::{
    ApiError, ApiResult, EngineConfig, ListPicksResponse, ProposePickRequest,
    ProposePickResponse, ReplacePolicyResponse, ScheduleResponse, SummariesResponse, TurnResponse,
    WithdrawPickRequest, WithdrawPickResponse, advance_rotation, current_turn, export_snapshot,
    get_schedule_index, get_summaries, import_snapshot, list_picks, load_config, load_policy,
    propose_pick, replace_policy, retreat_rotation, withdraw_pick,
};
use vacation_pick_domain::Policy;

/// Vacation Pick Server - HTTP server for the vacation pick engine
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a JSON configuration file (`{ "agents": [...], "policy": {...} }`).
    /// If not provided, uses the default roster and policy.
    #[arg(short, long)]
    config: Option<String>,

    /// Path to a snapshot to start from. Takes precedence over `--config`.
    #[arg(short, long)]
    snapshot: Option<String>,

    /// Rebuild a snapshot's schedule from its picks instead of refusing a mismatch
    #[arg(long)]
    repair: bool,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,
}

impl Args {
    const fn load_mode(&self) -> LoadMode {
        if self.repair {
            LoadMode::Repair
        } else {
            LoadMode::Strict
        }
    }
}

/// Application state shared across handlers.
///
/// Every request holds the lock for its whole validate-then-mutate sequence.
#[derive(Clone)]
struct AppState {
    /// The engine state.
    engine: Arc<Mutex<State>>,
}

impl AppState {
    fn new(state: State) -> Self {
        Self {
            engine: Arc::new(Mutex::new(state)),
        }
    }
}

/// Query parameters for importing a snapshot.
#[derive(Debug, Default, Deserialize)]
struct ImportQuery {
    /// Rebuild a mismatched schedule instead of refusing the snapshot.
    #[serde(default)]
    repair: bool,
}

/// API response for a snapshot import.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ImportResponse {
    /// Agents on the imported roster.
    agents: usize,
    /// Picks in the imported ledger.
    picks: usize,
    /// A success message.
    message: String,
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// The rule that refused the request, for rejections.
    #[serde(skip_serializing_if = "Option::is_none")]
    rule: Option<String>,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The rule that refused the request, for rejections.
    rule: Option<String>,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            rule: self.rule,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        let message: String = err.to_string();
        match err {
            ApiError::Rejected { rule, .. } => Self {
                status: StatusCode::CONFLICT,
                rule: Some(rule),
                message,
            },
            ApiError::InvalidInput { .. } => Self {
                status: StatusCode::BAD_REQUEST,
                rule: None,
                message,
            },
            ApiError::CorruptState { .. } => Self {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                rule: None,
                message,
            },
            ApiError::Internal { .. } => {
                error!(error = %message, "Internal error");
                Self {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    rule: None,
                    message,
                }
            }
        }
    }
}

/// Handler for POST `/picks` endpoint.
///
/// Proposes a pick and commits it if every rule passes.
async fn handle_propose_pick(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<ProposePickRequest>,
) -> Result<Json<ProposePickResponse>, HttpError> {
    info!(agent = %req.agent, "Handling propose_pick request");

    let mut state: MutexGuard<'_, State> = app_state.engine.lock().await;
    let result: ApiResult<ProposePickResponse> = propose_pick(&state, &req)?;
    *state = result.new_state;
    drop(state);

    Ok(Json(result.response))
}

/// Handler for POST `/picks/withdraw` endpoint.
///
/// Removes one of an agent's picks.
async fn handle_withdraw_pick(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<WithdrawPickRequest>,
) -> Result<Json<WithdrawPickResponse>, HttpError> {
    info!(
        agent = %req.agent,
        pick_index = req.pick_index,
        "Handling withdraw_pick request"
    );

    let mut state: MutexGuard<'_, State> = app_state.engine.lock().await;
    let result: ApiResult<WithdrawPickResponse> = withdraw_pick(&state, &req)?;
    *state = result.new_state;
    drop(state);

    Ok(Json(result.response))
}

/// Handler for GET `/picks` endpoint.
async fn handle_list_picks(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<ListPicksResponse>, HttpError> {
    let response: ListPicksResponse = list_picks(&*app_state.engine.lock().await)?;
    Ok(Json(response))
}

/// Handler for GET `/summaries` endpoint.
async fn handle_get_summaries(AxumState(app_state): AxumState<AppState>) -> Json<SummariesResponse> {
    Json(get_summaries(&*app_state.engine.lock().await))
}

/// Handler for GET `/schedule` endpoint.
async fn handle_get_schedule(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<ScheduleResponse>, HttpError> {
    let response: ScheduleResponse = get_schedule_index(&*app_state.engine.lock().await)?;
    Ok(Json(response))
}

/// Handler for GET `/turn` endpoint.
async fn handle_get_turn(AxumState(app_state): AxumState<AppState>) -> Json<TurnResponse> {
    Json(current_turn(&*app_state.engine.lock().await))
}

/// Handler for POST `/rotation/advance` endpoint.
async fn handle_advance_rotation(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<TurnResponse>, HttpError> {
    info!("Handling advance_rotation request");

    let mut state: MutexGuard<'_, State> = app_state.engine.lock().await;
    let result: ApiResult<TurnResponse> = advance_rotation(&state)?;
    *state = result.new_state;
    drop(state);

    Ok(Json(result.response))
}

/// Handler for POST `/rotation/retreat` endpoint.
async fn handle_retreat_rotation(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<TurnResponse>, HttpError> {
    info!("Handling retreat_rotation request");

    let mut state: MutexGuard<'_, State> = app_state.engine.lock().await;
    let result: ApiResult<TurnResponse> = retreat_rotation(&state)?;
    *state = result.new_state;
    drop(state);

    Ok(Json(result.response))
}

/// Handler for PUT `/policy` endpoint.
///
/// Replaces the policy wholesale. Missing fields take their defaults.
async fn handle_replace_policy(
    AxumState(app_state): AxumState<AppState>,
    body: String,
) -> Result<Json<ReplacePolicyResponse>, HttpError> {
    info!("Handling replace_policy request");

    let policy: Policy = load_policy(&body)?;
    let mut state: MutexGuard<'_, State> = app_state.engine.lock().await;
    let result: ApiResult<ReplacePolicyResponse> = replace_policy(&state, policy)?;
    *state = result.new_state;
    drop(state);

    Ok(Json(result.response))
}

/// Handler for GET `/snapshot` endpoint.
async fn handle_export_snapshot(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Response, HttpError> {
    let json: String = export_snapshot(&*app_state.engine.lock().await)?;

    Ok(([(header::CONTENT_TYPE, "application/json")], json).into_response())
}

/// Handler for POST `/snapshot` endpoint.
///
/// Replaces the whole engine state. Pass `?repair=true` to rebuild a
/// schedule that disagrees with the picks.
async fn handle_import_snapshot(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<ImportQuery>,
    body: String,
) -> Result<Json<ImportResponse>, HttpError> {
    let mode: LoadMode = if query.repair {
        LoadMode::Repair
    } else {
        LoadMode::Strict
    };
    info!(?mode, "Handling import_snapshot request");

    let imported: State = import_snapshot(&body, mode)?;
    let response: ImportResponse = ImportResponse {
        agents: imported.roster().len(),
        picks: imported.ledger().len(),
        message: String::from("Snapshot imported"),
    };

    *app_state.engine.lock().await = imported;

    Ok(Json(response))
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/picks", post(handle_propose_pick))
        .route("/picks", get(handle_list_picks))
        .route("/picks/withdraw", post(handle_withdraw_pick))
        .route("/summaries", get(handle_get_summaries))
        .route("/schedule", get(handle_get_schedule))
        .route("/turn", get(handle_get_turn))
        .route("/rotation/advance", post(handle_advance_rotation))
        .route("/rotation/retreat", post(handle_retreat_rotation))
        .route("/policy", put(handle_replace_policy))
        .route("/snapshot", get(handle_export_snapshot))
        .route("/snapshot", post(handle_import_snapshot))
        .with_state(app_state)
}

/// Builds the starting state from the command-line arguments.
fn load_initial_state(args: &Args) -> Result<State, Box<dyn std::error::Error>> {
    if let Some(snapshot_path) = &args.snapshot {
        info!("Loading snapshot from: {}", snapshot_path);
        let json: String = std::fs::read_to_string(snapshot_path)?;
        return Ok(import_snapshot(&json, args.load_mode())?);
    }

    let config: EngineConfig = if let Some(config_path) = &args.config {
        info!("Loading configuration from: {}", config_path);
        load_config(&std::fs::read_to_string(config_path)?)?
    } else {
        info!("Using default roster and policy");
        EngineConfig::default()
    };

    Ok(config.into_state()?)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Vacation Pick Server");

    let state: State = load_initial_state(&args)?;
    info!(
        agents = state.roster().len(),
        picks = state.ledger().len(),
        "Engine ready"
    );

    // Build router
    let app: Router = build_router(AppState::new(state));

    // Bind to address
    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used)]

    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode as HttpStatusCode},
    };
    use tower::ServiceExt;

    /// Helper to create test app state with a three-agent roster.
    fn create_test_app_state() -> AppState {
        let state: State = EngineConfig {
            agents: vec![
                String::from("Patrick Tristram"),
                String::from("William Luikart"),
                String::from("Alan Moreno"),
            ],
            policy: Policy::default(),
        }
        .into_state()
        .expect("Failed to build test state");
        AppState::new(state)
    }

    fn json_request(method: &str, uri: &str, body: String) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    fn empty_request(method: &str, uri: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    fn pick_request(agent: &str, start: &str, end: &str) -> Request<Body> {
        let req_body: ProposePickRequest = ProposePickRequest {
            agent: agent.to_string(),
            start: Some(start.to_string()),
            end: Some(end.to_string()),
        };
        json_request("POST", "/picks", serde_json::to_string(&req_body).unwrap())
    }

    async fn body_bytes(response: Response) -> Vec<u8> {
        axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap()
            .to_vec()
    }

    #[tokio::test]
    async fn test_propose_pick_succeeds() {
        let app: Router = build_router(create_test_app_state());

        let response = app
            .oneshot(pick_request("Patrick Tristram", "2026-07-01", "2026-07-03"))
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::OK);
        let api_response: ProposePickResponse =
            serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(api_response.pick.days, 3);
        assert!(api_response.pick.seasonal);
    }

    #[tokio::test]
    async fn test_rejected_pick_returns_conflict_and_leaves_state() {
        let app_state: AppState = create_test_app_state();
        let app: Router = build_router(app_state.clone());

        app.clone()
            .oneshot(pick_request("Patrick Tristram", "2026-03-04", "2026-03-04"))
            .await
            .unwrap();
        let before: State = app_state.engine.lock().await.clone();

        let response = app
            .oneshot(pick_request("William Luikart", "2026-03-04", "2026-03-05"))
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::CONFLICT);
        let error_response: ErrorResponse =
            serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert!(error_response.error);
        assert_eq!(
            error_response.rule,
            Some(String::from("DateCapacityExceeded"))
        );
        assert_eq!(*app_state.engine.lock().await, before);
    }

    #[tokio::test]
    async fn test_bad_date_returns_bad_request() {
        let app: Router = build_router(create_test_app_state());

        let response = app
            .oneshot(pick_request("Patrick Tristram", "July 1st", "2026-07-03"))
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_withdraw_then_list_picks() {
        let app: Router = build_router(create_test_app_state());

        app.clone()
            .oneshot(pick_request("Alan Moreno", "2026-05-04", "2026-05-05"))
            .await
            .unwrap();
        app.clone()
            .oneshot(pick_request("Alan Moreno", "2026-05-11", "2026-05-11"))
            .await
            .unwrap();

        let withdraw: WithdrawPickRequest = WithdrawPickRequest {
            agent: String::from("Alan Moreno"),
            pick_index: 0,
        };
        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/picks/withdraw",
                serde_json::to_string(&withdraw).unwrap(),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), HttpStatusCode::OK);

        let response = app.oneshot(empty_request("GET", "/picks")).await.unwrap();
        assert_eq!(response.status(), HttpStatusCode::OK);
        let listed: ListPicksResponse =
            serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(listed.picks.len(), 1);
        assert_eq!(listed.picks[0].start, "2026-05-11");
        assert_eq!(listed.picks[0].pick_index, 0);
    }

    #[tokio::test]
    async fn test_withdraw_missing_pick_returns_conflict() {
        let app: Router = build_router(create_test_app_state());
        let withdraw: WithdrawPickRequest = WithdrawPickRequest {
            agent: String::from("Alan Moreno"),
            pick_index: 0,
        };

        let response = app
            .oneshot(json_request(
                "POST",
                "/picks/withdraw",
                serde_json::to_string(&withdraw).unwrap(),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_summaries_and_schedule_reflect_commit() {
        let app: Router = build_router(create_test_app_state());
        app.clone()
            .oneshot(pick_request("William Luikart", "2026-08-31", "2026-09-01"))
            .await
            .unwrap();

        let response = app
            .clone()
            .oneshot(empty_request("GET", "/summaries"))
            .await
            .unwrap();
        let summaries: SummariesResponse =
            serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(summaries.summaries[1].agent, "William Luikart");
        assert_eq!(summaries.summaries[1].used_days, 2);
        assert_eq!(summaries.summaries[1].seasonal_pick_count, 1);

        let response = app.oneshot(empty_request("GET", "/schedule")).await.unwrap();
        let schedule: ScheduleResponse =
            serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(
            schedule.schedule.keys().collect::<Vec<_>>(),
            vec!["2026-08-31", "2026-09-01"]
        );
    }

    #[tokio::test]
    async fn test_rotation_endpoints() {
        let app: Router = build_router(create_test_app_state());

        let response = app
            .clone()
            .oneshot(empty_request("POST", "/rotation/advance"))
            .await
            .unwrap();
        assert_eq!(response.status(), HttpStatusCode::OK);

        let response = app.oneshot(empty_request("GET", "/turn")).await.unwrap();
        let turn: TurnResponse = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(turn.current, Some(String::from("William Luikart")));
    }

    #[tokio::test]
    async fn test_turn_order_enforced_after_policy_replacement() {
        let app: Router = build_router(create_test_app_state());

        let response = app
            .clone()
            .oneshot(json_request(
                "PUT",
                "/policy",
                String::from(r#"{ "turnOrderEnabled": true }"#),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), HttpStatusCode::OK);

        let response = app
            .oneshot(pick_request("Alan Moreno", "2026-03-02", "2026-03-02"))
            .await
            .unwrap();
        assert_eq!(response.status(), HttpStatusCode::CONFLICT);
        let error_response: ErrorResponse =
            serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(error_response.rule, Some(String::from("NotYourTurn")));
    }

    #[tokio::test]
    async fn test_invalid_policy_returns_bad_request() {
        let app: Router = build_router(create_test_app_state());

        let response = app
            .oneshot(json_request(
                "PUT",
                "/policy",
                String::from(r#"{ "maxDaysPerAgent": 0 }"#),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_snapshot_export_then_import() {
        let source: AppState = create_test_app_state();
        let app: Router = build_router(source.clone());
        app.clone()
            .oneshot(pick_request("Patrick Tristram", "2026-06-29", "2026-07-02"))
            .await
            .unwrap();

        let response = app.oneshot(empty_request("GET", "/snapshot")).await.unwrap();
        assert_eq!(response.status(), HttpStatusCode::OK);
        let snapshot: Vec<u8> = body_bytes(response).await;

        let target: AppState = create_test_app_state();
        let response = build_router(target.clone())
            .oneshot(json_request(
                "POST",
                "/snapshot",
                String::from_utf8(snapshot).unwrap(),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::OK);
        let imported: ImportResponse =
            serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(imported.picks, 1);
        assert_eq!(
            *target.engine.lock().await,
            *source.engine.lock().await
        );
    }

    #[tokio::test]
    async fn test_corrupt_snapshot_is_refused_then_repaired() {
        let app_state: AppState = create_test_app_state();
        let before: State = app_state.engine.lock().await.clone();
        let json: &str = r#"{
            "agents": ["Nkosi Henry"],
            "policy": {},
            "picks": { "Nkosi Henry": [ { "start": "2026-03-02", "end": "2026-03-03", "days": 2, "seasonal": false } ] },
            "schedule": {},
            "rotationIndex": 0
        }"#;

        let response = build_router(app_state.clone())
            .oneshot(json_request("POST", "/snapshot", json.to_string()))
            .await
            .unwrap();
        assert_eq!(response.status(), HttpStatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(*app_state.engine.lock().await, before);

        let response = build_router(app_state.clone())
            .oneshot(json_request("POST", "/snapshot?repair=true", json.to_string()))
            .await
            .unwrap();
        assert_eq!(response.status(), HttpStatusCode::OK);
        assert_eq!(app_state.engine.lock().await.schedule().len(), 2);
    }

    #[test]
    fn test_initial_state_defaults_to_six_agents() {
        let args: Args = Args::parse_from(["vacation-pick-server"]);

        let state: State = load_initial_state(&args).unwrap();

        assert_eq!(state.roster().len(), 6);
        assert_eq!(args.port, 3000);
        assert_eq!(args.load_mode(), LoadMode::Strict);
    }

    #[test]
    fn test_repair_flag_selects_repair_mode() {
        let args: Args = Args::parse_from(["vacation-pick-server", "--repair", "--port", "8080"]);

        assert_eq!(args.load_mode(), LoadMode::Repair);
        assert_eq!(args.port, 8080);
    }
}
