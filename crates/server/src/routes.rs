use std::time::Instant;

use axum::{
    extract::{DefaultBodyLimit, Request, State},
    http::StatusCode,
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    limit::RequestBodyLimitLayer,
    services::ServeDir,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;

use common::metrics::{encode_metrics, HTTP_REQUESTS_TOTAL, HTTP_REQUEST_DURATION};
use common::types::{ApiResponse, Health};

use crate::errors::JsonApiError;
use crate::openapi::ApiDoc;

pub mod auth;
pub mod blog;
pub mod bookings;
pub mod contact;
pub mod pages;
pub mod partners;
pub mod programs;
pub mod projects;
pub mod team;
pub mod tour_categories;
pub mod tour_programs;
pub mod tours;
pub mod uploads;

pub use auth::ServerState;

pub type ApiResult<T> = Result<Json<ApiResponse<T>>, JsonApiError>;
pub type Created<T> = Result<(StatusCode, Json<ApiResponse<T>>), JsonApiError>;

pub(crate) fn ok<T>(data: T) -> ApiResult<T> {
    Ok(Json(ApiResponse::ok(data)))
}

pub(crate) fn created<T>(data: T) -> Created<T> {
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(data))))
}

pub(crate) fn deleted(what: &str) -> ApiResult<()> {
    Ok(Json(ApiResponse::message(format!("{what} deleted"))))
}

/// Slack on top of the upload limit for base64 inflation and JSON framing.
const BODY_OVERHEAD_BYTES: usize = 64 * 1024;

#[utoipa::path(get, path = "/api/health", tag = "health", responses((status = 200, description = "Service status and database reachability", body = crate::openapi::HealthResponse)))]
pub async fn health(State(state): State<ServerState>) -> Json<ApiResponse<Health>> {
    let up = models::db::ping(&state.db).await;
    Json(ApiResponse::ok(Health {
        status: if up { "ok" } else { "degraded" },
        database: if up { "up" } else { "down" },
    }))
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

async fn metrics() -> impl IntoResponse {
    encode_metrics()
}

/// Request counter and latency histogram for every route.
async fn track_metrics(req: Request, next: Next) -> Response {
    let method = req.method().to_string();
    let start = Instant::now();
    let res = next.run(req).await;
    HTTP_REQUEST_DURATION.observe(start.elapsed().as_secs_f64());
    HTTP_REQUESTS_TOTAL
        .with_label_values(&[method.as_str(), res.status().as_str()])
        .inc();
    res
}

fn public_api() -> Router<ServerState> {
    Router::new()
        .route("/health", get(health))
        .route("/openapi.json", get(openapi_json))
        .route("/admin/login", post(auth::login))
        .merge(tour_categories::public_routes())
        .merge(tours::public_routes())
        .merge(tour_programs::public_routes())
        .merge(projects::public_routes())
        .merge(programs::public_routes())
        .merge(partners::public_routes())
        .merge(team::public_routes())
        .merge(blog::public_routes())
        .merge(pages::public_routes())
        .merge(bookings::public_routes())
        .merge(contact::public_routes())
}

fn protected_api(state: &ServerState) -> Router<ServerState> {
    Router::new()
        .route("/admin/logout", auth::guarded(state, post(auth::logout)))
        .route("/admin/verify", auth::guarded(state, get(auth::verify)))
        .route("/admin/password", auth::guarded(state, put(auth::change_password)))
        // user management and session cleanup: role `admin` only
        .route("/admin/users", auth::admin_only(state, get(auth::list_users).post(auth::create_user)))
        .route("/admin/sessions/cleanup", auth::admin_only(state, post(auth::cleanup_sessions)))
        .merge(tour_categories::admin_routes(state))
        .merge(tours::admin_routes(state))
        .merge(tour_programs::admin_routes(state))
        .merge(projects::admin_routes(state))
        .merge(programs::admin_routes(state))
        .merge(partners::admin_routes(state))
        .merge(team::admin_routes(state))
        .merge(blog::admin_routes(state))
        .merge(pages::admin_routes(state))
        .merge(bookings::admin_routes(state))
        .merge(contact::admin_routes(state))
        .merge(uploads::admin_routes(state))
}

/// Build the full application router: public reads, session-protected writes,
/// metrics and (for the local backend) the uploaded files.
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let body_limit = state.blobs.max_bytes() / 3 * 4 + BODY_OVERHEAD_BYTES;

    let api = public_api().merge(protected_api(&state));

    let mut app = Router::new()
        .nest("/api", api)
        .route("/metrics", get(metrics));

    // the local backend serves its files back under the public base path
    if let Some(root) = state.blobs.local_root() {
        let mount = state.blobs.public_base_url().trim_end_matches('/');
        if mount.starts_with('/') {
            app = app.nest_service(mount, ServeDir::new(root));
        }
    }

    app.with_state(state)
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(body_limit))
        .layer(middleware::from_fn(track_metrics))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                // 5xx
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
