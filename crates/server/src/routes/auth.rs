use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{header, StatusCode},
    middleware::{self, Next},
    response::Response,
    routing::MethodRouter,
    Extension, Json,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;
use serde::Serialize;
use tracing::{info, warn};

use common::metrics::ADMIN_LOGINS_TOTAL;
use common::types::ApiResponse;
use service::auth::domain::{AdminUser, ChangePasswordInput, LoginInput, NewAdminUser};
use service::auth::{AdminRepository, AdminSessionService};
use service::storage::BlobStore;

use crate::errors::{JsonApiError, JsonBody};

pub const AUTH_COOKIE: &str = "auth_token";

#[derive(Clone)]
pub struct ServerState {
    pub db: DatabaseConnection,
    pub auth: Arc<AdminSessionService<dyn AdminRepository>>,
    pub blobs: BlobStore,
    pub secure_cookie: bool,
}

/// Authenticated caller, inserted by `require_admin`.
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub user: AdminUser,
    pub token: String,
}

#[derive(Serialize)]
pub struct LoginOutput {
    pub token: String,
    pub user: AdminUser,
    pub expires_at: DateTime<Utc>,
}

#[derive(Serialize)]
pub struct CleanupOutput {
    pub deleted: u64,
}

#[derive(Serialize)]
pub struct PasswordOutput {
    pub revoked_sessions: u64,
}

/// Bearer header first, then the `auth_token` cookie.
fn extract_token(req: &Request) -> Result<Option<String>, JsonApiError> {
    if let Some(h) = req.headers().get(header::AUTHORIZATION) {
        let value = h.to_str().map_err(|_| JsonApiError::unauthorized("malformed Authorization header"))?;
        let token = value
            .strip_prefix("Bearer ")
            .ok_or_else(|| JsonApiError::unauthorized("expected Authorization: Bearer <token>"))?;
        return Ok(Some(token.trim().to_string()));
    }
    let jar = CookieJar::from_headers(req.headers());
    Ok(jar.get(AUTH_COOKIE).map(|c| c.value().to_string()).filter(|t| !t.is_empty()))
}

/// Rejects requests without a live session with 401.
pub async fn require_admin(
    State(state): State<ServerState>,
    mut req: Request,
    next: Next,
) -> Result<Response, JsonApiError> {
    let path = req.uri().path().to_string();
    let Some(token) = extract_token(&req)? else {
        warn!(%path, "missing Authorization header and auth_token cookie");
        return Err(JsonApiError::unauthorized("authentication required"));
    };
    match state.auth.verify_token(&token).await? {
        Some(user) => {
            req.extensions_mut().insert(AuthUser { user, token });
            Ok(next.run(req).await)
        }
        None => {
            warn!(%path, "invalid or expired session token");
            Err(JsonApiError::unauthorized("invalid or expired session"))
        }
    }
}

/// Puts the verbs of one method router behind `require_admin`. The router's
/// fallback stays unwrapped, so an unknown verb on the path is still 405.
pub fn guarded(state: &ServerState, route: MethodRouter<ServerState>) -> MethodRouter<ServerState> {
    route.route_layer(middleware::from_fn_with_state(state.clone(), require_admin))
}

/// Same as [`guarded`], additionally limited to the `admin` role.
pub fn admin_only(state: &ServerState, route: MethodRouter<ServerState>) -> MethodRouter<ServerState> {
    guarded(state, route.route_layer(middleware::from_fn(require_admin_role)))
}

/// Must run after `require_admin`; lets only the `admin` role through.
pub async fn require_admin_role(req: Request, next: Next) -> Result<Response, JsonApiError> {
    match req.extensions().get::<AuthUser>() {
        Some(auth) if auth.user.is_admin() => Ok(next.run(req).await),
        Some(auth) => {
            warn!(user_id = auth.user.id, role = %auth.user.role, "admin role required");
            Err(JsonApiError::forbidden("admin role required"))
        }
        None => Err(JsonApiError::unauthorized("authentication required")),
    }
}

fn session_cookie(token: String, secure: bool) -> Cookie<'static> {
    let mut cookie = Cookie::new(AUTH_COOKIE, token);
    cookie.set_path("/");
    cookie.set_http_only(true);
    cookie.set_secure(secure);
    cookie.set_same_site(SameSite::Lax);
    cookie
}

#[utoipa::path(post, path = "/api/admin/login", tag = "admin", request_body = crate::openapi::LoginRequest, responses((status = 200, description = "Logged in"), (status = 400, description = "Bad Request"), (status = 401, description = "Invalid credentials")))]
pub async fn login(
    State(state): State<ServerState>,
    jar: CookieJar,
    JsonBody(input): JsonBody<LoginInput>,
) -> Result<(CookieJar, Json<ApiResponse<LoginOutput>>), JsonApiError> {
    let session = match state.auth.authenticate(input).await {
        Ok(s) => {
            ADMIN_LOGINS_TOTAL.with_label_values(&["success"]).inc();
            s
        }
        Err(e) => {
            ADMIN_LOGINS_TOTAL.with_label_values(&["failure"]).inc();
            return Err(e.into());
        }
    };
    let jar = jar.add(session_cookie(session.token.clone(), state.secure_cookie));
    let out = LoginOutput { token: session.token, user: session.user, expires_at: session.expires_at };
    Ok((jar, Json(ApiResponse::ok_with_message(out, "Login successful"))))
}

#[utoipa::path(post, path = "/api/admin/logout", tag = "admin", responses((status = 200, description = "Logged out"), (status = 401, description = "Unauthorized")))]
pub async fn logout(
    State(state): State<ServerState>,
    Extension(auth): Extension<AuthUser>,
    jar: CookieJar,
) -> Result<(CookieJar, Json<ApiResponse<()>>), JsonApiError> {
    state.auth.logout(&auth.token).await?;
    info!(user_id = auth.user.id, "admin_logout");
    let jar = jar.remove(Cookie::build(AUTH_COOKIE).path("/"));
    Ok((jar, Json(ApiResponse::message("Logged out"))))
}

#[utoipa::path(get, path = "/api/admin/verify", tag = "admin", responses((status = 200, description = "Session is valid"), (status = 401, description = "Unauthorized")))]
pub async fn verify(Extension(auth): Extension<AuthUser>) -> Json<ApiResponse<AdminUser>> {
    Json(ApiResponse::ok(auth.user))
}

#[utoipa::path(put, path = "/api/admin/password", tag = "admin", request_body = crate::openapi::ChangePasswordRequest, responses((status = 200, description = "Password changed, sessions revoked"), (status = 400, description = "Bad Request"), (status = 401, description = "Unauthorized")))]
pub async fn change_password(
    State(state): State<ServerState>,
    Extension(auth): Extension<AuthUser>,
    jar: CookieJar,
    JsonBody(input): JsonBody<ChangePasswordInput>,
) -> Result<(CookieJar, Json<ApiResponse<PasswordOutput>>), JsonApiError> {
    let revoked = state.auth.change_password(auth.user.id, input).await?;
    let jar = jar.remove(Cookie::build(AUTH_COOKIE).path("/"));
    Ok((
        jar,
        Json(ApiResponse::ok_with_message(PasswordOutput { revoked_sessions: revoked }, "Password changed; please log in again")),
    ))
}

#[utoipa::path(get, path = "/api/admin/users", tag = "admin", responses((status = 200, description = "Admin users"), (status = 403, description = "Admin role required")))]
pub async fn list_users(State(state): State<ServerState>) -> Result<Json<ApiResponse<Vec<AdminUser>>>, JsonApiError> {
    Ok(Json(ApiResponse::ok(state.auth.list_users().await?)))
}

#[utoipa::path(post, path = "/api/admin/users", tag = "admin", request_body = crate::openapi::NewAdminUserRequest, responses((status = 201, description = "User created"), (status = 400, description = "Bad Request"), (status = 403, description = "Admin role required"), (status = 409, description = "Username taken")))]
pub async fn create_user(
    State(state): State<ServerState>,
    Extension(auth): Extension<AuthUser>,
    JsonBody(input): JsonBody<NewAdminUser>,
) -> Result<(StatusCode, Json<ApiResponse<AdminUser>>), JsonApiError> {
    let user = state.auth.create_user(input).await?;
    info!(created_by = auth.user.id, user_id = user.id, role = %user.role, "admin_user_created");
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(user))))
}

#[utoipa::path(post, path = "/api/admin/sessions/cleanup", tag = "admin", responses((status = 200, description = "Expired sessions removed"), (status = 403, description = "Admin role required")))]
pub async fn cleanup_sessions(State(state): State<ServerState>) -> Result<Json<ApiResponse<CleanupOutput>>, JsonApiError> {
    let deleted = state.auth.cleanup_expired().await?;
    Ok(Json(ApiResponse::ok(CleanupOutput { deleted })))
}
