#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use server::routes::ServerState;
use service::auth::domain::NewAdminUser;
use service::auth::{AdminRepository, AdminSessionService, SeaOrmAdminRepository, SessionConfig};
use service::storage::BlobStore;

pub const ADMIN_USER: &str = "admin";
pub const ADMIN_PASS: &str = "admin-pass-123";
pub const EDITOR_USER: &str = "editor";
pub const EDITOR_PASS: &str = "editor-pass-123";
pub const MAX_UPLOAD: usize = 64 * 1024;

/// Fresh in-memory database with one admin and one editor.
pub async fn test_state() -> anyhow::Result<ServerState> {
    let db = models::db::connect_in_memory().await?;
    let repo: Arc<dyn AdminRepository> = Arc::new(SeaOrmAdminRepository::new(db.clone()));
    let auth = Arc::new(AdminSessionService::new(repo, SessionConfig::default()));
    auth.ensure_bootstrap_admin(ADMIN_USER, ADMIN_PASS).await?;
    auth.create_user(NewAdminUser {
        username: EDITOR_USER.into(),
        password: EDITOR_PASS.into(),
        role: Some("editor".into()),
        ..Default::default()
    })
    .await?;
    Ok(ServerState {
        db,
        auth,
        blobs: BlobStore::in_memory("/uploads", MAX_UPLOAD),
        secure_cookie: false,
    })
}

pub async fn test_app() -> anyhow::Result<(Router, ServerState)> {
    let state = test_state().await?;
    Ok((server::build_app(state.clone()), state))
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: axum::http::HeaderMap,
    pub body: Value,
}

pub async fn send_raw(app: &Router, req: Request<Body>) -> anyhow::Result<TestResponse> {
    let resp = app.clone().oneshot(req).await?;
    let status = resp.status();
    let headers = resp.headers().clone();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await?;
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };
    Ok(TestResponse { status, headers, body })
}

pub async fn send(app: &Router, method: &str, uri: &str, token: Option<&str>, body: Option<Value>) -> anyhow::Result<TestResponse> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(t) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {t}"));
    }
    let req = match body {
        Some(v) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&v)?))?,
        None => builder.body(Body::empty())?,
    };
    send_raw(app, req).await
}

pub async fn login(app: &Router, username: &str, password: &str) -> anyhow::Result<String> {
    let resp = send(app, "POST", "/api/admin/login", None, Some(serde_json::json!({"username": username, "password": password}))).await?;
    anyhow::ensure!(resp.status == StatusCode::OK, "login failed: {} {}", resp.status, resp.body);
    resp.body["data"]["token"]
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| anyhow::anyhow!("no token in login response"))
}

pub async fn admin_token(app: &Router) -> anyhow::Result<String> {
    login(app, ADMIN_USER, ADMIN_PASS).await
}
