mod support;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use chrono::{Duration, Utc};
use serde_json::json;

use service::auth::domain::Session;
use support::*;

#[tokio::test]
async fn login_sets_cookie_and_token_verifies() -> anyhow::Result<()> {
    let (app, _) = test_app().await?;

    let resp = send(&app, "POST", "/api/admin/login", None, Some(json!({"username": ADMIN_USER, "password": ADMIN_PASS}))).await?;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.body["success"], true);
    assert_eq!(resp.body["data"]["user"]["username"], ADMIN_USER);
    assert!(resp.body["data"]["user"].get("password_hash").is_none());
    let cookie = resp
        .headers
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(cookie.starts_with("auth_token="));
    assert!(cookie.contains("HttpOnly"));

    let token = resp.body["data"]["token"].as_str().unwrap_or_default().to_string();
    let verify = send(&app, "GET", "/api/admin/verify", Some(&token), None).await?;
    assert_eq!(verify.status, StatusCode::OK);
    assert_eq!(verify.body["data"]["role"], "admin");

    // the cookie alone is enough
    let req = Request::builder()
        .uri("/api/admin/verify")
        .header(header::COOKIE, format!("auth_token={token}"))
        .body(Body::empty())?;
    assert_eq!(send_raw(&app, req).await?.status, StatusCode::OK);
    Ok(())
}

#[tokio::test]
async fn wrong_password_and_unknown_user_get_the_same_401() -> anyhow::Result<()> {
    let (app, _) = test_app().await?;
    let wrong = send(&app, "POST", "/api/admin/login", None, Some(json!({"username": ADMIN_USER, "password": "nope-nope"}))).await?;
    let unknown = send(&app, "POST", "/api/admin/login", None, Some(json!({"username": "ghost", "password": "whatever1"}))).await?;
    assert_eq!(wrong.status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown.status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong.body, unknown.body);
    assert_eq!(wrong.body["success"], false);

    let blank = send(&app, "POST", "/api/admin/login", None, Some(json!({"username": "", "password": ""}))).await?;
    assert_eq!(blank.status, StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn logout_invalidates_token() -> anyhow::Result<()> {
    let (app, _) = test_app().await?;
    let token = admin_token(&app).await?;

    let out = send(&app, "POST", "/api/admin/logout", Some(&token), None).await?;
    assert_eq!(out.status, StatusCode::OK);
    assert_eq!(out.body["message"], "Logged out");

    let verify = send(&app, "GET", "/api/admin/verify", Some(&token), None).await?;
    assert_eq!(verify.status, StatusCode::UNAUTHORIZED);
    Ok(())
}

#[tokio::test]
async fn protected_routes_need_a_token() -> anyhow::Result<()> {
    let (app, _) = test_app().await?;
    let cases = [
        ("GET", "/api/admin/verify"),
        ("POST", "/api/tours"),
        ("DELETE", "/api/tours/1"),
        ("GET", "/api/bookings"),
        ("GET", "/api/contact"),
        ("POST", "/api/upload/base64"),
        ("GET", "/api/admin/users"),
    ];
    for (method, uri) in cases {
        let resp = send(&app, method, uri, None, Some(json!({}))).await?;
        assert_eq!(resp.status, StatusCode::UNAUTHORIZED, "{method} {uri}");
        assert_eq!(resp.body["success"], false);
    }

    let bogus = send(&app, "GET", "/api/admin/verify", Some("not-a-real-token"), None).await?;
    assert_eq!(bogus.status, StatusCode::UNAUTHORIZED);

    let req = Request::builder()
        .uri("/api/admin/verify")
        .header(header::AUTHORIZATION, "Basic abc")
        .body(Body::empty())?;
    assert_eq!(send_raw(&app, req).await?.status, StatusCode::UNAUTHORIZED);
    Ok(())
}

#[tokio::test]
async fn editor_cannot_manage_users_but_admin_can() -> anyhow::Result<()> {
    let (app, _) = test_app().await?;
    let editor = login(&app, EDITOR_USER, EDITOR_PASS).await?;
    let admin = admin_token(&app).await?;

    let denied = send(&app, "GET", "/api/admin/users", Some(&editor), None).await?;
    assert_eq!(denied.status, StatusCode::FORBIDDEN);
    let denied = send(&app, "POST", "/api/admin/sessions/cleanup", Some(&editor), None).await?;
    assert_eq!(denied.status, StatusCode::FORBIDDEN);

    // editors still do content CRUD
    let cat = send(&app, "POST", "/api/tour-categories", Some(&editor), Some(json!({"name": "Safari"}))).await?;
    assert_eq!(cat.status, StatusCode::CREATED);

    let created = send(
        &app,
        "POST",
        "/api/admin/users",
        Some(&admin),
        Some(json!({"username": "newbie", "password": "long-enough-1", "email": "newbie@example.com"})),
    )
    .await?;
    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(created.body["data"]["role"], "editor");

    let dup = send(&app, "POST", "/api/admin/users", Some(&admin), Some(json!({"username": "newbie", "password": "long-enough-1"}))).await?;
    assert_eq!(dup.status, StatusCode::CONFLICT);

    let short = send(&app, "POST", "/api/admin/users", Some(&admin), Some(json!({"username": "shorty", "password": "short"}))).await?;
    assert_eq!(short.status, StatusCode::BAD_REQUEST);

    let users = send(&app, "GET", "/api/admin/users", Some(&admin), None).await?;
    assert_eq!(users.status, StatusCode::OK);
    assert_eq!(users.body["data"].as_array().map(Vec::len), Some(3));
    Ok(())
}

#[tokio::test]
async fn expired_sessions_fail_verify_and_cleanup_purges_them() -> anyhow::Result<()> {
    let (app, state) = test_app().await?;
    let admin = admin_token(&app).await?;
    let admin_id = send(&app, "GET", "/api/admin/verify", Some(&admin), None).await?.body["data"]["id"]
        .as_i64()
        .unwrap_or_default() as i32;

    let repo = state.auth.repository();
    let past = Utc::now() - Duration::hours(1);
    for token in ["expired-token-aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa", "expired-token-bbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb"] {
        repo.create_session(Session { token: token.into(), user_id: admin_id, expires_at: past }).await?;
    }

    // lazily deleted on verify
    let verify = send(&app, "GET", "/api/admin/verify", Some("expired-token-aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa"), None).await?;
    assert_eq!(verify.status, StatusCode::UNAUTHORIZED);
    assert!(repo.find_session("expired-token-aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa").await?.is_none());

    let cleanup = send(&app, "POST", "/api/admin/sessions/cleanup", Some(&admin), None).await?;
    assert_eq!(cleanup.status, StatusCode::OK);
    assert_eq!(cleanup.body["data"]["deleted"], 1);
    assert!(repo.find_session("expired-token-bbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb").await?.is_none());

    // the live session survives
    assert_eq!(send(&app, "GET", "/api/admin/verify", Some(&admin), None).await?.status, StatusCode::OK);
    Ok(())
}

#[tokio::test]
async fn password_change_revokes_sessions() -> anyhow::Result<()> {
    let (app, _) = test_app().await?;
    let token = login(&app, EDITOR_USER, EDITOR_PASS).await?;

    let wrong = send(
        &app,
        "PUT",
        "/api/admin/password",
        Some(&token),
        Some(json!({"current_password": "not-it-at-all", "new_password": "brand-new-pass"})),
    )
    .await?;
    assert_eq!(wrong.status, StatusCode::UNAUTHORIZED);

    let changed = send(
        &app,
        "PUT",
        "/api/admin/password",
        Some(&token),
        Some(json!({"current_password": EDITOR_PASS, "new_password": "brand-new-pass"})),
    )
    .await?;
    assert_eq!(changed.status, StatusCode::OK);
    assert_eq!(changed.body["data"]["revoked_sessions"], 1);

    assert_eq!(send(&app, "GET", "/api/admin/verify", Some(&token), None).await?.status, StatusCode::UNAUTHORIZED);
    assert!(login(&app, EDITOR_USER, EDITOR_PASS).await.is_err());
    login(&app, EDITOR_USER, "brand-new-pass").await?;
    Ok(())
}
