use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use serde::Deserialize;
use utoipa::IntoParams;

use common::types::ApiResponse;
use models::contact_message::{self, NewContactMessage};
use service::services::contact_service;

use super::auth::guarded;
use super::{deleted, ok, ApiResult, Created, ServerState};
use crate::errors::{ApiPath, ApiQuery, JsonBody};

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ContactQuery {
    #[serde(default)]
    pub unread_only: bool,
}

pub fn public_routes() -> Router<ServerState> {
    Router::new().route("/contact", post(create))
}

pub fn admin_routes(state: &ServerState) -> Router<ServerState> {
    Router::new()
        .route("/contact", guarded(state, get(list)))
        .route("/contact/:id", guarded(state, get(get_one).delete(remove)))
        .route("/contact/:id/read", guarded(state, put(mark_read)))
}

#[utoipa::path(post, path = "/api/contact", tag = "contact", responses((status = 201, description = "Message received"), (status = 400, description = "Bad Request")))]
pub async fn create(State(state): State<ServerState>, JsonBody(input): JsonBody<NewContactMessage>) -> Created<contact_message::Model> {
    let row = contact_service::create_message(&state.db, input).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok_with_message(row, "Thank you for your message."))))
}

#[utoipa::path(get, path = "/api/contact", tag = "contact", params(ContactQuery), responses((status = 200, description = "Messages, newest first"), (status = 401, description = "Unauthorized")))]
pub async fn list(State(state): State<ServerState>, ApiQuery(q): ApiQuery<ContactQuery>) -> ApiResult<Vec<contact_message::Model>> {
    ok(contact_service::list_messages(&state.db, q.unread_only).await?)
}

#[utoipa::path(get, path = "/api/contact/{id}", tag = "contact", params(("id" = i32, Path, description = "Message id")), responses((status = 200, description = "Message"), (status = 404, description = "Not Found")))]
pub async fn get_one(State(state): State<ServerState>, ApiPath(id): ApiPath<i32>) -> ApiResult<contact_message::Model> {
    ok(contact_service::get_message(&state.db, id).await?)
}

#[utoipa::path(put, path = "/api/contact/{id}/read", tag = "contact", params(("id" = i32, Path, description = "Message id")), responses((status = 200, description = "Marked as read"), (status = 404, description = "Not Found")))]
pub async fn mark_read(State(state): State<ServerState>, ApiPath(id): ApiPath<i32>) -> ApiResult<contact_message::Model> {
    ok(contact_service::mark_read(&state.db, id).await?)
}

#[utoipa::path(delete, path = "/api/contact/{id}", tag = "contact", params(("id" = i32, Path, description = "Message id")), responses((status = 200, description = "Deleted"), (status = 404, description = "Not Found")))]
pub async fn remove(State(state): State<ServerState>, ApiPath(id): ApiPath<i32>) -> ApiResult<()> {
    contact_service::delete_message(&state.db, id).await?;
    deleted("Message")
}
