use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use serde::Deserialize;
use utoipa::IntoParams;

use common::types::ApiResponse;
use models::booking::{self, NewBooking};
use service::services::booking_service;

use super::auth::guarded;
use super::{deleted, ok, ApiResult, Created, ServerState};
use crate::errors::{ApiPath, ApiQuery, JsonBody};

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct BookingQuery {
    /// pending, confirmed, cancelled or completed
    pub status: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct StatusUpdate {
    #[serde(default)]
    pub status: String,
}

pub fn public_routes() -> Router<ServerState> {
    Router::new().route("/bookings", post(create))
}

pub fn admin_routes(state: &ServerState) -> Router<ServerState> {
    Router::new()
        .route("/bookings", guarded(state, get(list)))
        .route("/bookings/:id", guarded(state, get(get_one).delete(remove)))
        .route("/bookings/:id/status", guarded(state, put(update_status)))
}

#[utoipa::path(post, path = "/api/bookings", tag = "bookings", responses((status = 201, description = "Booking received"), (status = 400, description = "Bad Request"), (status = 404, description = "Tour not found")))]
pub async fn create(State(state): State<ServerState>, JsonBody(input): JsonBody<NewBooking>) -> Created<booking::Model> {
    let row = booking_service::create_booking(&state.db, input).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok_with_message(row, "Booking request received. We will contact you shortly.")),
    ))
}

#[utoipa::path(get, path = "/api/bookings", tag = "bookings", params(BookingQuery), responses((status = 200, description = "Bookings, newest first"), (status = 401, description = "Unauthorized")))]
pub async fn list(State(state): State<ServerState>, ApiQuery(q): ApiQuery<BookingQuery>) -> ApiResult<Vec<booking::Model>> {
    ok(booking_service::list_bookings(&state.db, q.status.as_deref()).await?)
}

#[utoipa::path(get, path = "/api/bookings/{id}", tag = "bookings", params(("id" = i32, Path, description = "Booking id")), responses((status = 200, description = "Booking"), (status = 404, description = "Not Found")))]
pub async fn get_one(State(state): State<ServerState>, ApiPath(id): ApiPath<i32>) -> ApiResult<booking::Model> {
    ok(booking_service::get_booking(&state.db, id).await?)
}

#[utoipa::path(put, path = "/api/bookings/{id}/status", tag = "bookings", params(("id" = i32, Path, description = "Booking id")), request_body = crate::openapi::StatusRequest, responses((status = 200, description = "Status changed"), (status = 400, description = "Unknown status"), (status = 404, description = "Not Found")))]
pub async fn update_status(
    State(state): State<ServerState>,
    ApiPath(id): ApiPath<i32>,
    JsonBody(body): JsonBody<StatusUpdate>,
) -> ApiResult<booking::Model> {
    ok(booking_service::update_booking_status(&state.db, id, &body.status).await?)
}

#[utoipa::path(delete, path = "/api/bookings/{id}", tag = "bookings", params(("id" = i32, Path, description = "Booking id")), responses((status = 200, description = "Deleted"), (status = 404, description = "Not Found")))]
pub async fn remove(State(state): State<ServerState>, ApiPath(id): ApiPath<i32>) -> ApiResult<()> {
    booking_service::delete_booking(&state.db, id).await?;
    deleted("Booking")
}
