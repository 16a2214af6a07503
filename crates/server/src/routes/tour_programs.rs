//! Single itinerary days. Whole-itinerary replacement lives under `/tours/:id/programs`.

use axum::{
    extract::State,
    routing::{get, post, put},
    Router,
};
use serde::Deserialize;
use utoipa::IntoParams;

use models::tour_program::{self, NewTourProgram, TourProgramPatch};
use service::services::tour_program_service;

use super::auth::guarded;
use super::{created, deleted, ok, ApiResult, Created, ServerState};
use crate::errors::{ApiPath, ApiQuery, JsonBody};

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TourProgramQuery {
    pub tour_id: Option<i32>,
}

pub fn public_routes() -> Router<ServerState> {
    Router::new()
        .route("/tour-programs", get(list))
        .route("/tour-programs/:id", get(get_one))
}

pub fn admin_routes(state: &ServerState) -> Router<ServerState> {
    Router::new()
        .route("/tour-programs", guarded(state, post(create)))
        .route("/tour-programs/:id", guarded(state, put(update).delete(remove)))
}

#[utoipa::path(get, path = "/api/tour-programs", tag = "tour-programs", params(TourProgramQuery), responses((status = 200, description = "Days ordered by tour and day number")))]
pub async fn list(State(state): State<ServerState>, ApiQuery(q): ApiQuery<TourProgramQuery>) -> ApiResult<Vec<tour_program::Model>> {
    ok(tour_program_service::list_programs(&state.db, q.tour_id).await?)
}

#[utoipa::path(get, path = "/api/tour-programs/{id}", tag = "tour-programs", params(("id" = i32, Path, description = "Day id")), responses((status = 200, description = "Day"), (status = 404, description = "Not Found")))]
pub async fn get_one(State(state): State<ServerState>, ApiPath(id): ApiPath<i32>) -> ApiResult<tour_program::Model> {
    ok(tour_program_service::get_program(&state.db, id).await?)
}

#[utoipa::path(post, path = "/api/tour-programs", tag = "tour-programs", responses((status = 201, description = "Created"), (status = 400, description = "Bad Request"), (status = 404, description = "Tour not found"), (status = 409, description = "Day already exists for the tour")))]
pub async fn create(State(state): State<ServerState>, JsonBody(input): JsonBody<NewTourProgram>) -> Created<tour_program::Model> {
    created(tour_program_service::create_program(&state.db, input).await?)
}

#[utoipa::path(put, path = "/api/tour-programs/{id}", tag = "tour-programs", params(("id" = i32, Path, description = "Day id")), responses((status = 200, description = "Updated"), (status = 404, description = "Not Found")))]
pub async fn update(
    State(state): State<ServerState>,
    ApiPath(id): ApiPath<i32>,
    JsonBody(patch): JsonBody<TourProgramPatch>,
) -> ApiResult<tour_program::Model> {
    ok(tour_program_service::update_program(&state.db, id, patch).await?)
}

#[utoipa::path(delete, path = "/api/tour-programs/{id}", tag = "tour-programs", params(("id" = i32, Path, description = "Day id")), responses((status = 200, description = "Deleted"), (status = 404, description = "Not Found")))]
pub async fn remove(State(state): State<ServerState>, ApiPath(id): ApiPath<i32>) -> ApiResult<()> {
    tour_program_service::delete_program(&state.db, id).await?;
    deleted("Tour program")
}
