//! Tours and the three-step editing workflow: basic info, media, day programs.

use axum::{
    extract::State,
    routing::{get, post, put},
    Json, Router,
};
use serde::Deserialize;
use utoipa::IntoParams;

use models::tour::{self, NewTour, TourMedia, TourPatch};
use models::tour_program::{self, NewTourProgram};
use service::services::{tour_program_service, tour_service};
use service::services::tour_service::TourFilter;

use super::auth::guarded;
use super::{created, deleted, ok, ApiResult, Created, ServerState};
use crate::errors::{ApiPath, ApiQuery, JsonBody};

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TourQuery {
    /// Exact category name
    pub category: Option<String>,
    /// `true` for featured tours only
    pub featured: Option<bool>,
}

/// Itinerary body: a bare array of days or `{ "programs": [...] }`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ProgramsBody {
    Days(Vec<NewTourProgram>),
    Wrapped { programs: Vec<NewTourProgram> },
}

impl From<ProgramsBody> for Vec<NewTourProgram> {
    fn from(body: ProgramsBody) -> Self {
        match body {
            ProgramsBody::Days(days) | ProgramsBody::Wrapped { programs: days } => days,
        }
    }
}

impl TourQuery {
    fn into_filter(self, include_inactive: bool) -> TourFilter {
        TourFilter { category: self.category, featured: self.featured, include_inactive }
    }
}

pub fn public_routes() -> Router<ServerState> {
    Router::new()
        .route("/tours", get(list))
        .route("/tours/:id", get(get_one))
        .route("/tours/slug/:slug", get(get_by_slug))
        .route("/tours/:id/programs", get(list_programs))
}

pub fn admin_routes(state: &ServerState) -> Router<ServerState> {
    Router::new()
        .route("/tours", guarded(state, post(create)))
        .route("/tours/:id", guarded(state, put(update).delete(remove)))
        .route("/tours/:id/media", guarded(state, put(update_media)))
        .route("/tours/:id/programs", guarded(state, put(replace_programs)))
        .route("/admin/tours", guarded(state, get(admin_list)))
}

#[utoipa::path(get, path = "/api/tours", tag = "tours", params(TourQuery), responses((status = 200, description = "Active tours, featured first")))]
pub async fn list(State(state): State<ServerState>, ApiQuery(q): ApiQuery<TourQuery>) -> ApiResult<Vec<tour::Model>> {
    ok(tour_service::list_tours(&state.db, q.into_filter(false)).await?)
}

#[utoipa::path(get, path = "/api/admin/tours", tag = "tours", params(TourQuery), responses((status = 200, description = "All tours including inactive ones"), (status = 401, description = "Unauthorized")))]
pub async fn admin_list(State(state): State<ServerState>, ApiQuery(q): ApiQuery<TourQuery>) -> ApiResult<Vec<tour::Model>> {
    ok(tour_service::list_tours(&state.db, q.into_filter(true)).await?)
}

#[utoipa::path(get, path = "/api/tours/{id}", tag = "tours", params(("id" = i32, Path, description = "Tour id")), responses((status = 200, description = "Tour"), (status = 404, description = "Not Found")))]
pub async fn get_one(State(state): State<ServerState>, ApiPath(id): ApiPath<i32>) -> ApiResult<tour::Model> {
    ok(tour_service::get_tour(&state.db, id).await?)
}

#[utoipa::path(get, path = "/api/tours/slug/{slug}", tag = "tours", params(("slug" = String, Path, description = "Tour slug")), responses((status = 200, description = "Tour"), (status = 404, description = "Not Found")))]
pub async fn get_by_slug(State(state): State<ServerState>, ApiPath(slug): ApiPath<String>) -> ApiResult<tour::Model> {
    ok(tour_service::get_tour_by_slug(&state.db, &slug).await?)
}

#[utoipa::path(post, path = "/api/tours", tag = "tours", responses((status = 201, description = "Created"), (status = 400, description = "Bad Request"), (status = 409, description = "Slug already used")))]
pub async fn create(State(state): State<ServerState>, JsonBody(input): JsonBody<NewTour>) -> Created<tour::Model> {
    created(tour_service::create_tour(&state.db, input).await?)
}

#[utoipa::path(put, path = "/api/tours/{id}", tag = "tours", params(("id" = i32, Path, description = "Tour id")), responses((status = 200, description = "Updated"), (status = 400, description = "Bad Request"), (status = 404, description = "Not Found")))]
pub async fn update(
    State(state): State<ServerState>,
    ApiPath(id): ApiPath<i32>,
    JsonBody(patch): JsonBody<TourPatch>,
) -> ApiResult<tour::Model> {
    ok(tour_service::update_tour(&state.db, id, patch).await?)
}

#[utoipa::path(put, path = "/api/tours/{id}/media", tag = "tours", params(("id" = i32, Path, description = "Tour id")), responses((status = 200, description = "Cover image and gallery replaced"), (status = 404, description = "Not Found")))]
pub async fn update_media(
    State(state): State<ServerState>,
    ApiPath(id): ApiPath<i32>,
    JsonBody(media): JsonBody<TourMedia>,
) -> ApiResult<tour::Model> {
    ok(tour_service::update_tour_media(&state.db, id, media).await?)
}

#[utoipa::path(delete, path = "/api/tours/{id}", tag = "tours", params(("id" = i32, Path, description = "Tour id")), responses((status = 200, description = "Deleted"), (status = 404, description = "Not Found")))]
pub async fn remove(State(state): State<ServerState>, ApiPath(id): ApiPath<i32>) -> ApiResult<()> {
    tour_service::delete_tour(&state.db, id).await?;
    deleted("Tour")
}

#[utoipa::path(get, path = "/api/tours/{id}/programs", tag = "tours", params(("id" = i32, Path, description = "Tour id")), responses((status = 200, description = "Itinerary ordered by day"), (status = 404, description = "Not Found")))]
pub async fn list_programs(State(state): State<ServerState>, ApiPath(id): ApiPath<i32>) -> ApiResult<Vec<tour_program::Model>> {
    ok(tour_program_service::programs_for_tour(&state.db, id).await?)
}

#[utoipa::path(put, path = "/api/tours/{id}/programs", tag = "tours", params(("id" = i32, Path, description = "Tour id")), responses((status = 200, description = "Itinerary replaced"), (status = 400, description = "Duplicate or invalid day numbers"), (status = 404, description = "Not Found")))]
pub async fn replace_programs(
    State(state): State<ServerState>,
    ApiPath(id): ApiPath<i32>,
    JsonBody(body): JsonBody<ProgramsBody>,
) -> ApiResult<Vec<tour_program::Model>> {
    let days = tour_program_service::replace_programs(&state.db, id, body.into()).await?;
    Ok(Json(common::types::ApiResponse::ok_with_message(days, "Itinerary saved")))
}
