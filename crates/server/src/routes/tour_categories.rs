use axum::{
    extract::State,
    routing::{get, post, put},
    Router,
};

use models::tour_category::{self, NewTourCategory, TourCategoryPatch};
use service::services::tour_category_service;

use super::auth::guarded;
use super::{created, deleted, ok, ApiResult, Created, ServerState};
use crate::errors::{ApiPath, JsonBody};

pub fn public_routes() -> Router<ServerState> {
    Router::new()
        .route("/tour-categories", get(list))
        .route("/tour-categories/:id", get(get_one))
}

pub fn admin_routes(state: &ServerState) -> Router<ServerState> {
    Router::new()
        .route("/tour-categories", guarded(state, post(create)))
        .route("/tour-categories/:id", guarded(state, put(update).delete(remove)))
}

#[utoipa::path(get, path = "/api/tour-categories", tag = "tour-categories", responses((status = 200, description = "Categories by sort order")))]
pub async fn list(State(state): State<ServerState>) -> ApiResult<Vec<tour_category::Model>> {
    ok(tour_category_service::list_categories(&state.db).await?)
}

#[utoipa::path(get, path = "/api/tour-categories/{id}", tag = "tour-categories", params(("id" = i32, Path, description = "Category id")), responses((status = 200, description = "Category"), (status = 404, description = "Not Found")))]
pub async fn get_one(State(state): State<ServerState>, ApiPath(id): ApiPath<i32>) -> ApiResult<tour_category::Model> {
    ok(tour_category_service::get_category(&state.db, id).await?)
}

#[utoipa::path(post, path = "/api/tour-categories", tag = "tour-categories", responses((status = 201, description = "Created"), (status = 400, description = "Bad Request"), (status = 409, description = "Slug already used")))]
pub async fn create(State(state): State<ServerState>, JsonBody(input): JsonBody<NewTourCategory>) -> Created<tour_category::Model> {
    created(tour_category_service::create_category(&state.db, input).await?)
}

#[utoipa::path(put, path = "/api/tour-categories/{id}", tag = "tour-categories", params(("id" = i32, Path, description = "Category id")), responses((status = 200, description = "Updated"), (status = 404, description = "Not Found"), (status = 409, description = "Slug already used")))]
pub async fn update(
    State(state): State<ServerState>,
    ApiPath(id): ApiPath<i32>,
    JsonBody(patch): JsonBody<TourCategoryPatch>,
) -> ApiResult<tour_category::Model> {
    ok(tour_category_service::update_category(&state.db, id, patch).await?)
}

#[utoipa::path(delete, path = "/api/tour-categories/{id}", tag = "tour-categories", params(("id" = i32, Path, description = "Category id")), responses((status = 200, description = "Deleted"), (status = 404, description = "Not Found")))]
pub async fn remove(State(state): State<ServerState>, ApiPath(id): ApiPath<i32>) -> ApiResult<()> {
    tour_category_service::delete_category(&state.db, id).await?;
    deleted("Category")
}
