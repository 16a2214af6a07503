use axum::{
    extract::State,
    routing::{get, post, put},
    Router,
};

use models::partner::{self, NewPartner, PartnerPatch};
use service::services::partner_service;

use super::auth::guarded;
use super::projects::CategoryQuery;
use super::{created, deleted, ok, ApiResult, Created, ServerState};
use crate::errors::{ApiPath, ApiQuery, JsonBody};

pub fn public_routes() -> Router<ServerState> {
    Router::new()
        .route("/partners", get(list))
        .route("/partners/:id", get(get_one))
}

pub fn admin_routes(state: &ServerState) -> Router<ServerState> {
    Router::new()
        .route("/partners", guarded(state, post(create)))
        .route("/partners/:id", guarded(state, put(update).delete(remove)))
        .route("/admin/partners", guarded(state, get(admin_list)))
}

#[utoipa::path(get, path = "/api/partners", tag = "partners", params(CategoryQuery), responses((status = 200, description = "Active partners by sort order")))]
pub async fn list(State(state): State<ServerState>, ApiQuery(q): ApiQuery<CategoryQuery>) -> ApiResult<Vec<partner::Model>> {
    ok(partner_service::list_partners(&state.db, q.category.as_deref(), false).await?)
}

#[utoipa::path(get, path = "/api/admin/partners", tag = "partners", params(CategoryQuery), responses((status = 200, description = "All partners including inactive ones"), (status = 401, description = "Unauthorized")))]
pub async fn admin_list(State(state): State<ServerState>, ApiQuery(q): ApiQuery<CategoryQuery>) -> ApiResult<Vec<partner::Model>> {
    ok(partner_service::list_partners(&state.db, q.category.as_deref(), true).await?)
}

#[utoipa::path(get, path = "/api/partners/{id}", tag = "partners", params(("id" = i32, Path, description = "Partner id")), responses((status = 200, description = "Partner"), (status = 404, description = "Not Found")))]
pub async fn get_one(State(state): State<ServerState>, ApiPath(id): ApiPath<i32>) -> ApiResult<partner::Model> {
    ok(partner_service::get_partner(&state.db, id).await?)
}

#[utoipa::path(post, path = "/api/partners", tag = "partners", responses((status = 201, description = "Created"), (status = 400, description = "Bad Request")))]
pub async fn create(State(state): State<ServerState>, JsonBody(input): JsonBody<NewPartner>) -> Created<partner::Model> {
    created(partner_service::create_partner(&state.db, input).await?)
}

#[utoipa::path(put, path = "/api/partners/{id}", tag = "partners", params(("id" = i32, Path, description = "Partner id")), responses((status = 200, description = "Updated"), (status = 404, description = "Not Found")))]
pub async fn update(
    State(state): State<ServerState>,
    ApiPath(id): ApiPath<i32>,
    JsonBody(patch): JsonBody<PartnerPatch>,
) -> ApiResult<partner::Model> {
    ok(partner_service::update_partner(&state.db, id, patch).await?)
}

#[utoipa::path(delete, path = "/api/partners/{id}", tag = "partners", params(("id" = i32, Path, description = "Partner id")), responses((status = 200, description = "Deleted"), (status = 404, description = "Not Found")))]
pub async fn remove(State(state): State<ServerState>, ApiPath(id): ApiPath<i32>) -> ApiResult<()> {
    partner_service::delete_partner(&state.db, id).await?;
    deleted("Partner")
}
