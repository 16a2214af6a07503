use axum::{
    extract::State,
    routing::{get, post, put},
    Router,
};

use models::program::{self, NewProgram, ProgramPatch};
use service::services::program_service;

use super::auth::guarded;
use super::projects::CategoryQuery;
use super::{created, deleted, ok, ApiResult, Created, ServerState};
use crate::errors::{ApiPath, ApiQuery, JsonBody};

pub fn public_routes() -> Router<ServerState> {
    Router::new()
        .route("/programs", get(list))
        .route("/programs/:id", get(get_one))
}

pub fn admin_routes(state: &ServerState) -> Router<ServerState> {
    Router::new()
        .route("/programs", guarded(state, post(create)))
        .route("/programs/:id", guarded(state, put(update).delete(remove)))
        .route("/admin/programs", guarded(state, get(admin_list)))
}

#[utoipa::path(get, path = "/api/programs", tag = "programs", params(CategoryQuery), responses((status = 200, description = "Active programs")))]
pub async fn list(State(state): State<ServerState>, ApiQuery(q): ApiQuery<CategoryQuery>) -> ApiResult<Vec<program::Model>> {
    ok(program_service::list_programs(&state.db, q.category.as_deref(), false).await?)
}

#[utoipa::path(get, path = "/api/admin/programs", tag = "programs", params(CategoryQuery), responses((status = 200, description = "All programs including inactive ones"), (status = 401, description = "Unauthorized")))]
pub async fn admin_list(State(state): State<ServerState>, ApiQuery(q): ApiQuery<CategoryQuery>) -> ApiResult<Vec<program::Model>> {
    ok(program_service::list_programs(&state.db, q.category.as_deref(), true).await?)
}

#[utoipa::path(get, path = "/api/programs/{id}", tag = "programs", params(("id" = i32, Path, description = "Program id")), responses((status = 200, description = "Program"), (status = 404, description = "Not Found")))]
pub async fn get_one(State(state): State<ServerState>, ApiPath(id): ApiPath<i32>) -> ApiResult<program::Model> {
    ok(program_service::get_program(&state.db, id).await?)
}

#[utoipa::path(post, path = "/api/programs", tag = "programs", responses((status = 201, description = "Created"), (status = 400, description = "Bad Request")))]
pub async fn create(State(state): State<ServerState>, JsonBody(input): JsonBody<NewProgram>) -> Created<program::Model> {
    created(program_service::create_program(&state.db, input).await?)
}

#[utoipa::path(put, path = "/api/programs/{id}", tag = "programs", params(("id" = i32, Path, description = "Program id")), responses((status = 200, description = "Updated"), (status = 404, description = "Not Found")))]
pub async fn update(
    State(state): State<ServerState>,
    ApiPath(id): ApiPath<i32>,
    JsonBody(patch): JsonBody<ProgramPatch>,
) -> ApiResult<program::Model> {
    ok(program_service::update_program(&state.db, id, patch).await?)
}

#[utoipa::path(delete, path = "/api/programs/{id}", tag = "programs", params(("id" = i32, Path, description = "Program id")), responses((status = 200, description = "Deleted"), (status = 404, description = "Not Found")))]
pub async fn remove(State(state): State<ServerState>, ApiPath(id): ApiPath<i32>) -> ApiResult<()> {
    program_service::delete_program(&state.db, id).await?;
    deleted("Program")
}
