use axum::{
    extract::State,
    routing::{get, post, put},
    Router,
};
use serde::Deserialize;
use utoipa::IntoParams;

use models::project::{self, NewProject, ProjectPatch};
use service::services::project_service;

use super::auth::guarded;
use super::{created, deleted, ok, ApiResult, Created, ServerState};
use crate::errors::{ApiPath, ApiQuery, JsonBody};

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CategoryQuery {
    pub category: Option<String>,
}

pub fn public_routes() -> Router<ServerState> {
    Router::new()
        .route("/projects", get(list))
        .route("/projects/:id", get(get_one))
}

pub fn admin_routes(state: &ServerState) -> Router<ServerState> {
    Router::new()
        .route("/projects", guarded(state, post(create)))
        .route("/projects/:id", guarded(state, put(update).delete(remove)))
}

#[utoipa::path(get, path = "/api/projects", tag = "projects", params(CategoryQuery), responses((status = 200, description = "Projects, featured first")))]
pub async fn list(State(state): State<ServerState>, ApiQuery(q): ApiQuery<CategoryQuery>) -> ApiResult<Vec<project::Model>> {
    ok(project_service::list_projects(&state.db, q.category.as_deref()).await?)
}

#[utoipa::path(get, path = "/api/projects/{id}", tag = "projects", params(("id" = i32, Path, description = "Project id")), responses((status = 200, description = "Project"), (status = 404, description = "Not Found")))]
pub async fn get_one(State(state): State<ServerState>, ApiPath(id): ApiPath<i32>) -> ApiResult<project::Model> {
    ok(project_service::get_project(&state.db, id).await?)
}

#[utoipa::path(post, path = "/api/projects", tag = "projects", responses((status = 201, description = "Created"), (status = 400, description = "Bad Request")))]
pub async fn create(State(state): State<ServerState>, JsonBody(input): JsonBody<NewProject>) -> Created<project::Model> {
    created(project_service::create_project(&state.db, input).await?)
}

#[utoipa::path(put, path = "/api/projects/{id}", tag = "projects", params(("id" = i32, Path, description = "Project id")), responses((status = 200, description = "Updated"), (status = 404, description = "Not Found")))]
pub async fn update(
    State(state): State<ServerState>,
    ApiPath(id): ApiPath<i32>,
    JsonBody(patch): JsonBody<ProjectPatch>,
) -> ApiResult<project::Model> {
    ok(project_service::update_project(&state.db, id, patch).await?)
}

#[utoipa::path(delete, path = "/api/projects/{id}", tag = "projects", params(("id" = i32, Path, description = "Project id")), responses((status = 200, description = "Deleted"), (status = 404, description = "Not Found")))]
pub async fn remove(State(state): State<ServerState>, ApiPath(id): ApiPath<i32>) -> ApiResult<()> {
    project_service::delete_project(&state.db, id).await?;
    deleted("Project")
}
