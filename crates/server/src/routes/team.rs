use axum::{
    extract::State,
    routing::{get, post, put},
    Router,
};

use models::team_member::{self, NewTeamMember, TeamMemberPatch};
use service::services::team_service;

use super::auth::guarded;
use super::{created, deleted, ok, ApiResult, Created, ServerState};
use crate::errors::{ApiPath, JsonBody};

pub fn public_routes() -> Router<ServerState> {
    Router::new()
        .route("/team", get(list))
        .route("/team/:id", get(get_one))
}

pub fn admin_routes(state: &ServerState) -> Router<ServerState> {
    Router::new()
        .route("/team", guarded(state, post(create)))
        .route("/team/:id", guarded(state, put(update).delete(remove)))
        .route("/admin/team", guarded(state, get(admin_list)))
}

#[utoipa::path(get, path = "/api/team", tag = "team", responses((status = 200, description = "Active team members by sort order")))]
pub async fn list(State(state): State<ServerState>) -> ApiResult<Vec<team_member::Model>> {
    ok(team_service::list_members(&state.db, false).await?)
}

#[utoipa::path(get, path = "/api/admin/team", tag = "team", responses((status = 200, description = "All team members"), (status = 401, description = "Unauthorized")))]
pub async fn admin_list(State(state): State<ServerState>) -> ApiResult<Vec<team_member::Model>> {
    ok(team_service::list_members(&state.db, true).await?)
}

#[utoipa::path(get, path = "/api/team/{id}", tag = "team", params(("id" = i32, Path, description = "Member id")), responses((status = 200, description = "Team member"), (status = 404, description = "Not Found")))]
pub async fn get_one(State(state): State<ServerState>, ApiPath(id): ApiPath<i32>) -> ApiResult<team_member::Model> {
    ok(team_service::get_member(&state.db, id).await?)
}

#[utoipa::path(post, path = "/api/team", tag = "team", responses((status = 201, description = "Created"), (status = 400, description = "Bad Request")))]
pub async fn create(State(state): State<ServerState>, JsonBody(input): JsonBody<NewTeamMember>) -> Created<team_member::Model> {
    created(team_service::create_member(&state.db, input).await?)
}

#[utoipa::path(put, path = "/api/team/{id}", tag = "team", params(("id" = i32, Path, description = "Member id")), responses((status = 200, description = "Updated"), (status = 404, description = "Not Found")))]
pub async fn update(
    State(state): State<ServerState>,
    ApiPath(id): ApiPath<i32>,
    JsonBody(patch): JsonBody<TeamMemberPatch>,
) -> ApiResult<team_member::Model> {
    ok(team_service::update_member(&state.db, id, patch).await?)
}

#[utoipa::path(delete, path = "/api/team/{id}", tag = "team", params(("id" = i32, Path, description = "Member id")), responses((status = 200, description = "Deleted"), (status = 404, description = "Not Found")))]
pub async fn remove(State(state): State<ServerState>, ApiPath(id): ApiPath<i32>) -> ApiResult<()> {
    team_service::delete_member(&state.db, id).await?;
    deleted("Team member")
}
