//! Editable sections of the static pages (`contact`, `about`).

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};

use common::types::ApiResponse;
use models::page_content::{self, PageSectionInput};
use service::services::page_service;

use super::auth::guarded;
use super::{deleted, ok, ApiResult, Created, ServerState};
use crate::errors::{ApiPath, JsonBody};

pub fn public_routes() -> Router<ServerState> {
    Router::new().route("/pages/:page", get(get_page))
}

pub fn admin_routes(state: &ServerState) -> Router<ServerState> {
    Router::new().route("/pages/:page/:section", guarded(state, put(upsert_section).delete(remove_section)))
}

#[utoipa::path(get, path = "/api/pages/{page}", tag = "pages", params(("page" = String, Path, description = "contact or about")), responses((status = 200, description = "Sections by sort order"), (status = 400, description = "Unknown page")))]
pub async fn get_page(State(state): State<ServerState>, ApiPath(page): ApiPath<String>) -> ApiResult<Vec<page_content::Model>> {
    ok(page_service::get_page(&state.db, &page).await?)
}

#[utoipa::path(put, path = "/api/pages/{page}/{section}", tag = "pages", params(("page" = String, Path, description = "contact or about"), ("section" = String, Path, description = "Section key")), responses((status = 200, description = "Section updated"), (status = 201, description = "Section created"), (status = 400, description = "Bad Request")))]
pub async fn upsert_section(
    State(state): State<ServerState>,
    ApiPath((page, section)): ApiPath<(String, String)>,
    JsonBody(input): JsonBody<PageSectionInput>,
) -> Created<page_content::Model> {
    let (row, is_new) = page_service::upsert_section(&state.db, &page, &section, input).await?;
    let status = if is_new { StatusCode::CREATED } else { StatusCode::OK };
    Ok((status, Json(ApiResponse::ok(row))))
}

#[utoipa::path(delete, path = "/api/pages/{page}/{section}", tag = "pages", params(("page" = String, Path, description = "contact or about"), ("section" = String, Path, description = "Section key")), responses((status = 200, description = "Deleted"), (status = 404, description = "Not Found")))]
pub async fn remove_section(
    State(state): State<ServerState>,
    ApiPath((page, section)): ApiPath<(String, String)>,
) -> ApiResult<()> {
    page_service::delete_section(&state.db, &page, &section).await?;
    deleted("Section")
}
