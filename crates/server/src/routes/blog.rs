use axum::{
    extract::State,
    routing::{get, post, put},
    Router,
};
use serde::Deserialize;
use utoipa::IntoParams;

use models::blog_post::{self, BlogPostPatch, NewBlogPost};
use service::services::blog_service::{self, BlogFilter};

use super::auth::guarded;
use super::{created, deleted, ok, ApiResult, Created, ServerState};
use crate::errors::{ApiPath, ApiQuery, JsonBody};

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct BlogQuery {
    pub category: Option<String>,
    /// Posts carrying this tag
    pub tag: Option<String>,
}

impl BlogQuery {
    fn into_filter(self, include_drafts: bool) -> BlogFilter {
        BlogFilter { category: self.category, tag: self.tag, include_drafts }
    }
}

pub fn public_routes() -> Router<ServerState> {
    Router::new()
        .route("/blog", get(list))
        .route("/blog/:id", get(get_one))
        .route("/blog/slug/:slug", get(get_by_slug))
}

pub fn admin_routes(state: &ServerState) -> Router<ServerState> {
    Router::new()
        .route("/blog", guarded(state, post(create)))
        .route("/blog/:id", guarded(state, put(update).delete(remove)))
        .route("/admin/blog", guarded(state, get(admin_list)))
        .route("/admin/blog/:id", guarded(state, get(admin_get)))
}

#[utoipa::path(get, path = "/api/blog", tag = "blog", params(BlogQuery), responses((status = 200, description = "Published posts, newest first")))]
pub async fn list(State(state): State<ServerState>, ApiQuery(q): ApiQuery<BlogQuery>) -> ApiResult<Vec<blog_post::Model>> {
    ok(blog_service::list_posts(&state.db, q.into_filter(false)).await?)
}

#[utoipa::path(get, path = "/api/admin/blog", tag = "blog", params(BlogQuery), responses((status = 200, description = "All posts including drafts"), (status = 401, description = "Unauthorized")))]
pub async fn admin_list(State(state): State<ServerState>, ApiQuery(q): ApiQuery<BlogQuery>) -> ApiResult<Vec<blog_post::Model>> {
    ok(blog_service::list_posts(&state.db, q.into_filter(true)).await?)
}

#[utoipa::path(get, path = "/api/blog/{id}", tag = "blog", params(("id" = i32, Path, description = "Post id")), responses((status = 200, description = "Published post"), (status = 404, description = "Not Found")))]
pub async fn get_one(State(state): State<ServerState>, ApiPath(id): ApiPath<i32>) -> ApiResult<blog_post::Model> {
    ok(blog_service::get_post(&state.db, id, true).await?)
}

#[utoipa::path(get, path = "/api/admin/blog/{id}", tag = "blog", params(("id" = i32, Path, description = "Post id")), responses((status = 200, description = "Post, draft or published"), (status = 404, description = "Not Found")))]
pub async fn admin_get(State(state): State<ServerState>, ApiPath(id): ApiPath<i32>) -> ApiResult<blog_post::Model> {
    ok(blog_service::get_post(&state.db, id, false).await?)
}

#[utoipa::path(get, path = "/api/blog/slug/{slug}", tag = "blog", params(("slug" = String, Path, description = "Post slug")), responses((status = 200, description = "Published post"), (status = 404, description = "Not Found")))]
pub async fn get_by_slug(State(state): State<ServerState>, ApiPath(slug): ApiPath<String>) -> ApiResult<blog_post::Model> {
    ok(blog_service::get_post_by_slug(&state.db, &slug, true).await?)
}

#[utoipa::path(post, path = "/api/blog", tag = "blog", responses((status = 201, description = "Created"), (status = 400, description = "Bad Request"), (status = 409, description = "Slug already used")))]
pub async fn create(State(state): State<ServerState>, JsonBody(input): JsonBody<NewBlogPost>) -> Created<blog_post::Model> {
    created(blog_service::create_post(&state.db, input).await?)
}

#[utoipa::path(put, path = "/api/blog/{id}", tag = "blog", params(("id" = i32, Path, description = "Post id")), responses((status = 200, description = "Updated"), (status = 404, description = "Not Found"), (status = 409, description = "Slug already used")))]
pub async fn update(
    State(state): State<ServerState>,
    ApiPath(id): ApiPath<i32>,
    JsonBody(patch): JsonBody<BlogPostPatch>,
) -> ApiResult<blog_post::Model> {
    ok(blog_service::update_post(&state.db, id, patch).await?)
}

#[utoipa::path(delete, path = "/api/blog/{id}", tag = "blog", params(("id" = i32, Path, description = "Post id")), responses((status = 200, description = "Deleted"), (status = 404, description = "Not Found")))]
pub async fn remove(State(state): State<ServerState>, ApiPath(id): ApiPath<i32>) -> ApiResult<()> {
    blog_service::delete_post(&state.db, id).await?;
    deleted("Post")
}
