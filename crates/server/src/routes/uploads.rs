//! Admin media uploads into the configured blob store.

use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};
use serde::Deserialize;
use tracing::info;
use utoipa::IntoParams;

use common::metrics::UPLOADS_TOTAL;
use common::types::ApiResponse;
use service::storage::{Base64Upload, ObjectEntry, StoredObject};

use super::auth::guarded;
use super::{ok, ApiResult, Created, ServerState};
use crate::errors::{ApiQuery, JsonApiError, JsonBody};

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    /// Key prefix, e.g. `tours/`
    pub prefix: Option<String>,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DeleteQuery {
    /// Object key as returned by the upload
    #[serde(default)]
    pub key: String,
}

pub fn admin_routes(state: &ServerState) -> Router<ServerState> {
    Router::new()
        .route("/upload", guarded(state, post(upload_multipart).get(list).delete(remove)))
        .route("/upload/base64", guarded(state, post(upload_base64)))
}

struct FilePart {
    filename: String,
    content_type: Option<String>,
    bytes: Vec<u8>,
}

#[utoipa::path(post, path = "/api/upload", tag = "uploads", responses((status = 201, description = "Stored"), (status = 400, description = "Missing file, oversize or disallowed type"), (status = 401, description = "Unauthorized")))]
pub async fn upload_multipart(State(state): State<ServerState>, mut multipart: Multipart) -> Created<StoredObject> {
    let mut file: Option<FilePart> = None;
    let mut folder: Option<String> = None;

    while let Some(field) = multipart.next_field().await? {
        match field.name() {
            Some("file") => {
                let filename = field.file_name().unwrap_or("upload").to_string();
                let content_type = field.content_type().map(str::to_string);
                let bytes = field.bytes().await?.to_vec();
                file = Some(FilePart { filename, content_type, bytes });
            }
            Some("folder") => folder = Some(field.text().await?),
            _ => {}
        }
    }

    let part = file.ok_or_else(|| JsonApiError::bad_request("multipart field `file` is required"))?;
    let stored = state
        .blobs
        .put(folder.as_deref(), &part.filename, part.content_type.as_deref(), part.bytes)
        .await?;
    UPLOADS_TOTAL.inc();
    Ok((StatusCode::CREATED, Json(ApiResponse::ok_with_message(stored, "File uploaded"))))
}

#[utoipa::path(post, path = "/api/upload/base64", tag = "uploads", request_body = crate::openapi::Base64UploadRequest, responses((status = 201, description = "Stored"), (status = 400, description = "Invalid data, oversize or disallowed type"), (status = 401, description = "Unauthorized")))]
pub async fn upload_base64(State(state): State<ServerState>, JsonBody(upload): JsonBody<Base64Upload>) -> Created<StoredObject> {
    let stored = state.blobs.put_base64(upload).await?;
    UPLOADS_TOTAL.inc();
    Ok((StatusCode::CREATED, Json(ApiResponse::ok_with_message(stored, "File uploaded"))))
}

#[utoipa::path(get, path = "/api/upload", tag = "uploads", params(ListQuery), responses((status = 200, description = "Stored objects sorted by key"), (status = 401, description = "Unauthorized")))]
pub async fn list(State(state): State<ServerState>, ApiQuery(q): ApiQuery<ListQuery>) -> ApiResult<Vec<ObjectEntry>> {
    ok(state.blobs.list(q.prefix.as_deref()).await?)
}

#[utoipa::path(delete, path = "/api/upload", tag = "uploads", params(DeleteQuery), responses((status = 200, description = "Deleted (or already absent)"), (status = 400, description = "Invalid key"), (status = 401, description = "Unauthorized")))]
pub async fn remove(State(state): State<ServerState>, ApiQuery(q): ApiQuery<DeleteQuery>) -> ApiResult<()> {
    state.blobs.delete(&q.key).await?;
    info!(key = %q.key, "blob deleted");
    Ok(Json(ApiResponse::message("File deleted")))
}
