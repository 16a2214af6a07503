use axum::extract::multipart::MultipartError;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{FromRequest, FromRequestParts};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use common::types::ErrorBody;
use models::errors::ModelError;
use service::auth::errors::AuthError;
use service::errors::ServiceError;
use thiserror::Error;
use tracing::{error, warn};

/// Failure envelope returned by every handler.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub title: String,
    pub detail: Option<String>,
}

impl JsonApiError {
    pub fn new(status: StatusCode, title: &str, detail: Option<String>) -> Self {
        Self { status, title: title.to_string(), detail }
    }

    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "Bad Request", Some(detail.into()))
    }

    pub fn unauthorized(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, "Unauthorized", Some(detail.into()))
    }

    pub fn forbidden(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::FORBIDDEN, "Forbidden", Some(detail.into()))
    }

    pub fn not_found(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, "Not Found", Some(detail.into()))
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error", Some(detail.into()))
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            error!(status = %self.status, error = %self.title, detail = ?self.detail, "request failed");
        }
        (self.status, Json(ErrorBody::new(self.title, self.detail))).into_response()
    }
}

impl From<ModelError> for JsonApiError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::Validation(m) => JsonApiError::bad_request(m),
            ModelError::Conflict(m) => JsonApiError::new(StatusCode::CONFLICT, "Conflict", Some(m)),
            ModelError::Db(m) => JsonApiError::internal(m),
        }
    }
}

impl From<ServiceError> for JsonApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::Validation(m) => JsonApiError::bad_request(m),
            ServiceError::NotFound(m) => JsonApiError::not_found(m),
            ServiceError::Conflict(m) => JsonApiError::new(StatusCode::CONFLICT, "Conflict", Some(m)),
            ServiceError::Db(m) => JsonApiError::internal(m),
            ServiceError::Storage(m) => JsonApiError::new(StatusCode::BAD_GATEWAY, "Storage Error", Some(m)),
            ServiceError::Model(m) => m.into(),
        }
    }
}

impl From<AuthError> for JsonApiError {
    fn from(e: AuthError) -> Self {
        let code = e.code();
        match e {
            AuthError::Validation(m) => JsonApiError::bad_request(m),
            AuthError::Conflict => JsonApiError::new(StatusCode::CONFLICT, "Conflict", Some("user already exists".into())),
            AuthError::NotFound => JsonApiError::not_found("user not found"),
            AuthError::Unauthorized => JsonApiError::unauthorized("invalid credentials"),
            AuthError::Forbidden => JsonApiError::forbidden("admin role required"),
            other => {
                warn!(code, error = %other, "auth backend failure");
                JsonApiError::internal(other.to_string())
            }
        }
    }
}

impl From<JsonRejection> for JsonApiError {
    fn from(rejection: JsonRejection) -> Self {
        let status = match rejection {
            JsonRejection::MissingJsonContentType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            JsonRejection::BytesRejection(ref r) => r.status(),
            _ => StatusCode::BAD_REQUEST,
        };
        let title = if status == StatusCode::BAD_REQUEST || status == StatusCode::UNPROCESSABLE_ENTITY {
            "Invalid JSON"
        } else {
            "Bad Request"
        };
        // field type errors surface as 422 from axum; keep them in the 400 family
        let status = if status == StatusCode::UNPROCESSABLE_ENTITY { StatusCode::BAD_REQUEST } else { status };
        JsonApiError::new(status, title, Some(rejection.body_text()))
    }
}

impl From<PathRejection> for JsonApiError {
    fn from(rejection: PathRejection) -> Self {
        JsonApiError::new(StatusCode::BAD_REQUEST, "Invalid Path", Some(rejection.body_text()))
    }
}

impl From<QueryRejection> for JsonApiError {
    fn from(rejection: QueryRejection) -> Self {
        JsonApiError::new(StatusCode::BAD_REQUEST, "Invalid Query", Some(rejection.body_text()))
    }
}

impl From<MultipartError> for JsonApiError {
    fn from(e: MultipartError) -> Self {
        JsonApiError::new(e.status(), "Upload Failed", Some(e.body_text()))
    }
}

/// `Json<T>` whose rejections use the failure envelope.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(JsonApiError))]
pub struct JsonBody<T>(pub T);

/// `Path<T>` whose rejections use the failure envelope.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(JsonApiError))]
pub struct ApiPath<T>(pub T);

/// `Query<T>` whose rejections use the failure envelope.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(JsonApiError))]
pub struct ApiQuery<T>(pub T);

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("runtime check failed: {0}")]
    Runtime(String),
    #[error(transparent)]
    Any(#[from] anyhow::Error),
}
