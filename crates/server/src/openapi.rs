use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub database: String,
}

#[derive(ToSchema)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(ToSchema)]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

#[derive(ToSchema)]
pub struct NewAdminUserRequest {
    pub username: String,
    pub password: String,
    pub email: Option<String>,
    pub full_name: Option<String>,
    /// `admin` or `editor` (default)
    pub role: Option<String>,
}

#[derive(ToSchema)]
pub struct StatusRequest {
    pub status: String,
}

#[derive(ToSchema)]
pub struct Base64UploadRequest {
    pub filename: String,
    pub content_type: Option<String>,
    /// Bare base64 or a `data:<mime>;base64,` URL
    pub data: String,
    pub folder: Option<String>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::auth::login,
        crate::routes::auth::logout,
        crate::routes::auth::verify,
        crate::routes::auth::change_password,
        crate::routes::auth::list_users,
        crate::routes::auth::create_user,
        crate::routes::auth::cleanup_sessions,
        crate::routes::tour_categories::list,
        crate::routes::tour_categories::get_one,
        crate::routes::tour_categories::create,
        crate::routes::tour_categories::update,
        crate::routes::tour_categories::remove,
        crate::routes::tours::list,
        crate::routes::tours::admin_list,
        crate::routes::tours::get_one,
        crate::routes::tours::get_by_slug,
        crate::routes::tours::create,
        crate::routes::tours::update,
        crate::routes::tours::update_media,
        crate::routes::tours::remove,
        crate::routes::tours::list_programs,
        crate::routes::tours::replace_programs,
        crate::routes::tour_programs::list,
        crate::routes::tour_programs::get_one,
        crate::routes::tour_programs::create,
        crate::routes::tour_programs::update,
        crate::routes::tour_programs::remove,
        crate::routes::projects::list,
        crate::routes::projects::get_one,
        crate::routes::projects::create,
        crate::routes::projects::update,
        crate::routes::projects::remove,
        crate::routes::programs::list,
        crate::routes::programs::admin_list,
        crate::routes::programs::get_one,
        crate::routes::programs::create,
        crate::routes::programs::update,
        crate::routes::programs::remove,
        crate::routes::partners::list,
        crate::routes::partners::admin_list,
        crate::routes::partners::get_one,
        crate::routes::partners::create,
        crate::routes::partners::update,
        crate::routes::partners::remove,
        crate::routes::team::list,
        crate::routes::team::admin_list,
        crate::routes::team::get_one,
        crate::routes::team::create,
        crate::routes::team::update,
        crate::routes::team::remove,
        crate::routes::blog::list,
        crate::routes::blog::admin_list,
        crate::routes::blog::get_one,
        crate::routes::blog::admin_get,
        crate::routes::blog::get_by_slug,
        crate::routes::blog::create,
        crate::routes::blog::update,
        crate::routes::blog::remove,
        crate::routes::pages::get_page,
        crate::routes::pages::upsert_section,
        crate::routes::pages::remove_section,
        crate::routes::bookings::create,
        crate::routes::bookings::list,
        crate::routes::bookings::get_one,
        crate::routes::bookings::update_status,
        crate::routes::bookings::remove,
        crate::routes::contact::create,
        crate::routes::contact::list,
        crate::routes::contact::get_one,
        crate::routes::contact::mark_read,
        crate::routes::contact::remove,
        crate::routes::uploads::upload_multipart,
        crate::routes::uploads::upload_base64,
        crate::routes::uploads::list,
        crate::routes::uploads::remove,
    ),
    components(
        schemas(
            HealthResponse,
            LoginRequest,
            ChangePasswordRequest,
            NewAdminUserRequest,
            StatusRequest,
            Base64UploadRequest,
        )
    ),
    tags(
        (name = "health"),
        (name = "admin"),
        (name = "tours"),
        (name = "tour-categories"),
        (name = "tour-programs"),
        (name = "projects"),
        (name = "programs"),
        (name = "partners"),
        (name = "team"),
        (name = "blog"),
        (name = "pages"),
        (name = "bookings"),
        (name = "contact"),
        (name = "uploads")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_public_and_admin_paths() {
        let doc = ApiDoc::openapi();
        let paths = &doc.paths.paths;
        assert!(paths.contains_key("/api/tours"));
        assert!(paths.contains_key("/api/tours/{id}/programs"));
        assert!(paths.contains_key("/api/admin/login"));
        assert!(paths.contains_key("/api/upload/base64"));
    }
}
