use utoipa::OpenApi;

use crate::errors::ErrorResponse;
use crate::models::{HealthResponse, ResultResponse, User, UserRequest};

/// OpenAPI documentation for the user CRUD API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User CRUD API",
        version = "0.1.0",
        description = "Create, read, update and delete user records backed by a relational table.",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Users", description = "User CRUD endpoints")
    ),
    paths(
        crate::handlers::list_users,
        crate::handlers::get_user,
        crate::handlers::create_user,
        crate::handlers::update_user,
        crate::handlers::delete_user,
        crate::routes::health_check
    ),
    components(
        schemas(
            User,
            UserRequest,
            ResultResponse,
            HealthResponse,
            ErrorResponse
        )
    )
)]
pub struct ApiDoc;
