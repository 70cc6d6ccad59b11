use actix_web::{error, web, HttpRequest, HttpResponse};
use log::warn;
use utoipa::OpenApi;

use crate::constants::{ERR_INVALID_PAYLOAD, ERR_INVALID_QUERY};
use crate::errors::ApiError;
use crate::handlers;
use crate::models::HealthResponse;
use crate::openapi::ApiDoc;
use crate::services::UserService;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(query_config())
        // Health check
        .route("/health", web::get().to(health_check))
        .route("/api-docs/openapi.json", web::get().to(openapi_json))
        // List users by offset/count
        .route("/users", web::get().to(handlers::list_users))
        .route("/user", web::post().to(handlers::create_user))
        .service(
            web::resource("/user/{id}")
                .route(web::get().to(handlers::get_user))
                .route(web::put().to(handlers::update_user))
                .route(web::delete().to(handlers::delete_user)),
        );
}

/// Render malformed JSON bodies with the same error shape as every other failure.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(
        |err: error::JsonPayloadError, _req: &HttpRequest| {
            warn!("Rejected request payload: {}", err);
            ApiError::BadRequest(ERR_INVALID_PAYLOAD.to_string()).into()
        },
    )
}

fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(
        |err: error::QueryPayloadError, _req: &HttpRequest| {
            warn!("Rejected query string: {}", err);
            ApiError::BadRequest(ERR_INVALID_QUERY.to_string()).into()
        },
    )
}

/// Report whether the server and its store are reachable
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Server and store are up", body = HealthResponse),
        (status = 500, description = "Store is unreachable", body = crate::errors::ErrorResponse)
    )
)]
pub async fn health_check(
    user_service: web::Data<UserService>,
) -> Result<HttpResponse, ApiError> {
    user_service.health_check().await?;
    Ok(HttpResponse::Ok().json(HealthResponse::ok()))
}

async fn openapi_json() -> HttpResponse {
    HttpResponse::Ok().json(ApiDoc::openapi())
}
