//! User handlers for CRUD operations.

use actix_web::{web, HttpResponse};
use log::{debug, info};
use validator::Validate;

use crate::errors::ApiError;
use crate::models::{ResultResponse, UserListQuery, UserRequest};
use crate::services::UserService;
use crate::validators::{parse_user_id, validation_errors_to_api_error};

/// List users by offset and count
#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    params(
        ("start" = Option<i64>, Query, description = "Number of users to skip (default: 0)"),
        ("count" = Option<i64>, Query, description = "Number of users to return (default: 10, max: 100)")
    ),
    responses(
        (status = 200, description = "List of users", body = [crate::models::User]),
        (status = 400, description = "Invalid query parameters", body = crate::errors::ErrorResponse)
    )
)]
pub async fn list_users(
    user_service: web::Data<UserService>,
    query: web::Query<UserListQuery>,
) -> Result<HttpResponse, ApiError> {
    let users = user_service.list_users(query.start, query.count).await?;
    debug!("Listed {} users", users.len());
    Ok(HttpResponse::Ok().json(users))
}

/// Get a specific user by ID
#[utoipa::path(
    get,
    path = "/user/{id}",
    tag = "Users",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User found", body = crate::models::User),
        (status = 400, description = "Invalid user ID", body = crate::errors::ErrorResponse),
        (status = 404, description = "User not found", body = crate::errors::ErrorResponse)
    )
)]
pub async fn get_user(
    user_service: web::Data<UserService>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let user_id = parse_user_id(&path.into_inner())?;
    let user = user_service.get_user(user_id).await?;
    Ok(HttpResponse::Ok().json(user))
}

/// Create a new user
#[utoipa::path(
    post,
    path = "/user",
    tag = "Users",
    request_body = UserRequest,
    responses(
        (status = 201, description = "User created", body = crate::models::User),
        (status = 400, description = "Invalid payload or validation error", body = crate::errors::ErrorResponse)
    )
)]
pub async fn create_user(
    user_service: web::Data<UserService>,
    body: web::Json<UserRequest>,
) -> Result<HttpResponse, ApiError> {
    body.validate().map_err(validation_errors_to_api_error)?;

    let user = user_service.create_user(body.into_inner().into()).await?;
    info!("Successfully created user: {}", user.id);
    Ok(HttpResponse::Created().json(user))
}

/// Replace every field of a user
///
/// Unknown ids are not an error; the submitted record is echoed back.
#[utoipa::path(
    put,
    path = "/user/{id}",
    tag = "Users",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    request_body = UserRequest,
    responses(
        (status = 200, description = "User updated", body = crate::models::User),
        (status = 400, description = "Invalid user ID, payload or validation error", body = crate::errors::ErrorResponse)
    )
)]
pub async fn update_user(
    user_service: web::Data<UserService>,
    path: web::Path<String>,
    body: web::Json<UserRequest>,
) -> Result<HttpResponse, ApiError> {
    let user_id = parse_user_id(&path.into_inner())?;
    body.validate().map_err(validation_errors_to_api_error)?;

    let user = user_service
        .update_user(user_id, body.into_inner().into())
        .await?;
    Ok(HttpResponse::Ok().json(user))
}

/// Delete a user
#[utoipa::path(
    delete,
    path = "/user/{id}",
    tag = "Users",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User deleted", body = ResultResponse),
        (status = 400, description = "Invalid user ID", body = crate::errors::ErrorResponse),
        (status = 404, description = "User not found", body = crate::errors::ErrorResponse)
    )
)]
pub async fn delete_user(
    user_service: web::Data<UserService>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let user_id = parse_user_id(&path.into_inner())?;
    user_service.delete_user(user_id).await?;
    Ok(HttpResponse::Ok().json(ResultResponse::success()))
}
