//! End-to-end tests for the user CRUD routes against SQLite stores.

use actix_http::Request;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::{header::ContentType, StatusCode};
use actix_web::{test, web, App, Error};
use serde_json::{json, Value};

use user_crud_service::db::Database;
use user_crud_service::models::UserFields;
use user_crud_service::routes::configure_routes;
use user_crud_service::services::UserService;

async fn setup() -> (
    impl Service<Request, Response = ServiceResponse, Error = Error>,
    web::Data<UserService>,
) {
    setup_with_url("sqlite::memory:").await
}

async fn setup_with_url(
    url: &str,
) -> (
    impl Service<Request, Response = ServiceResponse, Error = Error>,
    web::Data<UserService>,
) {
    let db = Database::connect(url, 5).await.expect("sqlite store");
    let user_service = web::Data::new(UserService::new(&db));
    user_service.ensure_schema().await.expect("users table");

    let app = test::init_service(
        App::new()
            .app_data(user_service.clone())
            .configure(configure_routes),
    )
    .await;
    (app, user_service)
}

async fn add_users(user_service: &UserService, count: i64) {
    for n in 1..=count.max(1) {
        user_service
            .create_user(UserFields {
                firstname: format!("User {}", n),
                lastname: format!("User {}", n),
                age: n * 10,
                email: format!("User {}", n),
            })
            .await
            .expect("seed user");
    }
}

async fn send(
    app: &impl Service<Request, Response = ServiceResponse, Error = Error>,
    req: Request,
) -> (StatusCode, Value) {
    let resp = test::call_service(app, req).await;
    let status = resp.status();
    let body = test::read_body(resp).await;
    let value = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).expect("json body")
    };
    (status, value)
}

#[actix_web::test]
async fn test_empty_table() {
    let (app, _) = setup().await;

    let req = test::TestRequest::get().uri("/users").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(test::read_body(resp).await, "[]");
}

#[actix_web::test]
async fn test_get_non_existent_user() {
    let (app, _) = setup().await;

    let req = test::TestRequest::get().uri("/user/45").to_request();
    let (status, body) = send(&app, req).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "User not found");
}

#[actix_web::test]
async fn test_create_user() {
    let (app, _) = setup().await;

    let req = test::TestRequest::post()
        .uri("/user")
        .set_json(json!({
            "firstname": "test firstuser",
            "lastname": "test lastuser",
            "age": 30,
            "email": "test email"
        }))
        .to_request();
    let (status, body) = send(&app, req).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["firstname"], "test firstuser");
    assert_eq!(body["lastname"], "test lastuser");
    assert_eq!(body["age"], 30);
    assert_eq!(body["email"], "test email");
    assert_eq!(body["id"], 1);
}

#[actix_web::test]
async fn test_create_minimal_user() {
    let (app, _) = setup().await;

    let req = test::TestRequest::post()
        .uri("/user")
        .set_json(json!({"firstname": "A", "lastname": "B", "age": 30, "email": "e"}))
        .to_request();
    let (status, body) = send(&app, req).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        body,
        json!({"id": 1, "firstname": "A", "lastname": "B", "age": 30, "email": "e"})
    );
}

#[actix_web::test]
async fn test_create_user_on_file_backed_store() {
    let dir = tempfile::tempdir().expect("temp dir");
    let url = format!("sqlite://{}?mode=rwc", dir.path().join("users.db").display());
    let (app, _) = setup_with_url(&url).await;

    for expected_id in 1..=2 {
        let req = test::TestRequest::post()
            .uri("/user")
            .set_json(json!({"firstname": "A", "lastname": "B", "age": 30, "email": "e"}))
            .to_request();
        let (status, body) = send(&app, req).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["id"], expected_id);
    }

    let req = test::TestRequest::get().uri("/users").to_request();
    let (status, body) = send(&app, req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().map(Vec::len), Some(2));
}

#[actix_web::test]
async fn test_get_user() {
    let (app, user_service) = setup().await;
    add_users(&user_service, 1).await;

    let req = test::TestRequest::get().uri("/user/1").to_request();
    let (status, body) = send(&app, req).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"id": 1, "firstname": "User 1", "lastname": "User 1", "age": 10, "email": "User 1"})
    );
}

#[actix_web::test]
async fn test_update_user() {
    let (app, user_service) = setup().await;
    add_users(&user_service, 1).await;

    let req = test::TestRequest::get().uri("/user/1").to_request();
    let (_, original) = send(&app, req).await;

    let req = test::TestRequest::put()
        .uri("/user/1")
        .set_json(json!({
            "firstname": "test firstuser - updated firstname",
            "lastname": "test lastuser - updated lastname",
            "age": 21,
            "email": "test email - updated email"
        }))
        .to_request();
    let (status, updated) = send(&app, req).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["id"], original["id"]);
    for field in ["firstname", "lastname", "age", "email"] {
        assert_ne!(updated[field], original[field], "{field} should change");
    }
    assert_eq!(updated["age"], 21);

    let req = test::TestRequest::get().uri("/user/1").to_request();
    let (_, stored) = send(&app, req).await;
    assert_eq!(stored, updated);
}

#[actix_web::test]
async fn test_update_non_existent_user() {
    let (app, _) = setup().await;

    let req = test::TestRequest::put()
        .uri("/user/9")
        .set_json(json!({"firstname": "A", "lastname": "B", "age": 1, "email": "e"}))
        .to_request();
    let (status, body) = send(&app, req).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"id": 9, "firstname": "A", "lastname": "B", "age": 1, "email": "e"})
    );

    let req = test::TestRequest::get().uri("/user/9").to_request();
    let (status, _) = send(&app, req).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_delete_user() {
    let (app, user_service) = setup().await;
    add_users(&user_service, 1).await;

    let req = test::TestRequest::get().uri("/user/1").to_request();
    let (status, _) = send(&app, req).await;
    assert_eq!(status, StatusCode::OK);

    let req = test::TestRequest::delete().uri("/user/1").to_request();
    let (status, body) = send(&app, req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"result": "success"}));

    let req = test::TestRequest::get().uri("/user/1").to_request();
    let (status, _) = send(&app, req).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let req = test::TestRequest::delete().uri("/user/1").to_request();
    let (status, body) = send(&app, req).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "User not found");
}

#[actix_web::test]
async fn test_invalid_user_id() {
    let (app, _) = setup().await;

    for req in [
        test::TestRequest::get().uri("/user/abc").to_request(),
        test::TestRequest::delete().uri("/user/1x").to_request(),
        test::TestRequest::put()
            .uri("/user/abc")
            .set_json(json!({"firstname": "A", "lastname": "B", "age": 1, "email": "e"}))
            .to_request(),
    ] {
        let (status, body) = send(&app, req).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid user ID");
    }
}

#[actix_web::test]
async fn test_malformed_payload() {
    let (app, _) = setup().await;

    let req = test::TestRequest::post()
        .uri("/user")
        .insert_header(ContentType::json())
        .set_payload("{\"firstname\": \"A\",")
        .to_request();
    let (status, body) = send(&app, req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid request payload");

    let req = test::TestRequest::post()
        .uri("/user")
        .set_json(json!({"firstname": "A", "lastname": "B", "age": "thirty", "email": "e"}))
        .to_request();
    let (status, body) = send(&app, req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid request payload");
}

#[actix_web::test]
async fn test_validation_failure() {
    let (app, _) = setup().await;

    let req = test::TestRequest::post()
        .uri("/user")
        .set_json(json!({
            "firstname": "A".repeat(51),
            "lastname": "B",
            "age": -1,
            "email": "e"
        }))
        .to_request();
    let (status, body) = send(&app, req).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Validation failed");
    assert_eq!(
        body["errors"],
        json!([
            "Age must be between 0 and 2147483647",
            "First name must be at most 50 characters"
        ])
    );
}

#[actix_web::test]
async fn test_list_users_with_bounds() {
    let (app, user_service) = setup().await;
    add_users(&user_service, 15).await;

    let ids = |body: &Value| -> Vec<i64> {
        body.as_array()
            .expect("array body")
            .iter()
            .map(|u| u["id"].as_i64().expect("id"))
            .collect()
    };

    let req = test::TestRequest::get().uri("/users").to_request();
    let (status, body) = send(&app, req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), (1..=10).collect::<Vec<_>>());

    let req = test::TestRequest::get()
        .uri("/users?start=12&count=2")
        .to_request();
    let (_, body) = send(&app, req).await;
    assert_eq!(ids(&body), vec![13, 14]);

    let req = test::TestRequest::get()
        .uri("/users?start=-5&count=0")
        .to_request();
    let (_, body) = send(&app, req).await;
    assert_eq!(ids(&body).len(), 10);
    assert_eq!(ids(&body)[0], 1);

    let req = test::TestRequest::get().uri("/users?start=40").to_request();
    let (_, body) = send(&app, req).await;
    assert_eq!(body, json!([]));
}

#[actix_web::test]
async fn test_list_users_caps_count() {
    let (app, user_service) = setup().await;
    add_users(&user_service, 105).await;

    let req = test::TestRequest::get().uri("/users?count=500").to_request();
    let (status, body) = send(&app, req).await;

    assert_eq!(status, StatusCode::OK);
    let users = body.as_array().expect("array body");
    assert_eq!(users.len(), 100);
    assert_eq!(users[0]["id"], 1);
    assert_eq!(users[99]["id"], 100);
}

#[actix_web::test]
async fn test_invalid_list_query() {
    let (app, _) = setup().await;

    let req = test::TestRequest::get().uri("/users?count=many").to_request();
    let (status, body) = send(&app, req).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid query parameters");
}

#[actix_web::test]
async fn test_health_and_openapi() {
    let (app, _) = setup().await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let (status, body) = send(&app, req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "OK", "message": "Server is running"}));

    let req = test::TestRequest::get()
        .uri("/api-docs/openapi.json")
        .to_request();
    let (status, body) = send(&app, req).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/user/{id}"].is_object());
}
