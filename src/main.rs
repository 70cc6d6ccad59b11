use std::io;

use actix_web::{middleware::Logger, web, App, HttpServer};
use log::{error, info};

use user_crud_service::config::Config;
use user_crud_service::db::Database;
use user_crud_service::routes;
use user_crud_service::services::UserService;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // Initialize environment variables and logger
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::from_env().map_err(|e| {
        error!("Invalid configuration: {}", e);
        io::Error::new(io::ErrorKind::InvalidInput, e)
    })?;

    info!("Connecting to database...");
    let db = Database::connect(&config.database_url, config.database_max_connections)
        .await
        .map_err(|e| {
            error!("Failed to connect to database: {}", e);
            io::Error::other(e)
        })?;

    // Initialize services
    let user_service = web::Data::new(UserService::new(&db));
    user_service.ensure_schema().await.map_err(|e| {
        error!("Failed to create users table: {}", e);
        io::Error::other(e)
    })?;

    // Start HTTP server
    let server_addr = config.server_addr();
    info!("Starting server at http://{}", server_addr);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(user_service.clone())
            .configure(routes::configure_routes)
    })
    .bind(&server_addr)?
    .run()
    .await
}
