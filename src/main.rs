use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use dotenvy::dotenv;
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;

use user_service::config::Config;
use user_service::facade::DefaultUserFacade;
use user_service::handlers::users::AppState;
use user_service::persistence::postgres::PgUserGateway;
use user_service::persistence::repository::GatewayUserRepository;
use user_service::routes::create_routes;
use user_service::services::DefaultUserService;

#[tokio::main]
async fn main() {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = Config::from_env();

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database_url)
        .await
        .expect("Failed to connect to database");

    tracing::info!("Successfully connected to database");

    sqlx::migrate!()
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    tracing::info!("Migrations run successfully");

    let gateway = Arc::new(PgUserGateway::new(pool));
    let repository = Arc::new(GatewayUserRepository::new(gateway));
    let service = Arc::new(DefaultUserService::new(repository));
    let facade = Arc::new(DefaultUserFacade::new(service));

    let app: Router = create_routes(AppState::new(facade));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.app_port));
    tracing::info!("🚀 Server running at http://{}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .expect("Failed to bind address");

    axum::serve(listener, app).await.expect("Server failed");
}
