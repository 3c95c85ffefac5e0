//! Bookstore Server - MongoDB-backed book catalog
//!
//! A Rust REST API server for book catalog management.

use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bookstore_server::{
    api,
    config::AppConfig,
    repository::Repository,
    services::Services,
    AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load().expect("Failed to load configuration");

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("bookstore_server={},tower_http=debug", config.logging.level).into()
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Bookstore Server v{}", env!("CARGO_PKG_VERSION"));

    // Connect to MongoDB
    let client = mongodb::Client::with_uri_str(&config.database.uri)
        .await
        .expect("Failed to connect to MongoDB");
    let database = client.database(&config.database.database);

    tracing::info!("Connected to database");

    // Create repository and services
    let repository = Repository::new(&database, &config.database);
    let services = Services::new(repository);

    // Create application state
    let state = AppState {
        database,
        services: Arc::new(services),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::new(
        config.server.host.parse().expect("Invalid host address"),
        config.server.port,
    );

    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes
fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let routes = Router::new()
        // Health check
        .route("/health", get(api::health::health_check))
        .route("/ready", get(api::health::readiness_check))
        // Book searches
        .route("/api/books/get-all", get(api::books::list))
        .route("/api/books/get-with-filter", get(api::books::list_with_filter))
        .route("/api/books/get-linQ", get(api::books::list_in_process))
        .route("/api/books/create-json-params", post(api::books::create_json_params))
        // Book CRUD
        .route("/api/books", post(api::books::create))
        .route(
            "/api/books/:id",
            get(api::books::get)
                .put(api::books::update)
                .delete(api::books::delete),
        )
        // Users collection
        .route("/api/books/add-user", post(api::books::add_user))
        .route("/api/books/get-user-list", get(api::books::user_list))
        .with_state(state);

    // OpenAPI documentation
    let openapi = api::openapi::create_openapi_router();

    Router::new()
        .merge(routes)
        .merge(openapi)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
