mod analytics;
mod database;
mod filters;
mod handlers;
mod middleware;
mod models;
mod repository;
mod utils;

use axum::{
    routing::{get, post},
    Router,
};
use dotenvy::dotenv;
use std::env;
use tower::ServiceBuilder;
use tower_cookies::CookieManagerLayer;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use database::{create_database_pool, Database};

#[tokio::main]
async fn main() {
    // Load environment variables
    dotenv().ok();

    // Initialize logging
    env_logger::init();

    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let db = create_database_pool(&database_url)
        .await
        .expect("Failed to connect to database");

    println!("Database connection successful!");

    let app = create_router(db);

    let port = env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let addr = format!("0.0.0.0:{}", port);

    println!("🚀 Stocklot server starting on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}

fn create_router(db: Database) -> Router {
    Router::new()
        // Public routes (no authentication required)
        .route("/", get(handlers::landing))
        .route("/login", get(handlers::auth::login_page))
        .route("/login", post(handlers::auth::login))
        .route("/register", get(handlers::auth::register_page))
        .route("/register", post(handlers::auth::register))
        .route("/logout", post(handlers::auth::logout))
        // Inventory dashboard (authentication required)
        .route("/dashboard", get(handlers::inventory::dashboard))
        .route("/inventory/new", get(handlers::inventory::item_form))
        .route("/inventory", post(handlers::inventory::create_item))
        .route("/inventory/:id/edit", get(handlers::inventory::item_edit_form))
        .route("/inventory/:id", post(handlers::inventory::update_item))
        .route("/inventory/:id/delete", get(handlers::inventory::delete_item))
        // Sales log
        .route("/sales", get(handlers::sales::sales_log))
        // Settings
        .route("/settings", get(handlers::settings::settings_page))
        .route("/settings/profile", post(handlers::settings::update_profile))
        .route("/settings/ebay", post(handlers::settings::add_ebay_account))
        .route(
            "/settings/ebay/:id/delete",
            get(handlers::settings::delete_ebay_account),
        )
        // API routes
        .route("/api/inventory", get(handlers::api::list_inventory))
        // Static files
        .nest_service("/static", ServeDir::new("static"))
        // Middleware
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CookieManagerLayer::new())
                .layer(CorsLayer::permissive()),
        )
        .with_state(db)
}
