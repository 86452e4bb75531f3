use axum::{
    http::{HeaderValue, Method},
    response::Json,
    routing::get,
    Router,
};
use dotenvy::dotenv;
use once_cell::sync::Lazy;
use serde_json::json;
use std::time::Instant;
use std::{net::SocketAddr, sync::Arc};
use tower_http::cors::CorsLayer;
use tracing_subscriber::EnvFilter;

static START_TIME: Lazy<Instant> = Lazy::new(Instant::now);

mod controllers;
mod core;
mod db;
mod models;
mod routes;
mod state;
mod store;
mod utils;

#[tokio::main]
async fn main() {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let database = match db::connection::init_db().await {
        Ok(db) => db,
        Err(e) => {
            tracing::error!("failed to initialize database: {}", e);
            std::process::exit(1);
        }
    };

    let store = Arc::new(store::mongo::MongoStore::new(database));
    let app_state = state::AppState::new(store);

    let cors = match std::env::var("CORS_ORIGIN") {
        Ok(cors_origin) => {
            let origin = match cors_origin.parse::<HeaderValue>() {
                Ok(o) => o,
                Err(_) => {
                    tracing::error!("failed to parse CORS origin: {}", cors_origin);
                    std::process::exit(1);
                }
            };
            CorsLayer::new()
                .allow_origin(origin)
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                .allow_headers([
                    axum::http::header::CONTENT_TYPE,
                    axum::http::header::ACCEPT,
                ])
        }
        Err(_) => {
            tracing::warn!("CORS_ORIGIN not set, allowing all origins");
            CorsLayer::permissive()
        }
    };

    let app = Router::new()
        .route("/", get(root))
        .merge(routes::poll_routes::poll_routes())
        .layer(cors)
        .with_state(app_state);

    let server_addr =
        std::env::var("SERVER_ADDR").unwrap_or_else(|_| "0.0.0.0:5000".to_string());

    let addr: SocketAddr = match server_addr.parse() {
        Ok(a) => a,
        Err(_) => {
            tracing::error!("failed to parse SERVER_ADDR: {}", server_addr);
            std::process::exit(1);
        }
    };

    tracing::info!("server running at http://{}", addr);

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!("failed to bind to address {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!("server error: {}", e);
        std::process::exit(1);
    }
}

async fn root() -> Json<serde_json::Value> {
    let uptime = START_TIME.elapsed().as_secs();

    Json(json!({
        "status": "ok",
        "message": format!("Backend is running! Uptime: {}s", uptime)
    }))
}
