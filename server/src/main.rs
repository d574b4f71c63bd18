mod handlers;
mod routes;
mod state;

use std::env;

use axum::Extension;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

use routes::extract::extract_routes;
use state::AppState;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:3000".to_string());

    let state = AppState::new().unwrap();

    let app = extract_routes()
        .layer(Extension(state))
        .layer(CorsLayer::permissive());

    let listener = TcpListener::bind(&bind_addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
