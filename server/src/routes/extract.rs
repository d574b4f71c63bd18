use axum::routing::get;
use axum::{routing::post, Router};

use crate::handlers::extract_handlers::{extract, index};

pub fn extract_routes() -> Router {
    Router::new()
        .route("/", get(index))
        .route("/extract", post(extract))
}
