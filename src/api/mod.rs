use axum::{Router, middleware::from_fn, routing::get};
use std::path::Path;
use std::sync::Arc;
use tower_http::services::ServeDir;

use crate::templates::Templates;
use crate::wikipedia::WikipediaClient;

pub mod handlers;
pub mod middleware;
pub mod models;

/// Shared, read-only dependencies of the request handlers.
#[derive(Clone)]
pub struct AppState {
    pub wikipedia: WikipediaClient,
    pub templates: Arc<Templates>,
}

impl AppState {
    pub fn new(wikipedia: WikipediaClient, templates: Templates) -> Self {
        Self {
            wikipedia,
            templates: Arc::new(templates),
        }
    }
}

pub fn create_router(state: AppState, assets_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/", get(handlers::index_handler))
        .route("/search", get(handlers::search_handler))
        .with_state(state)
        // Static assets, served with the /assets prefix stripped
        .nest_service("/assets", ServeDir::new(assets_dir))
        .fallback(handlers::not_found)
        .layer(from_fn(middleware::request_logger))
}
