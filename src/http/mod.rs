//! HTTP router and handlers.

use crate::app::AppState;
use axum::{
    Router, middleware,
    routing::{get, post},
};
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

pub mod contact;
pub mod health;
pub mod smtp_debug;
pub mod static_files;

/// Assemble the HTTP router: JSON endpoints first, then the static site.
pub fn build_router(state: AppState) -> Router {
    let static_dir = state.config.static_dir.clone();
    Router::new()
        .route("/health", get(health::health))
        .route("/smtp/debug", get(smtp_debug::smtp_debug))
        .route("/contact", post(contact::contact))
        .route_service("/", ServeFile::new(static_dir.join("index.html")))
        .fallback_service(ServeDir::new(static_dir))
        .layer(middleware::from_fn(static_files::hide_dotfiles))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
