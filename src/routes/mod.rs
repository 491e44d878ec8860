//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! One Axum router serves the server-rendered site (`/`, `/admin/*`), the
//! form posts behind it, the JSON/SSE API under `/api`, and static assets
//! under `/static`.

pub mod admin;
pub mod api;
pub mod pages;
pub mod session;

use std::path::Path;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::http::StatusCode;
use axum::routing::{get, patch, post};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Largest admin form body accepted, image included.
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// JSON and event-stream routes, readable cross-origin.
fn api_routes() -> Router<AppState> {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/{collection}", get(api::list))
        .route("/api/{collection}/events", get(api::events))
        .route("/api/{collection}/{id}", patch(api::update).delete(api::delete))
        .layer(cors)
}

fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/admin", get(admin::dashboard))
        .route("/admin/add-project", get(admin::add_project_page).post(admin::add_project))
        .route("/admin/add-blog", get(admin::add_blog_page).post(admin::add_blog))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
}

/// The full application router.
pub fn app(state: AppState, static_dir: &Path) -> Router {
    Router::new()
        .route("/", get(pages::home))
        .route("/contact", post(pages::contact))
        .route("/theme", post(pages::toggle_theme))
        .route("/healthz", get(healthz))
        .merge(admin_routes())
        .merge(api_routes())
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
