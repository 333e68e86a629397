//! HTTP application wiring (Axum router + service wiring).
//!
//! - `services.rs`: store/completion wiring and the shared tracker
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: request DTOs and boundary validation
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{routing::get, Extension, Router};

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

pub use services::AppServices;

/// Build the full HTTP router (public entrypoint used by `main.rs` and the
/// black-box tests).
pub fn build_app(services: AppServices) -> Router {
    let services = Arc::new(services);

    Router::new()
        .route("/health", get(routes::system::health))
        .nest("/inventory", routes::inventory::router())
        .nest("/recipes", routes::recipes::router())
        .merge(routes::recipes::ask_router())
        .layer(Extension(services))
}
