//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing),
//! and creates the axum router ready for serving.

use axum::{routing::get, Router};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    services::ServeFile,
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;
use crate::routes::dashboard::{DASHBOARD_PAGE, GET_DASHBOARD_DATA, GET_DATE_BOUNDS, LOGO_ASSET};

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let logo = ServeFile::new(&state.logo);

    Router::new()
        .route(DASHBOARD_PAGE, get(handlers::dashboard_page))
        .route(GET_DASHBOARD_DATA, get(handlers::get_dashboard_data))
        .route(GET_DATE_BOUNDS, get(handlers::get_bounds))
        .route("/health", get(handlers::health_check))
        .route_service(LOGO_ASSET, logo)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Dataset;

    #[test]
    fn test_router_creation() {
        let state = AppState::new(Dataset::default(), "logo.jpg");
        let _router = create_router(state);
    }
}
