//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing),
//! and creates the axum router ready for serving.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration - permissive for development, should be restricted in production
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build the API router with versioned endpoints
    let api_v1 = Router::new()
        // Tenant directory & catalog
        .route("/tenants", get(handlers::list_tenants))
        .route("/tenants/{tenant_id}/services", get(handlers::list_services))
        .route("/tenants/{tenant_id}/employees", get(handlers::list_employees))
        // Booking flow
        .route("/tenants/{tenant_id}/availability", get(handlers::get_availability))
        .route("/tenants/{tenant_id}/appointments", get(handlers::list_appointments))
        .route("/tenants/{tenant_id}/appointments", post(handlers::create_appointment))
        // Reports
        .route(
            "/tenants/{tenant_id}/reports/commissions",
            get(handlers::get_commission_report),
        );

    // Combine all routes
    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/v1", api_v1)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
