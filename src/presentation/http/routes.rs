//! Route Configuration
//!
//! Configures all HTTP routes: the JSON API, the HTML pages, health and metrics.

use axum::{
    middleware,
    response::IntoResponse,
    routing::{get, patch, post},
    Router,
};

use super::handlers;
use crate::infrastructure::metrics;
use crate::presentation::middleware::metrics::track_metrics;
use crate::presentation::web;
use crate::startup::AppState;

/// Create the main router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api", api_routes())
        .merge(web::page_routes(state.clone()))
        // Health check endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/health/live", get(handlers::health::liveness))
        .route("/health/ready", get(handlers::health::readiness))
        // Prometheus metrics endpoint
        .route("/metrics", get(metrics_handler))
        // Route-level so the matched path template is available
        .route_layer(middleware::from_fn(track_metrics))
        .with_state(state)
}

/// Prometheus metrics endpoint handler
async fn metrics_handler() -> impl IntoResponse {
    (
        [(
            axum::http::header::CONTENT_TYPE,
            "text/plain; version=0.0.4; charset=utf-8",
        )],
        metrics::gather_metrics(),
    )
}

/// JSON API routes. Unauthenticated.
fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/jobs", job_routes())
        .nest("/companies", company_routes())
        .nest("/applications", application_routes())
}

fn job_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::job::list_jobs).post(handlers::job::create_job),
        )
        .route(
            "/{job_id}",
            get(handlers::job::get_job)
                .put(handlers::job::update_job)
                .delete(handlers::job::delete_job),
        )
        .route("/{job_id}/status", patch(handlers::job::update_job_status))
}

fn company_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::company::list_companies).post(handlers::company::create_company),
        )
        .route("/{company_id}", get(handlers::company::get_company))
}

fn application_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(handlers::application::submit_application))
        .route("/check", get(handlers::application::check_application))
        .route("/job/{job_id}", get(handlers::application::list_for_job))
}
