//! HTML Pages
//!
//! Server-rendered pages. Everything except `/` and `/login` needs an admin
//! session.

pub mod pages;
pub mod templates;

pub use templates::Pages;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::presentation::middleware::require_session;
use crate::startup::AppState;

pub fn page_routes(state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/jobs", get(pages::jobs_list))
        .route("/jobs/{job_id}", get(pages::job_detail))
        .route("/logout", post(pages::logout))
        .route_layer(middleware::from_fn_with_state(state, require_session));

    Router::new()
        .route("/", get(pages::home))
        .route("/login", get(pages::login_page).post(pages::login))
        .merge(protected)
}
