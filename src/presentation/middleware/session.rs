//! Session Middleware
//!
//! Cookie-based admin session guarding the HTML pages. API routes never pass
//! through here.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;

use crate::application::services::AuthService;
use crate::startup::AppState;

/// Name of the cookie carrying the signed session token
pub const SESSION_COOKIE: &str = "JOBBOARD_SESSION";

/// Logged-in admin, inserted into request extensions
#[derive(Debug, Clone)]
pub struct AdminSession {
    pub username: String,
}

/// Resolve the session from the request cookies, if it is present and valid.
pub fn current_session(jar: &CookieJar, auth: &AuthService) -> Option<AdminSession> {
    let cookie = jar.get(SESSION_COOKIE)?;
    match auth.verify(cookie.value()) {
        Ok(claims) => Some(AdminSession {
            username: claims.sub,
        }),
        Err(e) => {
            tracing::debug!(error = %e, "Ignoring invalid session cookie");
            None
        }
    }
}

/// Redirect to the login page unless the request carries a valid session.
pub async fn require_session(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let jar = CookieJar::from_headers(request.headers());

    match current_session(&jar, &state.auth) {
        Some(session) => {
            request.extensions_mut().insert(session);
            next.run(request).await
        }
        None => Redirect::to("/login").into_response(),
    }
}
