use axum::Router;

pub mod accounts;
pub mod system;

/// Router for all account endpoints.
pub fn router() -> Router {
    Router::new().nest("/accounts", accounts::router())
}
