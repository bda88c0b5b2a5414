pub mod conference;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /conferences                                     list (?status=), create
/// /conferences/{id}                                get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/conferences", conference::router())
}
