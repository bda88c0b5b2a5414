//! Route definitions for the `/conferences` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::conference;
use crate::state::AppState;

/// Routes mounted at `/conferences`.
///
/// ```text
/// GET    /                                  -> list
/// POST   /                                  -> create
/// GET    /{id}                              -> get_by_id
/// PUT    /{id}                              -> update
/// DELETE /{id}                              -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(conference::list).post(conference::create))
        .route(
            "/{id}",
            get(conference::get_by_id)
                .put(conference::update)
                .delete(conference::delete),
        )
}
