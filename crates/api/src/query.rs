//! Query parameter types for API handlers.

use serde::Deserialize;

/// Query parameters for `GET /conferences` (`?status=`).
///
/// `status` is kept as a raw string so an unknown literal is reported
/// through the same validation error as a bad request body.
#[derive(Debug, Deserialize)]
pub struct ConferenceListParams {
    pub status: Option<String>,
}
