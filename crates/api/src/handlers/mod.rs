//! Request handlers.
//!
//! Each submodule provides async handler functions (list, create, get_by_id,
//! update, delete) for a single entity type. Handlers delegate to the
//! corresponding repository in `meetup_db` and map errors via [`AppError`].
//!
//! [`AppError`]: crate::error::AppError

pub mod conference;
