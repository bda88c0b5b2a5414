//! Domain model structs.
//!
//! Each submodule contains a `FromRow` + `Serialize` entity struct matching
//! the database row. Input validation lives in `meetup_core`.

pub mod conference;
