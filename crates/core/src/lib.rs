//! Domain logic for the conference planning board.
//!
//! Pure validation and value types with no I/O, shared by the database and
//! HTTP layers.

pub mod conference;
pub mod error;
pub mod iso_date;
pub mod types;
