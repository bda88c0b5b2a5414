/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// Conference dates are wall-clock timestamps without a time zone.
pub type LocalTimestamp = chrono::NaiveDateTime;
