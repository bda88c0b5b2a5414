use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Missing field: '{field}'")]
    MissingField { field: &'static str },

    #[error(
        "'{value}' is not a valid {type_name} (field '{field}'; expected one of: {})",
        .valid_values.join(", ")
    )]
    InvalidEnumValue {
        field: &'static str,
        value: String,
        type_name: &'static str,
        valid_values: &'static [&'static str],
    },

    #[error("Invalid isoformat string for field '{field}': '{value}'")]
    InvalidDate { field: &'static str, value: String },

    #[error("{0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_field_message_quotes_field() {
        let err = CoreError::MissingField { field: "title" };
        assert_eq!(err.to_string(), "Missing field: 'title'");
    }

    #[test]
    fn invalid_enum_message_names_type_and_choices() {
        let err = CoreError::InvalidEnumValue {
            field: "level",
            value: "mega-hard".to_string(),
            type_name: "ConferenceLevel",
            valid_values: &["easy", "mid", "expert"],
        };
        assert_eq!(
            err.to_string(),
            "'mega-hard' is not a valid ConferenceLevel \
             (field 'level'; expected one of: easy, mid, expert)"
        );
    }

    #[test]
    fn not_found_message_names_entity_and_id() {
        let err = CoreError::NotFound {
            entity: "Conference",
            id: 7,
        };
        assert_eq!(err.to_string(), "Conference with id 7 not found");
    }
}
