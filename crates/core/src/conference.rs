//! Conference field validation (create and partial update).
//!
//! Request bodies arrive as untyped JSON objects. [`validate_new`] turns one
//! into a [`NewConference`] with defaults applied; [`validate_patch`] turns
//! one into a [`ConferencePatch`] holding only the keys the caller supplied.
//! Both reject the whole input on the first invalid field, so nothing is
//! written for a partially valid body.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::ValidateLength;

use crate::error::CoreError;
use crate::iso_date::parse_iso_datetime;
use crate::types::LocalTimestamp;

/// Raw request body: field name to untyped JSON value.
pub type FieldMap = serde_json::Map<String, Value>;

// ---------------------------------------------------------------------------
// Field names and limits
// ---------------------------------------------------------------------------

pub const FIELD_TITLE: &str = "title";
pub const FIELD_STATUS: &str = "status";
pub const FIELD_ASSIGNEE: &str = "assignee";
pub const FIELD_DATE: &str = "date";
pub const FIELD_LINK_DOC: &str = "link_doc";
pub const FIELD_ADDRESS: &str = "address";
pub const FIELD_LEVEL: &str = "level";

/// Column widths of the `conferences` table, in characters.
pub const TITLE_MAX_LEN: u64 = 255;
pub const ASSIGNEE_MAX_LEN: u64 = 100;
pub const LINK_DOC_MAX_LEN: u64 = 500;
pub const ADDRESS_MAX_LEN: u64 = 255;

// ---------------------------------------------------------------------------
// Closed-set enums
// ---------------------------------------------------------------------------

/// An enum whose only valid external form is one of a fixed set of literals.
pub trait LiteralEnum: Sized + Copy {
    /// Type name reported in validation errors.
    const TYPE_NAME: &'static str;
    /// Every accepted literal, in declaration order.
    const LITERALS: &'static [&'static str];

    fn as_str(self) -> &'static str;

    fn from_literal(value: &str) -> Option<Self>;
}

/// A literal that does not belong to the target enum.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{value}' is not a valid {type_name}")]
pub struct UnknownLiteral {
    pub type_name: &'static str,
    pub value: String,
}

macro_rules! define_literal_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $lit:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $( $(#[$vmeta])* #[serde(rename = $lit)] $variant ),+
        }

        impl LiteralEnum for $name {
            const TYPE_NAME: &'static str = stringify!($name);
            const LITERALS: &'static [&'static str] = &[$($lit),+];

            fn as_str(self) -> &'static str {
                match self {
                    $( $name::$variant => $lit ),+
                }
            }

            fn from_literal(value: &str) -> Option<Self> {
                match value {
                    $( $lit => Some($name::$variant), )+
                    _ => None,
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = UnknownLiteral;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                <$name as LiteralEnum>::from_literal(value).ok_or_else(|| UnknownLiteral {
                    type_name: <$name as LiteralEnum>::TYPE_NAME,
                    value: value.to_string(),
                })
            }
        }

        impl TryFrom<String> for $name {
            type Error = UnknownLiteral;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                value.parse()
            }
        }
    };
}

define_literal_enum! {
    /// Kanban column a conference sits in.
    ConferenceStatus {
        #[default]
        Idees = "Idées",
        Contacte = "Contacté",
        Planifie = "Planifié",
        Bloque = "Bloqué",
        Feedback = "Feedback",
        Termine = "Terminé",
    }
}

define_literal_enum! {
    /// Audience difficulty of a talk.
    ConferenceLevel {
        #[default]
        Easy = "easy",
        Mid = "mid",
        Expert = "expert",
    }
}

/// Resolve a literal into `E`, reporting the offending field on failure.
pub fn parse_literal<E: LiteralEnum>(field: &'static str, value: &str) -> Result<E, CoreError> {
    E::from_literal(value).ok_or_else(|| invalid_enum::<E>(field, value.to_string()))
}

fn invalid_enum<E: LiteralEnum>(field: &'static str, value: String) -> CoreError {
    CoreError::InvalidEnumValue {
        field,
        value,
        type_name: E::TYPE_NAME,
        valid_values: E::LITERALS,
    }
}

// ---------------------------------------------------------------------------
// Validated inputs
// ---------------------------------------------------------------------------

/// A fully defaulted conference ready to be inserted.
#[derive(Debug, Clone, PartialEq)]
pub struct NewConference {
    pub title: String,
    pub status: ConferenceStatus,
    pub assignee: Option<String>,
    pub date: Option<LocalTimestamp>,
    pub link_doc: Option<String>,
    pub address: Option<String>,
    pub level: ConferenceLevel,
}

/// The set of fields an update supplied.
///
/// The outer `Option` is `None` when the key was absent. For nullable
/// columns the inner `Option` is `None` when the caller sent `null`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConferencePatch {
    pub title: Option<String>,
    pub status: Option<ConferenceStatus>,
    pub assignee: Option<Option<String>>,
    pub date: Option<Option<LocalTimestamp>>,
    pub link_doc: Option<Option<String>>,
    pub address: Option<Option<String>>,
    pub level: Option<ConferenceLevel>,
}

impl ConferencePatch {
    /// True when the update body carried no recognised field.
    pub fn is_empty(&self) -> bool {
        *self == ConferencePatch::default()
    }
}

/// Validate a create body and apply defaults.
///
/// `title` is required. `status` defaults to [`ConferenceStatus::Idees`] and
/// `level` to [`ConferenceLevel::Easy`]. Unknown keys are ignored.
pub fn validate_new(fields: &FieldMap) -> Result<NewConference, CoreError> {
    let title = match fields.get(FIELD_TITLE) {
        None | Some(Value::Null) => {
            return Err(CoreError::MissingField { field: FIELD_TITLE });
        }
        Some(value) => title_value(value)?,
    };

    let status = match fields.get(FIELD_STATUS) {
        Some(value) => literal_value(FIELD_STATUS, value)?,
        None => ConferenceStatus::default(),
    };

    let assignee = optional_field(fields, FIELD_ASSIGNEE, ASSIGNEE_MAX_LEN)?;

    let date = match fields.get(FIELD_DATE) {
        Some(value) => date_value(FIELD_DATE, value)?,
        None => None,
    };

    let link_doc = optional_field(fields, FIELD_LINK_DOC, LINK_DOC_MAX_LEN)?;
    let address = optional_field(fields, FIELD_ADDRESS, ADDRESS_MAX_LEN)?;

    let level = match fields.get(FIELD_LEVEL) {
        Some(value) => literal_value(FIELD_LEVEL, value)?,
        None => ConferenceLevel::default(),
    };

    Ok(NewConference {
        title,
        status,
        assignee,
        date,
        link_doc,
        address,
        level,
    })
}

/// Validate an update body. Only keys present in `fields` end up in the
/// patch; each is checked with the same rule as on create.
pub fn validate_patch(fields: &FieldMap) -> Result<ConferencePatch, CoreError> {
    let mut patch = ConferencePatch::default();

    if let Some(value) = fields.get(FIELD_TITLE) {
        if value.is_null() {
            return Err(CoreError::Validation(format!(
                "Field '{FIELD_TITLE}' cannot be null"
            )));
        }
        patch.title = Some(title_value(value)?);
    }
    if let Some(value) = fields.get(FIELD_STATUS) {
        patch.status = Some(literal_value(FIELD_STATUS, value)?);
    }
    if let Some(value) = fields.get(FIELD_ASSIGNEE) {
        patch.assignee = Some(text_value(FIELD_ASSIGNEE, value, ASSIGNEE_MAX_LEN)?);
    }
    if let Some(value) = fields.get(FIELD_DATE) {
        patch.date = Some(date_value(FIELD_DATE, value)?);
    }
    if let Some(value) = fields.get(FIELD_LINK_DOC) {
        patch.link_doc = Some(text_value(FIELD_LINK_DOC, value, LINK_DOC_MAX_LEN)?);
    }
    if let Some(value) = fields.get(FIELD_ADDRESS) {
        patch.address = Some(text_value(FIELD_ADDRESS, value, ADDRESS_MAX_LEN)?);
    }
    if let Some(value) = fields.get(FIELD_LEVEL) {
        patch.level = Some(literal_value(FIELD_LEVEL, value)?);
    }

    Ok(patch)
}

// ---------------------------------------------------------------------------
// Per-field rules
// ---------------------------------------------------------------------------

fn title_value(value: &Value) -> Result<String, CoreError> {
    let title = match text_value(FIELD_TITLE, value, TITLE_MAX_LEN)? {
        Some(title) => title,
        None => return Err(CoreError::MissingField { field: FIELD_TITLE }),
    };
    if title.trim().is_empty() {
        return Err(CoreError::Validation(format!(
            "Field '{FIELD_TITLE}' must not be empty"
        )));
    }
    Ok(title)
}

fn optional_field(
    fields: &FieldMap,
    field: &'static str,
    max_len: u64,
) -> Result<Option<String>, CoreError> {
    match fields.get(field) {
        Some(value) => text_value(field, value, max_len),
        None => Ok(None),
    }
}

/// A nullable string column: `null` clears, strings are length-checked,
/// anything else is rejected. PostgreSQL text cannot hold NUL, so it is
/// refused here rather than at the INSERT.
fn text_value(
    field: &'static str,
    value: &Value,
    max_len: u64,
) -> Result<Option<String>, CoreError> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => {
            if s.contains('\0') {
                return Err(CoreError::Validation(format!(
                    "Field '{field}' must not contain NUL characters"
                )));
            }
            if !s.validate_length(None, Some(max_len), None) {
                return Err(CoreError::Validation(format!(
                    "Field '{field}' must be at most {max_len} characters"
                )));
            }
            Ok(Some(s.clone()))
        }
        other => Err(CoreError::Validation(format!(
            "Field '{field}' must be a string or null, got {other}"
        ))),
    }
}

fn literal_value<E: LiteralEnum>(field: &'static str, value: &Value) -> Result<E, CoreError> {
    match value {
        Value::String(s) => parse_literal(field, s),
        other => Err(invalid_enum::<E>(field, other.to_string())),
    }
}

/// `null` and `""` mean "no date"; any other string must be ISO-8601.
fn date_value(field: &'static str, value: &Value) -> Result<Option<LocalTimestamp>, CoreError> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) if s.is_empty() => Ok(None),
        Value::String(s) => parse_iso_datetime(s)
            .map(Some)
            .ok_or_else(|| CoreError::InvalidDate {
                field,
                value: s.clone(),
            }),
        other => Err(CoreError::InvalidDate {
            field,
            value: other.to_string(),
        }),
    }
}
