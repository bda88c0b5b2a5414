//! Conference entity model.

use meetup_core::conference::{ConferenceLevel, ConferencePatch, ConferenceStatus};
use meetup_core::iso_date;
use meetup_core::types::{DbId, LocalTimestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `conferences` table.
///
/// Serializes with every field present: enums as their literals and
/// `date` as an ISO-8601 string or `null`.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Conference {
    pub id: DbId,
    pub title: String,
    #[sqlx(try_from = "String")]
    pub status: ConferenceStatus,
    pub assignee: Option<String>,
    #[serde(serialize_with = "iso_date::serialize_optional")]
    pub date: Option<LocalTimestamp>,
    pub link_doc: Option<String>,
    pub address: Option<String>,
    #[sqlx(try_from = "String")]
    pub level: ConferenceLevel,
}

impl Conference {
    /// Overwrite the fields `patch` carries; every other field keeps its
    /// current value. `id` is never touched.
    pub fn apply(&mut self, patch: &ConferencePatch) {
        if let Some(title) = &patch.title {
            self.title.clone_from(title);
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(assignee) = &patch.assignee {
            self.assignee.clone_from(assignee);
        }
        if let Some(date) = patch.date {
            self.date = date;
        }
        if let Some(link_doc) = &patch.link_doc {
            self.link_doc.clone_from(link_doc);
        }
        if let Some(address) = &patch.address {
            self.address.clone_from(address);
        }
        if let Some(level) = patch.level {
            self.level = level;
        }
    }
}
