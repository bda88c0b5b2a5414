//! Repository for the `conferences` table.

use meetup_core::conference::{ConferenceStatus, LiteralEnum, NewConference};
use meetup_core::types::DbId;
use sqlx::{PgPool, Postgres, Transaction};

use crate::models::conference::Conference;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, status, assignee, date, link_doc, address, level";

/// Provides CRUD operations for conferences.
pub struct ConferenceRepo;

impl ConferenceRepo {
    /// Insert a new conference, returning the created row with its id.
    pub async fn create(pool: &PgPool, input: &NewConference) -> Result<Conference, sqlx::Error> {
        let query = format!(
            "INSERT INTO conferences (title, status, assignee, date, link_doc, address, level)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        let conference = sqlx::query_as::<_, Conference>(&query)
            .bind(&input.title)
            .bind(input.status.as_str())
            .bind(&input.assignee)
            .bind(input.date)
            .bind(&input.link_doc)
            .bind(&input.address)
            .bind(input.level.as_str())
            .fetch_one(pool)
            .await?;

        tracing::debug!(id = conference.id, "Conference inserted");
        Ok(conference)
    }

    /// Find a conference by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Conference>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM conferences WHERE id = $1");
        sqlx::query_as::<_, Conference>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every conference in creation order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Conference>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM conferences ORDER BY id");
        sqlx::query_as::<_, Conference>(&query).fetch_all(pool).await
    }

    /// List the conferences in one board column, in creation order.
    pub async fn list_by_status(
        pool: &PgPool,
        status: ConferenceStatus,
    ) -> Result<Vec<Conference>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM conferences WHERE status = $1 ORDER BY id");
        sqlx::query_as::<_, Conference>(&query)
            .bind(status.as_str())
            .fetch_all(pool)
            .await
    }

    /// Load a conference and lock its row until `tx` ends.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn find_for_update(
        tx: &mut Transaction<'_, Postgres>,
        id: DbId,
    ) -> Result<Option<Conference>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM conferences WHERE id = $1 FOR UPDATE");
        sqlx::query_as::<_, Conference>(&query)
            .bind(id)
            .fetch_optional(&mut **tx)
            .await
    }

    /// Write every mutable column of `conference` back to its row.
    ///
    /// Fails with `RowNotFound` if the row no longer exists.
    pub async fn save(
        tx: &mut Transaction<'_, Postgres>,
        conference: &Conference,
    ) -> Result<Conference, sqlx::Error> {
        let query = format!(
            "UPDATE conferences SET
                title = $2,
                status = $3,
                assignee = $4,
                date = $5,
                link_doc = $6,
                address = $7,
                level = $8
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Conference>(&query)
            .bind(conference.id)
            .bind(&conference.title)
            .bind(conference.status.as_str())
            .bind(&conference.assignee)
            .bind(conference.date)
            .bind(&conference.link_doc)
            .bind(&conference.address)
            .bind(conference.level.as_str())
            .fetch_one(&mut **tx)
            .await
    }

    /// Permanently delete a conference. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM conferences WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
