//! Handlers for the `/conferences` resource.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use meetup_core::conference::{self, ConferenceStatus, FIELD_STATUS};
use meetup_core::error::CoreError;
use meetup_core::types::DbId;
use meetup_db::models::conference::Conference;
use meetup_db::repositories::ConferenceRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{FieldMapBody, IdPath};
use crate::query::ConferenceListParams;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Conference",
        id,
    })
}

/// GET /api/conferences
///
/// Optional `?status=` restricts the list to one board column.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ConferenceListParams>,
) -> AppResult<Json<Vec<Conference>>> {
    let conferences = match params.status.as_deref() {
        Some(literal) => {
            let status = conference::parse_literal::<ConferenceStatus>(FIELD_STATUS, literal)?;
            ConferenceRepo::list_by_status(&state.pool, status).await?
        }
        None => ConferenceRepo::list(&state.pool).await?,
    };
    Ok(Json(conferences))
}

/// POST /api/conferences
pub async fn create(
    State(state): State<AppState>,
    FieldMapBody(fields): FieldMapBody,
) -> AppResult<(StatusCode, Json<Conference>)> {
    let input = conference::validate_new(&fields)?;
    let created = ConferenceRepo::create(&state.pool, &input).await?;
    tracing::info!(id = created.id, status = %created.status, "Conference created");
    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /api/conferences/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<Conference>> {
    let found = ConferenceRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(found))
}

/// PUT /api/conferences/{id}
///
/// The row is locked and loaded before the body is looked at, so an unknown
/// id is a 404 whatever the payload. Validation failures drop the
/// transaction uncommitted. A body with no known fields writes nothing.
pub async fn update(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    body: Result<FieldMapBody, AppError>,
) -> AppResult<Json<Conference>> {
    let mut tx = state.pool.begin().await?;

    let mut existing = ConferenceRepo::find_for_update(&mut tx, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    let FieldMapBody(fields) = body?;
    let patch = conference::validate_patch(&fields)?;
    if patch.is_empty() {
        tracing::debug!(id, "Update carried no known fields, row left as is");
        return Ok(Json(existing));
    }

    existing.apply(&patch);
    let updated = ConferenceRepo::save(&mut tx, &existing).await?;
    tx.commit().await?;

    tracing::info!(id, "Conference updated");
    Ok(Json(updated))
}

/// DELETE /api/conferences/{id}
pub async fn delete(State(state): State<AppState>, IdPath(id): IdPath) -> AppResult<StatusCode> {
    if ConferenceRepo::delete(&state.pool, id).await? {
        tracing::info!(id, "Conference deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
