use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use uuid::Uuid;

use crate::auth::AuthUser;
use crate::errors::AppError;
use crate::models::history::HistoryRecord;
use crate::state::AppState;

#[derive(Serialize)]
pub struct HistoryListResponse {
    pub history: Vec<HistoryRecord>,
}

/// GET /api/v1/history
///
/// The caller's own records, newest first.
pub async fn handle_list_history(
    State(state): State<AppState>,
    caller: AuthUser,
) -> Result<Json<HistoryListResponse>, AppError> {
    let history = state.history.list(caller.user_id).await?;
    Ok(Json(HistoryListResponse { history }))
}

/// DELETE /api/v1/history/:id
///
/// Records owned by another user are reported as not found.
pub async fn handle_delete_history(
    State(state): State<AppState>,
    caller: AuthUser,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<StatusCode, AppError> {
    let Path(id) = id?;
    if !state.history.delete(caller.user_id, id).await? {
        return Err(AppError::NotFound(format!("History record {id} not found")));
    }
    Ok(StatusCode::NO_CONTENT)
}
