use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use super::AppState;
use crate::board::{GroupBy, OrderBy, ParseModeError, ViewOptions};
use crate::models::{Snapshot, User};
use crate::state::BoardState;
use crate::view::BoardView;

type ApiError = (StatusCode, String);

/// The current snapshot, or the response explaining why there is none.
fn ready_snapshot(state: &AppState) -> Result<Arc<Snapshot>, ApiError> {
    match state.store.state() {
        BoardState::Ready(snapshot) => Ok(snapshot),
        BoardState::Loading => Err((StatusCode::SERVICE_UNAVAILABLE, "Loading...".to_string())),
        BoardState::Failed(message) => {
            tracing::warn!("Board requested after failed fetch: {}", message);
            Err((StatusCode::BAD_GATEWAY, format!("Error: {}", message)))
        }
    }
}

// ============================================================
// Health
// ============================================================

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

// ============================================================
// Board
// ============================================================

/// Query parameters selecting the board layout.
#[derive(Debug, Deserialize)]
pub struct BoardQuery {
    pub group_by: Option<String>,
    pub order_by: Option<String>,
}

impl BoardQuery {
    fn view_options(&self) -> Result<ViewOptions, ApiError> {
        let bad_request = |e: ParseModeError| (StatusCode::BAD_REQUEST, e.to_string());
        let group_by = match self.group_by.as_deref() {
            Some(s) => s.parse::<GroupBy>().map_err(bad_request)?,
            None => GroupBy::default(),
        };
        let order_by = match self.order_by.as_deref() {
            Some(s) => s.parse::<OrderBy>().map_err(bad_request)?,
            None => OrderBy::default(),
        };
        Ok(ViewOptions::new(group_by, order_by))
    }
}

pub async fn get_board(
    State(state): State<AppState>,
    Query(query): Query<BoardQuery>,
) -> Result<Json<BoardView>, ApiError> {
    let options = query.view_options()?;
    let snapshot = ready_snapshot(&state)?;

    let groups = state.engine.group(&snapshot.tasks, options);
    Ok(Json(BoardView::build(&groups, &snapshot, options)))
}

// ============================================================
// Users
// ============================================================

pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, ApiError> {
    let snapshot = ready_snapshot(&state)?;
    Ok(Json(snapshot.users.clone()))
}

// ============================================================
// Refresh
// ============================================================

/// Fetch a new snapshot on request and replace the current one wholesale.
pub async fn refresh(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let client = state.client.as_ref().ok_or((
        StatusCode::CONFLICT,
        "No data source configured".to_string(),
    ))?;

    let snapshot = state
        .store
        .load(client)
        .await
        .map_err(|e| (StatusCode::BAD_GATEWAY, format!("Error: {}", e)))?;

    Ok(Json(serde_json::json!({
        "tasks": snapshot.tasks.len(),
        "users": snapshot.users.len(),
        "fetched_at": snapshot.fetched_at,
    })))
}
