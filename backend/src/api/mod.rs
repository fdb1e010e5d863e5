use axum::Json;
use axum::extract::Path;
use axum::routing::put;
use axum::{Router, extract::State, http::StatusCode, routing::get};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::db::repository;
use crate::error::AppError;
use crate::models::Assignment;
use crate::state::AppState;

pub const COMPLETED_MESSAGE: &str = "Assignment marked as completed";

#[derive(Debug, Serialize, Deserialize)]
pub struct PendingAssignmentsResponse {
    pub assignments: Vec<Assignment>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CompletedAssignmentsResponse {
    pub completed_assignments: Vec<Assignment>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/assignments", get(list_pending_assignments))
        .route("/completed-assignments", get(list_completed_assignments))
        .route("/complete-assignment/{assignment_id}", put(complete_assignment))
        .with_state(state)
}

async fn health(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    sqlx::query("select 1").execute(&state.db).await?;
    Ok(StatusCode::OK)
}

async fn list_pending_assignments(
    State(state): State<AppState>,
) -> Result<Json<PendingAssignmentsResponse>, AppError> {
    let assignments = repository::fetch_pending_assignments(&state.db).await?;
    Ok(Json(PendingAssignmentsResponse { assignments }))
}

async fn list_completed_assignments(
    State(state): State<AppState>,
) -> Result<Json<CompletedAssignmentsResponse>, AppError> {
    let completed_assignments = repository::fetch_completed_assignments(&state.db).await?;
    Ok(Json(CompletedAssignmentsResponse { completed_assignments }))
}

// An unknown id is not an error: the update touches nothing and still reports success.
async fn complete_assignment(
    State(state): State<AppState>,
    Path(assignment_id): Path<i64>,
) -> Result<Json<MessageResponse>, AppError> {
    let changes = repository::mark_assignment_completed(&state.db, assignment_id).await?;
    debug!("complete-assignment {}: {} row(s) changed", assignment_id, changes);
    Ok(Json(MessageResponse {
        message: COMPLETED_MESSAGE.to_string(),
    }))
}
