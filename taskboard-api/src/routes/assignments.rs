/// Task-user association endpoints
///
/// # Endpoints
///
/// - `GET /tasks/users` - Denormalized task/user reporting view
/// - `POST /tasks/:task_id/users/:user_id` - Assign a user to a task
/// - `DELETE /tasks/:task_id/users/:user_id` - Unassign a user from a task
///
/// Assign and unassign share a two-phase protocol: verify that both
/// referenced rows exist (task first, then user), then act on the join
/// table. The verify reads and the write are separate store calls with no
/// transaction around them, so a concurrent delete of either side can land
/// between the phases; the operation then fails at the store or leaves a
/// dangling join row. Duplicate assignments are not prevented, and
/// unassigning removes every row for the pair.

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
    routes::MessageResponse,
};
use axum::{
    extract::{Path, State},
    Json,
};
use sqlx::SqlitePool;
use taskboard_shared::models::{
    assignment::{TaskWithUser, UserTask},
    task::Task,
    user::User,
};

/// Verify phase shared by assign and unassign
///
/// Checks the task, then the user; the first missing id aborts with its own
/// message and no write happens.
async fn verify_task_and_user(
    db: &SqlitePool,
    task_id: &str,
    user_id: &str,
) -> Result<(), ApiError> {
    Task::find_by_id(db, task_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("'taskId' não encontrada".to_string()))?;

    User::find_by_id(db, user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("'userId' não encontrada".to_string()))?;

    Ok(())
}

/// Joined task/user view
///
/// # Endpoint
///
/// ```text
/// GET /tasks/users
/// ```
///
/// Read-only reporting view: every task left-joined to its assigned users.
/// Tasks without an assignee appear with null user fields.
pub async fn list_tasks_with_users(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<TaskWithUser>>> {
    let rows = TaskWithUser::list(&state.db).await?;
    Ok(Json(rows))
}

/// Assign user to task
///
/// # Endpoint
///
/// ```text
/// POST /tasks/:task_id/users/:user_id
/// ```
///
/// # Errors
///
/// - `400`: the task or the user does not exist (checked in that order)
/// - `500`: store failure
pub async fn assign_user(
    State(state): State<AppState>,
    Path((task_id, user_id)): Path<(String, String)>,
) -> ApiResult<Json<MessageResponse>> {
    verify_task_and_user(&state.db, &task_id, &user_id).await?;

    UserTask::create(&state.db, &task_id, &user_id).await?;

    Ok(Json(MessageResponse::new(
        "User atribuido a tarefa com sucesso.",
    )))
}

/// Unassign user from task
///
/// # Endpoint
///
/// ```text
/// DELETE /tasks/:task_id/users/:user_id
/// ```
///
/// Removes every join row matching the pair, including duplicates. Succeeds
/// even when no row matched, as long as both ids exist.
///
/// # Errors
///
/// - `400`: the task or the user does not exist (checked in that order)
/// - `500`: store failure
pub async fn unassign_user(
    State(state): State<AppState>,
    Path((task_id, user_id)): Path<(String, String)>,
) -> ApiResult<Json<MessageResponse>> {
    verify_task_and_user(&state.db, &task_id, &user_id).await?;

    UserTask::delete_pair(&state.db, &task_id, &user_id).await?;

    Ok(Json(MessageResponse::new(
        "User removido da tarefa com sucesso.",
    )))
}
