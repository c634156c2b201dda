/// Task resource endpoints
///
/// # Endpoints
///
/// - `GET /tasks` - List all tasks
/// - `POST /tasks` - Create a task
/// - `PUT /tasks/:task_id` - Partially update a task
/// - `DELETE /tasks/:task_id` - Delete a task by id
///
/// `created_at` and `status` are never settable by the caller; both come
/// from store defaults at creation and carry over unchanged on update.
///
/// The update merge is by provision, not truthiness: an omitted field keeps
/// the stored value, a provided field must already have passed the non-empty
/// validation and always replaces it.

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
    routes::MessageResponse,
    validation,
};
use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::Value;
use taskboard_shared::models::task::{CreateTask, Task, UpdateTask};

/// Combined presence failure for POST /tasks
const ALL_FIELDS_REQUIRED: &str =
    "todos os dados são obrigatórios, por favor insira um id, title e description válidos.";

/// Validates a creation payload into a normalized record
fn parse_create_task(payload: &Value) -> Result<CreateTask, ApiError> {
    validation::require_all(payload, &["id", "title", "description"], ALL_FIELDS_REQUIRED)?;

    let id = validation::string_field(payload, "id")?;
    let title = validation::string_field(payload, "title")?;
    let description = validation::string_field(payload, "description")?;

    Ok(CreateTask {
        id,
        title,
        description,
    })
}

/// Validates an update payload into a normalized partial record
///
/// Every field is optional; provided values must be non-empty strings.
fn parse_update_task(payload: &Value) -> Result<UpdateTask, ApiError> {
    let id = validation::optional_string(payload, "id")?;
    let title = validation::optional_string(payload, "title")?;
    let description = validation::optional_string(payload, "description")?;

    Ok(UpdateTask {
        id,
        title,
        description,
    })
}

/// List tasks
///
/// # Endpoint
///
/// ```text
/// GET /tasks
/// ```
///
/// Returns every row, unfiltered and unpaginated.
pub async fn list_tasks(State(state): State<AppState>) -> ApiResult<Json<Vec<Task>>> {
    let tasks = Task::list(&state.db).await?;
    Ok(Json(tasks))
}

/// Create task
///
/// # Endpoint
///
/// ```text
/// POST /tasks
/// Content-Type: application/json
///
/// { "id": "t1", "title": "Write spec", "description": "core design" }
/// ```
///
/// # Errors
///
/// - `400`: a field is missing or not a string
/// - `500`: store failure, including a duplicate id hitting the primary key
pub async fn create_task(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> ApiResult<Json<MessageResponse>> {
    let data = parse_create_task(&payload)?;

    Task::create(&state.db, data).await?;

    Ok(Json(MessageResponse::new("Task adicionada com sucesso!")))
}

/// Partially update task
///
/// # Endpoint
///
/// ```text
/// PUT /tasks/:task_id
/// Content-Type: application/json
///
/// { "title": "Write spec v2" }
/// ```
///
/// Validation runs before the store is touched; the existence read and the
/// write are then two separate, non-atomic store calls.
///
/// # Errors
///
/// - `400`: a provided field is not a string or is empty, or the id does
///   not exist
/// - `500`: store failure
pub async fn update_task(
    State(state): State<AppState>,
    Path(task_id): Path<String>,
    Json(payload): Json<Value>,
) -> ApiResult<Json<MessageResponse>> {
    let data = parse_update_task(&payload)?;

    let task = Task::find_by_id(&state.db, &task_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("'id' não encontrada".to_string()))?;

    let merged = task.merged_with(data);
    Task::update(&state.db, &task_id, &merged).await?;

    Ok(Json(MessageResponse::new(
        "Atualização realizada com sucesso.",
    )))
}

/// Delete task by id
///
/// # Endpoint
///
/// ```text
/// DELETE /tasks/:task_id
/// ```
///
/// # Errors
///
/// - `400`: the id does not exist
/// - `500`: store failure
pub async fn delete_task(
    State(state): State<AppState>,
    Path(task_id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    Task::find_by_id(&state.db, &task_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("'id' não encontrada.".to_string()))?;

    Task::delete(&state.db, &task_id).await?;

    Ok(Json(MessageResponse::new("Task deletado com sucesso.")))
}
