/// User resource endpoints
///
/// # Endpoints
///
/// - `GET /users` - List all users
/// - `POST /users` - Create a user
/// - `DELETE /users/:id` - Delete a user by id
///
/// Creation takes the body as raw JSON and runs it through the validation
/// layer, so presence and type failures carry the endpoint's own messages.
/// Deletion follows the verify-then-act sequence: a read confirms the row
/// exists before the delete statement runs. The two store calls are not
/// atomic; a concurrent request can slip between them.

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
use taskboard_shared::models::user::{CreateUser, User};

/// Combined presence failure for POST /users
const ALL_FIELDS_REQUIRED: &str =
    "todos os dados são obrigatórios, por favor insira um id, name, email e password válidos.";

/// Validates a creation payload into a normalized record
///
/// Presence is checked first with the combined message; the type rule then
/// runs per field in declaration order, stopping at the first failure.
fn parse_create_user(payload: &Value) -> Result<CreateUser, ApiError> {
    validation::require_all(
        payload,
        &["id", "name", "email", "password"],
        ALL_FIELDS_REQUIRED,
    )?;

    let id = validation::string_field(payload, "id")?;
    let name = validation::string_field(payload, "name")?;
    let email = validation::string_field(payload, "email")?;
    let password = validation::string_field(payload, "password")?;

    Ok(CreateUser {
        id,
        name,
        email,
        password,
    })
}

/// List users
///
/// # Endpoint
///
/// ```text
/// GET /users
/// ```
///
/// Returns every row, unfiltered and unpaginated.
pub async fn list_users(State(state): State<AppState>) -> ApiResult<Json<Vec<User>>> {
    let users = User::list(&state.db).await?;
    Ok(Json(users))
}

/// Create user
///
/// # Endpoint
///
/// ```text
/// POST /users
/// Content-Type: application/json
///
/// { "id": "u1", "name": "Astrodev", "email": "astrodev@example.com", "password": "astrodev99" }
/// ```
///
/// # Errors
///
/// - `400`: a field is missing or not a string
/// - `500`: store failure, including a duplicate id hitting the primary key
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> ApiResult<Json<MessageResponse>> {
    let data = parse_create_user(&payload)?;

    User::create(&state.db, data).await?;

    Ok(Json(MessageResponse::new("User adicionado com sucesso!")))
}

/// Delete user by id
///
/// # Endpoint
///
/// ```text
/// DELETE /users/:id
/// ```
///
/// # Errors
///
/// - `400`: the id does not exist
/// - `500`: store failure
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    User::find_by_id(&state.db, &id)
        .await?
        .ok_or_else(|| ApiError::NotFound("'id' não encontrada.".to_string()))?;

    User::delete(&state.db, &id).await?;

    Ok(Json(MessageResponse::new("User deletado com sucesso.")))
}
