/// Application state and router builder
///
/// This module defines the shared application state and provides
/// a function to build the Axum router with all routes and middleware.
///
/// # Example
///
/// ```no_run
/// use taskboard_api::{app::AppState, config::Config};
/// use taskboard_shared::db::pool::{create_pool, DatabaseConfig};
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = Config::from_env()?;
/// let pool = create_pool(DatabaseConfig {
///     url: config.database.url.clone(),
///     ..Default::default()
/// })
/// .await?;
/// let state = AppState::new(pool, config);
/// let app = taskboard_api::app::build_router(state);
/// # Ok(())
/// # }
/// ```

use crate::config::Config;
use axum::{
    routing::{delete, get, post, put},
    Router,
};
use sqlx::SqlitePool;
use std::sync::Arc;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

/// Shared application state
///
/// This is cloned for each request handler via Axum's `State` extractor.
/// Uses Arc internally for cheap cloning; the pool is already reference
/// counted.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: SqlitePool,

    /// Application configuration
    pub config: Arc<Config>,
}

impl AppState {
    /// Creates new application state
    pub fn new(db: SqlitePool, config: Config) -> Self {
        Self {
            db,
            config: Arc::new(config),
        }
    }
}

/// Builds the complete Axum router with all routes and middleware
///
/// # Routes
///
/// ```text
/// /
/// ├── GET    /ping                           # Liveness check
/// ├── GET    /users                          # List users
/// ├── POST   /users                          # Create user
/// ├── DELETE /users/:id                      # Delete user
/// ├── GET    /tasks                          # List tasks
/// ├── POST   /tasks                          # Create task
/// ├── GET    /tasks/users                    # Joined task/user view
/// ├── PUT    /tasks/:task_id                 # Partially update task
/// ├── DELETE /tasks/:task_id                 # Delete task
/// ├── POST   /tasks/:task_id/users/:user_id  # Assign user to task
/// └── DELETE /tasks/:task_id/users/:user_id  # Unassign user from task
/// ```
///
/// The static `/tasks/users` segment takes priority over the `:task_id`
/// parameter, so the joined view is not shadowed by the task routes.
///
/// # Middleware Stack
///
/// 1. Request tracing (tower-http TraceLayer)
/// 2. Permissive CORS (tower-http CorsLayer)
pub fn build_router(state: AppState) -> Router {
    use crate::routes;

    Router::new()
        .route("/ping", get(routes::health::ping))
        .route(
            "/users",
            get(routes::users::list_users).post(routes::users::create_user),
        )
        .route("/users/:id", delete(routes::users::delete_user))
        .route(
            "/tasks",
            get(routes::tasks::list_tasks).post(routes::tasks::create_task),
        )
        .route(
            "/tasks/users",
            get(routes::assignments::list_tasks_with_users),
        )
        .route(
            "/tasks/:task_id",
            put(routes::tasks::update_task).delete(routes::tasks::delete_task),
        )
        .route(
            "/tasks/:task_id/users/:user_id",
            post(routes::assignments::assign_user).delete(routes::assignments::unassign_user),
        )
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(CorsLayer::permissive())
        .with_state(state)
}
