/// Task model and database operations
///
/// This module provides the Task model and the queries behind the /tasks
/// endpoints. Tasks carry a store-assigned creation timestamp and status;
/// neither is settable through the API.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE tasks (
///     id TEXT PRIMARY KEY NOT NULL,
///     title TEXT NOT NULL,
///     description TEXT NOT NULL,
///     created_at TEXT NOT NULL DEFAULT (datetime('now')),
///     status TEXT NOT NULL DEFAULT 'to_do'
/// );
/// ```
///
/// # Example
///
/// ```no_run
/// use taskboard_shared::models::task::{CreateTask, Task, UpdateTask};
/// use taskboard_shared::db::pool::{create_pool, DatabaseConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let pool = create_pool(DatabaseConfig::default()).await?;
///
/// let task = Task::create(
///     &pool,
///     CreateTask {
///         id: "t1".to_string(),
///         title: "Write spec".to_string(),
///         description: "core design".to_string(),
///     },
/// )
/// .await?;
///
/// // Partial update: omitted fields keep their stored values
/// let merged = task.merged_with(UpdateTask {
///     title: Some("Write spec v2".to_string()),
///     ..Default::default()
/// });
/// Task::update(&pool, "t1", &merged).await?;
/// # Ok(())
/// # }
/// ```

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

/// Task progress status
///
/// Assigned by the store default on insert; no endpoint changes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Not started (store default)
    ToDo,

    /// In progress
    Doing,

    /// Finished
    Done,
}

impl TaskStatus {
    /// Converts status to its stored string form
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::ToDo => "to_do",
            TaskStatus::Doing => "doing",
            TaskStatus::Done => "done",
        }
    }
}

/// Task model
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Task {
    /// Unique task id, chosen by the caller at creation time
    pub id: String,

    /// Short title, non-empty
    pub title: String,

    /// Longer description, non-empty
    pub description: String,

    /// When the task was created (store default)
    pub created_at: NaiveDateTime,

    /// Progress status (store default, not settable via the API)
    pub status: TaskStatus,
}

/// Input for creating a new task
///
/// `created_at` and `status` are intentionally absent: both come from store
/// defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTask {
    /// Caller-chosen unique id
    pub id: String,

    /// Short title
    pub title: String,

    /// Longer description
    pub description: String,
}

/// Input for partially updating a task
///
/// A `None` field means "not provided" and keeps the stored value. Provided
/// values have already passed the non-empty validation at the API layer, so
/// an empty string never reaches the merge.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTask {
    /// New id
    pub id: Option<String>,

    /// New title
    pub title: Option<String>,

    /// New description
    pub description: Option<String>,
}

impl Task {
    /// Creates a new task in the database
    ///
    /// `created_at` and `status` are filled in by the store defaults and
    /// returned on the created row.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The id already exists (primary key violation)
    /// - The database connection fails
    pub async fn create(pool: &SqlitePool, data: CreateTask) -> Result<Self, sqlx::Error> {
        let task = sqlx::query_as::<_, Task>(
            r#"
            INSERT INTO tasks (id, title, description)
            VALUES ($1, $2, $3)
            RETURNING id, title, description, created_at, status
            "#,
        )
        .bind(data.id)
        .bind(data.title)
        .bind(data.description)
        .fetch_one(pool)
        .await?;

        Ok(task)
    }

    /// Finds a task by id
    ///
    /// # Returns
    ///
    /// The task if found, None otherwise
    ///
    /// # Errors
    ///
    /// Returns an error if the database connection fails
    pub async fn find_by_id(pool: &SqlitePool, id: &str) -> Result<Option<Self>, sqlx::Error> {
        let task = sqlx::query_as::<_, Task>(
            r#"
            SELECT id, title, description, created_at, status
            FROM tasks
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(task)
    }

    /// Builds the merged record for a partial update
    ///
    /// Omitted fields keep the stored value; provided fields replace it.
    /// `created_at` and `status` always carry over unchanged.
    pub fn merged_with(&self, data: UpdateTask) -> Self {
        Task {
            id: data.id.unwrap_or_else(|| self.id.clone()),
            title: data.title.unwrap_or_else(|| self.title.clone()),
            description: data.description.unwrap_or_else(|| self.description.clone()),
            created_at: self.created_at,
            status: self.status,
        }
    }

    /// Writes a merged record over the row currently identified by `id`
    ///
    /// The caller confirms existence first; this is the act half of the
    /// verify-then-act sequence and the two store calls are not atomic.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The merged id collides with another task (primary key violation)
    /// - The database connection fails
    pub async fn update(pool: &SqlitePool, id: &str, merged: &Task) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            UPDATE tasks
            SET id = $1, title = $2, description = $3
            WHERE id = $4
            "#,
        )
        .bind(&merged.id)
        .bind(&merged.title)
        .bind(&merged.description)
        .bind(id)
        .execute(pool)
        .await?;

        Ok(())
    }

    /// Deletes a task by id
    ///
    /// # Returns
    ///
    /// True if a row was deleted, false if the task didn't exist
    ///
    /// # Errors
    ///
    /// Returns an error if the database connection fails
    pub async fn delete(pool: &SqlitePool, id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Lists all tasks, unfiltered
    ///
    /// # Errors
    ///
    /// Returns an error if the database connection fails
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Self>, sqlx::Error> {
        let tasks = sqlx::query_as::<_, Task>(
            r#"
            SELECT id, title, description, created_at, status
            FROM tasks
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(tasks)
    }
}
