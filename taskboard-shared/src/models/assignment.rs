/// Task-user assignment model and the joined reporting view
///
/// The users_tasks table links tasks to users many-to-many. It has no
/// uniqueness constraint, so the same pair can be inserted more than once;
/// deleting a pair removes every matching row. Existence of both sides is
/// checked by the handlers before any write here.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::models::task::TaskStatus;

/// A single row of the users_tasks join table
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct UserTask {
    /// Task side of the association
    pub task_id: String,

    /// User side of the association
    pub user_id: String,
}

/// One row of the denormalized task-with-user reporting view
///
/// Produced by left-joining tasks through users_tasks to users, so a task
/// without an assignee still appears with the user columns null. Serialized
/// with the camelCase keys the /tasks/users endpoint exposes.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct TaskWithUser {
    /// Task id
    #[serde(rename = "taskId")]
    pub task_id: String,

    /// Task title
    pub title: String,

    /// Task description
    pub description: String,

    /// Task creation timestamp
    #[serde(rename = "createdAt")]
    pub created_at: NaiveDateTime,

    /// Task status
    pub status: TaskStatus,

    /// Assigned user id, None when the task has no assignee
    #[serde(rename = "userId")]
    pub user_id: Option<String>,

    /// Assigned user name
    pub name: Option<String>,

    /// Assigned user email
    pub email: Option<String>,

    /// Assigned user password (the view exposes the column verbatim)
    pub password: Option<String>,
}

impl UserTask {
    /// Inserts an association row
    ///
    /// Duplicate pairs are not prevented; calling this twice records the
    /// assignment twice.
    ///
    /// # Errors
    ///
    /// Returns an error if the database connection fails
    pub async fn create(
        pool: &SqlitePool,
        task_id: &str,
        user_id: &str,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            INSERT INTO users_tasks (task_id, user_id)
            VALUES ($1, $2)
            "#,
        )
        .bind(task_id)
        .bind(user_id)
        .execute(pool)
        .await?;

        Ok(())
    }

    /// Deletes every association row matching the exact pair
    ///
    /// # Returns
    ///
    /// The number of rows removed; more than one when duplicates had
    /// accumulated, zero when the pair was never assigned.
    ///
    /// # Errors
    ///
    /// Returns an error if the database connection fails
    pub async fn delete_pair(
        pool: &SqlitePool,
        task_id: &str,
        user_id: &str,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            r#"
            DELETE FROM users_tasks
            WHERE task_id = $1 AND user_id = $2
            "#,
        )
        .bind(task_id)
        .bind(user_id)
        .execute(pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Lists all association rows for a task
    ///
    /// # Errors
    ///
    /// Returns an error if the database connection fails
    pub async fn list_by_task(pool: &SqlitePool, task_id: &str) -> Result<Vec<Self>, sqlx::Error> {
        let rows = sqlx::query_as::<_, UserTask>(
            r#"
            SELECT task_id, user_id
            FROM users_tasks
            WHERE task_id = $1
            "#,
        )
        .bind(task_id)
        .fetch_all(pool)
        .await?;

        Ok(rows)
    }
}

impl TaskWithUser {
    /// Lists every task joined with its assigned users
    ///
    /// Tasks without assignees appear once with null user columns; a task
    /// assigned to several users (or several times to the same user) appears
    /// once per association row.
    ///
    /// # Errors
    ///
    /// Returns an error if the database connection fails
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Self>, sqlx::Error> {
        let rows = sqlx::query_as::<_, TaskWithUser>(
            r#"
            SELECT
                tasks.id AS task_id,
                tasks.title,
                tasks.description,
                tasks.created_at,
                tasks.status,
                users_tasks.user_id AS user_id,
                users.name,
                users.email,
                users.password
            FROM tasks
            LEFT JOIN users_tasks ON users_tasks.task_id = tasks.id
            LEFT JOIN users ON users.id = users_tasks.user_id
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(rows)
    }
}
