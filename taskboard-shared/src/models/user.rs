/// User model and database operations
///
/// This module provides the User model and the queries behind the /users
/// endpoints. Users are linked to tasks through the users_tasks join table
/// (see the `assignment` module).
///
/// # Schema
///
/// ```sql
/// CREATE TABLE users (
///     id TEXT PRIMARY KEY NOT NULL,
///     name TEXT NOT NULL,
///     email TEXT NOT NULL,
///     password TEXT NOT NULL
/// );
/// ```
///
/// # Example
///
/// ```no_run
/// use taskboard_shared::models::user::{CreateUser, User};
/// use taskboard_shared::db::pool::{create_pool, DatabaseConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let pool = create_pool(DatabaseConfig::default()).await?;
///
/// let user = User::create(
///     &pool,
///     CreateUser {
///         id: "u1".to_string(),
///         name: "Astrodev".to_string(),
///         email: "astrodev@example.com".to_string(),
///         password: "astrodev99".to_string(),
///     },
/// )
/// .await?;
///
/// let found = User::find_by_id(&pool, "u1").await?;
/// # Ok(())
/// # }
/// ```

use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

/// User model representing a user account
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Unique user id, chosen by the caller at creation time
    pub id: String,

    /// Display name
    pub name: String,

    /// Email address
    pub email: String,

    /// Password, stored as plaintext
    ///
    /// There is no hashing step anywhere: the /tasks/users reporting view
    /// exposes this column verbatim. A known weakness of the current design.
    pub password: String,
}

/// Input for creating a new user
///
/// All four fields are required; validation happens at the API layer before
/// this struct is built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    /// Caller-chosen unique id
    pub id: String,

    /// Display name
    pub name: String,

    /// Email address
    pub email: String,

    /// Plaintext password
    pub password: String,
}

impl User {
    /// Creates a new user in the database
    ///
    /// The id is caller-supplied and is not checked for collisions here; a
    /// duplicate surfaces as a primary-key constraint error from the store.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The id already exists (primary key violation)
    /// - The database connection fails
    pub async fn create(pool: &SqlitePool, data: CreateUser) -> Result<Self, sqlx::Error> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (id, name, email, password)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, email, password
            "#,
        )
        .bind(data.id)
        .bind(data.name)
        .bind(data.email)
        .bind(data.password)
        .fetch_one(pool)
        .await?;

        Ok(user)
    }

    /// Finds a user by id
    ///
    /// # Returns
    ///
    /// The user if found, None otherwise
    ///
    /// # Errors
    ///
    /// Returns an error if the database connection fails
    pub async fn find_by_id(pool: &SqlitePool, id: &str) -> Result<Option<Self>, sqlx::Error> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, password
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(user)
    }

    /// Deletes a user by id
    ///
    /// Rows in users_tasks pointing at this user are left in place; the
    /// handlers that read the join tolerate dangling references.
    ///
    /// # Returns
    ///
    /// True if a row was deleted, false if the user didn't exist
    ///
    /// # Errors
    ///
    /// Returns an error if the database connection fails
    pub async fn delete(pool: &SqlitePool, id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Lists all users, unfiltered
    ///
    /// # Errors
    ///
    /// Returns an error if the database connection fails
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Self>, sqlx::Error> {
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, password
            FROM users
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(users)
    }
}
