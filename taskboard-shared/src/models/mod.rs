/// Database models for Taskboard
///
/// This module contains all database models and their CRUD operations.
///
/// # Models
///
/// - `user`: user accounts
/// - `task`: tasks with a store-assigned creation timestamp and status
/// - `assignment`: the users_tasks join table and the denormalized
///   task-with-user reporting view
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
/// let new_user = CreateUser {
///     id: "u1".to_string(),
///     name: "Astrodev".to_string(),
///     email: "astrodev@example.com".to_string(),
///     password: "astrodev99".to_string(),
/// };
///
/// let user = User::create(&pool, new_user).await?;
/// # Ok(())
/// # }
/// ```

pub mod assignment;
pub mod task;
pub mod user;
