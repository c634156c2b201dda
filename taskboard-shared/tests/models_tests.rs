/// Database tests for the models
///
/// These run against a private in-memory SQLite database per test, so they
/// need no external services. The pool is capped at one connection because
/// each SQLite connection to ":memory:" opens its own database.

use taskboard_shared::db::migrations::run_migrations;
use taskboard_shared::db::pool::{create_pool, DatabaseConfig};
use taskboard_shared::models::assignment::{TaskWithUser, UserTask};
use taskboard_shared::models::task::{CreateTask, Task, TaskStatus, UpdateTask};
use taskboard_shared::models::user::{CreateUser, User};
use sqlx::SqlitePool;

async fn test_pool() -> SqlitePool {
    let pool = create_pool(DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        max_connections: 1,
        ..Default::default()
    })
    .await
    .unwrap();

    run_migrations(&pool).await.unwrap();
    pool
}

fn sample_user(id: &str) -> CreateUser {
    CreateUser {
        id: id.to_string(),
        name: "Test User".to_string(),
        email: format!("{id}@example.com"),
        password: "secret".to_string(),
    }
}

fn sample_task(id: &str) -> CreateTask {
    CreateTask {
        id: id.to_string(),
        title: "Write spec".to_string(),
        description: "core design".to_string(),
    }
}

#[tokio::test]
async fn test_user_create_and_list() {
    let pool = test_pool().await;

    let user = User::create(&pool, sample_user("u1")).await.unwrap();
    assert_eq!(user.id, "u1");
    assert_eq!(user.email, "u1@example.com");

    let users = User::list(&pool).await.unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].name, "Test User");
}

#[tokio::test]
async fn test_user_duplicate_id_is_store_error() {
    let pool = test_pool().await;

    User::create(&pool, sample_user("u1")).await.unwrap();
    let err = User::create(&pool, sample_user("u1")).await;
    assert!(err.is_err());
}

#[tokio::test]
async fn test_user_find_and_delete() {
    let pool = test_pool().await;

    User::create(&pool, sample_user("u1")).await.unwrap();
    assert!(User::find_by_id(&pool, "u1").await.unwrap().is_some());
    assert!(User::find_by_id(&pool, "missing").await.unwrap().is_none());

    assert!(User::delete(&pool, "u1").await.unwrap());
    assert!(!User::delete(&pool, "u1").await.unwrap());
    assert!(User::find_by_id(&pool, "u1").await.unwrap().is_none());
}

#[tokio::test]
async fn test_task_create_uses_store_defaults() {
    let pool = test_pool().await;

    let task = Task::create(&pool, sample_task("t1")).await.unwrap();
    assert_eq!(task.id, "t1");
    assert_eq!(task.status, TaskStatus::ToDo);

    let found = Task::find_by_id(&pool, "t1").await.unwrap().unwrap();
    assert_eq!(found.created_at, task.created_at);
}

#[tokio::test]
async fn test_task_partial_update_keeps_omitted_fields() {
    let pool = test_pool().await;

    let task = Task::create(&pool, sample_task("t1")).await.unwrap();
    let merged = task.merged_with(UpdateTask {
        title: Some("Write spec v2".to_string()),
        ..Default::default()
    });
    Task::update(&pool, "t1", &merged).await.unwrap();

    let updated = Task::find_by_id(&pool, "t1").await.unwrap().unwrap();
    assert_eq!(updated.title, "Write spec v2");
    assert_eq!(updated.description, "core design");
    assert_eq!(updated.created_at, task.created_at);
    assert_eq!(updated.status, TaskStatus::ToDo);
}

#[tokio::test]
async fn test_task_update_can_change_id() {
    let pool = test_pool().await;

    let task = Task::create(&pool, sample_task("t1")).await.unwrap();
    let merged = task.merged_with(UpdateTask {
        id: Some("t2".to_string()),
        ..Default::default()
    });
    Task::update(&pool, "t1", &merged).await.unwrap();

    assert!(Task::find_by_id(&pool, "t1").await.unwrap().is_none());
    let moved = Task::find_by_id(&pool, "t2").await.unwrap().unwrap();
    assert_eq!(moved.title, "Write spec");
}

#[tokio::test]
async fn test_assignment_duplicates_accumulate_and_delete_removes_all() {
    let pool = test_pool().await;

    Task::create(&pool, sample_task("t1")).await.unwrap();
    User::create(&pool, sample_user("u1")).await.unwrap();

    UserTask::create(&pool, "t1", "u1").await.unwrap();
    UserTask::create(&pool, "t1", "u1").await.unwrap();

    let rows = UserTask::list_by_task(&pool, "t1").await.unwrap();
    assert_eq!(rows.len(), 2);

    let removed = UserTask::delete_pair(&pool, "t1", "u1").await.unwrap();
    assert_eq!(removed, 2);
    assert!(UserTask::list_by_task(&pool, "t1").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_joined_view_left_join_keeps_unassigned_tasks() {
    let pool = test_pool().await;

    Task::create(&pool, sample_task("t1")).await.unwrap();
    Task::create(&pool, sample_task("t2")).await.unwrap();
    User::create(&pool, sample_user("u1")).await.unwrap();
    UserTask::create(&pool, "t1", "u1").await.unwrap();

    let rows = TaskWithUser::list(&pool).await.unwrap();
    assert_eq!(rows.len(), 2);

    let assigned = rows.iter().find(|r| r.task_id == "t1").unwrap();
    assert_eq!(assigned.user_id.as_deref(), Some("u1"));
    assert_eq!(assigned.email.as_deref(), Some("u1@example.com"));
    assert_eq!(assigned.password.as_deref(), Some("secret"));

    let unassigned = rows.iter().find(|r| r.task_id == "t2").unwrap();
    assert!(unassigned.user_id.is_none());
    assert!(unassigned.name.is_none());
}
