/// API route handlers
///
/// This module contains all route handlers organized by resource:
///
/// - `health`: liveness check endpoint
/// - `users`: user CRUD endpoints
/// - `tasks`: task CRUD endpoints
/// - `assignments`: task-user association endpoints and the joined view

pub mod assignments;
pub mod health;
pub mod tasks;
pub mod users;

use serde::{Deserialize, Serialize};

/// Confirmation body returned by every mutating endpoint
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Human-readable confirmation message
    pub message: String,
}

impl MessageResponse {
    /// Creates a confirmation response
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
