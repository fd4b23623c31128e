use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::Todo;

#[derive(Debug, Serialize)]
pub struct TodoListResponse {
    pub success: bool,
    pub count: usize,
    pub todos: Vec<Todo>,
}

impl From<Vec<Todo>> for TodoListResponse {
    fn from(todos: Vec<Todo>) -> Self {
        Self {
            success: true,
            count: todos.len(),
            todos,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TodoResponse {
    pub success: bool,
    pub todo: Todo,
}

impl From<Todo> for TodoResponse {
    fn from(todo: Todo) -> Self {
        Self { success: true, todo }
    }
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct ServiceInfo {
    pub message: &'static str,
    pub version: &'static str,
    pub endpoints: Endpoints,
}

/// Route listing returned by `GET /`, as `"<METHOD> <path>"` strings.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Endpoints {
    pub health: &'static str,
    pub get_all_todos: &'static str,
    pub get_todo: &'static str,
    pub create_todo: &'static str,
    pub update_todo: &'static str,
    pub delete_todo: &'static str,
    pub get_completed: &'static str,
    pub get_pending: &'static str,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            health: "GET /health",
            get_all_todos: "GET /api/todos",
            get_todo: "GET /api/todos/:id",
            create_todo: "POST /api/todos",
            update_todo: "PUT /api/todos/:id",
            delete_todo: "DELETE /api/todos/:id",
            get_completed: "GET /api/todos/completed",
            get_pending: "GET /api/todos/pending",
        }
    }
}
