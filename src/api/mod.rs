pub mod dto;
pub mod payload;

use axum::extract::{Path, State};
use axum::{Json, Router, http::StatusCode, routing::get};
use chrono::Utc;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::trace::TraceLayer;
use tracing::debug;

use crate::error::AppError;
use crate::models::{NewTodoRequest, UpdateTodoRequest};
use crate::state::AppState;

use payload::Payload;

use dto::{
    Endpoints, HealthResponse, MessageResponse, ServiceInfo, TodoListResponse, TodoResponse,
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/api/todos", get(list_todos).post(create_todo))
        .route("/api/todos/completed", get(list_completed))
        .route("/api/todos/pending", get(list_pending))
        .route(
            "/api/todos/{id}",
            get(get_todo).put(update_todo).delete(delete_todo),
        )
        .fallback(endpoint_not_found)
        .method_not_allowed_fallback(endpoint_not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// The router with trailing slashes trimmed before routing, so `/api/todos/`
/// reaches the same handler as `/api/todos`.
pub fn app(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}

/// Parses a path id. Any integer is accepted; negative ids can never match a
/// stored record and come back as `None`.
fn parse_id(raw: &str) -> Result<Option<u64>, AppError> {
    let id = raw.trim().parse::<i64>().map_err(|_| {
        debug!("invalid todo id {:?}", raw);
        AppError::InvalidId
    })?;
    Ok(u64::try_from(id).ok())
}

async fn index() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        message: "Todo API",
        version: env!("CARGO_PKG_VERSION"),
        endpoints: Endpoints::default(),
    })
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK",
        message: "Todo API is running",
        timestamp: Utc::now(),
    })
}

async fn list_todos(State(state): State<AppState>) -> Result<Json<TodoListResponse>, AppError> {
    let todos = state.store.get_all_todos()?;
    Ok(Json(todos.into()))
}

async fn list_completed(
    State(state): State<AppState>,
) -> Result<Json<TodoListResponse>, AppError> {
    let todos = state.store.get_completed_todos()?;
    Ok(Json(todos.into()))
}

async fn list_pending(State(state): State<AppState>) -> Result<Json<TodoListResponse>, AppError> {
    let todos = state.store.get_pending_todos()?;
    Ok(Json(todos.into()))
}

async fn get_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<TodoResponse>, AppError> {
    let id = parse_id(&id)?.ok_or(AppError::NotFound)?;
    let todo = state.store.get_todo_by_id(id)?.ok_or(AppError::NotFound)?;
    Ok(Json(todo.into()))
}

async fn create_todo(
    State(state): State<AppState>,
    Payload(req): Payload<NewTodoRequest>,
) -> Result<(StatusCode, Json<TodoResponse>), AppError> {
    let todo = state.store.create_todo(req)?;
    Ok((StatusCode::CREATED, Json(todo.into())))
}

async fn update_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Payload(req): Payload<UpdateTodoRequest>,
) -> Result<Json<TodoResponse>, AppError> {
    let id = parse_id(&id)?.ok_or(AppError::NotFound)?;
    let todo = state
        .store
        .update_todo(id, req)?
        .ok_or(AppError::NotFound)?;
    Ok(Json(todo.into()))
}

async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    let id = parse_id(&id)?.ok_or(AppError::NotFound)?;
    if state.store.delete_todo(id)? {
        Ok(Json(MessageResponse {
            success: true,
            message: "Todo deleted successfully".to_string(),
        }))
    } else {
        Err(AppError::NotFound)
    }
}

async fn endpoint_not_found() -> AppError {
    AppError::EndpointNotFound
}
