use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, Duration, Utc};
use serde_json::Value;
use tracing::{debug, info};

use crate::error::StoreError;
use crate::models::{NewTodoRequest, Todo, UpdateTodoRequest};

const TITLE_REQUIRED: &str = "Title is required and must be a non-empty string";
const TITLE_INVALID: &str = "Title must be a non-empty string";
const COMPLETED_INVALID: &str = "Completed must be a boolean value";

/// In-memory todo repository.
///
/// Records are kept in creation order. Ids come from a counter that only ever
/// grows, so an id is never handed out twice even after `delete_todo` or
/// `clear_all`. Reads return clones; the only way to change a record is
/// [`TodoStore::update_todo`].
#[derive(Debug)]
pub struct TodoStore {
    inner: RwLock<StoreInner>,
}

#[derive(Debug)]
struct StoreInner {
    todos: Vec<Todo>,
    next_id: u64,
}

impl Default for TodoStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(StoreInner {
                todos: Vec::new(),
                next_id: 1,
            }),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, StoreInner>, StoreError> {
        self.inner.read().map_err(|_| StoreError::LockPoisoned)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, StoreInner>, StoreError> {
        self.inner.write().map_err(|_| StoreError::LockPoisoned)
    }

    pub fn create_todo(&self, req: NewTodoRequest) -> Result<Todo, StoreError> {
        let title = req
            .title
            .as_ref()
            .and_then(non_blank)
            .ok_or_else(|| StoreError::Validation(TITLE_REQUIRED.to_string()))?;
        let description = req.description.as_ref().map(trimmed_or_empty).unwrap_or_default();

        let mut inner = self.write()?;
        let now = Utc::now();
        let todo = Todo {
            id: inner.next_id,
            title,
            description,
            completed: false,
            created_at: now,
            updated_at: now,
        };
        inner.next_id += 1;
        inner.todos.push(todo.clone());

        info!("created todo {}", todo.id);
        Ok(todo)
    }

    pub fn get_all_todos(&self) -> Result<Vec<Todo>, StoreError> {
        Ok(self.read()?.todos.clone())
    }

    pub fn get_todo_by_id(&self, id: u64) -> Result<Option<Todo>, StoreError> {
        let inner = self.read()?;
        let todo = inner.todos.iter().find(|t| t.id == id).cloned();
        if todo.is_none() {
            debug!("todo {} not found", id);
        }
        Ok(todo)
    }

    /// Applies a partial update.
    ///
    /// Every supplied field is validated before any is written, so a rejected
    /// call leaves the record untouched. Returns `Ok(None)` when no record has
    /// `id`, without validating `req`.
    pub fn update_todo(
        &self,
        id: u64,
        req: UpdateTodoRequest,
    ) -> Result<Option<Todo>, StoreError> {
        let mut inner = self.write()?;
        let Some(current) = inner.todos.iter_mut().find(|t| t.id == id) else {
            debug!("todo {} not found for update", id);
            return Ok(None);
        };

        let title = match req.title {
            Some(value) => Some(
                non_blank(&value)
                    .ok_or_else(|| StoreError::Validation(TITLE_INVALID.to_string()))?,
            ),
            None => None,
        };
        let description = req.description.as_ref().map(trimmed_or_empty);
        let completed = match req.completed {
            Some(Value::Bool(done)) => Some(done),
            Some(_) => return Err(StoreError::Validation(COMPLETED_INVALID.to_string())),
            None => None,
        };

        if let Some(title) = title {
            current.title = title;
        }
        if let Some(description) = description {
            current.description = description;
        }
        if let Some(completed) = completed {
            current.completed = completed;
        }
        current.updated_at = next_timestamp(current.updated_at);

        info!("updated todo {}", id);
        Ok(Some(current.clone()))
    }

    pub fn delete_todo(&self, id: u64) -> Result<bool, StoreError> {
        let mut inner = self.write()?;
        match inner.todos.iter().position(|t| t.id == id) {
            Some(index) => {
                inner.todos.remove(index);
                info!("deleted todo {}", id);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn get_completed_todos(&self) -> Result<Vec<Todo>, StoreError> {
        self.filtered(|t| t.completed)
    }

    pub fn get_pending_todos(&self) -> Result<Vec<Todo>, StoreError> {
        self.filtered(|t| !t.completed)
    }

    /// Removes every record and returns how many were dropped. The id counter
    /// keeps counting from where it was.
    pub fn clear_all(&self) -> Result<usize, StoreError> {
        let mut inner = self.write()?;
        let count = inner.todos.len();
        inner.todos.clear();
        info!("cleared {} todos", count);
        Ok(count)
    }

    pub fn len(&self) -> Result<usize, StoreError> {
        Ok(self.read()?.todos.len())
    }

    pub fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.read()?.todos.is_empty())
    }

    fn filtered(&self, keep: impl Fn(&Todo) -> bool) -> Result<Vec<Todo>, StoreError> {
        let inner = self.read()?;
        Ok(inner.todos.iter().filter(|&t| keep(t)).cloned().collect())
    }
}

/// Trimmed string content, or `None` for blank strings and non-strings.
fn non_blank(value: &Value) -> Option<String> {
    value
        .as_str()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn trimmed_or_empty(value: &Value) -> String {
    value.as_str().map(|s| s.trim().to_string()).unwrap_or_default()
}

// Same-tick updates still have to move `updated_at` forward.
fn next_timestamp(previous: DateTime<Utc>) -> DateTime<Utc> {
    let now = Utc::now();
    if now > previous {
        now
    } else {
        previous + Duration::microseconds(1)
    }
}
