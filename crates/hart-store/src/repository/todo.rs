//! In-memory implementation of [`TodoRepository`].

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::Utc;
use hart_core::error::{HartError, HartResult};
use hart_core::models::todo::{CreateTodo, Todo, UpdateTodo};
use hart_core::repository::TodoRepository;
use tokio::sync::RwLock;

/// Arena-style map from id to record. The next id is store-owned
/// state, so ids are monotonic and never reused even after deletes.
struct TodoTable {
    todos: BTreeMap<u64, Todo>,
    next_id: u64,
}

impl Default for TodoTable {
    fn default() -> Self {
        Self {
            todos: BTreeMap::new(),
            next_id: 1,
        }
    }
}

/// In-memory todo store.
#[derive(Clone, Default)]
pub struct MemoryTodoRepository {
    inner: Arc<RwLock<TodoTable>>,
}

impl MemoryTodoRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn not_found(id: u64) -> HartError {
    HartError::NotFound {
        entity: "todo".into(),
        id: id.to_string(),
    }
}

impl TodoRepository for MemoryTodoRepository {
    async fn create(&self, input: CreateTodo) -> HartResult<Todo> {
        let mut table = self.inner.write().await;

        let id = table.next_id;
        table.next_id += 1;

        let now = Utc::now();
        let todo = Todo {
            id,
            title: input.title,
            completed: input.completed,
            created_at: now,
            updated_at: now,
        };
        table.todos.insert(id, todo.clone());
        Ok(todo)
    }

    async fn get(&self, id: u64) -> HartResult<Todo> {
        self.inner
            .read()
            .await
            .todos
            .get(&id)
            .cloned()
            .ok_or_else(|| not_found(id))
    }

    async fn list(&self, completed: Option<bool>) -> HartResult<Vec<Todo>> {
        let table = self.inner.read().await;
        Ok(table
            .todos
            .values()
            .filter(|t| completed.is_none_or(|c| t.completed == c))
            .cloned()
            .collect())
    }

    async fn update(&self, id: u64, input: UpdateTodo) -> HartResult<Todo> {
        let mut table = self.inner.write().await;
        let todo = table.todos.get_mut(&id).ok_or_else(|| not_found(id))?;
        todo.title = input.title;
        todo.completed = input.completed;
        todo.updated_at = Utc::now();
        Ok(todo.clone())
    }

    async fn delete(&self, id: u64) -> HartResult<()> {
        self.inner
            .write()
            .await
            .todos
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| not_found(id))
    }
}
