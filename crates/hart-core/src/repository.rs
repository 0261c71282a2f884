//! Repository trait definitions for data access abstraction.
//!
//! All repository operations are async. Implementations own their id
//! allocation; callers never pass ids on create.

use uuid::Uuid;

use crate::error::HartResult;
use crate::models::{
    todo::{CreateTodo, Todo, UpdateTodo},
    user::{CreateUser, UpdateUser, User},
};

/// Pagination parameters for list queries.
#[derive(Debug, Clone)]
pub struct Pagination {
    pub offset: u64,
    pub limit: u64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: 50,
        }
    }
}

/// A paginated result set.
#[derive(Debug, Clone)]
pub struct PaginatedResult<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub offset: u64,
    pub limit: u64,
}

pub trait UserRepository: Send + Sync {
    fn create(&self, input: CreateUser) -> impl Future<Output = HartResult<User>> + Send;
    fn get_by_id(&self, id: Uuid) -> impl Future<Output = HartResult<User>> + Send;
    fn get_by_username(&self, username: &str) -> impl Future<Output = HartResult<User>> + Send;
    fn update(
        &self,
        id: Uuid,
        input: UpdateUser,
    ) -> impl Future<Output = HartResult<User>> + Send;
    fn delete(&self, id: Uuid) -> impl Future<Output = HartResult<()>> + Send;
    fn list(
        &self,
        pagination: Pagination,
    ) -> impl Future<Output = HartResult<PaginatedResult<User>>> + Send;
}

pub trait TodoRepository: Send + Sync {
    fn create(&self, input: CreateTodo) -> impl Future<Output = HartResult<Todo>> + Send;
    fn get(&self, id: u64) -> impl Future<Output = HartResult<Todo>> + Send;
    /// List todos in id order, optionally filtered by completion state.
    fn list(&self, completed: Option<bool>) -> impl Future<Output = HartResult<Vec<Todo>>> + Send;
    fn update(
        &self,
        id: u64,
        input: UpdateTodo,
    ) -> impl Future<Output = HartResult<Todo>> + Send;
    fn delete(&self, id: u64) -> impl Future<Output = HartResult<()>> + Send;
}
