//! HART Store — In-memory repository implementations.
//!
//! Both stores keep their records in a lock-guarded map with
//! store-owned id allocation, so they are trivially swappable for a
//! database-backed implementation of the same `hart-core` traits.

mod repository;

pub use repository::{MemoryTodoRepository, MemoryUserRepository};
