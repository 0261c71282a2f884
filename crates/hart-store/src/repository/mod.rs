mod todo;
mod user;

pub use todo::MemoryTodoRepository;
pub use user::MemoryUserRepository;
