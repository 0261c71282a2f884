//! HART Server — HTTP surface over the auth service and task store.

pub mod config;
pub mod cookie;
pub mod error;
pub mod routes;
pub mod state;

pub use routes::router;
pub use state::AppState;
