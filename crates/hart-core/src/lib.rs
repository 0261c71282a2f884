//! HART Core — Domain models, repository traits, and shared error
//! types for the HART service.

pub mod error;
pub mod models;
pub mod repository;

pub use error::{HartError, HartResult};
