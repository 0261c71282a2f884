//! Domain models for HART.
//!
//! These are the core types shared across all crates.

pub mod todo;
pub mod user;
