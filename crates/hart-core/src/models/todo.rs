//! Todo domain model.
//!
//! Ids are store-allocated `u64`s, monotonically increasing for the
//! lifetime of a store and never reused.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{HartError, HartResult};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Todo {
    pub id: u64,
    pub title: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated input for creating a todo.
///
/// Construct via [`CreateTodo::new`] so the title invariant (non-empty
/// after trimming) holds before any store call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTodo {
    pub title: String,
    pub completed: bool,
}

impl CreateTodo {
    pub fn new(title: &str, completed: Option<bool>) -> HartResult<Self> {
        Ok(Self {
            title: validate_title(title)?,
            completed: completed.unwrap_or(false),
        })
    }
}

/// Validated input for replacing a todo's mutable fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateTodo {
    pub title: String,
    pub completed: bool,
}

impl UpdateTodo {
    pub fn new(title: &str, completed: bool) -> HartResult<Self> {
        Ok(Self {
            title: validate_title(title)?,
            completed,
        })
    }
}

fn validate_title(title: &str) -> HartResult<String> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(HartError::Validation {
            message: "title is required and cannot be empty".into(),
        });
    }
    Ok(trimmed.to_string())
}
