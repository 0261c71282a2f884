//! User domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    /// Argon2id PHC-format hash. `None` for federated-only identities,
    /// which never authenticate with a password.
    pub password_hash: Option<String>,
    /// Current role. Mutable server-side state — authorization always
    /// reads this field, never a role embedded in a token.
    pub role: Option<String>,
    pub profile_picture_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    pub username: String,
    /// Pre-hashed password (hashing is the auth service's concern).
    pub password_hash: Option<String>,
    pub role: Option<String>,
    pub profile_picture_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UpdateUser {
    pub username: Option<String>,
    /// `Some(Some(val))` = set, `Some(None)` = clear, `None` = no change.
    pub role: Option<Option<String>>,
    pub profile_picture_url: Option<Option<String>>,
    pub password_hash: Option<Option<String>>,
}
