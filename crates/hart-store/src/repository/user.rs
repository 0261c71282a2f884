//! In-memory implementation of [`UserRepository`].

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use hart_core::error::{HartError, HartResult};
use hart_core::models::user::{CreateUser, UpdateUser, User};
use hart_core::repository::{PaginatedResult, Pagination, UserRepository};
use tokio::sync::RwLock;
use uuid::Uuid;

/// In-memory user store keyed by id. Usernames are unique.
#[derive(Clone, Default)]
pub struct MemoryUserRepository {
    users: Arc<RwLock<HashMap<Uuid, User>>>,
}

impl MemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn not_found(id: Uuid) -> HartError {
    HartError::NotFound {
        entity: "user".into(),
        id: id.to_string(),
    }
}

impl UserRepository for MemoryUserRepository {
    async fn create(&self, input: CreateUser) -> HartResult<User> {
        let mut users = self.users.write().await;

        if users.values().any(|u| u.username == input.username) {
            return Err(HartError::AlreadyExists {
                entity: format!("user '{}'", input.username),
            });
        }

        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            username: input.username,
            password_hash: input.password_hash,
            role: input.role,
            profile_picture_url: input.profile_picture_url,
            created_at: now,
            updated_at: now,
        };
        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn get_by_id(&self, id: Uuid) -> HartResult<User> {
        self.users
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| not_found(id))
    }

    async fn get_by_username(&self, username: &str) -> HartResult<User> {
        self.users
            .read()
            .await
            .values()
            .find(|u| u.username == username)
            .cloned()
            .ok_or_else(|| HartError::NotFound {
                entity: "user".into(),
                id: username.to_string(),
            })
    }

    async fn update(&self, id: Uuid, input: UpdateUser) -> HartResult<User> {
        let mut users = self.users.write().await;

        if let Some(new_name) = &input.username {
            if users
                .values()
                .any(|u| u.id != id && &u.username == new_name)
            {
                return Err(HartError::AlreadyExists {
                    entity: format!("user '{new_name}'"),
                });
            }
        }

        let user = users.get_mut(&id).ok_or_else(|| not_found(id))?;
        if let Some(username) = input.username {
            user.username = username;
        }
        if let Some(role) = input.role {
            user.role = role;
        }
        if let Some(url) = input.profile_picture_url {
            user.profile_picture_url = url;
        }
        if let Some(hash) = input.password_hash {
            user.password_hash = hash;
        }
        user.updated_at = Utc::now();
        Ok(user.clone())
    }

    async fn delete(&self, id: Uuid) -> HartResult<()> {
        self.users
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| not_found(id))
    }

    async fn list(&self, pagination: Pagination) -> HartResult<PaginatedResult<User>> {
        let users = self.users.read().await;

        let mut all: Vec<User> = users.values().cloned().collect();
        // Deterministic order: oldest first, id as tiebreaker.
        all.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));

        let total = all.len() as u64;
        let items = all
            .into_iter()
            .skip(pagination.offset as usize)
            .take(pagination.limit as usize)
            .collect();

        Ok(PaginatedResult {
            items,
            total,
            offset: pagination.offset,
            limit: pagination.limit,
        })
    }
}
