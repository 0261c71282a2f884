//! Shared application state.

use hart_auth::authenticator::SessionAuthenticator;
use hart_auth::config::AuthConfig;
use hart_auth::service::AuthService;
use hart_store::{MemoryTodoRepository, MemoryUserRepository};

#[derive(Clone)]
pub struct AppState {
    pub users: MemoryUserRepository,
    pub todos: MemoryTodoRepository,
    pub auth: AuthService<MemoryUserRepository>,
    pub authenticator: SessionAuthenticator<MemoryUserRepository>,
}

impl AppState {
    pub fn new(config: AuthConfig) -> Self {
        let users = MemoryUserRepository::new();
        Self {
            auth: AuthService::new(users.clone(), config.clone()),
            authenticator: SessionAuthenticator::new(users.clone(), config),
            users,
            todos: MemoryTodoRepository::new(),
        }
    }
}
