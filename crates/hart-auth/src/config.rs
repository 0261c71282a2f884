//! Authentication configuration.

/// Configuration for the authentication service.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Symmetric secret for HS256 session token signing.
    pub jwt_secret: String,
    /// Session lifetime for password logins in seconds
    /// (default: 3600 = 1 hour).
    pub session_ttl_secs: u64,
    /// Session lifetime for federated logins in seconds
    /// (default: 86_400 = 1 day).
    pub federated_session_ttl_secs: u64,
    /// Optional pepper prepended to passwords before Argon2id
    /// hashing/verification.
    pub pepper: Option<String>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: String::new(),
            session_ttl_secs: 3600,
            federated_session_ttl_secs: 86_400,
            pepper: None,
        }
    }
}
