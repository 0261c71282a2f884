//! Authentication error types.

use hart_core::error::HartError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("username or password is incorrect")]
    InvalidCredentials,

    #[error("missing session cookie")]
    TokenMissing,

    #[error("token has expired")]
    TokenExpired,

    #[error("invalid token: {0}")]
    TokenInvalid(String),

    #[error("requires role '{required}'")]
    RoleDenied { required: String },

    #[error("cryptography error: {0}")]
    Crypto(String),
}

impl From<AuthError> for HartError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidCredentials
            | AuthError::TokenMissing
            | AuthError::TokenExpired
            | AuthError::TokenInvalid(_) => HartError::AuthenticationFailed {
                reason: err.to_string(),
            },
            AuthError::RoleDenied { .. } => HartError::AuthorizationDenied {
                reason: err.to_string(),
            },
            AuthError::Crypto(msg) => HartError::Crypto(msg),
        }
    }
}
