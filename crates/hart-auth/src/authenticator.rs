//! Session authentication and role authorization.
//!
//! The authenticator is the request-time gate for protected routes:
//! [`SessionAuthenticator::verify`] turns a raw cookie value into a
//! [`Principal`], and [`SessionAuthenticator::authorize`] checks the
//! principal's *current* role against a required one.

use chrono::{DateTime, Utc};
use hart_core::error::{HartError, HartResult};
use hart_core::repository::UserRepository;
use uuid::Uuid;

use crate::config::AuthConfig;
use crate::error::AuthError;
use crate::token::{self, SessionClaims};

/// Name of the session cookie. A fixed constant for the whole service,
/// not per-route configurable.
pub const SESSION_COOKIE: &str = "hart";

/// The authenticated identity derived from a verified claim set.
///
/// Lifetime is one request — principals are never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub subject_id: Uuid,
    pub username: String,
    /// Role as recorded at issuance. Authorization decisions never
    /// read this field — see [`SessionAuthenticator::authorize`].
    pub role: Option<String>,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl TryFrom<SessionClaims> for Principal {
    type Error = AuthError;

    fn try_from(claims: SessionClaims) -> Result<Self, AuthError> {
        let subject_id = Uuid::parse_str(&claims.sub)
            .map_err(|e| AuthError::TokenInvalid(format!("bad subject id: {e}")))?;
        let issued_at = DateTime::from_timestamp(claims.iat, 0)
            .ok_or_else(|| AuthError::TokenInvalid("bad iat timestamp".into()))?;
        let expires_at = DateTime::from_timestamp(claims.exp, 0)
            .ok_or_else(|| AuthError::TokenInvalid("bad exp timestamp".into()))?;

        Ok(Self {
            subject_id,
            username: claims.username,
            role: claims.role,
            issued_at,
            expires_at,
        })
    }
}

/// Gate for protected operations, consuming a bearer credential
/// transported as the `hart` HTTP cookie.
///
/// Generic over the user repository so that the auth layer has no
/// dependency on a concrete store.
#[derive(Clone)]
pub struct SessionAuthenticator<U: UserRepository> {
    users: U,
    config: AuthConfig,
}

impl<U: UserRepository> SessionAuthenticator<U> {
    pub fn new(users: U, config: AuthConfig) -> Self {
        Self { users, config }
    }

    /// Verify a session cookie value and return the decoded principal.
    ///
    /// Pure verification: signature and expiry only, no I/O, no token
    /// refresh, no sliding expiry. Verifying the same token twice
    /// yields identical principals.
    pub fn verify(&self, raw_cookie_value: Option<&str>) -> Result<Principal, AuthError> {
        let raw = raw_cookie_value.ok_or(AuthError::TokenMissing)?;
        let claims = token::decode_session_token(raw, &self.config)?;
        Principal::try_from(claims)
    }

    /// Check that the principal's current role equals `required_role`,
    /// returning the principal unchanged on success.
    ///
    /// The role is read from the user store at call time — not from
    /// the token claim — so server-side role changes take effect
    /// without re-login. A store failure surfaces as-is; it is never
    /// collapsed into a denial.
    pub async fn authorize(
        &self,
        principal: Principal,
        required_role: &str,
    ) -> HartResult<Principal> {
        let denied = || {
            HartError::from(AuthError::RoleDenied {
                required: required_role.to_string(),
            })
        };

        match self.users.get_by_id(principal.subject_id).await {
            Ok(user) if user.role.as_deref() == Some(required_role) => Ok(principal),
            Ok(_) => Err(denied()),
            // A vanished user has no current role.
            Err(HartError::NotFound { .. }) => Err(denied()),
            Err(e) => Err(e),
        }
    }
}
