//! Authentication service — login, signup, and federated login
//! orchestration.

use hart_core::error::{HartError, HartResult};
use hart_core::models::user::{CreateUser, User};
use hart_core::repository::UserRepository;

use crate::config::AuthConfig;
use crate::error::AuthError;
use crate::password;
use crate::token;

/// Role assigned to every newly created account.
const DEFAULT_ROLE: &str = "user";

/// Input for the password login flow.
#[derive(Debug)]
pub struct LoginInput {
    pub username: String,
    pub password: String,
}

/// Successful login result.
#[derive(Debug)]
pub struct LoginOutput {
    /// Signed session token — set as the `hart` cookie by the caller.
    pub session_token: String,
    /// Session lifetime in seconds.
    pub expires_in: u64,
}

/// Input for account creation.
#[derive(Debug)]
pub struct SignupInput {
    pub username: String,
    pub password: String,
    pub profile_picture_url: Option<String>,
}

/// Input for the federated login flow.
///
/// The caller is responsible for having verified this profile with the
/// identity provider; the service starts from a trusted assertion.
#[derive(Debug)]
pub struct FederatedLoginInput {
    pub username: String,
    pub profile_picture_url: Option<String>,
}

/// Authentication service.
///
/// Generic over the user repository so that the auth layer has no
/// dependency on a concrete store.
#[derive(Clone)]
pub struct AuthService<U: UserRepository> {
    users: U,
    config: AuthConfig,
}

impl<U: UserRepository> AuthService<U> {
    pub fn new(users: U, config: AuthConfig) -> Self {
        Self { users, config }
    }

    /// Authenticate with username + password and issue a session token
    /// with the basic TTL.
    pub async fn login(&self, input: LoginInput) -> HartResult<LoginOutput> {
        // Unknown user and wrong password are indistinguishable to the
        // caller.
        let user = match self.users.get_by_username(&input.username).await {
            Ok(u) => u,
            Err(HartError::NotFound { .. }) => return Err(AuthError::InvalidCredentials.into()),
            Err(e) => return Err(e),
        };

        let Some(hash) = user.password_hash.as_deref() else {
            // Federated-only identity — no password to check.
            return Err(AuthError::InvalidCredentials.into());
        };

        let valid = password::verify_password(&input.password, hash, self.config.pepper.as_deref())
            .map_err(|e| HartError::Crypto(e.to_string()))?;
        if !valid {
            return Err(AuthError::InvalidCredentials.into());
        }

        let session_token = token::issue_session_token(&user, self.config.session_ttl_secs, &self.config)?;
        Ok(LoginOutput {
            session_token,
            expires_in: self.config.session_ttl_secs,
        })
    }

    /// Create a new account with a hashed password and the default
    /// role.
    pub async fn signup(&self, input: SignupInput) -> HartResult<User> {
        match self.users.get_by_username(&input.username).await {
            Ok(_) => {
                return Err(HartError::AlreadyExists {
                    entity: format!("user '{}'", input.username),
                });
            }
            Err(HartError::NotFound { .. }) => {}
            Err(e) => return Err(e),
        }

        let password_hash = password::hash_password(&input.password, self.config.pepper.as_deref())
            .map_err(|e| HartError::Crypto(e.to_string()))?;

        self.users
            .create(CreateUser {
                username: input.username,
                password_hash: Some(password_hash),
                role: Some(DEFAULT_ROLE.to_string()),
                profile_picture_url: input.profile_picture_url,
            })
            .await
    }

    /// Log in with a provider-verified identity, creating the account
    /// on first sight, and issue a session token with the federated
    /// TTL.
    pub async fn federated_login(&self, input: FederatedLoginInput) -> HartResult<LoginOutput> {
        let user = match self.users.get_by_username(&input.username).await {
            Ok(u) => u,
            Err(HartError::NotFound { .. }) => {
                self.users
                    .create(CreateUser {
                        username: input.username,
                        password_hash: None,
                        role: Some(DEFAULT_ROLE.to_string()),
                        profile_picture_url: input.profile_picture_url,
                    })
                    .await?
            }
            Err(e) => return Err(e),
        };

        let session_token =
            token::issue_session_token(&user, self.config.federated_session_ttl_secs, &self.config)?;
        Ok(LoginOutput {
            session_token,
            expires_in: self.config.federated_session_ttl_secs,
        })
    }
}
