//! HART Auth — Password authentication, session token
//! issuance/verification, and role authorization.

pub mod authenticator;
pub mod config;
pub mod error;
pub mod password;
pub mod service;
pub mod token;

pub use authenticator::{Principal, SESSION_COOKIE, SessionAuthenticator};
pub use config::AuthConfig;
pub use error::AuthError;
pub use service::{AuthService, LoginInput, LoginOutput};
pub use token::SessionClaims;
