//! Server configuration from environment variables.

use anyhow::Context;
use hart_auth::config::AuthConfig;

const DEFAULT_PORT: u16 = 8000;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub auth: AuthConfig,
}

impl ServerConfig {
    /// Load configuration from the process environment.
    ///
    /// `HART_JWT_KEY` is required; everything else has a default.
    pub fn from_env() -> anyhow::Result<Self> {
        let jwt_secret = std::env::var("HART_JWT_KEY")
            .context("HART_JWT_KEY environment variable not set")?;

        let port = match std::env::var("HART_PORT") {
            Ok(v) => v.parse().context("HART_PORT is not a valid port")?,
            Err(_) => DEFAULT_PORT,
        };

        let mut auth = AuthConfig {
            jwt_secret,
            ..Default::default()
        };
        if let Ok(v) = std::env::var("HART_SESSION_TTL_SECS") {
            auth.session_ttl_secs = v
                .parse()
                .context("HART_SESSION_TTL_SECS is not a valid duration")?;
        }
        if let Ok(v) = std::env::var("HART_FEDERATED_SESSION_TTL_SECS") {
            auth.federated_session_ttl_secs = v
                .parse()
                .context("HART_FEDERATED_SESSION_TTL_SECS is not a valid duration")?;
        }
        if let Ok(p) = std::env::var("HART_PEPPER") {
            auth.pepper = Some(p);
        }

        Ok(Self { port, auth })
    }
}
