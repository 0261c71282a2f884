//! Integration tests for the session authenticator — verification and
//! role authorization against a live user store.

use chrono::Utc;
use hart_auth::authenticator::SessionAuthenticator;
use hart_auth::config::AuthConfig;
use hart_auth::error::AuthError;
use hart_auth::token::{self, SessionClaims};
use hart_core::error::HartError;
use hart_core::models::user::{CreateUser, UpdateUser, User};
use hart_core::repository::{PaginatedResult, Pagination, UserRepository};
use hart_store::MemoryUserRepository;
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use uuid::Uuid;

fn test_config() -> AuthConfig {
    AuthConfig {
        jwt_secret: "test-secret".into(),
        ..Default::default()
    }
}

async fn setup() -> (SessionAuthenticator<MemoryUserRepository>, MemoryUserRepository, User) {
    let repo = MemoryUserRepository::new();
    let user = repo
        .create(CreateUser {
            username: "alice".into(),
            password_hash: None,
            role: Some("user".into()),
            profile_picture_url: None,
        })
        .await
        .unwrap();

    let authenticator = SessionAuthenticator::new(repo.clone(), test_config());
    (authenticator, repo, user)
}

#[tokio::test]
async fn verify_returns_claims_verbatim() {
    let (authenticator, _repo, user) = setup().await;

    let jwt = token::issue_session_token(&user, 3600, &test_config()).unwrap();
    let principal = authenticator.verify(Some(&jwt)).unwrap();

    assert_eq!(principal.subject_id, user.id);
    assert_eq!(principal.username, "alice");
    assert_eq!(principal.role.as_deref(), Some("user"));
    assert_eq!(
        (principal.expires_at - principal.issued_at).num_seconds(),
        3600
    );
}

#[tokio::test]
async fn verify_is_idempotent() {
    let (authenticator, _repo, user) = setup().await;

    let jwt = token::issue_session_token(&user, 3600, &test_config()).unwrap();
    let first = authenticator.verify(Some(&jwt)).unwrap();
    let second = authenticator.verify(Some(&jwt)).unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn verify_missing_cookie() {
    let (authenticator, _repo, _user) = setup().await;

    let err = authenticator.verify(None).unwrap_err();
    assert!(matches!(err, AuthError::TokenMissing));
}

#[tokio::test]
async fn verify_expired_token() {
    let (authenticator, _repo, user) = setup().await;

    let now = Utc::now().timestamp();
    let claims = SessionClaims {
        sub: user.id.to_string(),
        username: user.username.clone(),
        role: user.role.clone(),
        iat: now - 3601,
        exp: now - 1,
    };
    let key = EncodingKey::from_secret(test_config().jwt_secret.as_bytes());
    let jwt = jsonwebtoken::encode(&Header::new(Algorithm::HS256), &claims, &key).unwrap();

    let err = authenticator.verify(Some(&jwt)).unwrap_err();
    assert!(matches!(err, AuthError::TokenExpired));
}

#[tokio::test]
async fn verify_tampered_token() {
    let (authenticator, _repo, user) = setup().await;

    let jwt = token::issue_session_token(&user, 3600, &test_config()).unwrap();
    let tampered = format!("{jwt}x");

    let err = authenticator.verify(Some(&tampered)).unwrap_err();
    assert!(matches!(err, AuthError::TokenInvalid(_)));
}

#[tokio::test]
async fn verify_garbage_token() {
    let (authenticator, _repo, _user) = setup().await;

    let err = authenticator.verify(Some("not.a.jwt")).unwrap_err();
    assert!(matches!(err, AuthError::TokenInvalid(_)));
}

#[tokio::test]
async fn authorize_matching_role() {
    let (authenticator, repo, user) = setup().await;
    repo.update(
        user.id,
        UpdateUser {
            role: Some(Some("admin".into())),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    let jwt = token::issue_session_token(&user, 3600, &test_config()).unwrap();
    let principal = authenticator.verify(Some(&jwt)).unwrap();

    let authorized = authenticator
        .authorize(principal.clone(), "admin")
        .await
        .unwrap();
    // Principal passes through unchanged.
    assert_eq!(authorized, principal);
}

#[tokio::test]
async fn authorize_wrong_role() {
    let (authenticator, _repo, user) = setup().await;

    let jwt = token::issue_session_token(&user, 3600, &test_config()).unwrap();
    let principal = authenticator.verify(Some(&jwt)).unwrap();

    let err = authenticator.authorize(principal, "admin").await.unwrap_err();
    assert!(matches!(err, HartError::AuthorizationDenied { .. }));
}

#[tokio::test]
async fn authorize_reads_current_role_not_token_claim() {
    let (authenticator, repo, user) = setup().await;

    // Token embeds role "user".
    let jwt = token::issue_session_token(&user, 3600, &test_config()).unwrap();
    let principal = authenticator.verify(Some(&jwt)).unwrap();
    assert_eq!(principal.role.as_deref(), Some("user"));

    // Promote after issuance — the same token now authorizes as admin.
    repo.update(
        user.id,
        UpdateUser {
            role: Some(Some("admin".into())),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    authenticator
        .authorize(principal.clone(), "admin")
        .await
        .unwrap();

    // Demote — the same token no longer authorizes.
    repo.update(
        user.id,
        UpdateUser {
            role: Some(Some("user".into())),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    let err = authenticator.authorize(principal, "admin").await.unwrap_err();
    assert!(matches!(err, HartError::AuthorizationDenied { .. }));
}

#[tokio::test]
async fn authorize_vanished_user_is_denied() {
    let (authenticator, repo, user) = setup().await;

    let jwt = token::issue_session_token(&user, 3600, &test_config()).unwrap();
    let principal = authenticator.verify(Some(&jwt)).unwrap();

    repo.delete(user.id).await.unwrap();

    let err = authenticator.authorize(principal, "admin").await.unwrap_err();
    assert!(matches!(err, HartError::AuthorizationDenied { .. }));
}

/// A user store whose every operation fails, for exercising error
/// propagation.
#[derive(Clone)]
struct FailingUserRepository;

impl UserRepository for FailingUserRepository {
    async fn create(&self, _input: CreateUser) -> Result<User, HartError> {
        Err(HartError::Store("store unavailable".into()))
    }

    async fn get_by_id(&self, _id: Uuid) -> Result<User, HartError> {
        Err(HartError::Store("store unavailable".into()))
    }

    async fn get_by_username(&self, _username: &str) -> Result<User, HartError> {
        Err(HartError::Store("store unavailable".into()))
    }

    async fn update(&self, _id: Uuid, _input: UpdateUser) -> Result<User, HartError> {
        Err(HartError::Store("store unavailable".into()))
    }

    async fn delete(&self, _id: Uuid) -> Result<(), HartError> {
        Err(HartError::Store("store unavailable".into()))
    }

    async fn list(&self, _pagination: Pagination) -> Result<PaginatedResult<User>, HartError> {
        Err(HartError::Store("store unavailable".into()))
    }
}

#[tokio::test]
async fn authorize_store_failure_is_not_a_denial() {
    let (_authenticator, _repo, user) = setup().await;

    let authenticator = SessionAuthenticator::new(FailingUserRepository, test_config());
    let jwt = token::issue_session_token(&user, 3600, &test_config()).unwrap();
    let principal = authenticator.verify(Some(&jwt)).unwrap();

    let err = authenticator.authorize(principal, "admin").await.unwrap_err();
    assert!(
        matches!(err, HartError::Store(_)),
        "expected the store error to surface, got: {err:?}"
    );
}

#[tokio::test]
async fn verify_token_for_unknown_subject_still_succeeds() {
    // Verification is pure — it never consults the store.
    let (authenticator, _repo, _user) = setup().await;

    let ghost = User {
        id: Uuid::new_v4(),
        username: "ghost".into(),
        password_hash: None,
        role: None,
        profile_picture_url: None,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    };
    let jwt = token::issue_session_token(&ghost, 3600, &test_config()).unwrap();

    let principal = authenticator.verify(Some(&jwt)).unwrap();
    assert_eq!(principal.subject_id, ghost.id);
}
