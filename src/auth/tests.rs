//! Unit tests for session resolution.

use crate::auth::adapters::InMemorySessionDirectory;
use crate::auth::domain::{Session, SessionToken, UserId};
use crate::auth::ports::SessionDirectory;
use rstest::{fixture, rstest};

#[fixture]
fn directory() -> InMemorySessionDirectory {
    InMemorySessionDirectory::new()
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn resolve_returns_issued_session(directory: InMemorySessionDirectory) {
    let user = UserId::new();
    let session = Session::new(user)
        .with_name("Ada")
        .with_email("ada@example.com");
    directory
        .issue(SessionToken::from("token-1"), session.clone())
        .expect("issue should succeed");

    let resolved = directory
        .resolve(&SessionToken::from("token-1"))
        .await
        .expect("resolve should succeed");

    assert_eq!(resolved, Some(session));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn resolve_returns_none_for_unknown_token(directory: InMemorySessionDirectory) {
    let resolved = directory
        .resolve(&SessionToken::from("missing"))
        .await
        .expect("resolve should succeed");
    assert!(resolved.is_none());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn revoked_token_no_longer_resolves(directory: InMemorySessionDirectory) {
    let token = SessionToken::from("token-2");
    directory
        .issue(token.clone(), Session::new(UserId::new()))
        .expect("issue should succeed");
    directory.revoke(&token).expect("revoke should succeed");

    let resolved = directory
        .resolve(&token)
        .await
        .expect("resolve should succeed");
    assert!(resolved.is_none());
}
