mod test_utils;

use pretty_assertions::assert_eq;
use slotbook_client::{
    mock::MockSource,
    session::{Session, SessionProvider},
};
use slotbook_core::{BookingError, models::user::Role};

use crate::test_utils::user;

#[tokio::test]
async fn test_no_token_is_anonymous() {
    // No expectations: the source must not be consulted
    let source = MockSource::new();

    let session = SessionProvider::new(&source).resolve(None).await.unwrap();
    let empty = SessionProvider::new(&source).resolve(Some("")).await.unwrap();

    assert_eq!(session, Session::Anonymous);
    assert_eq!(empty, Session::Anonymous);
}

#[tokio::test]
async fn test_valid_token_authenticates() {
    let admin = user(Role::Admin);
    let returned = admin.clone();
    let mut source = MockSource::new();
    source
        .expect_current_user()
        .withf(|token| token.to_string() == "good-token")
        .times(1)
        .returning(move |_| Ok(returned.clone()));

    let session = SessionProvider::new(&source)
        .resolve(Some("good-token"))
        .await
        .unwrap();

    assert!(session.is_authenticated());
    assert!(session.is_admin());
    assert_eq!(session.user(), Some(&admin));
}

#[tokio::test]
async fn test_rejected_token_falls_back_to_anonymous() {
    let mut source = MockSource::new();
    source
        .expect_current_user()
        .returning(|_| Err(BookingError::Authentication("token expired".to_string())));

    let session = SessionProvider::new(&source)
        .resolve(Some("stale"))
        .await
        .unwrap();

    assert_eq!(session, Session::Anonymous);
}

#[tokio::test]
async fn test_transport_failure_propagates() {
    let mut source = MockSource::new();
    source
        .expect_current_user()
        .returning(|_| Err(BookingError::Transport(eyre::eyre!("connection refused"))));

    let result = SessionProvider::new(&source).resolve(Some("token")).await;

    assert!(matches!(result, Err(BookingError::Transport(_))));
}

#[test]
fn test_require_user() {
    assert!(matches!(
        Session::Anonymous.require_user(),
        Err(BookingError::Authentication(_))
    ));

    let customer = Session::Authenticated(user(Role::Customer));
    assert!(customer.require_user().is_ok());
    assert!(!customer.is_admin());
}
