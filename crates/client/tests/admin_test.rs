mod test_utils;

use pretty_assertions::assert_eq;
use slotbook_client::{admin::AdminReview, mock::MockSource, session::Session};
use slotbook_core::{
    BookingError,
    models::{business::BusinessStatus, user::Role},
};

use crate::test_utils::{business, user};

#[tokio::test]
async fn test_review_requires_admin() {
    // No expectations: nothing may be fetched without the admin role
    let source = MockSource::new();
    let customer = Session::Authenticated(user(Role::Customer));

    let anonymous = AdminReview::open(&source, &Session::Anonymous);
    let not_admin = AdminReview::open(&source, &customer);

    assert!(matches!(anonymous, Err(BookingError::Authentication(_))));
    assert!(matches!(not_admin, Err(BookingError::Authorization(_))));
}

#[tokio::test]
async fn test_pending_lists_businesses_awaiting_review() {
    let mut waiting = business(None);
    waiting.status = BusinessStatus::Pending;
    let returned = waiting.clone();
    let mut source = MockSource::new();
    source
        .expect_pending_businesses()
        .times(1)
        .returning(move || Ok(vec![returned.clone()]));
    let admin = Session::Authenticated(user(Role::Admin));

    let review = AdminReview::open(&source, &admin).unwrap();
    let pending = review.pending().await.unwrap();

    assert_eq!(pending, vec![waiting]);
}

#[test_log::test(tokio::test)]
async fn test_approve_and_reject_set_status() {
    let shop = business(None);
    let id = shop.id;
    let mut source = MockSource::new();
    source
        .expect_set_business_status()
        .withf(move |target, _| *target == id)
        .times(2)
        .returning(move |_, status| {
            let mut updated = shop.clone();
            updated.status = status;
            Ok(updated)
        });
    let admin = Session::Authenticated(user(Role::Admin));
    let review = AdminReview::open(&source, &admin).unwrap();

    let approved = review.approve(id).await.unwrap();
    let rejected = review.reject(id).await.unwrap();

    assert_eq!(approved.status, BusinessStatus::Approved);
    assert_eq!(rejected.status, BusinessStatus::Rejected);
}
