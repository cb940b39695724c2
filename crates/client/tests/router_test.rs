mod test_utils;

use pretty_assertions::assert_eq;
use rstest::rstest;
use slotbook_client::{
    router::{Navigation, Route, authorize, navigate},
    session::Session,
};
use slotbook_core::{
    BookingError,
    models::{category::Category, user::Role},
};
use uuid::Uuid;

use crate::test_utils::user;

#[rstest]
#[case("/", Some(Route::Home))]
#[case("", Some(Route::Home))]
#[case("/login", Some(Route::Login))]
#[case("/search/cleaning", Some(Route::Search { category: Category::Cleaning }))]
#[case("/search/Repair/", Some(Route::Search { category: Category::Repair }))]
#[case("/mybooking?tab=history", Some(Route::MyBookings))]
#[case("/admin#pending", Some(Route::Admin))]
#[case("/search/gardening", None)]
#[case("/details/not-a-uuid", None)]
#[case("/unknown/page", None)]
fn test_parse(#[case] path: &str, #[case] expected: Option<Route>) {
    assert_eq!(Route::parse(path), expected);
}

#[test]
fn test_parse_details_round_trips_path() {
    let id = Uuid::new_v4();
    let route = Route::BusinessDetails { id };

    assert_eq!(Route::parse(&route.path()), Some(route));
}

#[test]
fn test_public_routes_render_for_anyone() {
    let session = Session::Anonymous;

    assert_eq!(navigate("/", &session), Navigation::Render(Route::Home));
    assert_eq!(
        navigate("/search/painting", &session),
        Navigation::Render(Route::Search {
            category: Category::Painting
        })
    );
}

#[rstest]
#[case("/mybooking")]
#[case("/admin")]
fn test_protected_routes_redirect_anonymous_to_login(#[case] path: &str) {
    let navigation = navigate(path, &Session::Anonymous);

    assert_eq!(navigation, Navigation::Redirect(format!("/login?next={}", path)));
}

#[test]
fn test_details_requires_sign_in() {
    let id = Uuid::new_v4();
    let path = format!("/details/{}", id);

    assert_eq!(
        navigate(&path, &Session::Anonymous),
        Navigation::Redirect(format!("/login?next={}", path))
    );
    assert_eq!(
        navigate(&path, &Session::Authenticated(user(Role::Customer))),
        Navigation::Render(Route::BusinessDetails { id })
    );
}

#[test]
fn test_admin_route_requires_admin_role() {
    let customer = Session::Authenticated(user(Role::Customer));
    let admin = Session::Authenticated(user(Role::Admin));

    assert_eq!(navigate("/admin", &customer), Navigation::Redirect("/".to_string()));
    assert_eq!(navigate("/admin", &admin), Navigation::Render(Route::Admin));
}

#[test]
fn test_unknown_path_is_not_found() {
    assert_eq!(navigate("/nope", &Session::Anonymous), Navigation::NotFound);
}

#[test]
fn test_authorize_turns_redirects_into_errors() {
    let details = Route::BusinessDetails { id: Uuid::new_v4() };
    let customer = Session::Authenticated(user(Role::Customer));
    let admin = Session::Authenticated(user(Role::Admin));

    assert!(matches!(
        authorize(&details, &Session::Anonymous),
        Err(BookingError::Authentication(_))
    ));
    assert!(authorize(&details, &customer).is_ok());
    assert!(matches!(
        authorize(&Route::Admin, &customer),
        Err(BookingError::Authorization(_))
    ));
    assert!(authorize(&Route::Admin, &admin).is_ok());
    assert!(authorize(&Route::Home, &Session::Anonymous).is_ok());
}
