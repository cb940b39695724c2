//! # Routing
//!
//! Maps URL paths to the pages of the client and gates them on the session.
//!
//! | Path                 | Route             | Access         |
//! |----------------------|-------------------|----------------|
//! | `/`                  | `Home`            | anyone         |
//! | `/login`             | `Login`           | anyone         |
//! | `/search/<category>` | `Search`          | anyone         |
//! | `/details/<id>`      | `BusinessDetails` | signed in      |
//! | `/mybooking`         | `MyBookings`      | signed in      |
//! | `/admin`             | `Admin`           | administrators |

use slotbook_core::{BookingError, BookingResult, models::category::Category};
use uuid::Uuid;

use crate::session::Session;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Login,
    Search { category: Category },
    BusinessDetails { id: Uuid },
    MyBookings,
    Admin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Public,
    SignedIn,
    Admin,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    Render(Route),
    Redirect(String),
    NotFound,
}

impl Route {
    /// Parses a path, ignoring any query string, fragment and trailing slash.
    pub fn parse(path: &str) -> Option<Route> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Some(Route::Home),
            ["login"] => Some(Route::Login),
            ["search", category] => category
                .parse()
                .ok()
                .map(|category| Route::Search { category }),
            ["details", id] => Uuid::parse_str(id)
                .ok()
                .map(|id| Route::BusinessDetails { id }),
            ["mybooking"] => Some(Route::MyBookings),
            ["admin"] => Some(Route::Admin),
            _ => None,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Login => "/login".to_string(),
            Route::Search { category } => format!("/search/{}", category.slug()),
            Route::BusinessDetails { id } => format!("/details/{}", id),
            Route::MyBookings => "/mybooking".to_string(),
            Route::Admin => "/admin".to_string(),
        }
    }

    pub fn access(&self) -> Access {
        match self {
            Route::Home | Route::Login | Route::Search { .. } => Access::Public,
            Route::BusinessDetails { .. } | Route::MyBookings => Access::SignedIn,
            Route::Admin => Access::Admin,
        }
    }
}

/// Decides what to show for `path` given the current session.
///
/// Anonymous visitors to a protected page are sent to the login page with the
/// original path in `next`; signed-in users without the admin role are sent
/// home from admin pages.
pub fn navigate(path: &str, session: &Session) -> Navigation {
    let Some(route) = Route::parse(path) else {
        return Navigation::NotFound;
    };

    match (route.access(), session) {
        (Access::Public, _) => Navigation::Render(route),
        (_, Session::Anonymous) => {
            Navigation::Redirect(format!("{}?next={}", Route::Login.path(), route.path()))
        }
        (Access::Admin, session) if !session.is_admin() => Navigation::Redirect(Route::Home.path()),
        _ => Navigation::Render(route),
    }
}

/// Gate for callers that cannot follow a redirect, such as the command line.
///
/// A redirect to the login page becomes `BookingError::Authentication`, any
/// other redirect `BookingError::Authorization`.
pub fn authorize(route: &Route, session: &Session) -> BookingResult<()> {
    let path = route.path();
    match navigate(&path, session) {
        Navigation::Render(_) => Ok(()),
        Navigation::Redirect(target) if target.starts_with(&Route::Login.path()) => Err(
            BookingError::Authentication(format!("sign in to open {}", path)),
        ),
        Navigation::Redirect(_) => Err(BookingError::Authorization(format!(
            "{} is for administrators only",
            path
        ))),
        Navigation::NotFound => Err(BookingError::NotFound(path)),
    }
}
