use slotbook_core::{
    BookingError, BookingResult,
    models::user::{Role, User},
};
use tracing::{info, warn};

use crate::source::BookingSource;

/// Who is using the client. Passed explicitly to routing and booking code.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Session {
    #[default]
    Anonymous,
    Authenticated(User),
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::Authenticated(_))
    }

    pub fn user(&self) -> Option<&User> {
        match self {
            Session::Authenticated(user) => Some(user),
            Session::Anonymous => None,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.user().is_some_and(|user| user.role == Role::Admin)
    }

    /// The signed-in user, or an authentication error.
    pub fn require_user(&self) -> BookingResult<&User> {
        self.user()
            .ok_or_else(|| BookingError::Authentication("sign in to continue".to_string()))
    }
}

pub struct SessionProvider<'a, S: ?Sized> {
    source: &'a S,
}

impl<'a, S: BookingSource + ?Sized> SessionProvider<'a, S> {
    pub fn new(source: &'a S) -> Self {
        Self { source }
    }

    /// Resolves the session for an optional bearer token.
    ///
    /// A rejected token yields an anonymous session; any other failure is
    /// returned to the caller.
    pub async fn resolve(&self, token: Option<&str>) -> BookingResult<Session> {
        let Some(token) = token.filter(|token| !token.is_empty()) else {
            return Ok(Session::Anonymous);
        };

        match self.source.current_user(token).await {
            Ok(user) => {
                info!(email = %user.email, role = ?user.role, "session resolved");
                Ok(Session::Authenticated(user))
            }
            Err(BookingError::Authentication(reason)) => {
                warn!(%reason, "token rejected, continuing anonymously");
                Ok(Session::Anonymous)
            }
            Err(err) => Err(err),
        }
    }
}
