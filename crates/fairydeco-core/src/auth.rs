//! Authentication-presence state.
//!
//! The client never validates a session; it only knows whether the login
//! flow left a user identifier behind in persistent storage. That presence
//! check is modeled as a two-variant state, and everything rendered from it
//! is a pure function of the variant.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::routes;
use crate::store::{USER_ID_KEY, UserStore};

/// Whether a user identifier is present in persistent storage.
///
/// `SignedOut` covers both "no identifier was ever stored" and "the store
/// could not be read" - the two are deliberately indistinguishable.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum AuthState {
    /// No non-empty identifier is known.
    SignedOut,
    /// A non-empty identifier was found in storage.
    SignedIn(String),
}

impl AuthState {
    /// Classify a raw stored value.
    ///
    /// An absent or empty string means signed out; any non-empty string is
    /// taken as an identifier without further validation.
    #[must_use]
    pub fn from_identifier(identifier: Option<String>) -> Self {
        match identifier {
            Some(id) if !id.is_empty() => Self::SignedIn(id),
            _ => Self::SignedOut,
        }
    }

    /// Read the user identifier from the store and classify it.
    ///
    /// Performed once per component lifetime, after the first render. A
    /// store failure is absorbed into `SignedOut` - the header degrades to
    /// the sign-in link rather than surfacing an error - but the cause is
    /// recorded at debug level so the silent path stays observable.
    pub fn load<S: UserStore + ?Sized>(store: &S) -> Self {
        match store.get(USER_ID_KEY) {
            Ok(value) => Self::from_identifier(value),
            Err(err) => {
                debug!(key = USER_ID_KEY, %err, "storage read failed, treating as signed out");
                Self::SignedOut
            }
        }
    }

    /// The navigation target implied by this state.
    ///
    /// Signed out maps to the sign-in route, signed in to the account route.
    #[must_use]
    pub const fn destination(&self) -> &'static str {
        match self {
            Self::SignedOut => routes::LOGIN,
            Self::SignedIn(_) => routes::MY_PAGE,
        }
    }

    /// The stored identifier, if any.
    #[must_use]
    pub fn identifier(&self) -> Option<&str> {
        match self {
            Self::SignedOut => None,
            Self::SignedIn(id) => Some(id),
        }
    }

    /// Whether a non-empty identifier is present.
    #[must_use]
    pub const fn is_signed_in(&self) -> bool {
        matches!(self, Self::SignedIn(_))
    }
}
