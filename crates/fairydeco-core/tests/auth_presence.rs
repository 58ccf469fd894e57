//! End-to-end tests for the authentication-presence check.
//!
//! These walk the concrete scenarios the header component depends on: a
//! missing key, an empty identifier, a real identifier, and a store that
//! fails outright.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use fairydeco_core::{AuthState, InMemoryStore, StoreError, USER_ID_KEY, UserStore, routes};

/// A store whose every read fails, standing in for a browser that denies
/// access to `localStorage`.
struct BrokenStore;

impl UserStore for BrokenStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Err(StoreError::Access {
            key: key.to_string(),
            message: "SecurityError: The operation is insecure".to_string(),
        })
    }
}

#[test]
fn missing_user_id_key_yields_sign_in_destination() {
    let store = InMemoryStore::new();
    let state = AuthState::load(&store);
    assert_eq!(state, AuthState::SignedOut);
    assert_eq!(state.destination(), routes::LOGIN);
}

#[test]
fn empty_user_id_yields_sign_in_destination() {
    let mut store = InMemoryStore::new();
    store.insert(USER_ID_KEY, "");
    let state = AuthState::load(&store);
    assert_eq!(state, AuthState::SignedOut);
    assert_eq!(state.destination(), routes::LOGIN);
}

#[test]
fn stored_user_id_yields_account_destination() {
    let mut store = InMemoryStore::new();
    store.insert(USER_ID_KEY, "abc123");
    let state = AuthState::load(&store);
    assert_eq!(state.identifier(), Some("abc123"));
    assert_eq!(state.destination(), routes::MY_PAGE);
}

#[test]
fn failing_store_is_treated_as_signed_out() {
    let state = AuthState::load(&BrokenStore);
    assert_eq!(state, AuthState::SignedOut);
    assert_eq!(state.destination(), routes::LOGIN);
}

#[test]
fn unrelated_keys_do_not_affect_the_state() {
    let mut store = InMemoryStore::new();
    store.insert("theme", "dark");
    let state = AuthState::load(&store);
    assert_eq!(state.destination(), routes::LOGIN);
}

#[test]
fn destination_is_a_pure_function_of_presence() {
    for id in ["a", "abc123", "0", " "] {
        let state = AuthState::from_identifier(Some(id.to_string()));
        assert_eq!(state.destination(), routes::MY_PAGE, "id {id:?}");
    }
    for id in [None, Some(String::new())] {
        let state = AuthState::from_identifier(id);
        assert_eq!(state.destination(), routes::LOGIN);
    }
}
