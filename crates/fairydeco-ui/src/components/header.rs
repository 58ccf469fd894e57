//! Page header component.
//!
//! Renders the logo linking home and a single navigation link that depends
//! on whether a user identifier is present in browser storage: sign-in while
//! none is known, account once one is.

use leptos::prelude::*;

use fairydeco_core::{AuthState, routes};

use crate::browser_store::BrowserStore;

/// The navigation target for the auth-dependent link.
///
/// `None` is the pre-read state on the very first render; it shows the
/// sign-in default until the storage read lands.
fn link_target(state: Option<&AuthState>) -> &'static str {
    state.map_or(routes::LOGIN, AuthState::destination)
}

/// Application header component.
#[component]

pub fn Header() -> impl IntoView {
    // Unknown until the one-shot storage read below completes.
    let (auth_state, set_auth_state) = signal::<Option<AuthState>>(None);

    // Runs once after the first render commits; tracks no signals, so it
    // never reruns. The state moves from unknown to its terminal value
    // exactly once per component lifetime.
    Effect::new(move || {
        set_auth_state.set(Some(AuthState::load(&BrowserStore::new())));
    });

    view! {
        <header class="app-header">
            <div class="header-logo">
                <a href=routes::HOME aria-label="Home">
                    <img
                        class="header-logo-image"
                        src="/image/logo.png"
                        alt="Logo"
                        sizes="(min-width: 60em) 24vw, (min-width: 28em) 45vw, 100vw"
                    />
                </a>
            </div>
            {move || {
                let state = auth_state.get();
                let target = link_target(state.as_ref());
                if state.as_ref().is_some_and(AuthState::is_signed_in) {
                    view! {
                        <a class="header-account-link" href=target aria-label="My account">
                            <svg viewBox="0 0 24 24" width="45" height="45" fill="currentColor">
                                <path d=icons::ACCOUNT />
                            </svg>
                        </a>
                    }
                    .into_any()
                } else {
                    view! {
                        <a class="header-account-link" href=target aria-label="Sign in">
                            <svg viewBox="0 0 24 24" width="45" height="45" fill="currentColor">
                                <path d=icons::SIGN_IN />
                            </svg>
                        </a>
                    }
                    .into_any()
                }
            }}
        </header>
    }
}

/// Icon paths for the header links.
pub mod icons {
    /// Account (address book) icon, shown when signed in.
    pub const ACCOUNT: &str = "M20 0H4v2h16V0zM4 24h16v-2H4v2zM20 4H4c-1.1 0-2 .9-2 2v12c0 1.1.9 2 2 2h16c1.1 0 2-.9 2-2V6c0-1.1-.9-2-2-2zm-8 2.75c1.24 0 2.25 1.01 2.25 2.25s-1.01 2.25-2.25 2.25S9.75 10.24 9.75 9 10.76 6.75 12 6.75zM17 17H7v-1.5c0-1.67 3.33-2.5 5-2.5s5 .83 5 2.5V17z";
    /// Sign-in icon, shown while no user identifier is known.
    pub const SIGN_IN: &str = "M11 7L9.6 8.4l2.6 2.6H2v2h10.2l-2.6 2.6L11 17l5-5-5-5zm9 12h-8v2h8c1.1 0 2-.9 2-2V5c0-1.1-.9-2-2-2h-8v2h8v14z";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_state_defaults_to_sign_in() {
        assert_eq!(link_target(None), routes::LOGIN);
    }

    #[test]
    fn test_signed_out_targets_login() {
        assert_eq!(link_target(Some(&AuthState::SignedOut)), routes::LOGIN);
    }

    #[test]
    fn test_signed_in_targets_my_page() {
        let state = AuthState::SignedIn("abc123".to_string());
        assert_eq!(link_target(Some(&state)), routes::MY_PAGE);
    }

    #[test]
    fn test_icons_are_valid() {
        // Ensure both icons are non-empty and distinct
        assert!(!icons::ACCOUNT.is_empty());
        assert!(!icons::SIGN_IN.is_empty());
        assert_ne!(icons::ACCOUNT, icons::SIGN_IN);
    }
}
