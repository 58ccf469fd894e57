//! Route constants shared between components.
//!
//! Navigation itself belongs to the surrounding application; this crate only
//! names the destinations.

/// The home route, target of the logo link.
pub const HOME: &str = "/";

/// The sign-in route, shown while no user identifier is known.
pub const LOGIN: &str = "/login";

/// The account route, shown once a user identifier is present.
pub const MY_PAGE: &str = "/mypage";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_routes_are_absolute_paths() {
        for route in [HOME, LOGIN, MY_PAGE] {
            assert!(route.starts_with('/'), "route {route:?} must be absolute");
        }
    }

    #[test]
    fn test_signed_in_and_signed_out_routes_differ() {
        assert_ne!(LOGIN, MY_PAGE);
    }
}
