//! Route guard decisions
//!
//! Evaluated synchronously on every navigation, before the target view is
//! constructed, so a redirected view never issues its fetches.

use crate::routes;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Render the requested view
    Allow,
    /// Replace the current location with this route
    Redirect(&'static str),
}

/// Views that require a logged-in user
pub fn protected(is_authenticated: bool) -> Access {
    if is_authenticated {
        Access::Allow
    } else {
        Access::Redirect(routes::LOGIN)
    }
}

/// Login/register: a logged-in user has nothing to do there
pub fn guest_only(is_authenticated: bool) -> Access {
    if is_authenticated {
        Access::Redirect(routes::HOME)
    } else {
        Access::Allow
    }
}

/// Decision for an arbitrary client path
pub fn for_path(path: &str, is_authenticated: bool) -> Access {
    if routes::is_public(path) {
        guest_only(is_authenticated)
    } else {
        protected(is_authenticated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_protected_redirects_anonymous() {
        assert_eq!(protected(false), Access::Redirect("/login"));
        assert_eq!(protected(true), Access::Allow);
    }

    #[test]
    fn test_guest_only_redirects_logged_in() {
        assert_eq!(guest_only(true), Access::Redirect("/"));
        assert_eq!(guest_only(false), Access::Allow);
    }

    #[test]
    fn test_for_path() {
        assert_eq!(for_path("/profile", false), Access::Redirect("/login"));
        assert_eq!(for_path("/edit-recipe/9", true), Access::Allow);
        assert_eq!(for_path("/login", false), Access::Allow);
        assert_eq!(for_path("/register", true), Access::Redirect("/"));
    }
}
