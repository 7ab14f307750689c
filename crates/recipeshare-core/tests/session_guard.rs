//! Session restore, logout teardown and route guarding

use recipeshare_core::guard::{self, Access};
use recipeshare_core::session::{Session, TOKEN_KEY, USER_KEY};
use recipeshare_core::storage::{KeyValueStore, MemoryStore};
use recipeshare_core::types::User;

#[test]
fn test_anonymous_profile_visit_redirects_to_login() {
    let store = MemoryStore::new();
    let session = Session::load(&store);

    assert_eq!(guard::for_path("/profile", session.is_some()), Access::Redirect("/login"));
}

#[test]
fn test_restored_session_allows_protected_routes() {
    let store = MemoryStore::new();
    let user = User { id: "u1".into(), username: "chef".into(), ..Default::default() };
    Session::new("tok", user).save(&store).unwrap();

    let session = Session::load(&store);
    assert!(session.is_some());
    for path in ["/", "/create-recipe", "/recipe/1", "/edit-recipe/1", "/profile"] {
        assert_eq!(guard::for_path(path, session.is_some()), Access::Allow, "{}", path);
    }
}

#[test]
fn test_logout_clears_persisted_state() {
    let store = MemoryStore::new();
    Session::new("tok", User { id: "u1".into(), ..Default::default() })
        .save(&store)
        .unwrap();
    store.set("theme", "dark").unwrap();

    Session::clear(&store);

    assert!(store.get(TOKEN_KEY).is_none());
    assert!(store.get(USER_KEY).is_none());
    // Theme preference is not part of the session
    assert_eq!(store.get("theme").as_deref(), Some("dark"));
    assert_eq!(guard::for_path("/", Session::load(&store).is_some()), Access::Redirect("/login"));
}

#[test]
fn test_logged_in_user_is_sent_home_from_guest_pages() {
    let store = MemoryStore::new();
    Session::new("tok", User { id: "u1".into(), ..Default::default() })
        .save(&store)
        .unwrap();
    let logged_in = Session::load(&store).is_some();

    assert_eq!(guard::for_path("/login", logged_in), Access::Redirect("/"));
    assert_eq!(guard::for_path("/register/", logged_in), Access::Redirect("/"));
    assert_eq!(guard::for_path("/login", false), Access::Allow);
}
