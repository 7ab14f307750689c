//! Route guard
//!
//! The guarded view is only constructed while the guard allows it, so a
//! logged-out visit never issues the view's fetches.

use leptos::prelude::*;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_location;
use recipeshare_core::{guard, Access};

use crate::state::use_auth;

/// Render `children` when the current path is reachable with the current
/// session: protected pages need a login, login/register need the opposite
#[component]
pub fn RouteGuard(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    let location = use_location();

    let access = Memo::new(move |_| {
        location
            .pathname
            .with(|path| guard::for_path(path, auth.is_authenticated()))
    });

    move || match access.get() {
        Access::Allow => children().into_any(),
        Access::Redirect(path) => view! { <Redirect path=path /> }.into_any(),
    }
}
