//! Top navigation bar

use leptos::prelude::*;
use leptos_router::components::A;
use recipeshare_core::routes;

use crate::state::{use_auth, use_theme};

/// Brand link, theme toggle and (when logged in) create/profile links
#[component]
pub fn Navbar() -> impl IntoView {
    let auth = use_auth();
    let theme = use_theme();

    view! {
        <header class="navbar">
            <A href=routes::HOME attr:class="navbar-brand">
                <span class="navbar-logo">"🍳"</span>
                <span class="navbar-title">"RecipeShare"</span>
            </A>

            <nav class="navbar-actions">
                <button
                    class="theme-toggle"
                    on:click=move |_| theme.toggle()
                    aria-label="Toggle theme"
                    title=move || if theme.is_dark() { "Switch to light mode" } else { "Switch to dark mode" }
                >
                    {move || if theme.is_dark() { "☀️" } else { "🌙" }}
                </button>

                {move || {
                    auth.user()
                        .map(|user| {
                            let title = user.username.clone();
                            let initial = user.initial();
                            view! {
                                <A href=routes::CREATE_RECIPE attr:class="btn btn-primary">
                                    "+ Create Recipe"
                                </A>
                                <A href=routes::PROFILE attr:class="avatar" attr:title=title>
                                    {initial}
                                </A>
                            }
                        })
                }}
            </nav>
        </header>
    }
}
