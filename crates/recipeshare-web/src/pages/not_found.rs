use leptos::prelude::*;
use leptos_router::components::A;
use recipeshare_core::routes;

/// Fallback for unknown paths
#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="page not-found-page">
            <h1 class="not-found-code">"404"</h1>
            <p>"This page doesn't exist."</p>
            <A href=routes::HOME attr:class="btn btn-primary">
                "Back to home"
            </A>
        </div>
    }
}
