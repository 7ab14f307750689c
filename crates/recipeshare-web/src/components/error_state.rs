//! Error and empty states

use leptos::prelude::*;
use leptos_router::components::A;
use recipeshare_core::routes;

/// Full-width message for a failed required fetch, with a way back home
///
/// # Example
/// ```ignore
/// view! { <ErrorState title="Recipe not found" message=Some(err.to_string()) /> }
/// ```
#[component]
pub fn ErrorState(
    /// Headline (e.g. "Recipe not found")
    title: &'static str,
    /// Optional detail below the headline
    #[prop(default = None)]
    message: Option<String>,
    #[prop(default = true)]
    home_link: bool,
) -> impl IntoView {
    view! {
        <div class="error-state">
            <div class="error-state-icon">"⚠️"</div>
            <h2 class="error-state-title">{title}</h2>
            {message
                .filter(|m| !m.is_empty())
                .map(|m| view! { <p class="error-state-message">{m}</p> })}
            {home_link
                .then(|| {
                    view! {
                        <A href=routes::HOME attr:class="btn btn-primary">
                            "Back to home"
                        </A>
                    }
                })}
        </div>
    }
}

/// Placeholder for an empty list
#[component]
pub fn EmptyState(
    title: &'static str,
    #[prop(optional)] description: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="empty-state">
            <h3 class="empty-state-title">{title}</h3>
            {description.map(|d| view! { <p class="empty-state-description">{d}</p> })}
        </div>
    }
}
