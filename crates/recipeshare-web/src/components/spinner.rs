use leptos::prelude::*;

/// Centered loading indicator shown while a fetch is outstanding
#[component]
pub fn Spinner(#[prop(optional)] label: Option<&'static str>) -> impl IntoView {
    view! {
        <div class="spinner-wrapper" role="status" aria-live="polite">
            <div class="spinner"></div>
            <span class="spinner-label">{label.unwrap_or("Loading...")}</span>
        </div>
    }
}
