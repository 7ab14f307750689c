//! Create recipe page

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use recipeshare_core::{routes, RecipeDraft};
use recipeshare_types::RecipePayload;

use crate::api::use_api;
use crate::components::RecipeForm;
use crate::utils::alert;

#[component]
pub fn CreateRecipe() -> impl IntoView {
    let api = use_api();
    let navigate = use_navigate();
    let (submitting, set_submitting) = signal(false);

    let on_submit = move |payload: RecipePayload| {
        set_submitting.set(true);
        let navigate = navigate.clone();
        spawn_local(async move {
            match api.create_recipe(&payload).await {
                Ok(Some(recipe)) => navigate(&routes::recipe(&recipe.id), Default::default()),
                Ok(None) => navigate(routes::HOME, Default::default()),
                Err(e) => {
                    alert(&e.user_message("Failed to create recipe"));
                    set_submitting.set(false);
                }
            }
        });
    };

    view! {
        <div class="page form-page">
            <div class="page-header">
                <h1>"Create a recipe"</h1>
                <p class="hint">"Share something delicious with the community"</p>
            </div>
            <RecipeForm
                initial=RecipeDraft::new()
                submit_label="Publish Recipe"
                pending_label="Publishing..."
                submitting
                on_submit
            />
        </div>
    }
}
