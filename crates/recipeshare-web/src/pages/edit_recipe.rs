//! Edit recipe page
//!
//! Only the recipe's owner ever sees the form. Anyone else gets an alert and
//! is sent home once the recipe has loaded.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_params_map};
use recipeshare_core::{routes, social, RecipeDraft};
use recipeshare_types::RecipePayload;

use crate::api::use_api;
use crate::components::{RecipeForm, Spinner};
use crate::state::use_auth;
use crate::utils::alert;

#[component]
pub fn EditRecipe() -> impl IntoView {
    let api = use_api();
    let auth = use_auth();
    let params = use_params_map();
    let navigate = use_navigate();
    let (submitting, set_submitting) = signal(false);

    let recipe = LocalResource::new(move || {
        let id = params.with(|p| p.get("id").unwrap_or_default());
        async move { api.recipe(&id).await }
    });

    let is_mine = move |recipe: &recipeshare_types::Recipe| {
        auth.user_untracked()
            .is_some_and(|user| social::is_owner(recipe, Some(&user)))
    };

    {
        let navigate = navigate.clone();
        Effect::new(move |_| {
            let Some(result) = recipe.get() else {
                return;
            };
            match result.as_ref() {
                Ok(recipe) if is_mine(recipe) => {}
                Ok(recipe) => {
                    tracing::warn!(id = %recipe.id, "Edit rejected: recipe owned by another user");
                    alert("You are not authorized to edit this recipe");
                    navigate(routes::HOME, Default::default());
                }
                Err(e) => {
                    alert(&e.user_message("Failed to load recipe"));
                    navigate(routes::HOME, Default::default());
                }
            }
        });
    }

    let on_submit = move |payload: RecipePayload| {
        let id = params.with_untracked(|p| p.get("id").unwrap_or_default());
        set_submitting.set(true);
        let navigate = navigate.clone();
        spawn_local(async move {
            match api.update_recipe(&id, &payload).await {
                Ok(()) => navigate(&routes::recipe(&id), Default::default()),
                Err(e) => {
                    alert(&e.user_message("Failed to update recipe"));
                    set_submitting.set(false);
                }
            }
        });
    };

    view! {
        <div class="page form-page">
            <div class="page-header">
                <h1>"Edit recipe"</h1>
            </div>
            <Suspense fallback=move || view! { <Spinner label="Loading recipe..." /> }>
                {move || {
                    recipe
                        .get()
                        .map(|result| match result.as_ref() {
                            Ok(recipe) if is_mine(recipe) => {
                                view! {
                                    <RecipeForm
                                        initial=RecipeDraft::from_recipe(recipe)
                                        submit_label="Update Recipe"
                                        pending_label="Updating..."
                                        submitting
                                        on_submit=on_submit.clone()
                                    />
                                }
                                    .into_any()
                            }
                            _ => view! { <Spinner /> }.into_any(),
                        })
                }}
            </Suspense>
        </div>
    }
}
