//! Profile page: the current user's stats and recipes

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use recipeshare_core::profile::{recipes_owned_by, ProfileStats};
use recipeshare_core::{routes, ApiError};

use crate::api::use_api;
use crate::components::{EmptyState, ErrorState, RecipeCard, Spinner};
use crate::state::use_auth;

#[component]
pub fn Profile() -> impl IntoView {
    let api = use_api();
    let auth = use_auth();
    let navigate = use_navigate();

    let profile = LocalResource::new(move || async move {
        let (user, recipes) = futures::join!(api.profile(), api.recipes());
        let user = user?;
        let own = recipes_owned_by(&recipes?, &user.id);
        Ok::<_, ApiError>((user, own))
    });

    let on_logout = move |_| {
        auth.logout();
        navigate(routes::LOGIN, Default::default());
    };

    view! {
        <div class="page profile-page">
            <Suspense fallback=move || view! { <Spinner label="Loading profile..." /> }>
                {move || {
                    profile
                        .get()
                        .map(|result| match result.as_ref() {
                            Ok((user, recipes)) => {
                                let stats = ProfileStats::new(user, recipes);
                                let cards = recipes
                                    .iter()
                                    .cloned()
                                    .map(|recipe| view! { <RecipeCard recipe /> })
                                    .collect_view();

                                view! {
                                    <section class="profile-header">
                                        <span class="avatar avatar-lg">{user.initial()}</span>
                                        <div class="profile-info">
                                            <h1 class="profile-name">{user.username.clone()}</h1>
                                            <p class="profile-email">{user.email.clone()}</p>
                                        </div>
                                    </section>
                                    <section class="profile-stats">
                                        <div class="stat">
                                            <span class="stat-value">{stats.followers}</span>
                                            <span class="stat-label">"Followers"</span>
                                        </div>
                                        <div class="stat">
                                            <span class="stat-value">{stats.following}</span>
                                            <span class="stat-label">"Following"</span>
                                        </div>
                                        <div class="stat">
                                            <span class="stat-value">{stats.recipes}</span>
                                            <span class="stat-label">"Recipes"</span>
                                        </div>
                                    </section>
                                    <section class="profile-recipes">
                                        <div class="feed-header">
                                            <h2>"My Recipes"</h2>
                                            <A href=routes::CREATE_RECIPE attr:class="btn btn-secondary">
                                                "+ New"
                                            </A>
                                        </div>
                                        {if recipes.is_empty() {
                                            view! {
                                                <EmptyState
                                                    title="No recipes yet"
                                                    description="Recipes you share will show up here."
                                                />
                                            }
                                                .into_any()
                                        } else {
                                            view! { <div class="recipe-grid">{cards}</div> }.into_any()
                                        }}
                                    </section>
                                }
                                    .into_any()
                            }
                            Err(e) => {
                                view! {
                                    <ErrorState
                                        title="Failed to load profile"
                                        message=Some(e.user_message("Please try again later."))
                                    />
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>

            <button class="btn btn-danger btn-block logout" on:click=on_logout>
                "Sign out"
            </button>
        </div>
    }
}
