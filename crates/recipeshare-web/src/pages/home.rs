//! Home feed: trending recipes with search and category filters

use leptos::prelude::*;
use recipeshare_core::feed::{filter_and_sort, result_count_label};
use recipeshare_core::FeedFilter;

use crate::api::use_api;
use crate::components::{EmptyState, ErrorState, FilterBar, RecipeCard, Spinner};

#[component]
pub fn Home() -> impl IntoView {
    let api = use_api();

    // Use LocalResource for CSR with non-Send futures
    let recipes = LocalResource::new(move || api.recipes());

    let (search, set_search) = signal(String::new());
    let (active_filter, set_active_filter) = signal(FeedFilter::All);

    view! {
        <div class="page home-page">
            <section class="hero">
                <h1 class="hero-title">"Discover recipes worth sharing"</h1>
                <p class="hero-subtitle">"Cook, share and find what the community loves."</p>
                <FilterBar search set_search active_filter set_active_filter />
            </section>

            <Suspense fallback=move || view! { <Spinner label="Loading recipes..." /> }>
                {move || {
                    recipes
                        .get()
                        .map(|result| match result.as_ref() {
                            Ok(all) => {
                                let filter = active_filter.get();
                                let visible = filter_and_sort(all, &search.get(), filter);
                                let count = result_count_label(visible.len());

                                view! {
                                    <div class="feed-header">
                                        <h2>{filter.heading()}</h2>
                                        <span class="feed-count">{count}</span>
                                    </div>
                                    {if visible.is_empty() {
                                        view! {
                                            <EmptyState
                                                title="No recipes found"
                                                description="Try a different search or filter."
                                            />
                                        }
                                            .into_any()
                                    } else {
                                        view! {
                                            <div class="recipe-grid">
                                                {visible
                                                    .into_iter()
                                                    .map(|recipe| view! { <RecipeCard recipe /> })
                                                    .collect_view()}
                                            </div>
                                        }
                                            .into_any()
                                    }}
                                }
                                    .into_any()
                            }
                            Err(e) => {
                                view! {
                                    <ErrorState
                                        title="Failed to load recipes"
                                        message=Some(e.user_message("Please try again later."))
                                        home_link=false
                                    />
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}
