//! Search box and category chips above the home grid

use leptos::prelude::*;
use recipeshare_core::FeedFilter;

#[component]
pub fn FilterBar(
    search: ReadSignal<String>,
    set_search: WriteSignal<String>,
    active_filter: ReadSignal<FeedFilter>,
    set_active_filter: WriteSignal<FeedFilter>,
) -> impl IntoView {
    view! {
        <div class="filter-bar">
            <div class="search-input-group">
                <input
                    type="search"
                    class="search-input"
                    placeholder="Search recipes..."
                    prop:value=move || search.get()
                    on:input=move |e| set_search.set(event_target_value(&e))
                />
            </div>

            <div class="filter-chips" role="group" aria-label="Filter recipes">
                {FeedFilter::ALL
                    .into_iter()
                    .map(|filter| {
                        view! {
                            <button
                                class="filter-chip"
                                class:active=move || active_filter.get() == filter
                                on:click=move |_| set_active_filter.set(filter)
                            >
                                {filter.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
