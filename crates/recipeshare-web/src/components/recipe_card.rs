//! Recipe card for the home grid and profile list

use leptos::prelude::*;
use leptos_router::components::A;
use recipeshare_core::display::pluralize;
use recipeshare_core::routes;
use recipeshare_types::Recipe;

/// Shown when a recipe has no uploaded image
pub const FALLBACK_IMAGE: &str =
    "https://images.unsplash.com/photo-1546069901-ba9599a7e63c?w=800&q=80";

#[component]
pub fn RecipeCard(recipe: Recipe) -> impl IntoView {
    let href = routes::recipe(&recipe.id);
    let image = recipe.image().unwrap_or(FALLBACK_IMAGE).to_string();
    let likes = recipe.like_count();
    let ingredients = pluralize(recipe.ingredients.len(), "ingredient", "ingredients");
    let cook_time = format!("{} min", recipe.cook_time_minutes);

    view! {
        <A href=href attr:class="recipe-card">
            <div class="recipe-card-image">
                <img src=image alt=recipe.title.clone() loading="lazy" />
                <span class="recipe-card-likes">"❤️ " {likes}</span>
            </div>
            <div class="recipe-card-body">
                <h3 class="recipe-card-title">{recipe.title}</h3>
                <p class="recipe-card-description">{recipe.description}</p>
                <div class="recipe-card-meta">
                    <span>"⏱ " {cook_time}</span>
                    <span>{ingredients}</span>
                </div>
            </div>
        </A>
    }
}
