//! Recipe detail page: ingredients, steps, likes, follows and comments

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_params_map};
use recipeshare_core::display::{format_date, format_quantity, pluralize};
use recipeshare_core::{routes, social, ApiError, FollowState, LikeState};
use recipeshare_types::{Comment, Recipe, User};

use crate::api::{use_api, ApiClient};
use crate::components::{use_toast, ErrorState, Spinner, FALLBACK_IMAGE};
use crate::state::use_auth;
use crate::utils::{alert, confirm, copy_to_clipboard, current_url};

/// Everything the page needs before it can render
#[derive(Debug, Clone)]
struct DetailData {
    recipe: Recipe,
    comments: Vec<Comment>,
    /// `None` when the author lookup failed; the page still renders
    author: Option<User>,
}

async fn load_detail(api: ApiClient, id: String) -> Result<DetailData, ApiError> {
    let (recipe, comments) = futures::join!(api.recipe(&id), api.comments(&id));
    let recipe = recipe?;
    let comments = comments?;

    let author = if recipe.user_id.is_empty() {
        None
    } else {
        api.user(&recipe.user_id)
            .await
            .map_err(|e| tracing::warn!(user = %recipe.user_id, "Author lookup failed: {}", e))
            .ok()
    };

    Ok(DetailData {
        recipe,
        comments,
        author,
    })
}

#[component]
pub fn RecipeDetail() -> impl IntoView {
    let api = use_api();
    let params = use_params_map();

    let detail = LocalResource::new(move || {
        let id = params.with(|p| p.get("id").unwrap_or_default());
        load_detail(api, id)
    });

    view! {
        <div class="page recipe-detail-page">
            <Suspense fallback=move || view! { <Spinner label="Loading recipe..." /> }>
                {move || {
                    detail
                        .get()
                        .map(|result| match result.as_ref() {
                            Ok(data) => view! { <RecipeView data=data.clone() /> }.into_any(),
                            Err(e) => {
                                let message = (!e.is_not_found())
                                    .then(|| e.user_message("The recipe could not be loaded."));
                                view! { <ErrorState title="Recipe not found" message=message /> }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}

#[component]
fn RecipeView(data: DetailData) -> impl IntoView {
    let api = use_api();
    let auth = use_auth();
    let toast = use_toast();
    let navigate = use_navigate();

    let DetailData {
        recipe,
        comments,
        author,
    } = data;
    let viewer = auth.user_untracked();
    let viewer_id = viewer.as_ref().map(|u| u.id.as_str());

    let recipe_id = StoredValue::new(recipe.id.clone());
    let like = RwSignal::new(LikeState::for_viewer(&recipe, viewer_id));
    let follow = RwSignal::new(
        author
            .as_ref()
            .map(|a| FollowState::for_viewer(a, viewer_id))
            .unwrap_or_default(),
    );
    let is_owner = social::is_owner(&recipe, viewer.as_ref());
    let show_follow = author
        .as_ref()
        .is_some_and(|a| social::can_follow(a, viewer.as_ref()));
    let author_id = StoredValue::new(author.as_ref().map(|a| a.id.clone()).unwrap_or_default());

    let comments = RwSignal::new(comments);
    let (new_comment, set_new_comment) = signal(String::new());
    let (posting, set_posting) = signal(false);

    let on_like = move |_| {
        like.update(LikeState::toggle);
        let id = recipe_id.get_value();
        spawn_local(async move {
            if let Err(e) = api.like(&id).await {
                like.update(LikeState::toggle);
                toast.api_error(&e, "Failed to update like");
            }
        });
    };

    let on_follow = move |_| {
        follow.update(FollowState::toggle);
        let id = author_id.get_value();
        spawn_local(async move {
            if let Err(e) = api.follow(&id).await {
                follow.update(FollowState::toggle);
                toast.api_error(&e, "Failed to update follow");
            }
        });
    };

    let on_share = move |_| {
        let Some(url) = current_url() else {
            toast.error("Could not copy the link");
            return;
        };
        spawn_local(async move {
            match copy_to_clipboard(&url).await {
                Ok(()) => toast.success("Link copied to clipboard!"),
                Err(e) => {
                    tracing::warn!("Clipboard write failed: {}", e);
                    toast.error("Could not copy the link");
                }
            }
        });
    };

    let on_delete = move |_| {
        if !confirm("Are you sure you want to delete this recipe?") {
            return;
        }
        let id = recipe_id.get_value();
        let navigate = navigate.clone();
        spawn_local(async move {
            match api.delete_recipe(&id).await {
                Ok(()) => navigate(routes::HOME, Default::default()),
                Err(e) => alert(&e.user_message("Failed to delete recipe")),
            }
        });
    };

    let on_comment = move |ev: SubmitEvent| {
        ev.prevent_default();
        let text = new_comment.get_untracked().trim().to_string();
        if text.is_empty() {
            return;
        }

        let id = recipe_id.get_value();
        set_posting.set(true);
        spawn_local(async move {
            match api.comment(&id, &text).await {
                Ok(comment) => {
                    comments.update(|list| list.push(comment));
                    set_new_comment.set(String::new());
                }
                Err(e) => toast.api_error(&e, "Failed to post comment"),
            }
            set_posting.set(false);
        });
    };

    let image = recipe.image().unwrap_or(FALLBACK_IMAGE).to_string();
    let edit_href = routes::edit_recipe(&recipe.id);
    let created = format_date(recipe.created_at.as_deref());
    let ingredients = recipe
        .ingredients
        .iter()
        .map(|ingredient| {
            let amount = format!("{} {}", format_quantity(ingredient.quantity), ingredient.unit);
            view! {
                <li class="ingredient">
                    <span class="ingredient-amount">{amount}</span>
                    <span class="ingredient-name">{ingredient.name.clone()}</span>
                </li>
            }
        })
        .collect_view();
    let steps = recipe
        .steps
        .iter()
        .map(|step| view! { <li class="step">{step.clone()}</li> })
        .collect_view();
    let tags = recipe
        .tags
        .iter()
        .map(|tag| view! { <span class="tag">{tag.clone()}</span> })
        .collect_view();

    view! {
        <article class="recipe-detail">
            <div class="recipe-hero">
                <img src=image alt=recipe.title.clone() />
            </div>

            <header class="recipe-header">
                <div class="recipe-tags">{tags}</div>
                <h1 class="recipe-title">{recipe.title.clone()}</h1>
                <p class="recipe-description">{recipe.description.clone()}</p>
                <div class="recipe-meta">
                    <span>"Prep " {recipe.prep_time_minutes} " min"</span>
                    <span>"Cook " {recipe.cook_time_minutes} " min"</span>
                    <span>{created}</span>
                </div>
            </header>

            {author
                .map(|author| {
                    view! {
                        <div class="author-chip">
                            <span class="avatar">{author.initial()}</span>
                            <div class="author-info">
                                <span class="author-name">{author.username.clone()}</span>
                                <span class="author-followers">
                                    {move || {
                                        let count = follow.get().followers;
                                        pluralize(count, "follower", "followers")
                                    }}
                                </span>
                            </div>
                            {show_follow
                                .then(|| {
                                    view! {
                                        <button
                                            class="btn btn-secondary"
                                            class:active=move || follow.get().following
                                            on:click=on_follow
                                        >
                                            {move || follow.get().label()}
                                        </button>
                                    }
                                })}
                        </div>
                    }
                })}

            <div class="recipe-actions">
                <button class="btn btn-like" class:liked=move || like.get().liked on:click=on_like>
                    {move || if like.get().liked { "❤️" } else { "🤍" }}
                    " "
                    {move || like.get().count}
                </button>
                <button class="btn btn-secondary" on:click=on_share>
                    "Share"
                </button>
                {is_owner
                    .then(|| {
                        view! {
                            <A href=edit_href attr:class="btn btn-secondary">
                                "Edit"
                            </A>
                            <button class="btn btn-danger" on:click=on_delete>
                                "Delete"
                            </button>
                        }
                    })}
            </div>

            <div class="recipe-body">
                <section class="recipe-section">
                    <h2>"Ingredients"</h2>
                    <ul class="ingredient-list">{ingredients}</ul>
                </section>
                <section class="recipe-section">
                    <h2>"Steps"</h2>
                    <ol class="step-list">{steps}</ol>
                </section>
            </div>

            <section class="comments">
                <h2>"Comments (" {move || comments.with(Vec::len)} ")"</h2>
                <form class="comment-form" on:submit=on_comment>
                    <textarea
                        class="form-input"
                        rows="2"
                        placeholder="Share your thoughts..."
                        prop:value=move || new_comment.get()
                        on:input=move |ev| set_new_comment.set(event_target_value(&ev))
                    ></textarea>
                    <button
                        type="submit"
                        class="btn btn-primary"
                        prop:disabled=move || posting.get() || new_comment.with(|t| t.trim().is_empty())
                    >
                        {move || if posting.get() { "Posting..." } else { "Post comment" }}
                    </button>
                </form>
                <ul class="comment-list">
                    {move || {
                        comments
                            .get()
                            .into_iter()
                            .map(|comment| {
                                let when = format_date(comment.created_at.as_deref());
                                view! {
                                    <li class="comment">
                                        <div class="comment-header">
                                            <span class="comment-author">{comment.display_name().to_string()}</span>
                                            <span class="comment-date">{when}</span>
                                        </div>
                                        <p class="comment-text">{comment.text}</p>
                                    </li>
                                }
                            })
                            .collect_view()
                    }}
                </ul>
            </section>
        </article>
    }
}
