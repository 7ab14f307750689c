//! Recipe form shared by the create and edit pages
//!
//! All inputs write into a single [`RecipeDraft`] signal. Ingredient and step
//! rows are keyed by their [`RowId`], so removing a row in the middle keeps
//! every other row's text attached to the right inputs.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use recipeshare_core::{Field, FormErrors, IngredientField, RecipeDraft, RowId};
use recipeshare_types::RecipePayload;
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;

use crate::api::use_api;
use crate::state::use_auth;
use crate::utils::alert;

/// Inline validation message for one field
#[component]
fn FieldError(errors: RwSignal<FormErrors>, field: Field) -> impl IntoView {
    move || {
        errors
            .with(|e| e.get(field).map(str::to_string))
            .map(|message| view! { <p class="field-error">{message}</p> })
    }
}

#[component]
pub fn RecipeForm<F>(
    /// Starting values (blank for create, backfilled for edit)
    initial: RecipeDraft,
    submit_label: &'static str,
    pending_label: &'static str,
    /// True while the parent's API call is in flight
    #[prop(into)]
    submitting: Signal<bool>,
    /// Receives the validated payload
    on_submit: F,
) -> impl IntoView
where
    F: Fn(RecipePayload) + 'static,
{
    let api = use_api();
    let auth = use_auth();
    let draft = RwSignal::new(initial);
    let errors = RwSignal::new(FormErrors::default());
    let (uploading, set_uploading) = signal(false);

    let has_error = move |field: Field| errors.with(|e| e.get(field).is_some());

    let on_image_selected = move |ev: leptos::ev::Event| {
        let file = ev
            .target()
            .and_then(|target| target.dyn_into::<HtmlInputElement>().ok())
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));
        let Some(file) = file else {
            return;
        };

        set_uploading.set(true);
        spawn_local(async move {
            match api.upload_image(&file).await {
                Ok(uploaded) => draft.update(|d| d.image_url = uploaded.url),
                Err(e) => alert(&e.user_message("Failed to upload image")),
            }
            set_uploading.set(false);
        });
    };

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let user_id = auth.user_id_untracked().unwrap_or_default();

        match draft.with_untracked(|d| d.to_payload(&user_id)) {
            Ok(payload) => {
                errors.set(FormErrors::default());
                on_submit(payload);
            }
            Err(invalid) => {
                tracing::debug!("Recipe form rejected: {}", invalid);
                errors.set(invalid);
            }
        }
    };

    view! {
        <form class="recipe-form" on:submit=handle_submit novalidate=true>
            <section class="form-section">
                <h2 class="form-section-title">"Basic info"</h2>

                <label class="form-label" for="title">"Title"</label>
                <input
                    id="title"
                    class="form-input"
                    class:invalid=move || has_error(Field::Title)
                    placeholder="Grandma's apple pie"
                    prop:value=move || draft.with(|d| d.title.clone())
                    on:input=move |ev| draft.update(|d| d.title = event_target_value(&ev))
                />
                <FieldError errors field=Field::Title />

                <label class="form-label" for="description">"Description"</label>
                <textarea
                    id="description"
                    class="form-input"
                    class:invalid=move || has_error(Field::Description)
                    rows="3"
                    prop:value=move || draft.with(|d| d.description.clone())
                    on:input=move |ev| draft.update(|d| d.description = event_target_value(&ev))
                ></textarea>
                <FieldError errors field=Field::Description />

                <label class="form-label" for="tags">"Tags"</label>
                <input
                    id="tags"
                    class="form-input"
                    placeholder="vegan, quick, dinner"
                    prop:value=move || draft.with(|d| d.tags.clone())
                    on:input=move |ev| draft.update(|d| d.tags = event_target_value(&ev))
                />
                <p class="form-hint">"Separate tags with commas"</p>

                <div class="form-row">
                    <div class="form-group">
                        <label class="form-label" for="prep-time">"Prep time (min)"</label>
                        <input
                            id="prep-time"
                            type="number"
                            min="0"
                            class="form-input"
                            class:invalid=move || has_error(Field::PrepTime)
                            prop:value=move || draft.with(|d| d.prep_time.clone())
                            on:input=move |ev| draft.update(|d| d.prep_time = event_target_value(&ev))
                        />
                        <FieldError errors field=Field::PrepTime />
                    </div>
                    <div class="form-group">
                        <label class="form-label" for="cook-time">"Cook time (min)"</label>
                        <input
                            id="cook-time"
                            type="number"
                            min="0"
                            class="form-input"
                            class:invalid=move || has_error(Field::CookTime)
                            prop:value=move || draft.with(|d| d.cook_time.clone())
                            on:input=move |ev| draft.update(|d| d.cook_time = event_target_value(&ev))
                        />
                        <FieldError errors field=Field::CookTime />
                    </div>
                </div>
            </section>

            <section class="form-section">
                <h2 class="form-section-title">"Image"</h2>
                <input
                    type="file"
                    accept="image/*"
                    class="form-file"
                    on:change=on_image_selected
                    prop:disabled=move || uploading.get()
                />
                <Show when=move || uploading.get()>
                    <p class="form-hint">"Uploading..."</p>
                </Show>
                {move || {
                    let url = draft.with(|d| d.image_url.trim().to_string());
                    (!url.is_empty())
                        .then(|| view! { <img class="image-preview" src=url alt="Recipe preview" /> })
                }}
            </section>

            <section class="form-section">
                <div class="form-section-header">
                    <h2 class="form-section-title">"Ingredients"</h2>
                    <button
                        type="button"
                        class="btn btn-secondary"
                        on:click=move |_| {
                            draft.update(|d| {
                                d.add_ingredient();
                            })
                        }
                    >
                        "+ Add ingredient"
                    </button>
                </div>
                <FieldError errors field=Field::Ingredients />
                <For
                    each=move || draft.with(|d| d.ingredients.iter().map(|row| row.id).collect::<Vec<_>>())
                    key=|id| *id
                    children=move |id| view! { <IngredientRowEditor draft errors id /> }
                />
            </section>

            <section class="form-section">
                <div class="form-section-header">
                    <h2 class="form-section-title">"Steps"</h2>
                    <button
                        type="button"
                        class="btn btn-secondary"
                        on:click=move |_| {
                            draft.update(|d| {
                                d.add_step();
                            })
                        }
                    >
                        "+ Add step"
                    </button>
                </div>
                <For
                    each=move || draft.with(|d| d.steps.iter().map(|row| row.id).collect::<Vec<_>>())
                    key=|id| *id
                    children=move |id| view! { <StepRowEditor draft errors id /> }
                />
            </section>

            <button
                type="submit"
                class="btn btn-primary btn-block"
                prop:disabled=move || submitting.get() || uploading.get()
            >
                {move || if submitting.get() { pending_label } else { submit_label }}
            </button>
        </form>
    }
}

#[component]
fn IngredientRowEditor(
    draft: RwSignal<RecipeDraft>,
    errors: RwSignal<FormErrors>,
    id: RowId,
) -> impl IntoView {
    let value = move |field: IngredientField| {
        draft.with(|d| {
            d.ingredient(id)
                .map(|row| match field {
                    IngredientField::Name => row.name.clone(),
                    IngredientField::Quantity => row.quantity.clone(),
                    IngredientField::Unit => row.unit.clone(),
                })
                .unwrap_or_default()
        })
    };
    let set = move |field: IngredientField, value: String| {
        draft.update(|d| d.set_ingredient_field(id, field, value))
    };
    let has_error = move |field: Field| errors.with(|e| e.get(field).is_some());

    view! {
        <div class="ingredient-row">
            <div class="form-group grow">
                <input
                    class="form-input"
                    class:invalid=move || has_error(Field::IngredientName(id))
                    placeholder="Ingredient"
                    aria-label="Ingredient name"
                    prop:value=move || value(IngredientField::Name)
                    on:input=move |ev| set(IngredientField::Name, event_target_value(&ev))
                />
                <FieldError errors field=Field::IngredientName(id) />
            </div>
            <div class="form-group narrow">
                <input
                    class="form-input"
                    class:invalid=move || has_error(Field::IngredientQuantity(id))
                    inputmode="decimal"
                    placeholder="Qty"
                    aria-label="Quantity"
                    prop:value=move || value(IngredientField::Quantity)
                    on:input=move |ev| set(IngredientField::Quantity, event_target_value(&ev))
                />
                <FieldError errors field=Field::IngredientQuantity(id) />
            </div>
            <div class="form-group narrow">
                <input
                    class="form-input"
                    class:invalid=move || has_error(Field::IngredientUnit(id))
                    placeholder="Unit"
                    aria-label="Unit"
                    prop:value=move || value(IngredientField::Unit)
                    on:input=move |ev| set(IngredientField::Unit, event_target_value(&ev))
                />
                <FieldError errors field=Field::IngredientUnit(id) />
            </div>
            <button
                type="button"
                class="btn-icon"
                aria-label="Remove ingredient"
                prop:disabled=move || !draft.with(RecipeDraft::can_remove_ingredient)
                on:click=move |_| {
                    draft.update(|d| {
                        d.remove_ingredient(id);
                    })
                }
            >
                "✕"
            </button>
        </div>
    }
}

#[component]
fn StepRowEditor(
    draft: RwSignal<RecipeDraft>,
    errors: RwSignal<FormErrors>,
    id: RowId,
) -> impl IntoView {
    let number = move || draft.with(|d| d.step_number(id)).unwrap_or_default();

    view! {
        <div class="step-row">
            <span class="step-badge">{number}</span>
            <div class="form-group grow">
                <textarea
                    class="form-input"
                    class:invalid=move || errors.with(|e| e.get(Field::Step(id)).is_some())
                    rows="2"
                    placeholder="Describe this step"
                    aria-label=move || format!("Step {}", number())
                    prop:value=move || draft.with(|d| d.step(id).map(|row| row.text.clone()).unwrap_or_default())
                    on:input=move |ev| draft.update(|d| d.set_step(id, event_target_value(&ev)))
                ></textarea>
                <FieldError errors field=Field::Step(id) />
            </div>
            <button
                type="button"
                class="btn-icon"
                aria-label="Remove step"
                on:click=move |_| {
                    draft.update(|d| {
                        d.remove_step(id);
                    })
                }
            >
                "✕"
            </button>
        </div>
    }
}
