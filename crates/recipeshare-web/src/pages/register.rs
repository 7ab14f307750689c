//! Registration page

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use recipeshare_core::routes;
use recipeshare_core::session::password_error;
use recipeshare_types::RegisterRequest;

use crate::components::use_toast;
use crate::state::use_auth;

#[component]
pub fn Register() -> impl IntoView {
    let auth = use_auth();
    let toast = use_toast();
    let navigate = use_navigate();

    let (username, set_username) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (show_password, set_show_password) = signal(false);
    let (password_invalid, set_password_invalid) = signal(None::<String>);
    let (error, set_error) = signal(None::<String>);
    let (submitting, set_submitting) = signal(false);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if let Some(message) = password_error(&password.get_untracked()) {
            set_password_invalid.set(Some(message));
            return;
        }
        set_password_invalid.set(None);

        let account = RegisterRequest {
            username: username.get_untracked().trim().to_string(),
            email: email.get_untracked().trim().to_string(),
            password: password.get_untracked(),
        };

        set_error.set(None);
        set_submitting.set(true);
        let navigate = navigate.clone();
        spawn_local(async move {
            match auth.register(account).await {
                Ok(()) => {
                    toast.success("Account created. Please sign in.");
                    navigate(routes::LOGIN, Default::default());
                }
                Err(message) => {
                    set_error.set(Some(message));
                    set_submitting.set(false);
                }
            }
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1 class="auth-title">"Create an account"</h1>
                <p class="auth-subtitle">"Join the community and start sharing"</p>

                {move || error.get().map(|message| view! { <div class="alert alert-error">{message}</div> })}

                <form class="auth-form" on:submit=on_submit>
                    <label class="form-label" for="username">"Username"</label>
                    <input
                        id="username"
                        class="form-input"
                        autocomplete="username"
                        required=true
                        prop:value=move || username.get()
                        on:input=move |ev| set_username.set(event_target_value(&ev))
                    />

                    <label class="form-label" for="email">"Email"</label>
                    <input
                        id="email"
                        type="email"
                        class="form-input"
                        autocomplete="email"
                        required=true
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />

                    <label class="form-label" for="password">"Password"</label>
                    <div class="password-field">
                        <input
                            id="password"
                            type=move || if show_password.get() { "text" } else { "password" }
                            class="form-input"
                            class:invalid=move || password_invalid.with(Option::is_some)
                            autocomplete="new-password"
                            required=true
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                        />
                        <button
                            type="button"
                            class="password-toggle"
                            aria-label=move || if show_password.get() { "Hide password" } else { "Show password" }
                            on:click=move |_| set_show_password.update(|v| *v = !*v)
                        >
                            {move || if show_password.get() { "🙈" } else { "👁" }}
                        </button>
                    </div>
                    {move || password_invalid.get().map(|message| view! { <p class="field-error">{message}</p> })}

                    <button type="submit" class="btn btn-primary btn-block" prop:disabled=move || submitting.get()>
                        {move || if submitting.get() { "Creating account..." } else { "Create account" }}
                    </button>
                </form>

                <p class="auth-footer">
                    "Already have an account? "
                    <A href=routes::LOGIN>"Sign in"</A>
                </p>
            </div>
        </div>
    }
}
