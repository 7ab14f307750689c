//! Login page

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use recipeshare_core::routes;
use recipeshare_types::LoginRequest;

use crate::state::use_auth;

#[component]
pub fn Login() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (show_password, set_show_password) = signal(false);
    let (error, set_error) = signal(None::<String>);
    let (submitting, set_submitting) = signal(false);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let credentials = LoginRequest {
            email: email.get_untracked().trim().to_string(),
            password: password.get_untracked(),
        };

        set_error.set(None);
        set_submitting.set(true);
        let navigate = navigate.clone();
        spawn_local(async move {
            match auth.login(credentials).await {
                Ok(()) => navigate(routes::HOME, Default::default()),
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
                <h1 class="auth-title">"Welcome back"</h1>
                <p class="auth-subtitle">"Sign in to share and discover recipes"</p>

                {move || error.get().map(|message| view! { <div class="alert alert-error">{message}</div> })}

                <form class="auth-form" on:submit=on_submit>
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
                            autocomplete="current-password"
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

                    <button type="submit" class="btn btn-primary btn-block" prop:disabled=move || submitting.get()>
                        {move || if submitting.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>

                <p class="auth-footer">
                    "Don't have an account? "
                    <A href=routes::REGISTER>"Create one"</A>
                </p>
            </div>
        </div>
    }
}
