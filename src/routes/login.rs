//! Sign-in page. Exchanges credentials for a session cookie and redirects to
//! the dashboard once the session is live.

use crate::app_lib::AppError;
use crate::app_lib::theme::Theme;
use crate::components::{Alert, AlertKind, Button};
use crate::features::auth::types::LoginRequest;
use crate::features::auth::{client, state::use_auth};
use crate::routes::paths;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal(None::<AppError>);

    // Already signed in (or session hydration finished): leave the page.
    Effect::new(move |_| {
        if auth.is_authenticated.get() {
            navigate(paths::DASHBOARD, Default::default());
        }
    });

    let login_action = Action::new_local(move |request: &LoginRequest| {
        let request = request.clone();
        async move { client::login(&request).await }
    });

    Effect::new(move |_| {
        if let Some(result) = login_action.value().get() {
            match result {
                Ok(session) => auth.set_session(session),
                Err(err) => set_error.set(Some(err)),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);

        let email_value = email.get_untracked().trim().to_string();
        let password_value = password.get_untracked();
        if email_value.is_empty() || password_value.trim().is_empty() {
            set_error.set(Some(AppError::Config(
                "Email and password are required.".to_string(),
            )));
            return;
        }

        login_action.dispatch(LoginRequest {
            email: email_value,
            password: password_value,
        });
    };

    view! {
        <div class="min-h-screen flex items-center justify-center bg-gray-50 dark:bg-gray-950 px-4">
            <div class="w-full max-w-sm bg-white dark:bg-gray-900 rounded-xl shadow border border-gray-200 dark:border-gray-800 p-8">
                <div class="mb-6 text-center">
                    <h1 class="text-2xl font-bold text-gray-900 dark:text-white">"Harivara Admin"</h1>
                    <p class="mt-1 text-sm text-gray-500 dark:text-gray-400">
                        "Sign in to manage the platform."
                    </p>
                </div>
                <form on:submit=on_submit class="space-y-5">
                    <div>
                        <label class=Theme::LABEL for="email">"Email"</label>
                        <input
                            id="email"
                            type="email"
                            class=Theme::INPUT
                            autocomplete="email"
                            placeholder="you@harivara.app"
                            required
                            on:input=move |event| set_email.set(event_target_value(&event))
                        />
                    </div>
                    <div>
                        <label class=Theme::LABEL for="password">"Password"</label>
                        <input
                            id="password"
                            type="password"
                            class=Theme::INPUT
                            autocomplete="current-password"
                            required
                            on:input=move |event| set_password.set(event_target_value(&event))
                        />
                    </div>

                    <Show when=move || error.get().is_some()>
                        {move || {
                            error
                                .get()
                                .map(|err| view! { <Alert kind=AlertKind::Error message=err.to_string() /> })
                        }}
                    </Show>

                    <Button button_type="submit" disabled=login_action.pending()>
                        {move || if login_action.pending().get() { "Signing in..." } else { "Sign In" }}
                    </Button>
                </form>
            </div>
        </div>
    }
}
