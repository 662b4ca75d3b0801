use crate::features::auth::state::use_auth;
use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

/// Redirects signed-out visitors to the login page. UX-only gate; the API
/// enforces real access control.
#[component]
pub fn RequireAuth(children: Children) -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();

    Effect::new(move |_| {
        if !auth.is_authenticated.get() {
            navigate(paths::LOGIN, Default::default());
        }
    });

    view! { {children()} }
}
