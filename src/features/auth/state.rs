//! Auth session state and context. The provider hydrates the session once on
//! mount from the cookie-backed session endpoint; guards and the shell read
//! the derived signals instead of touching the raw session. Only
//! non-sensitive metadata is kept in memory.

use crate::features::auth::{client, types::UserSession};
use leptos::{prelude::*, task::spawn_local};

#[derive(Clone, Copy)]
/// Auth session context shared through Leptos.
pub struct AuthContext {
    session: RwSignal<Option<UserSession>>,
    pub is_authenticated: Signal<bool>,
    /// Name to greet the operator with, while a session is live.
    pub greeting: Signal<Option<String>>,
}

impl AuthContext {
    fn new(session: RwSignal<Option<UserSession>>) -> Self {
        let is_authenticated = Signal::derive(move || session.get().is_some());
        let greeting = Signal::derive(move || {
            session
                .get()
                .map(|session| session.greeting_name().to_string())
        });
        Self {
            session,
            is_authenticated,
            greeting,
        }
    }

    /// Updates the in-memory session after login.
    pub fn set_session(&self, session: UserSession) {
        self.session.set(Some(session));
    }

    /// Clears the in-memory session, typically on logout.
    pub fn clear_session(&self) {
        self.session.set(None);
    }
}

/// Provides auth context and hydrates the session once on mount.
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let session = RwSignal::new(None);
    let auth = AuthContext::new(session);
    provide_context(auth);

    spawn_local(async move {
        if let Ok(Some(session)) = client::fetch_session().await {
            auth.set_session(session);
        }
    });

    view! { {children()} }
}

/// Returns the current auth context or a fallback empty context.
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| AuthContext::new(RwSignal::new(None)))
}
