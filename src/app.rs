use crate::features::auth::state::AuthProvider;
use crate::features::modules::context::ModuleProvider;
use crate::features::nav::provider::NavProvider;
use crate::routes::AppRoutes;
use leptos::prelude::*;
use leptos_router::components::Router;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <AuthProvider>
            <ModuleProvider>
                <NavProvider>
                    <Router>
                        <AppRoutes />
                    </Router>
                </NavProvider>
            </ModuleProvider>
        </AuthProvider>
    }
}
