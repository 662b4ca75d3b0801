//! Layout wrapper for every authenticated route. Routes render into the
//! outlet; navigation chrome lives here so page code stays focused on
//! content. Navigation is client-side only; the API must enforce real access
//! control.

use crate::components::layout::{header::Header, sidebar::Sidebar};
use crate::features::auth::RequireAuth;
use leptos::prelude::*;
use leptos_router::components::Outlet;

#[component]
pub fn AppShell() -> impl IntoView {
    view! {
        <RequireAuth>
            <div class="min-h-screen flex flex-col bg-gray-50 dark:bg-gray-950">
                <Header />
                <div class="flex flex-1 overflow-hidden">
                    <Sidebar />
                    <main class="flex-1 overflow-y-auto">
                        <div class="container mx-auto p-6">
                            <Outlet />
                        </div>
                    </main>
                </div>
            </div>
        </RequireAuth>
    }
}
