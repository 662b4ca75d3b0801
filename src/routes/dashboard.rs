//! Landing page after sign-in. Greets the operator, reflects the selected
//! module, and links into the busiest screens.

use crate::app_lib::build_info;
use crate::features::auth::state::use_auth;
use crate::features::modules::context::use_modules;
use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = use_auth();
    let modules = use_modules();

    let greeting = move || auth.greeting.get().unwrap_or_else(|| "there".to_string());

    view! {
        <div class="space-y-6">
            <div class="space-y-1">
                <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">
                    {move || format!("Welcome back, {}", greeting())}
                </h1>
                <p class="text-sm text-gray-500 dark:text-gray-400">
                    {move || {
                        format!(
                            "You are working in the {} module.",
                            modules.selected.get().display_label,
                        )
                    }}
                </p>
            </div>

            <div class="grid grid-cols-1 gap-4 sm:grid-cols-2 lg:grid-cols-3">
                <DashboardCard
                    href=paths::CURRENCIES
                    icon="payments"
                    title="Currencies"
                    blurb="Domestic currency books and payment methods."
                />
                <DashboardCard
                    href=paths::TDS
                    icon="gavel"
                    title="TDS Settings"
                    blurb="Deduction sections, percentages, and caps."
                />
                <DashboardCard
                    href=paths::GST
                    icon="account_balance"
                    title="GST Settings"
                    blurb="Service-category GST rates."
                />
                <DashboardCard
                    href=paths::LOCATIONS
                    icon="location_on"
                    title="Locations"
                    blurb="Published and draft service locations."
                />
                <DashboardCard
                    href=paths::PROFESSIONALS
                    icon="self_improvement"
                    title="Professionals"
                    blurb="Puja professionals registered on the hub."
                />
                <DashboardCard
                    href=paths::REVIEWS
                    icon="reviews"
                    title="Puja Reviews"
                    blurb="Customer feedback on completed services."
                />
            </div>

            <p class="text-[10px] text-gray-400 font-mono uppercase tracking-tighter">
                {format!("build {}", build_info::git_commit_hash())}
            </p>
        </div>
    }
}

#[component]
fn DashboardCard(
    href: &'static str,
    icon: &'static str,
    title: &'static str,
    blurb: &'static str,
) -> impl IntoView {
    view! {
        <A
            href=href
            {..}
            class="block p-6 bg-white dark:bg-gray-800 rounded-lg border border-gray-200 dark:border-gray-700 hover:border-indigo-500 dark:hover:border-indigo-500 transition-colors shadow-sm"
        >
            <span class="material-symbols-outlined text-indigo-600 dark:text-indigo-400">
                {icon}
            </span>
            <h2 class="mt-4 text-lg font-medium text-gray-900 dark:text-white">{title}</h2>
            <p class="mt-1 text-xs text-gray-500 dark:text-gray-400">{blurb}</p>
        </A>
    }
}
