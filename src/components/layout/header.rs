//! Top app bar: module switcher on the left, session controls on the right.
//! Switching modules cascades into the sidebar through the module context;
//! the header itself owns nothing but its dropdown flags.

use crate::features::auth::{client, state::use_auth};
use crate::features::modules::context::use_modules;
use leptos::{prelude::*, task::spawn_local};

#[component]
pub fn Header() -> impl IntoView {
    let auth = use_auth();
    let modules = use_modules();
    let (switcher_open, set_switcher_open) = signal(false);

    let greeting = move || auth.greeting.get().unwrap_or_else(|| "User".to_string());
    let avatar_initial = move || {
        greeting()
            .chars()
            .next()
            .map(|letter| letter.to_uppercase().to_string())
            .unwrap_or_default()
    };

    view! {
        <header class="relative z-30 bg-gradient-to-r from-indigo-400 to-purple-400 text-white shadow">
            <div class="flex items-center justify-between px-4 h-16">
                <div class="relative flex items-center gap-2">
                    <button
                        type="button"
                        class="p-2 rounded-lg hover:bg-white/10 transition-colors"
                        aria-haspopup="listbox"
                        aria-expanded=move || switcher_open.get().to_string()
                        on:click=move |_| set_switcher_open.update(|open| *open = !*open)
                    >
                        <span class="material-symbols-outlined align-middle">"menu"</span>
                    </button>
                    <button
                        type="button"
                        class="text-lg font-bold tracking-tight"
                        on:click=move |_| set_switcher_open.update(|open| *open = !*open)
                    >
                        {move || modules.selected.get().display_label}
                    </button>

                    <Show when=move || switcher_open.get()>
                        // Backdrop closes the switcher on outside click.
                        <div
                            class="fixed inset-0 z-30"
                            on:click=move |_| set_switcher_open.set(false)
                        ></div>
                        <div
                            class="absolute left-0 top-full mt-2 z-40 min-w-[14rem] bg-white dark:bg-gray-800 rounded-lg shadow-xl border border-gray-200 dark:border-gray-700 py-1"
                            role="listbox"
                        >
                            <For
                                each=move || modules.modules()
                                key=|module| module.key.clone()
                                children=move |module| {
                                    let key = module.key.clone();
                                    let select_key = module.key.clone();
                                    let is_selected = Signal::derive(move || {
                                        modules.selected.get().key == key
                                    });
                                    view! {
                                        <button
                                            type="button"
                                            role="option"
                                            class="w-full text-left px-4 py-2 text-sm text-gray-700 dark:text-gray-200 hover:bg-gray-50 dark:hover:bg-gray-700"
                                            class:font-bold=move || is_selected.get()
                                            class:text-indigo-600=move || is_selected.get()
                                            on:click=move |_| {
                                                modules.select(&select_key);
                                                set_switcher_open.set(false);
                                            }
                                        >
                                            {module.display_label.clone()}
                                        </button>
                                    }
                                }
                            />
                        </div>
                    </Show>
                </div>

                <div class="flex items-center gap-4">
                    <span class="hidden sm:block text-sm font-medium">
                        {move || format!("Hi, {}", greeting())}
                    </span>
                    <div class="w-9 h-9 rounded-full bg-white/20 flex items-center justify-center font-semibold">
                        {avatar_initial}
                    </div>
                    <button
                        type="button"
                        class="p-2 rounded-lg hover:bg-white/10 transition-colors"
                        title="Sign out"
                        on:click=move |_| {
                            spawn_local(async move {
                                let _ = client::logout().await;
                                auth.clear_session();
                            });
                        }
                    >
                        <span class="material-symbols-outlined align-middle">"logout"</span>
                    </button>
                </div>
            </div>
        </header>
    }
}
