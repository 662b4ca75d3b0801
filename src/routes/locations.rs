//! Service location list (paginated) and add form.

use crate::app_lib::AppError;
use crate::app_lib::theme::Theme;
use crate::components::{Alert, AlertKind, Button, Spinner};
use crate::features::locations::client;
use crate::features::locations::types::Location;
use crate::routes::paths;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::components::A;

const PAGE_SIZE: u32 = 10;

#[component]
pub fn LocationsListPage() -> impl IntoView {
    let (page, set_page) = signal(1u32);
    let locations = LocalResource::new(move || {
        let page = page.get();
        async move { client::list_locations(page, PAGE_SIZE).await }
    });

    view! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <div class="space-y-1">
                    <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">"Locations"</h1>
                    <p class="text-sm text-gray-500 dark:text-gray-400">
                        "Published and draft service locations."
                    </p>
                </div>
                <A href=paths::add(paths::LOCATIONS) {..} class="inline-flex">
                    <Button>
                        <div class="flex items-center gap-2">
                            <span class="material-symbols-outlined text-base">"add"</span>
                            "New Location"
                        </div>
                    </Button>
                </A>
            </div>

            <div class="overflow-hidden bg-white dark:bg-gray-800 shadow-sm border border-gray-200 dark:border-gray-700 rounded-lg">
                <table class="min-w-full divide-y divide-gray-200 dark:divide-gray-700">
                    <thead class="bg-gray-50 dark:bg-gray-900/50">
                        <tr>
                            <th scope="col" class=Theme::TH>"Display Name"</th>
                            <th scope="col" class=Theme::TH>"City"</th>
                            <th scope="col" class=Theme::TH>"Type"</th>
                            <th scope="col" class=Theme::TH>"Publish Status"</th>
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-gray-200 dark:divide-gray-700">
                        <Suspense fallback=move || view! {
                            <tr>
                                <td colspan="4" class="px-6 py-12 text-center"><Spinner /></td>
                            </tr>
                        }>
                            {move || match locations.get() {
                                Some(Ok(result)) if result.items.is_empty() => view! {
                                    <tr>
                                        <td colspan="4" class="px-6 py-12 text-center text-sm text-gray-500 dark:text-gray-400">
                                            "No locations found."
                                        </td>
                                    </tr>
                                }.into_any(),
                                Some(Ok(result)) => view! {
                                    <For
                                        each=move || result.items.clone()
                                        key=|location| location.id.clone().unwrap_or_default()
                                        children=move |location| {
                                            view! {
                                                <tr class="hover:bg-gray-50 dark:hover:bg-gray-700/50 transition-colors">
                                                    <td class="px-6 py-4 whitespace-nowrap text-sm font-medium text-gray-900 dark:text-white">
                                                        {location.display_name.clone()}
                                                    </td>
                                                    <td class=Theme::TD>
                                                        {location.city.clone().unwrap_or_else(|| "-".to_string())}
                                                    </td>
                                                    <td class=Theme::TD>
                                                        {location.location_type.clone().unwrap_or_else(|| "-".to_string())}
                                                    </td>
                                                    <td class=Theme::TD>{location.publish_status.clone()}</td>
                                                </tr>
                                            }
                                        }
                                    />
                                }.into_any(),
                                Some(Err(err)) => view! {
                                    <tr>
                                        <td colspan="4" class="px-6 py-4">
                                            <Alert kind=AlertKind::Error message=err.to_string() />
                                        </td>
                                    </tr>
                                }.into_any(),
                                None => view! {
                                    <tr>
                                        <td colspan="4" class="px-6 py-12 text-center"><Spinner /></td>
                                    </tr>
                                }.into_any(),
                            }}
                        </Suspense>
                    </tbody>
                </table>
            </div>

            <Pager
                page=page
                total=Signal::derive(move || {
                    locations
                        .get()
                        .and_then(|result| result.ok())
                        .map(|result| result.total)
                        .unwrap_or(0)
                })
                page_size=PAGE_SIZE
                on_change=Callback::new(move |next| set_page.set(next))
            />
        </div>
    }
}

/// Prev/next pager driven by the server-reported total.
#[component]
pub fn Pager(
    page: ReadSignal<u32>,
    #[prop(into)] total: Signal<u64>,
    page_size: u32,
    on_change: Callback<u32>,
) -> impl IntoView {
    let page_count = move || (total.get().max(1)).div_ceil(u64::from(page_size)).max(1) as u32;

    view! {
        <div class="flex items-center justify-end gap-3 text-sm text-gray-600 dark:text-gray-300">
            <button
                type="button"
                class="px-3 py-1.5 rounded-lg border border-gray-300 dark:border-gray-600 disabled:opacity-50 disabled:cursor-not-allowed hover:bg-gray-50 dark:hover:bg-gray-700"
                disabled=move || page.get() <= 1
                on:click=move |_| on_change.run(page.get().saturating_sub(1).max(1))
            >
                "Previous"
            </button>
            <span>{move || format!("Page {} of {}", page.get(), page_count())}</span>
            <button
                type="button"
                class="px-3 py-1.5 rounded-lg border border-gray-300 dark:border-gray-600 disabled:opacity-50 disabled:cursor-not-allowed hover:bg-gray-50 dark:hover:bg-gray-700"
                disabled=move || page.get() >= page_count()
                on:click=move |_| on_change.run((page.get() + 1).min(page_count()))
            >
                "Next"
            </button>
        </div>
    }
}

#[component]
pub fn LocationAddPage() -> impl IntoView {
    let (form, set_form) = signal(Location::reference());
    let (error, set_error) = signal(None::<AppError>);
    let (saved, set_saved) = signal(false);

    let save_action = Action::new_local(move |location: &Location| {
        let location = location.clone();
        async move { client::create_location(&location).await }
    });

    Effect::new(move |_| {
        if let Some(result) = save_action.value().get() {
            match result {
                Ok(()) => {
                    set_form.set(Location::reference());
                    set_saved.set(true);
                }
                Err(err) => set_error.set(Some(err)),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);
        set_saved.set(false);

        let location = form.get_untracked();
        if location.location_name.trim().is_empty() || location.display_name.trim().is_empty() {
            set_error.set(Some(AppError::Config(
                "Location name and display name are required.".to_string(),
            )));
            return;
        }
        save_action.dispatch(location);
    };

    view! {
        <div class="max-w-xl mx-auto space-y-6">
            <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">"Add Location"</h1>

            <Alert
                kind=AlertKind::Info
                message="New locations start as drafts and go live once published from the catalog."
                    .to_string()
            />

            <form
                on:submit=on_submit
                class="bg-white dark:bg-gray-800 rounded-lg border border-gray-200 dark:border-gray-700 shadow-sm p-6 space-y-5"
            >
                <div>
                    <label class=Theme::LABEL for="location-name">"Location Name"</label>
                    <input
                        id="location-name"
                        type="text"
                        class=Theme::INPUT
                        placeholder="kashi-ghat"
                        prop:value=move || form.get().location_name
                        on:input=move |event| {
                            set_form.update(|location| location.location_name = event_target_value(&event))
                        }
                    />
                </div>
                <div>
                    <label class=Theme::LABEL for="location-display-name">"Display Name"</label>
                    <input
                        id="location-display-name"
                        type="text"
                        class=Theme::INPUT
                        prop:value=move || form.get().display_name
                        on:input=move |event| {
                            set_form.update(|location| location.display_name = event_target_value(&event))
                        }
                    />
                </div>
                <div class="grid grid-cols-1 sm:grid-cols-2 gap-5">
                    <div>
                        <label class=Theme::LABEL for="location-city">"City"</label>
                        <input
                            id="location-city"
                            type="text"
                            class=Theme::INPUT
                            prop:value=move || form.get().city.unwrap_or_default()
                            on:input=move |event| {
                                let value = event_target_value(&event);
                                set_form.update(|location| {
                                    location.city = if value.trim().is_empty() { None } else { Some(value) };
                                })
                            }
                        />
                    </div>
                    <div>
                        <label class=Theme::LABEL for="location-type">"Type"</label>
                        <input
                            id="location-type"
                            type="text"
                            class=Theme::INPUT
                            placeholder="temple"
                            prop:value=move || form.get().location_type.unwrap_or_default()
                            on:input=move |event| {
                                let value = event_target_value(&event);
                                set_form.update(|location| {
                                    location.location_type = if value.trim().is_empty() { None } else { Some(value) };
                                })
                            }
                        />
                    </div>
                </div>

                <label class="flex items-center gap-2 text-sm text-gray-700 dark:text-gray-300">
                    <input
                        type="checkbox"
                        class="rounded border-gray-300"
                        prop:checked=move || form.get().status
                        on:change=move |event| {
                            set_form.update(|location| location.status = event_target_checked(&event))
                        }
                    />
                    "Active"
                </label>

                <Show when=move || saved.get()>
                    <Alert kind=AlertKind::Success message="Location added successfully.".to_string() />
                </Show>
                <Show when=move || error.get().is_some()>
                    {move || {
                        error
                            .get()
                            .map(|err| view! { <Alert kind=AlertKind::Error message=err.to_string() /> })
                    }}
                </Show>

                <div class="pt-2 flex gap-3 justify-end">
                    <A
                        href=paths::LOCATIONS
                        {..}
                        class="px-5 py-2.5 text-sm font-medium text-gray-700 bg-white border border-gray-300 rounded-lg hover:bg-gray-50 dark:bg-gray-800 dark:text-gray-300 dark:border-gray-600 dark:hover:bg-gray-700"
                    >
                        "Back"
                    </A>
                    <Button button_type="submit" disabled=save_action.pending()>
                        {move || if save_action.pending().get() { "Saving..." } else { "Save" }}
                    </Button>
                </div>
            </form>
        </div>
    }
}
