//! International country list and editor.

use crate::app_lib::AppError;
use crate::app_lib::theme::Theme;
use crate::components::{Alert, AlertKind, Button, ConfirmDialog, Spinner};
use crate::features::countries::client;
use crate::features::countries::types::Country;
use crate::routes::{EditorMode, paths};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_params_map};

#[component]
pub fn CountriesListPage() -> impl IntoView {
    let countries = LocalResource::new(move || async move { client::list_countries().await });

    let delete_target = RwSignal::new(None::<String>);
    let (delete_error, set_delete_error) = signal(None::<AppError>);
    let delete_action = Action::new_local(move |id: &String| {
        let id = id.clone();
        async move { client::delete_country(&id).await }
    });
    Effect::new(move |_| {
        if let Some(result) = delete_action.value().get() {
            delete_target.set(None);
            match result {
                Ok(()) => countries.refetch(),
                Err(err) => set_delete_error.set(Some(err)),
            }
        }
    });

    view! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <div class="space-y-1">
                    <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">
                        "Country - Intl"
                    </h1>
                    <p class="text-sm text-gray-500 dark:text-gray-400">
                        "Countries available for international payouts."
                    </p>
                </div>
                <A href=paths::add(paths::COUNTRIES) {..} class="inline-flex">
                    <Button>
                        <div class="flex items-center gap-2">
                            <span class="material-symbols-outlined text-base">"add"</span>
                            "New Country"
                        </div>
                    </Button>
                </A>
            </div>

            <Show when=move || delete_error.get().is_some()>
                {move || {
                    delete_error
                        .get()
                        .map(|err| view! { <Alert kind=AlertKind::Error message=err.to_string() /> })
                }}
            </Show>

            <div class="overflow-hidden bg-white dark:bg-gray-800 shadow-sm border border-gray-200 dark:border-gray-700 rounded-lg">
                <table class="min-w-full divide-y divide-gray-200 dark:divide-gray-700">
                    <thead class="bg-gray-50 dark:bg-gray-900/50">
                        <tr>
                            <th scope="col" class=Theme::TH>"Name"</th>
                            <th scope="col" class=Theme::TH>"ISO2"</th>
                            <th scope="col" class=Theme::TH>"Currency"</th>
                            <th scope="col" class=Theme::TH>"Region"</th>
                            <th scope="col" class=Theme::TH>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-gray-200 dark:divide-gray-700">
                        <Suspense fallback=move || view! {
                            <tr>
                                <td colspan="5" class="px-6 py-12 text-center"><Spinner /></td>
                            </tr>
                        }>
                            {move || match countries.get() {
                                Some(Ok(list)) if list.is_empty() => view! {
                                    <tr>
                                        <td colspan="5" class="px-6 py-12 text-center text-sm text-gray-500 dark:text-gray-400">
                                            "No countries found."
                                        </td>
                                    </tr>
                                }.into_any(),
                                Some(Ok(list)) => view! {
                                    <For
                                        each=move || list.clone()
                                        key=|country| country.id.clone().unwrap_or_default()
                                        children=move |country| {
                                            let id = country.id.clone().unwrap_or_default();
                                            let delete_id = id.clone();
                                            view! {
                                                <tr class="hover:bg-gray-50 dark:hover:bg-gray-700/50 transition-colors">
                                                    <td class="px-6 py-4 whitespace-nowrap text-sm font-medium text-gray-900 dark:text-white">
                                                        {format!("{} {}", country.emoji, country.name)}
                                                    </td>
                                                    <td class=Theme::TD>{country.iso2.clone()}</td>
                                                    <td class=Theme::TD>
                                                        {format!("{} ({})", country.currency_name, country.currency_symbol)}
                                                    </td>
                                                    <td class=Theme::TD>{country.region.clone()}</td>
                                                    <td class="px-6 py-4 whitespace-nowrap text-sm space-x-3">
                                                        <A href=paths::edit(paths::COUNTRIES, &id) {..} class=Theme::ROW_ACTION title="Edit">
                                                            <span class="material-symbols-outlined text-base">"edit"</span>
                                                        </A>
                                                        <A href=paths::view(paths::COUNTRIES, &id) {..} class=Theme::ROW_ACTION title="View">
                                                            <span class="material-symbols-outlined text-base">"visibility"</span>
                                                        </A>
                                                        <button
                                                            type="button"
                                                            class=Theme::ROW_ACTION
                                                            title="Delete"
                                                            on:click=move |_| delete_target.set(Some(delete_id.clone()))
                                                        >
                                                            <span class="material-symbols-outlined text-base">"delete"</span>
                                                        </button>
                                                    </td>
                                                </tr>
                                            }
                                        }
                                    />
                                }.into_any(),
                                Some(Err(err)) => view! {
                                    <tr>
                                        <td colspan="5" class="px-6 py-4">
                                            <Alert kind=AlertKind::Error message=err.to_string() />
                                        </td>
                                    </tr>
                                }.into_any(),
                                None => view! {
                                    <tr>
                                        <td colspan="5" class="px-6 py-12 text-center"><Spinner /></td>
                                    </tr>
                                }.into_any(),
                            }}
                        </Suspense>
                    </tbody>
                </table>
            </div>

            <ConfirmDialog
                open=Signal::derive(move || delete_target.get().is_some())
                title="Delete country"
                message="Are you sure you want to delete this country?"
                pending=delete_action.pending()
                on_confirm=Callback::new(move |_| {
                    if let Some(id) = delete_target.get_untracked() {
                        delete_action.dispatch(id);
                    }
                })
                on_cancel=Callback::new(move |_| delete_target.set(None))
            />
        </div>
    }
}

#[component]
pub fn CountryEditorPage(mode: EditorMode) -> impl IntoView {
    let params = use_params_map();
    let navigate = use_navigate();

    let (form, set_form) = signal(Country::reference());
    let (error, set_error) = signal(None::<AppError>);
    let read_only = mode.is_view();

    if !mode.is_add() {
        let record = LocalResource::new(move || {
            let id = params.with(|map| map.get("id").unwrap_or_default());
            async move { client::get_country(&id).await }
        });
        Effect::new(move |_| {
            if let Some(result) = record.get() {
                match result {
                    Ok(country) => set_form.set(country),
                    Err(err) => set_error.set(Some(err)),
                }
            }
        });
    }

    let save_action = Action::new_local(move |country: &Country| {
        let country = country.clone();
        async move {
            if mode.is_add() {
                client::create_country(&country).await
            } else {
                client::update_country(&country).await
            }
        }
    });

    Effect::new(move |_| {
        if let Some(result) = save_action.value().get() {
            match result {
                Ok(()) => navigate(paths::COUNTRIES, Default::default()),
                Err(err) => set_error.set(Some(err)),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        if read_only {
            return;
        }
        set_error.set(None);

        let country = form.get_untracked();
        if country.name.trim().is_empty() || country.iso2.trim().is_empty() {
            set_error.set(Some(AppError::Config(
                "Name and ISO2 code are required.".to_string(),
            )));
            return;
        }
        save_action.dispatch(country);
    };

    view! {
        <div class="max-w-2xl mx-auto space-y-6">
            <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">
                {format!("{} Country", mode.verb())}
            </h1>

            <form
                on:submit=on_submit
                class="bg-white dark:bg-gray-800 rounded-lg border border-gray-200 dark:border-gray-700 shadow-sm p-6 space-y-5"
            >
                <div class="grid grid-cols-1 sm:grid-cols-2 gap-5">
                    <div>
                        <label class=Theme::LABEL for="country-name">"Name"</label>
                        <input
                            id="country-name"
                            type="text"
                            class=Theme::INPUT
                            disabled=read_only
                            prop:value=move || form.get().name
                            on:input=move |event| {
                                set_form.update(|country| country.name = event_target_value(&event))
                            }
                        />
                    </div>
                    <div>
                        <label class=Theme::LABEL for="country-emoji">"Flag Emoji"</label>
                        <input
                            id="country-emoji"
                            type="text"
                            class=Theme::INPUT
                            disabled=read_only
                            prop:value=move || form.get().emoji
                            on:input=move |event| {
                                set_form.update(|country| country.emoji = event_target_value(&event))
                            }
                        />
                    </div>
                    <div>
                        <label class=Theme::LABEL for="country-iso2">"ISO2"</label>
                        <input
                            id="country-iso2"
                            type="text"
                            class=Theme::INPUT
                            disabled=read_only
                            prop:value=move || form.get().iso2
                            on:input=move |event| {
                                set_form.update(|country| country.iso2 = event_target_value(&event))
                            }
                        />
                    </div>
                    <div>
                        <label class=Theme::LABEL for="country-iso3">"ISO3"</label>
                        <input
                            id="country-iso3"
                            type="text"
                            class=Theme::INPUT
                            disabled=read_only
                            prop:value=move || form.get().iso3
                            on:input=move |event| {
                                set_form.update(|country| country.iso3 = event_target_value(&event))
                            }
                        />
                    </div>
                    <div>
                        <label class=Theme::LABEL for="country-numeric">"Numeric Code"</label>
                        <input
                            id="country-numeric"
                            type="text"
                            class=Theme::INPUT
                            disabled=read_only
                            prop:value=move || form.get().numeric_code
                            on:input=move |event| {
                                set_form.update(|country| country.numeric_code = event_target_value(&event))
                            }
                        />
                    </div>
                    <div>
                        <label class=Theme::LABEL for="country-phone">"Phone Code"</label>
                        <input
                            id="country-phone"
                            type="text"
                            class=Theme::INPUT
                            disabled=read_only
                            prop:value=move || form.get().phone_code
                            on:input=move |event| {
                                set_form.update(|country| country.phone_code = event_target_value(&event))
                            }
                        />
                    </div>
                    <div>
                        <label class=Theme::LABEL for="country-region">"Region"</label>
                        <input
                            id="country-region"
                            type="text"
                            class=Theme::INPUT
                            disabled=read_only
                            prop:value=move || form.get().region
                            on:input=move |event| {
                                set_form.update(|country| country.region = event_target_value(&event))
                            }
                        />
                    </div>
                    <div>
                        <label class=Theme::LABEL for="country-currency">"Currency Name"</label>
                        <input
                            id="country-currency"
                            type="text"
                            class=Theme::INPUT
                            disabled=read_only
                            prop:value=move || form.get().currency_name
                            on:input=move |event| {
                                set_form.update(|country| country.currency_name = event_target_value(&event))
                            }
                        />
                    </div>
                    <div>
                        <label class=Theme::LABEL for="country-currency-symbol">"Currency Symbol"</label>
                        <input
                            id="country-currency-symbol"
                            type="text"
                            class=Theme::INPUT
                            disabled=read_only
                            prop:value=move || form.get().currency_symbol
                            on:input=move |event| {
                                set_form.update(|country| country.currency_symbol = event_target_value(&event))
                            }
                        />
                    </div>
                    <div>
                        <label class=Theme::LABEL for="country-assigned">"Assigned Currency"</label>
                        <input
                            id="country-assigned"
                            type="text"
                            class=Theme::INPUT
                            disabled=read_only
                            prop:value=move || form.get().assigned_currency
                            on:input=move |event| {
                                set_form.update(|country| country.assigned_currency = event_target_value(&event))
                            }
                        />
                    </div>
                    <div>
                        <label class=Theme::LABEL for="country-debit">"Non-member Debit %"</label>
                        <input
                            id="country-debit"
                            type="number"
                            step="any"
                            class=Theme::INPUT
                            disabled=read_only
                            prop:value=move || form.get().non_member_debit_percentage.to_string()
                            on:input=move |event| {
                                let value = event_target_value(&event).parse().unwrap_or(0.0);
                                set_form.update(|country| country.non_member_debit_percentage = value)
                            }
                        />
                    </div>
                </div>

                <label class="flex items-center gap-2 text-sm text-gray-700 dark:text-gray-300">
                    <input
                        type="checkbox"
                        class="rounded border-gray-300"
                        disabled=read_only
                        prop:checked=move || form.get().status
                        on:change=move |event| {
                            set_form.update(|country| country.status = event_target_checked(&event))
                        }
                    />
                    "Active"
                </label>

                <Show when=move || error.get().is_some()>
                    {move || {
                        error
                            .get()
                            .map(|err| view! { <Alert kind=AlertKind::Error message=err.to_string() /> })
                    }}
                </Show>

                <div class="pt-2 flex gap-3 justify-end">
                    <A
                        href=paths::COUNTRIES
                        {..}
                        class="px-5 py-2.5 text-sm font-medium text-gray-700 bg-white border border-gray-300 rounded-lg hover:bg-gray-50 dark:bg-gray-800 dark:text-gray-300 dark:border-gray-600 dark:hover:bg-gray-700"
                    >
                        "Back"
                    </A>
                    <Show when=move || !read_only>
                        <Button button_type="submit" disabled=save_action.pending()>
                            {move || if save_action.pending().get() { "Saving..." } else { "Save" }}
                        </Button>
                    </Show>
                </div>
            </form>
        </div>
    }
}
