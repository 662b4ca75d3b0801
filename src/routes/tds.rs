//! TDS settings list and editor.

use crate::app_lib::AppError;
use crate::app_lib::theme::Theme;
use crate::components::{Alert, AlertKind, Button, ConfirmDialog, Spinner};
use crate::features::tds::client;
use crate::features::tds::types::TdsSetting;
use crate::routes::{EditorMode, paths};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_params_map};

#[component]
pub fn TdsListPage() -> impl IntoView {
    let settings = LocalResource::new(move || async move { client::list_tds_settings().await });

    let delete_target = RwSignal::new(None::<String>);
    let (delete_error, set_delete_error) = signal(None::<AppError>);
    let delete_action = Action::new_local(move |id: &String| {
        let id = id.clone();
        async move { client::delete_tds_setting(&id).await }
    });
    Effect::new(move |_| {
        if let Some(result) = delete_action.value().get() {
            delete_target.set(None);
            match result {
                Ok(()) => settings.refetch(),
                Err(err) => set_delete_error.set(Some(err)),
            }
        }
    });

    view! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <div class="space-y-1">
                    <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">"TDS"</h1>
                    <p class="text-sm text-gray-500 dark:text-gray-400">
                        "Deduction sections applied to professional payouts."
                    </p>
                </div>
                <A href=paths::add(paths::TDS) {..} class="inline-flex">
                    <Button>
                        <div class="flex items-center gap-2">
                            <span class="material-symbols-outlined text-base">"add"</span>
                            "New TDS Setting"
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
                            <th scope="col" class=Theme::TH>"TDS Type"</th>
                            <th scope="col" class=Theme::TH>"Percentage"</th>
                            <th scope="col" class=Theme::TH>"Max Cap"</th>
                            <th scope="col" class=Theme::TH>"Description"</th>
                            <th scope="col" class=Theme::TH>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-gray-200 dark:divide-gray-700">
                        <Suspense fallback=move || view! {
                            <tr>
                                <td colspan="5" class="px-6 py-12 text-center"><Spinner /></td>
                            </tr>
                        }>
                            {move || match settings.get() {
                                Some(Ok(list)) if list.is_empty() => view! {
                                    <tr>
                                        <td colspan="5" class="px-6 py-12 text-center text-sm text-gray-500 dark:text-gray-400">
                                            "No TDS settings found."
                                        </td>
                                    </tr>
                                }.into_any(),
                                Some(Ok(list)) => view! {
                                    <For
                                        each=move || list.clone()
                                        key=|setting| setting.id.clone().unwrap_or_default()
                                        children=move |setting| {
                                            let id = setting.id.clone().unwrap_or_default();
                                            let delete_id = id.clone();
                                            view! {
                                                <tr class="hover:bg-gray-50 dark:hover:bg-gray-700/50 transition-colors">
                                                    <td class="px-6 py-4 whitespace-nowrap text-sm font-medium text-gray-900 dark:text-white">
                                                        {setting.tds_type.clone()}
                                                    </td>
                                                    <td class=Theme::TD>{format!("{}%", setting.percentage)}</td>
                                                    <td class=Theme::TD>{setting.max_cap_price.to_string()}</td>
                                                    <td class="px-6 py-4 text-sm text-gray-600 dark:text-gray-300 max-w-xs truncate">
                                                        {setting.description.clone()}
                                                    </td>
                                                    <td class="px-6 py-4 whitespace-nowrap text-sm space-x-3">
                                                        <A href=paths::edit(paths::TDS, &id) {..} class=Theme::ROW_ACTION title="Edit">
                                                            <span class="material-symbols-outlined text-base">"edit"</span>
                                                        </A>
                                                        <A href=paths::view(paths::TDS, &id) {..} class=Theme::ROW_ACTION title="View">
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
                title="Delete TDS setting"
                message="Are you sure you want to delete this TDS setting?"
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
pub fn TdsEditorPage(mode: EditorMode) -> impl IntoView {
    let params = use_params_map();
    let navigate = use_navigate();

    let (form, set_form) = signal(TdsSetting::reference());
    let (error, set_error) = signal(None::<AppError>);
    let read_only = mode.is_view();

    if !mode.is_add() {
        let record = LocalResource::new(move || {
            let id = params.with(|map| map.get("id").unwrap_or_default());
            async move { client::get_tds_setting(&id).await }
        });
        Effect::new(move |_| {
            if let Some(result) = record.get() {
                match result {
                    Ok(setting) => set_form.set(setting),
                    Err(err) => set_error.set(Some(err)),
                }
            }
        });
    }

    let save_action = Action::new_local(move |setting: &TdsSetting| {
        let setting = setting.clone();
        async move {
            if mode.is_add() {
                client::create_tds_setting(&setting).await
            } else {
                client::update_tds_setting(&setting).await
            }
        }
    });

    Effect::new(move |_| {
        if let Some(result) = save_action.value().get() {
            match result {
                Ok(()) => navigate(paths::TDS, Default::default()),
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

        let setting = form.get_untracked();
        if setting.tds_type.trim().is_empty() {
            set_error.set(Some(AppError::Config("TDS type is required.".to_string())));
            return;
        }
        if !(0.0..=100.0).contains(&setting.percentage) {
            set_error.set(Some(AppError::Config(
                "Percentage must be between 0 and 100.".to_string(),
            )));
            return;
        }
        save_action.dispatch(setting);
    };

    view! {
        <div class="max-w-xl mx-auto space-y-6">
            <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">
                {format!("{} TDS Setting", mode.verb())}
            </h1>

            <form
                on:submit=on_submit
                class="bg-white dark:bg-gray-800 rounded-lg border border-gray-200 dark:border-gray-700 shadow-sm p-6 space-y-5"
            >
                <div>
                    <label class=Theme::LABEL for="tds-type">"TDS Type"</label>
                    <input
                        id="tds-type"
                        type="text"
                        class=Theme::INPUT
                        placeholder="194J"
                        disabled=read_only
                        prop:value=move || form.get().tds_type
                        on:input=move |event| {
                            set_form.update(|setting| setting.tds_type = event_target_value(&event))
                        }
                    />
                </div>
                <div class="grid grid-cols-1 sm:grid-cols-2 gap-5">
                    <div>
                        <label class=Theme::LABEL for="tds-percentage">"Percentage"</label>
                        <input
                            id="tds-percentage"
                            type="number"
                            step="any"
                            class=Theme::INPUT
                            disabled=read_only
                            prop:value=move || form.get().percentage.to_string()
                            on:input=move |event| {
                                let value = event_target_value(&event).parse().unwrap_or(0.0);
                                set_form.update(|setting| setting.percentage = value)
                            }
                        />
                    </div>
                    <div>
                        <label class=Theme::LABEL for="tds-cap">"Max Cap Price"</label>
                        <input
                            id="tds-cap"
                            type="number"
                            step="any"
                            class=Theme::INPUT
                            disabled=read_only
                            prop:value=move || form.get().max_cap_price.to_string()
                            on:input=move |event| {
                                let value = event_target_value(&event).parse().unwrap_or(0.0);
                                set_form.update(|setting| setting.max_cap_price = value)
                            }
                        />
                    </div>
                </div>
                <div>
                    <label class=Theme::LABEL for="tds-description">"Description"</label>
                    <textarea
                        id="tds-description"
                        class=Theme::INPUT
                        rows="3"
                        disabled=read_only
                        prop:value=move || form.get().description
                        on:input=move |event| {
                            set_form.update(|setting| setting.description = event_target_value(&event))
                        }
                    ></textarea>
                </div>

                <label class="flex items-center gap-2 text-sm text-gray-700 dark:text-gray-300">
                    <input
                        type="checkbox"
                        class="rounded border-gray-300"
                        disabled=read_only
                        prop:checked=move || form.get().status
                        on:change=move |event| {
                            set_form.update(|setting| setting.status = event_target_checked(&event))
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
                        href=paths::TDS
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
