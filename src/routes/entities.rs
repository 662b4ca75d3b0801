//! Billing entity list and editor. The editor offers TDS types fetched from
//! the TDS settings endpoint, mirroring how payouts are configured.

use crate::app_lib::AppError;
use crate::app_lib::theme::Theme;
use crate::components::{Alert, AlertKind, Button, ConfirmDialog, Spinner};
use crate::features::entities::client;
use crate::features::entities::types::Entity;
use crate::features::tds::client as tds_client;
use crate::routes::{EditorMode, paths};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_params_map};

#[component]
pub fn EntitiesListPage() -> impl IntoView {
    let entities = LocalResource::new(move || async move { client::list_entities().await });

    let delete_target = RwSignal::new(None::<String>);
    let (delete_error, set_delete_error) = signal(None::<AppError>);
    let delete_action = Action::new_local(move |id: &String| {
        let id = id.clone();
        async move { client::delete_entity(&id).await }
    });
    Effect::new(move |_| {
        if let Some(result) = delete_action.value().get() {
            delete_target.set(None);
            match result {
                Ok(()) => entities.refetch(),
                Err(err) => set_delete_error.set(Some(err)),
            }
        }
    });

    view! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <div class="space-y-1">
                    <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">"Entity"</h1>
                    <p class="text-sm text-gray-500 dark:text-gray-400">
                        "Billing entity types and their TDS treatment."
                    </p>
                </div>
                <A href=paths::add(paths::ENTITIES) {..} class="inline-flex">
                    <Button>
                        <div class="flex items-center gap-2">
                            <span class="material-symbols-outlined text-base">"add"</span>
                            "New Entity"
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
                            <th scope="col" class=Theme::TH>"Display Name"</th>
                            <th scope="col" class=Theme::TH>"Type"</th>
                            <th scope="col" class=Theme::TH>"TDS Type"</th>
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
                            {move || match entities.get() {
                                Some(Ok(list)) if list.is_empty() => view! {
                                    <tr>
                                        <td colspan="5" class="px-6 py-12 text-center text-sm text-gray-500 dark:text-gray-400">
                                            "No entities found."
                                        </td>
                                    </tr>
                                }.into_any(),
                                Some(Ok(list)) => view! {
                                    <For
                                        each=move || list.clone()
                                        key=|entity| entity.id.clone().unwrap_or_default()
                                        children=move |entity| {
                                            let id = entity.id.clone().unwrap_or_default();
                                            let delete_id = id.clone();
                                            view! {
                                                <tr class="hover:bg-gray-50 dark:hover:bg-gray-700/50 transition-colors">
                                                    <td class="px-6 py-4 whitespace-nowrap text-sm font-medium text-gray-900 dark:text-white">
                                                        {entity.display_name.clone()}
                                                    </td>
                                                    <td class=Theme::TD>{entity.entity_type.clone()}</td>
                                                    <td class=Theme::TD>{entity.tds_type.clone()}</td>
                                                    <td class="px-6 py-4 text-sm text-gray-600 dark:text-gray-300 max-w-xs truncate">
                                                        {entity.description.clone()}
                                                    </td>
                                                    <td class="px-6 py-4 whitespace-nowrap text-sm space-x-3">
                                                        <A href=paths::edit(paths::ENTITIES, &id) {..} class=Theme::ROW_ACTION title="Edit">
                                                            <span class="material-symbols-outlined text-base">"edit"</span>
                                                        </A>
                                                        <A href=paths::view(paths::ENTITIES, &id) {..} class=Theme::ROW_ACTION title="View">
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
                title="Delete entity"
                message="Are you sure you want to delete this entity?"
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
pub fn EntityEditorPage(mode: EditorMode) -> impl IntoView {
    let params = use_params_map();
    let navigate = use_navigate();

    let (form, set_form) = signal(Entity::reference());
    let (error, set_error) = signal(None::<AppError>);
    let read_only = mode.is_view();

    // TDS types offered as options for the payout treatment.
    let tds_options = LocalResource::new(move || async move { tds_client::list_tds_settings().await });

    if !mode.is_add() {
        let record = LocalResource::new(move || {
            let id = params.with(|map| map.get("id").unwrap_or_default());
            async move { client::get_entity(&id).await }
        });
        Effect::new(move |_| {
            if let Some(result) = record.get() {
                match result {
                    Ok(entity) => set_form.set(entity),
                    Err(err) => set_error.set(Some(err)),
                }
            }
        });
    }

    let save_action = Action::new_local(move |entity: &Entity| {
        let entity = entity.clone();
        async move {
            if mode.is_add() {
                client::create_entity(&entity).await
            } else {
                client::update_entity(&entity).await
            }
        }
    });

    Effect::new(move |_| {
        if let Some(result) = save_action.value().get() {
            match result {
                Ok(()) => navigate(paths::ENTITIES, Default::default()),
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

        let entity = form.get_untracked();
        if entity.entity_type.trim().is_empty() || entity.display_name.trim().is_empty() {
            set_error.set(Some(AppError::Config(
                "Type and display name are required.".to_string(),
            )));
            return;
        }
        save_action.dispatch(entity);
    };

    view! {
        <div class="max-w-xl mx-auto space-y-6">
            <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">
                {format!("{} Entity", mode.verb())}
            </h1>

            <form
                on:submit=on_submit
                class="bg-white dark:bg-gray-800 rounded-lg border border-gray-200 dark:border-gray-700 shadow-sm p-6 space-y-5"
            >
                <div>
                    <label class=Theme::LABEL for="entity-type">"Type"</label>
                    <input
                        id="entity-type"
                        type="text"
                        class=Theme::INPUT
                        placeholder="vendor"
                        disabled=read_only
                        prop:value=move || form.get().entity_type
                        on:input=move |event| {
                            set_form.update(|entity| entity.entity_type = event_target_value(&event))
                        }
                    />
                </div>
                <div>
                    <label class=Theme::LABEL for="entity-display-name">"Display Name"</label>
                    <input
                        id="entity-display-name"
                        type="text"
                        class=Theme::INPUT
                        disabled=read_only
                        prop:value=move || form.get().display_name
                        on:input=move |event| {
                            set_form.update(|entity| entity.display_name = event_target_value(&event))
                        }
                    />
                </div>
                <div>
                    <label class=Theme::LABEL for="entity-tds-type">"TDS Type"</label>
                    <select
                        id="entity-tds-type"
                        class=Theme::INPUT
                        disabled=read_only
                        prop:value=move || form.get().tds_type
                        on:change=move |event| {
                            set_form.update(|entity| entity.tds_type = event_target_value(&event))
                        }
                    >
                        <option value="">"None"</option>
                        {move || match tds_options.get() {
                            Some(Ok(settings)) => settings
                                .into_iter()
                                .map(|setting| {
                                    view! {
                                        <option value=setting.tds_type.clone()>
                                            {format!("{} ({}%)", setting.tds_type, setting.percentage)}
                                        </option>
                                    }
                                })
                                .collect_view()
                                .into_any(),
                            _ => ().into_any(),
                        }}
                    </select>
                </div>
                <div>
                    <label class=Theme::LABEL for="entity-description">"Description"</label>
                    <textarea
                        id="entity-description"
                        class=Theme::INPUT
                        rows="3"
                        disabled=read_only
                        prop:value=move || form.get().description
                        on:input=move |event| {
                            set_form.update(|entity| entity.description = event_target_value(&event))
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
                            set_form.update(|entity| entity.status = event_target_checked(&event))
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
                        href=paths::ENTITIES
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
