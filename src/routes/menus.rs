//! Published app/web menu list and editor. One pair of pages serves all
//! three menu books; the kind pins the endpoint query and the return path.

use crate::app_lib::AppError;
use crate::app_lib::theme::Theme;
use crate::components::{Alert, AlertKind, Button, ConfirmDialog, Spinner};
use crate::features::menus::client;
use crate::features::menus::types::{AppMenu, MenuKind};
use crate::routes::{EditorMode, paths};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_params_map};

fn list_path(kind: MenuKind) -> &'static str {
    match kind {
        MenuKind::HorizontalCa => paths::APP_MENUS_HORIZONTAL_CA,
        MenuKind::VerticalCa => paths::APP_MENUS_VERTICAL_CA,
        MenuKind::VerticalVa => paths::APP_MENUS_VERTICAL_VA,
    }
}

#[component]
pub fn MenusListPage(kind: MenuKind) -> impl IntoView {
    let menus = LocalResource::new(move || async move { client::list_menus(kind).await });
    let base = list_path(kind);

    let delete_target = RwSignal::new(None::<String>);
    let (delete_error, set_delete_error) = signal(None::<AppError>);
    let delete_action = Action::new_local(move |id: &String| {
        let id = id.clone();
        async move { client::delete_menu(&id).await }
    });
    Effect::new(move |_| {
        if let Some(result) = delete_action.value().get() {
            delete_target.set(None);
            match result {
                Ok(()) => menus.refetch(),
                Err(err) => set_delete_error.set(Some(err)),
            }
        }
    });

    view! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <div class="space-y-1">
                    <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">
                        {kind.title()}
                    </h1>
                    <p class="text-sm text-gray-500 dark:text-gray-400">
                        "Menu entries published to the customer app."
                    </p>
                </div>
                <A href=paths::add(base) {..} class="inline-flex">
                    <Button>
                        <div class="flex items-center gap-2">
                            <span class="material-symbols-outlined text-base">"add"</span>
                            "New Menu"
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
                            <th scope="col" class=Theme::TH>"Menu Name"</th>
                            <th scope="col" class=Theme::TH>"Navigates To"</th>
                            <th scope="col" class=Theme::TH>"Position"</th>
                            <th scope="col" class=Theme::TH>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-gray-200 dark:divide-gray-700">
                        <Suspense fallback=move || view! {
                            <tr>
                                <td colspan="4" class="px-6 py-12 text-center"><Spinner /></td>
                            </tr>
                        }>
                            {move || match menus.get() {
                                Some(Ok(list)) if list.is_empty() => view! {
                                    <tr>
                                        <td colspan="4" class="px-6 py-12 text-center text-sm text-gray-500 dark:text-gray-400">
                                            "No menu entries found."
                                        </td>
                                    </tr>
                                }.into_any(),
                                Some(Ok(list)) => view! {
                                    <For
                                        each=move || list.clone()
                                        key=|menu| menu.id.clone().unwrap_or_default()
                                        children=move |menu| {
                                            let id = menu.id.clone().unwrap_or_default();
                                            let delete_id = id.clone();
                                            view! {
                                                <tr class="hover:bg-gray-50 dark:hover:bg-gray-700/50 transition-colors">
                                                    <td class="px-6 py-4 whitespace-nowrap text-sm font-medium text-gray-900 dark:text-white">
                                                        {menu.menu_name.clone()}
                                                    </td>
                                                    <td class="px-6 py-4 text-sm text-gray-600 dark:text-gray-300 max-w-xs truncate">
                                                        {menu.navigate_to.clone()}
                                                    </td>
                                                    <td class=Theme::TD>{menu.rearrange}</td>
                                                    <td class="px-6 py-4 whitespace-nowrap text-sm space-x-3">
                                                        <A href=paths::edit(base, &id) {..} class=Theme::ROW_ACTION title="Edit">
                                                            <span class="material-symbols-outlined text-base">"edit"</span>
                                                        </A>
                                                        <A href=paths::view(base, &id) {..} class=Theme::ROW_ACTION title="View">
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

            <ConfirmDialog
                open=Signal::derive(move || delete_target.get().is_some())
                title="Delete menu entry"
                message="Are you sure you want to delete this menu entry?"
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
pub fn MenuEditorPage(kind: MenuKind, mode: EditorMode) -> impl IntoView {
    let params = use_params_map();
    let navigate = use_navigate();
    let base = list_path(kind);

    let (form, set_form) = signal(AppMenu::reference(kind));
    let (error, set_error) = signal(None::<AppError>);
    let read_only = mode.is_view();

    if !mode.is_add() {
        let record = LocalResource::new(move || {
            let id = params.with(|map| map.get("id").unwrap_or_default());
            async move { client::get_menu(&id).await }
        });
        Effect::new(move |_| {
            if let Some(result) = record.get() {
                match result {
                    Ok(menu) => set_form.set(menu),
                    Err(err) => set_error.set(Some(err)),
                }
            }
        });
    }

    let save_action = Action::new_local(move |menu: &AppMenu| {
        let menu = menu.clone();
        async move {
            if mode.is_add() {
                client::create_menu(&menu).await
            } else {
                client::update_menu(&menu).await
            }
        }
    });

    Effect::new(move |_| {
        if let Some(result) = save_action.value().get() {
            match result {
                Ok(()) => navigate(base, Default::default()),
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

        let menu = form.get_untracked();
        if menu.menu_name.trim().is_empty() || menu.navigate_to.trim().is_empty() {
            set_error.set(Some(AppError::Config(
                "Menu name and target URL are required.".to_string(),
            )));
            return;
        }
        save_action.dispatch(menu);
    };

    view! {
        <div class="max-w-xl mx-auto space-y-6">
            <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">
                {format!("{}: {}", mode.verb(), kind.title())}
            </h1>

            <form
                on:submit=on_submit
                class="bg-white dark:bg-gray-800 rounded-lg border border-gray-200 dark:border-gray-700 shadow-sm p-6 space-y-5"
            >
                <div>
                    <label class=Theme::LABEL for="menu-name">"Menu Name"</label>
                    <input
                        id="menu-name"
                        type="text"
                        class=Theme::INPUT
                        disabled=read_only
                        prop:value=move || form.get().menu_name
                        on:input=move |event| {
                            set_form.update(|menu| menu.menu_name = event_target_value(&event))
                        }
                    />
                </div>
                <div>
                    <label class=Theme::LABEL for="menu-navigate-to">"Navigate To"</label>
                    <input
                        id="menu-navigate-to"
                        type="url"
                        class=Theme::INPUT
                        placeholder="https://harivara.app/epuja"
                        disabled=read_only
                        prop:value=move || form.get().navigate_to
                        on:input=move |event| {
                            set_form.update(|menu| menu.navigate_to = event_target_value(&event))
                        }
                    />
                </div>
                <div class="grid grid-cols-1 sm:grid-cols-2 gap-5">
                    <div>
                        <label class=Theme::LABEL for="menu-icon">"Icon URL"</label>
                        <input
                            id="menu-icon"
                            type="url"
                            class=Theme::INPUT
                            disabled=read_only
                            prop:value=move || form.get().icon
                            on:input=move |event| {
                                set_form.update(|menu| menu.icon = event_target_value(&event))
                            }
                        />
                    </div>
                    <div>
                        <label class=Theme::LABEL for="menu-rearrange">"Position"</label>
                        <input
                            id="menu-rearrange"
                            type="number"
                            min="1"
                            class=Theme::INPUT
                            disabled=read_only
                            prop:value=move || form.get().rearrange.to_string()
                            on:input=move |event| {
                                let value = event_target_value(&event).parse().unwrap_or(1);
                                set_form.update(|menu| menu.rearrange = value)
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
                            set_form.update(|menu| menu.status = event_target_checked(&event))
                        }
                    />
                    "Published"
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
                        href=base
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
