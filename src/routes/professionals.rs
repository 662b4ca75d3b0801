//! Professional hub list (paginated) and add form.

use crate::app_lib::AppError;
use crate::app_lib::theme::Theme;
use crate::components::{Alert, AlertKind, Button, ConfirmDialog, Spinner};
use crate::features::professionals::client;
use crate::features::professionals::types::Professional;
use crate::routes::locations::Pager;
use crate::routes::paths;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::components::A;

const PAGE_SIZE: u32 = 10;

#[component]
pub fn ProfessionalsListPage() -> impl IntoView {
    let (page, set_page) = signal(1u32);
    let professionals = LocalResource::new(move || {
        let page = page.get();
        async move { client::list_professionals(page, PAGE_SIZE).await }
    });

    let delete_target = RwSignal::new(None::<String>);
    let (delete_error, set_delete_error) = signal(None::<AppError>);
    let delete_action = Action::new_local(move |id: &String| {
        let id = id.clone();
        async move { client::delete_professional(&id).await }
    });
    Effect::new(move |_| {
        if let Some(result) = delete_action.value().get() {
            delete_target.set(None);
            match result {
                Ok(()) => professionals.refetch(),
                Err(err) => set_delete_error.set(Some(err)),
            }
        }
    });

    view! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <div class="space-y-1">
                    <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">
                        "Professionals"
                    </h1>
                    <p class="text-sm text-gray-500 dark:text-gray-400">
                        "Puja professionals registered on the hub."
                    </p>
                </div>
                <A href=paths::add(paths::PROFESSIONALS) {..} class="inline-flex">
                    <Button>
                        <div class="flex items-center gap-2">
                            <span class="material-symbols-outlined text-base">"add"</span>
                            "New Professional"
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
                            <th scope="col" class=Theme::TH>"Language"</th>
                            <th scope="col" class=Theme::TH>"City"</th>
                            <th scope="col" class=Theme::TH>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-gray-200 dark:divide-gray-700">
                        <Suspense fallback=move || view! {
                            <tr>
                                <td colspan="4" class="px-6 py-12 text-center"><Spinner /></td>
                            </tr>
                        }>
                            {move || match professionals.get() {
                                Some(Ok(result)) if result.items.is_empty() => view! {
                                    <tr>
                                        <td colspan="4" class="px-6 py-12 text-center text-sm text-gray-500 dark:text-gray-400">
                                            "No professionals found."
                                        </td>
                                    </tr>
                                }.into_any(),
                                Some(Ok(result)) => view! {
                                    <For
                                        each=move || result.items.clone()
                                        key=|professional| professional.id.clone().unwrap_or_default()
                                        children=move |professional| {
                                            let id = professional.id.clone().unwrap_or_default();
                                            let delete_id = id.clone();
                                            view! {
                                                <tr class="hover:bg-gray-50 dark:hover:bg-gray-700/50 transition-colors">
                                                    <td class="px-6 py-4 whitespace-nowrap">
                                                        <div class="text-sm font-medium text-gray-900 dark:text-white">
                                                            {professional.name.clone()}
                                                        </div>
                                                        <div class="text-xs text-gray-400 font-mono">{id.clone()}</div>
                                                    </td>
                                                    <td class=Theme::TD>
                                                        {professional.language.clone().unwrap_or_else(|| "-".to_string())}
                                                    </td>
                                                    <td class=Theme::TD>
                                                        {professional.city.clone().unwrap_or_else(|| "-".to_string())}
                                                    </td>
                                                    <td class="px-6 py-4 whitespace-nowrap text-sm">
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

            <Pager
                page=page
                total=Signal::derive(move || {
                    professionals
                        .get()
                        .and_then(|result| result.ok())
                        .map(|result| result.total)
                        .unwrap_or(0)
                })
                page_size=PAGE_SIZE
                on_change=Callback::new(move |next| set_page.set(next))
            />

            <ConfirmDialog
                open=Signal::derive(move || delete_target.get().is_some())
                title="Delete professional"
                message="Are you sure you want to delete this professional?"
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
pub fn ProfessionalAddPage() -> impl IntoView {
    let (form, set_form) = signal(Professional::reference());
    let (error, set_error) = signal(None::<AppError>);
    let (saved, set_saved) = signal(false);

    let save_action = Action::new_local(move |professional: &Professional| {
        let professional = professional.clone();
        async move { client::create_professional(&professional).await }
    });

    Effect::new(move |_| {
        if let Some(result) = save_action.value().get() {
            match result {
                Ok(()) => {
                    set_form.set(Professional::reference());
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

        let professional = form.get_untracked();
        if professional.name.trim().is_empty() {
            set_error.set(Some(AppError::Config("Name is required.".to_string())));
            return;
        }
        save_action.dispatch(professional);
    };

    view! {
        <div class="max-w-xl mx-auto space-y-6">
            <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">"Add Professional"</h1>

            <form
                on:submit=on_submit
                class="bg-white dark:bg-gray-800 rounded-lg border border-gray-200 dark:border-gray-700 shadow-sm p-6 space-y-5"
            >
                <div>
                    <label class=Theme::LABEL for="professional-name">"Name"</label>
                    <input
                        id="professional-name"
                        type="text"
                        class=Theme::INPUT
                        prop:value=move || form.get().name
                        on:input=move |event| {
                            set_form.update(|professional| professional.name = event_target_value(&event))
                        }
                    />
                </div>
                <div class="grid grid-cols-1 sm:grid-cols-2 gap-5">
                    <div>
                        <label class=Theme::LABEL for="professional-language">"Language"</label>
                        <input
                            id="professional-language"
                            type="text"
                            class=Theme::INPUT
                            prop:value=move || form.get().language.unwrap_or_default()
                            on:input=move |event| {
                                let value = event_target_value(&event);
                                set_form.update(|professional| {
                                    professional.language =
                                        if value.trim().is_empty() { None } else { Some(value) };
                                })
                            }
                        />
                    </div>
                    <div>
                        <label class=Theme::LABEL for="professional-city">"City"</label>
                        <input
                            id="professional-city"
                            type="text"
                            class=Theme::INPUT
                            prop:value=move || form.get().city.unwrap_or_default()
                            on:input=move |event| {
                                let value = event_target_value(&event);
                                set_form.update(|professional| {
                                    professional.city =
                                        if value.trim().is_empty() { None } else { Some(value) };
                                })
                            }
                        />
                    </div>
                </div>
                <div>
                    <label class=Theme::LABEL for="professional-image">"Profile Image URL"</label>
                    <input
                        id="professional-image"
                        type="url"
                        class=Theme::INPUT
                        prop:value=move || form.get().profile_image.unwrap_or_default()
                        on:input=move |event| {
                            let value = event_target_value(&event);
                            set_form.update(|professional| {
                                professional.profile_image =
                                    if value.trim().is_empty() { None } else { Some(value) };
                            })
                        }
                    />
                </div>

                <label class="flex items-center gap-2 text-sm text-gray-700 dark:text-gray-300">
                    <input
                        type="checkbox"
                        class="rounded border-gray-300"
                        prop:checked=move || form.get().status
                        on:change=move |event| {
                            set_form.update(|professional| professional.status = event_target_checked(&event))
                        }
                    />
                    "Active"
                </label>

                <Show when=move || saved.get()>
                    <Alert kind=AlertKind::Success message="Professional added successfully.".to_string() />
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
                        href=paths::PROFESSIONALS
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
