//! Currency list and editor. One pair of pages serves both the domestic and
//! international books; the scope decides the endpoint query and which list
//! the editor returns to.

use crate::app_lib::AppError;
use crate::app_lib::theme::Theme;
use crate::components::{Alert, AlertKind, Button, ConfirmDialog, Spinner};
use crate::features::currencies::client;
use crate::features::currencies::types::{Currency, CurrencyScope, PAYMENT_METHOD_OPTIONS};
use crate::routes::{EditorMode, paths};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_params_map};

fn list_path(scope: CurrencyScope) -> &'static str {
    match scope {
        CurrencyScope::Domestic => paths::CURRENCIES,
        CurrencyScope::International => paths::INIT_CURRENCIES,
    }
}

#[component]
pub fn CurrenciesListPage(scope: CurrencyScope) -> impl IntoView {
    let currencies = LocalResource::new(move || async move { client::list_currencies(scope).await });
    let base = list_path(scope);

    let delete_target = RwSignal::new(None::<String>);
    let (delete_error, set_delete_error) = signal(None::<AppError>);
    let delete_action = Action::new_local(move |id: &String| {
        let id = id.clone();
        async move { client::delete_currency(&id).await }
    });
    Effect::new(move |_| {
        if let Some(result) = delete_action.value().get() {
            delete_target.set(None);
            match result {
                Ok(()) => currencies.refetch(),
                Err(err) => set_delete_error.set(Some(err)),
            }
        }
    });

    view! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <div class="space-y-1">
                    <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">
                        {scope.title()}
                    </h1>
                    <p class="text-sm text-gray-500 dark:text-gray-400">
                        "Currency books, payment methods, and recharge limits."
                    </p>
                </div>
                <A href=paths::add(base) {..} class="inline-flex">
                    <Button>
                        <div class="flex items-center gap-2">
                            <span class="material-symbols-outlined text-base">"add"</span>
                            "New Currency"
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
                            <th scope="col" class=Theme::TH>"Currency Name"</th>
                            <th scope="col" class=Theme::TH>"Code"</th>
                            <th scope="col" class=Theme::TH>"Country"</th>
                            <th scope="col" class=Theme::TH>"Payment Methods"</th>
                            <th scope="col" class=Theme::TH>"Status"</th>
                            <th scope="col" class=Theme::TH>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-gray-200 dark:divide-gray-700">
                        <Suspense fallback=move || view! {
                            <tr>
                                <td colspan="6" class="px-6 py-12 text-center"><Spinner /></td>
                            </tr>
                        }>
                            {move || match currencies.get() {
                                Some(Ok(list)) if list.is_empty() => view! {
                                    <tr>
                                        <td colspan="6" class="px-6 py-12 text-center text-sm text-gray-500 dark:text-gray-400">
                                            "No currencies found."
                                        </td>
                                    </tr>
                                }.into_any(),
                                Some(Ok(list)) => view! {
                                    <For
                                        each=move || list.clone()
                                        key=|currency| currency.id.clone().unwrap_or_default()
                                        children=move |currency| {
                                            let id = currency.id.clone().unwrap_or_default();
                                            let delete_id = id.clone();
                                            view! {
                                                <tr class="hover:bg-gray-50 dark:hover:bg-gray-700/50 transition-colors">
                                                    <td class="px-6 py-4 whitespace-nowrap text-sm font-medium text-gray-900 dark:text-white">
                                                        {currency.currency_name.clone()}
                                                    </td>
                                                    <td class=Theme::TD>{currency.currency_code.clone()}</td>
                                                    <td class=Theme::TD>{currency.country.clone()}</td>
                                                    <td class=Theme::TD>{currency.payment_methods.join(", ")}</td>
                                                    <td class=Theme::TD>
                                                        <StatusPill status=currency.status />
                                                    </td>
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
                                        <td colspan="6" class="px-6 py-4">
                                            <Alert kind=AlertKind::Error message=err.to_string() />
                                        </td>
                                    </tr>
                                }.into_any(),
                                None => view! {
                                    <tr>
                                        <td colspan="6" class="px-6 py-12 text-center"><Spinner /></td>
                                    </tr>
                                }.into_any(),
                            }}
                        </Suspense>
                    </tbody>
                </table>
            </div>

            <ConfirmDialog
                open=Signal::derive(move || delete_target.get().is_some())
                title="Delete currency"
                message="Are you sure you want to delete this currency?"
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
fn StatusPill(status: bool) -> impl IntoView {
    let class = if status {
        "inline-flex px-2 py-0.5 text-xs font-semibold rounded-full bg-emerald-100 text-emerald-700 dark:bg-emerald-900/40 dark:text-emerald-300"
    } else {
        "inline-flex px-2 py-0.5 text-xs font-semibold rounded-full bg-gray-100 text-gray-500 dark:bg-gray-700 dark:text-gray-400"
    };
    view! { <span class=class>{if status { "Active" } else { "Inactive" }}</span> }
}

#[component]
pub fn CurrencyEditorPage(scope: CurrencyScope, mode: EditorMode) -> impl IntoView {
    let params = use_params_map();
    let navigate = use_navigate();
    let base = list_path(scope);

    let (form, set_form) = signal(Currency::reference(scope));
    let (error, set_error) = signal(None::<AppError>);
    let read_only = mode.is_view();

    if !mode.is_add() {
        let record = LocalResource::new(move || {
            let id = params.with(|map| map.get("id").unwrap_or_default());
            async move { client::get_currency(&id).await }
        });
        Effect::new(move |_| {
            if let Some(result) = record.get() {
                match result {
                    Ok(currency) => set_form.set(currency),
                    Err(err) => set_error.set(Some(err)),
                }
            }
        });
    }

    let save_action = Action::new_local(move |currency: &Currency| {
        let currency = currency.clone();
        async move {
            if mode.is_add() {
                client::create_currency(&currency).await
            } else {
                client::update_currency(&currency).await
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

        let currency = form.get_untracked();
        if currency.currency_name.trim().is_empty()
            || currency.currency_code.trim().is_empty()
            || currency.currency_symbol.trim().is_empty()
            || currency.country.trim().is_empty()
        {
            set_error.set(Some(AppError::Config(
                "Name, code, symbol, and country are required.".to_string(),
            )));
            return;
        }
        if currency.payment_methods.is_empty() {
            set_error.set(Some(AppError::Config(
                "Select at least one payment method.".to_string(),
            )));
            return;
        }
        save_action.dispatch(currency);
    };

    let toggle_payment_method = move |method: String| {
        set_form.update(|currency| {
            if let Some(position) = currency
                .payment_methods
                .iter()
                .position(|existing| existing == &method)
            {
                currency.payment_methods.remove(position);
            } else {
                currency.payment_methods.push(method);
            }
        });
    };

    view! {
        <div class="max-w-2xl mx-auto space-y-6">
            <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">
                {format!("{} {}", mode.verb(), scope.title())}
            </h1>

            <form
                on:submit=on_submit
                class="bg-white dark:bg-gray-800 rounded-lg border border-gray-200 dark:border-gray-700 shadow-sm p-6 space-y-5"
            >
                <div class="grid grid-cols-1 sm:grid-cols-2 gap-5">
                    <div>
                        <label class=Theme::LABEL for="currency-name">"Currency Name"</label>
                        <input
                            id="currency-name"
                            type="text"
                            class=Theme::INPUT
                            disabled=read_only
                            prop:value=move || form.get().currency_name
                            on:input=move |event| {
                                set_form.update(|currency| currency.currency_name = event_target_value(&event))
                            }
                        />
                    </div>
                    <div>
                        <label class=Theme::LABEL for="currency-code">"Code"</label>
                        <input
                            id="currency-code"
                            type="text"
                            class=Theme::INPUT
                            disabled=read_only
                            prop:value=move || form.get().currency_code
                            on:input=move |event| {
                                set_form.update(|currency| currency.currency_code = event_target_value(&event))
                            }
                        />
                    </div>
                    <div>
                        <label class=Theme::LABEL for="currency-symbol">"Symbol"</label>
                        <input
                            id="currency-symbol"
                            type="text"
                            class=Theme::INPUT
                            disabled=read_only
                            prop:value=move || form.get().currency_symbol
                            on:input=move |event| {
                                set_form.update(|currency| currency.currency_symbol = event_target_value(&event))
                            }
                        />
                    </div>
                    <div>
                        <label class=Theme::LABEL for="currency-country">"Country"</label>
                        <input
                            id="currency-country"
                            type="text"
                            class=Theme::INPUT
                            disabled=read_only
                            prop:value=move || form.get().country
                            on:input=move |event| {
                                set_form.update(|currency| currency.country = event_target_value(&event))
                            }
                        />
                    </div>
                    <div>
                        <label class=Theme::LABEL for="exchange-rate">"Exchange Rate"</label>
                        <input
                            id="exchange-rate"
                            type="number"
                            step="any"
                            class=Theme::INPUT
                            disabled=read_only
                            prop:value=move || form.get().exchange_rate.to_string()
                            on:input=move |event| {
                                let value = event_target_value(&event).parse().unwrap_or(0.0);
                                set_form.update(|currency| currency.exchange_rate = value)
                            }
                        />
                    </div>
                    <div>
                        <label class=Theme::LABEL for="min-recharge">"Min Recharge Amount"</label>
                        <input
                            id="min-recharge"
                            type="number"
                            step="any"
                            class=Theme::INPUT
                            disabled=read_only
                            prop:value=move || form.get().min_recharge_allowed_amount.to_string()
                            on:input=move |event| {
                                let value = event_target_value(&event).parse().unwrap_or(0.0);
                                set_form.update(|currency| currency.min_recharge_allowed_amount = value)
                            }
                        />
                    </div>
                </div>

                <div>
                    <label class=Theme::LABEL for="icon-url">"Icon URL"</label>
                    <input
                        id="icon-url"
                        type="url"
                        class=Theme::INPUT
                        disabled=read_only
                        prop:value=move || form.get().icon
                        on:input=move |event| {
                            set_form.update(|currency| currency.icon = event_target_value(&event))
                        }
                    />
                </div>

                <div>
                    <span class=Theme::LABEL>"Payment Methods"</span>
                    <div class="flex flex-wrap gap-4">
                        {PAYMENT_METHOD_OPTIONS
                            .iter()
                            .map(|method| {
                                let method_name = method.to_string();
                                let toggled = method_name.clone();
                                let checked = Signal::derive(move || {
                                    form.get().payment_methods.iter().any(|existing| existing == &method_name)
                                });
                                view! {
                                    <label class="flex items-center gap-2 text-sm text-gray-700 dark:text-gray-300">
                                        <input
                                            type="checkbox"
                                            class="rounded border-gray-300"
                                            disabled=read_only
                                            prop:checked=move || checked.get()
                                            on:change=move |_| toggle_payment_method(toggled.clone())
                                        />
                                        {*method}
                                    </label>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <div>
                    <label class=Theme::LABEL for="voucher-values">"Voucher Values"</label>
                    <input
                        id="voucher-values"
                        type="text"
                        class=Theme::INPUT
                        placeholder="100, 500, 1000"
                        disabled=read_only
                        prop:value=move || {
                            form.get()
                                .voucher_value
                                .iter()
                                .map(|value| value.to_string())
                                .collect::<Vec<_>>()
                                .join(", ")
                        }
                        on:change=move |event| {
                            let values = event_target_value(&event)
                                .split(',')
                                .filter_map(|piece| piece.trim().parse().ok())
                                .collect();
                            set_form.update(|currency| currency.voucher_value = values)
                        }
                    />
                </div>

                <label class="flex items-center gap-2 text-sm text-gray-700 dark:text-gray-300">
                    <input
                        type="checkbox"
                        class="rounded border-gray-300"
                        disabled=read_only
                        prop:checked=move || form.get().status
                        on:change=move |event| {
                            set_form.update(|currency| currency.status = event_target_checked(&event))
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
