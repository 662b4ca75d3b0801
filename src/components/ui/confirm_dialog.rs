//! Confirmation modal used before destructive actions such as record
//! deletion.

use crate::components::ui::Button;
use leptos::prelude::*;

#[component]
pub fn ConfirmDialog(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] title: String,
    #[prop(into)] message: String,
    #[prop(optional, into, default = Signal::from(false))] pending: Signal<bool>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || open.get()>
            <div class="fixed inset-0 z-50 flex items-center justify-center p-4 bg-black/50 backdrop-blur-sm">
                <div class="bg-white dark:bg-gray-800 rounded-xl shadow-xl border border-gray-200 dark:border-gray-700 w-full max-w-sm overflow-hidden">
                    <div class="px-6 py-4 border-b border-gray-100 dark:border-gray-700">
                        <h2 class="text-lg font-semibold text-gray-900 dark:text-white">
                            {title.clone()}
                        </h2>
                    </div>
                    <div class="p-6 text-sm text-gray-600 dark:text-gray-300">
                        {message.clone()}
                    </div>
                    <div class="px-6 pb-6 flex flex-col-reverse sm:flex-row gap-3 sm:justify-end">
                        <button
                            type="button"
                            on:click=move |_| on_cancel.run(())
                            class="px-5 py-2.5 text-sm font-medium text-gray-700 bg-white border border-gray-300 rounded-lg hover:bg-gray-50 focus:ring-4 focus:ring-gray-100 dark:bg-gray-800 dark:text-gray-300 dark:border-gray-600 dark:hover:bg-gray-700 dark:focus:ring-gray-700"
                        >
                            "Cancel"
                        </button>
                        <Button disabled=pending on_click=Callback::new(move |_| on_confirm.run(()))>
                            {move || if pending.get() { "Deleting..." } else { "Delete" }}
                        </Button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
