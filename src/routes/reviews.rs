//! Puja review moderation list (paginated, delete only).

use crate::app_lib::AppError;
use crate::app_lib::theme::Theme;
use crate::components::{Alert, AlertKind, ConfirmDialog, Spinner};
use crate::features::reviews::client;
use crate::routes::locations::Pager;
use leptos::prelude::*;

const PAGE_SIZE: u32 = 10;

#[component]
pub fn ReviewsListPage() -> impl IntoView {
    let (page, set_page) = signal(1u32);
    let reviews = LocalResource::new(move || {
        let page = page.get();
        async move { client::list_reviews(page, PAGE_SIZE).await }
    });

    let delete_target = RwSignal::new(None::<String>);
    let (delete_error, set_delete_error) = signal(None::<AppError>);
    let delete_action = Action::new_local(move |id: &String| {
        let id = id.clone();
        async move { client::delete_review(&id).await }
    });
    Effect::new(move |_| {
        if let Some(result) = delete_action.value().get() {
            delete_target.set(None);
            match result {
                Ok(()) => reviews.refetch(),
                Err(err) => set_delete_error.set(Some(err)),
            }
        }
    });

    view! {
        <div class="space-y-6">
            <div class="space-y-1">
                <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">"Puja Reviews"</h1>
                <p class="text-sm text-gray-500 dark:text-gray-400">
                    "Customer feedback on completed services."
                </p>
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
                            <th scope="col" class=Theme::TH>"Customer"</th>
                            <th scope="col" class=Theme::TH>"Service"</th>
                            <th scope="col" class=Theme::TH>"Rating"</th>
                            <th scope="col" class=Theme::TH>"Review"</th>
                            <th scope="col" class=Theme::TH>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-gray-200 dark:divide-gray-700">
                        <Suspense fallback=move || view! {
                            <tr>
                                <td colspan="5" class="px-6 py-12 text-center"><Spinner /></td>
                            </tr>
                        }>
                            {move || match reviews.get() {
                                Some(Ok(result)) if result.items.is_empty() => view! {
                                    <tr>
                                        <td colspan="5" class="px-6 py-12 text-center text-sm text-gray-500 dark:text-gray-400">
                                            "No reviews found."
                                        </td>
                                    </tr>
                                }.into_any(),
                                Some(Ok(result)) => view! {
                                    <For
                                        each=move || result.items.clone()
                                        key=|review| review.id.clone()
                                        children=move |review| {
                                            let delete_id = review.id.clone();
                                            view! {
                                                <tr class="hover:bg-gray-50 dark:hover:bg-gray-700/50 transition-colors">
                                                    <td class="px-6 py-4 whitespace-nowrap">
                                                        <div class="text-sm font-medium text-gray-900 dark:text-white">
                                                            {review.customer_name.clone()}
                                                        </div>
                                                        <div class="text-xs text-gray-400 font-mono">
                                                            {review.customer_id.clone()}
                                                        </div>
                                                    </td>
                                                    <td class=Theme::TD>{review.service_name.clone()}</td>
                                                    <td class=Theme::TD>
                                                        <span class="inline-flex items-center gap-1">
                                                            <span class="material-symbols-outlined text-base text-amber-500">
                                                                "star"
                                                            </span>
                                                            {format!("{:.1}", review.rating)}
                                                        </span>
                                                    </td>
                                                    <td class="px-6 py-4 text-sm text-gray-600 dark:text-gray-300 max-w-md truncate">
                                                        {review.review.clone()}
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

            <Pager
                page=page
                total=Signal::derive(move || {
                    reviews
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
                title="Delete review"
                message="Are you sure you want to delete this review?"
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
