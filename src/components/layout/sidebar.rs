//! Collapsible side navigation for the selected module.
//!
//! Two layout modes: an expanded panel with inline accordion submenus, and a
//! narrow icon rail whose branch rows open an anchored overlay with the same
//! children. All open/close bookkeeping lives in
//! [`SidebarState`](crate::features::nav::state::SidebarState); this file
//! only translates clicks and route changes into state calls and renders the
//! result. Active highlighting is computed from the route on every render,
//! never stored.

use crate::app_lib::theme::Theme;
use crate::components::ui::Spinner;
use crate::features::modules::context::use_modules;
use crate::features::nav::provider::{CatalogState, use_nav};
use crate::features::nav::resolver::{is_active, resolve_open_menu};
use crate::features::nav::state::SidebarState;
use crate::features::nav::types::{MenuEntry, MenuSection};
use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};
use wasm_bindgen::JsCast;

/// What the section area should show for the current module and catalog.
#[derive(Clone)]
enum SectionsView {
    Loading,
    Empty,
    Sections(Vec<MenuSection>),
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let modules = use_modules();
    let nav = use_nav();
    let location = use_location();
    let navigate = use_navigate();
    let pathname = location.pathname;

    let state = RwSignal::new(SidebarState::new(starts_collapsed()));

    // Navigation requests funnel through a signal; the effect below holds the
    // router handle and performs the actual navigation.
    let nav_request = RwSignal::new(None::<String>);
    let go = Callback::new(move |path: String| {
        state.update(|sidebar| sidebar.close_popover());
        nav_request.set(Some(path));
    });
    Effect::new(move |_| {
        if let Some(path) = nav_request.get() {
            navigate(&path, Default::default());
        }
    });

    // Re-resolve the accordion only when the route or module actually
    // changed (or the remote catalog arrived), so unrelated re-renders never
    // clobber a manual toggle.
    let last_route = StoredValue::new(None::<(String, String, bool)>);
    Effect::new(move |_| {
        let path = pathname.get();
        let module_key = modules.selected.get().key;
        let ready = nav
            .catalog
            .with(|catalog| matches!(catalog, CatalogState::Ready(_)));
        let route = (path, module_key, ready);

        if last_route.get_value().as_ref() == Some(&route) {
            return;
        }
        if state.with_untracked(|sidebar| sidebar.collapsed()) {
            state.update(|sidebar| sidebar.close_popover());
            last_route.set_value(Some(route));
            return;
        }
        let resolved = nav.catalog.with(|catalog| match catalog {
            CatalogState::Ready(catalog) => {
                resolve_open_menu(catalog.top_level(&route.1), &route.0)
            }
            _ => None,
        });
        state.update(|sidebar| sidebar.apply_route(resolved));
        last_route.set_value(Some(route));
    });

    let sections = Signal::derive(move || {
        let module_key = modules.selected.get().key;
        nav.catalog.with(|catalog| match catalog {
            CatalogState::Loading => SectionsView::Loading,
            CatalogState::Unavailable => SectionsView::Empty,
            CatalogState::Ready(catalog) => {
                let sections = catalog.sections(&module_key).to_vec();
                if sections.is_empty() {
                    SectionsView::Empty
                } else {
                    SectionsView::Sections(sections)
                }
            }
        })
    });

    // The branch the collapsed-rail overlay is anchored to, if any.
    let popover = Signal::derive(move || {
        let target = match state.with(|sidebar| sidebar.popover().cloned()) {
            Some(target) => target,
            None => return None,
        };
        let module_key = modules.selected.get().key;
        nav.catalog.with(|catalog| match catalog {
            CatalogState::Ready(catalog) => catalog
                .top_level(&module_key)
                .find(|entry| entry.label == target.menu_key)
                .cloned()
                .map(|entry| (entry, target.anchor_top)),
            _ => None,
        })
    });

    let collapsed = Signal::derive(move || state.with(|sidebar| sidebar.collapsed()));

    view! {
        <aside class=move || {
            let base = "relative flex-shrink-0 flex flex-col border-r border-gray-200 dark:border-gray-800 bg-white dark:bg-gray-900 transition-all duration-200";
            if collapsed.get() {
                format!("{base} w-16")
            } else {
                format!("{base} w-64")
            }
        }>
            <nav class="flex-1 px-3 py-6 space-y-8 overflow-y-auto">
                {move || match sections.get() {
                    SectionsView::Loading => view! {
                        <div class="flex justify-center py-10">
                            <Spinner />
                        </div>
                    }
                        .into_any(),
                    SectionsView::Empty => view! {
                        <p class="px-2 py-6 text-sm text-gray-400 dark:text-gray-500">
                            "No menu available for this organization."
                        </p>
                    }
                        .into_any(),
                    SectionsView::Sections(sections) => sections
                        .into_iter()
                        .map(|section| {
                            let MenuSection { name, entries } = section;
                            view! {
                                <div>
                                    <Show when=move || !collapsed.get()>
                                        <h3 class=Theme::NAV_SECTION>{name.clone()}</h3>
                                    </Show>
                                    <div class="mt-2 space-y-1">
                                        {entries
                                            .into_iter()
                                            .map(|entry| top_level_row(entry, state, go, pathname))
                                            .collect_view()}
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()
                        .into_any(),
                }}
            </nav>

            // Collapsed-rail overlay listing a branch's children.
            <Show when=move || popover.get().is_some()>
                <div
                    class="fixed inset-0 z-40"
                    on:click=move |_| state.update(|sidebar| sidebar.close_popover())
                ></div>
                {move || {
                    popover
                        .get()
                        .map(|(entry, anchor_top)| {
                            view! {
                                <div
                                    class="fixed z-50 left-[4.25rem] min-w-[13rem] bg-white dark:bg-gray-800 border border-gray-200 dark:border-gray-700 rounded-lg shadow-xl p-2"
                                    style=format!("top: {anchor_top}px")
                                >
                                    <p class="px-3 py-1 text-xs font-semibold text-gray-400 dark:text-gray-500 uppercase tracking-wider">
                                        {entry.label.clone()}
                                    </p>
                                    <div class="space-y-1">
                                        {child_rows(entry.children().to_vec(), go, pathname)}
                                    </div>
                                </div>
                            }
                        })
                }}
            </Show>

            // Collapse toggle, pinned to the panel's bottom edge.
            <div class="border-t border-gray-200 dark:border-gray-800 p-2 flex justify-center">
                <button
                    type="button"
                    class="p-2 rounded-lg text-indigo-600 dark:text-indigo-400 hover:bg-indigo-50 dark:hover:bg-gray-800 transition-colors"
                    title=move || if collapsed.get() { "Expand sidebar" } else { "Collapse sidebar" }
                    on:click=move |_| state.update(|sidebar| sidebar.toggle_collapsed())
                >
                    <span class=Theme::NAV_ICON>
                        {move || if collapsed.get() { "chevron_right" } else { "chevron_left" }}
                    </span>
                </button>
            </div>
        </aside>
    }
}

/// Renders one top-level entry: a leaf navigates, a branch toggles the
/// accordion (expanded) or anchors the overlay (collapsed). A branch that
/// also carries a path navigates before toggling.
fn top_level_row(
    entry: MenuEntry,
    state: RwSignal<SidebarState>,
    go: Callback<String>,
    pathname: Memo<String>,
) -> AnyView {
    let label = entry.label.clone();
    let icon_name = entry
        .icon
        .clone()
        .unwrap_or_else(|| "menu".to_string());
    let enabled = entry.enabled;
    let is_branch = entry.is_branch();
    let entry_path = entry.path().map(str::to_string);
    let children = entry.children().to_vec();

    let active = {
        let entry = entry.clone();
        Signal::derive(move || is_active(&entry, &pathname.get()))
    };
    let open = {
        let label = label.clone();
        Signal::derive(move || {
            state.with(|sidebar| sidebar.open_menu_key() == Some(label.as_str()))
        })
    };
    let collapsed = Signal::derive(move || state.with(|sidebar| sidebar.collapsed()));

    let on_row_click = {
        let label = label.clone();
        move |event: leptos::ev::MouseEvent| {
            if !enabled {
                return;
            }
            if is_branch {
                if state.with_untracked(|sidebar| sidebar.collapsed()) {
                    let anchor_top = event
                        .current_target()
                        .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
                        .map(|element| element.get_bounding_client_rect().top())
                        .unwrap_or(0.0);
                    state.update(|sidebar| sidebar.open_popover(&label, anchor_top));
                } else {
                    if let Some(path) = entry_path.clone() {
                        go.run(path);
                    }
                    state.update(|sidebar| sidebar.toggle_branch(&label));
                }
            } else if let Some(path) = entry_path.clone() {
                go.run(path);
            }
        }
    };

    let title = label.clone();
    let text = label.clone();

    view! {
        <div>
            <button
                type="button"
                class=move || row_class(active.get(), enabled)
                class:justify-center=move || collapsed.get()
                disabled=!enabled
                aria-disabled=(!enabled).to_string()
                title=title
                on:click=on_row_click
            >
                <span class=Theme::NAV_ICON>{icon_name}</span>
                <Show when=move || !collapsed.get()>
                    <span class="flex-1 text-left truncate">{text.clone()}</span>
                </Show>
                <Show when=move || is_branch && !collapsed.get()>
                    <span class=Theme::NAV_ICON>
                        {move || if open.get() { "expand_less" } else { "expand_more" }}
                    </span>
                </Show>
            </button>
            <Show when=move || is_branch && open.get() && !collapsed.get()>
                <div class="ml-5 pl-3 border-l-2 border-gray-200 dark:border-gray-700 mb-2 space-y-1">
                    {child_rows(children.clone(), go, pathname)}
                </div>
            </Show>
        </div>
    }
    .into_any()
}

/// Renders a sibling list below a branch, recursing into nested branches.
fn child_rows(entries: Vec<MenuEntry>, go: Callback<String>, pathname: Memo<String>) -> AnyView {
    entries
        .into_iter()
        .map(|entry| child_row(entry, go, pathname))
        .collect_view()
        .into_any()
}

fn child_row(entry: MenuEntry, go: Callback<String>, pathname: Memo<String>) -> AnyView {
    let label = entry.label.clone();
    let icon = entry.icon.clone();
    let enabled = entry.enabled;
    let is_branch = entry.is_branch();
    let path = entry.path().map(str::to_string);
    let nested = entry.children().to_vec();
    let active = Signal::derive(move || is_active(&entry, &pathname.get()));

    let icon_view = icon.map(|icon_name| {
        view! { <span class=Theme::NAV_ICON>{icon_name}</span> }
    });

    let head = match (path, enabled) {
        (Some(path_value), true) => view! {
            <button
                type="button"
                class=move || row_class(active.get(), enabled)
                on:click=move |_| go.run(path_value.clone())
            >
                {icon_view}
                <span class="flex-1 text-left truncate">{label}</span>
            </button>
        }
        .into_any(),
        // Disabled rows and pathless branch headings render inert.
        _ => view! {
            <div
                class=move || row_class(active.get(), enabled)
                aria-disabled=(!enabled).to_string()
            >
                {icon_view}
                <span class="flex-1 text-left truncate">{label}</span>
            </div>
        }
        .into_any(),
    };

    if is_branch && !nested.is_empty() {
        view! {
            <div>
                {head}
                <div class="ml-4 pl-3 border-l border-gray-200 dark:border-gray-700 space-y-1">
                    {child_rows(nested, go, pathname)}
                </div>
            </div>
        }
        .into_any()
    } else {
        head
    }
}

fn row_class(active: bool, enabled: bool) -> String {
    let status = if !enabled {
        Theme::NAV_ROW_DISABLED
    } else if active {
        Theme::NAV_ROW_ACTIVE
    } else {
        Theme::NAV_ROW_IDLE
    };
    format!("{} {}", Theme::NAV_ROW, status)
}

/// Narrow viewports start with the rail collapsed.
fn starts_collapsed() -> bool {
    web_sys::window()
        .and_then(|window| window.inner_width().ok())
        .and_then(|value| value.as_f64())
        .map(|width| width < 768.0)
        .unwrap_or(false)
}
