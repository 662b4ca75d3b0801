//! Loads the menu catalog once at startup and shares it through context.
//! When a remote catalog endpoint is configured the fetched payload replaces
//! the built-in catalog after validation; any failure leaves the catalog
//! absent and the sidebar shows its placeholder instead of erroring. The
//! fetch is fire-and-forget: no retry, no cancellation.

use crate::app_lib::{config::AppConfig, get_text_from_url};
use crate::features::nav::catalog::{MenuCatalog, builtin_catalog};
use leptos::{logging, prelude::*, task::spawn_local};

/// Lifecycle of the sidebar catalog.
#[derive(Clone, Debug, PartialEq)]
pub enum CatalogState {
    /// Remote catalog configured and still in flight.
    Loading,
    Ready(MenuCatalog),
    /// Remote catalog failed to load or validate.
    Unavailable,
}

#[derive(Clone, Copy)]
/// Menu catalog context shared through Leptos.
pub struct NavContext {
    pub catalog: RwSignal<CatalogState>,
}

/// Provides the catalog, fetching the remote one when configured.
#[component]
pub fn NavProvider(children: Children) -> impl IntoView {
    let config = AppConfig::load();
    let initial = if config.sidebar_config_url.is_empty() {
        CatalogState::Ready(builtin_catalog())
    } else {
        CatalogState::Loading
    };
    let catalog = RwSignal::new(initial);
    provide_context(NavContext { catalog });

    if !config.sidebar_config_url.is_empty() {
        let url = config.sidebar_config_url.clone();
        spawn_local(async move {
            let state = match get_text_from_url(&url).await {
                Ok(body) => match MenuCatalog::from_json(&body) {
                    Ok(parsed) => CatalogState::Ready(parsed),
                    Err(err) => {
                        logging::warn!("sidebar catalog from {url} is invalid: {err}");
                        CatalogState::Unavailable
                    }
                },
                Err(err) => {
                    logging::warn!("sidebar catalog fetch from {url} failed: {err}");
                    CatalogState::Unavailable
                }
            };
            catalog.set(state);
        });
    }

    view! { {children()} }
}

/// Returns the catalog context or a detached built-in catalog.
pub fn use_nav() -> NavContext {
    use_context::<NavContext>().unwrap_or_else(|| NavContext {
        catalog: RwSignal::new(CatalogState::Ready(builtin_catalog())),
    })
}
