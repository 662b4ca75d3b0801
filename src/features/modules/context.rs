//! Reactive wrapper around the module registry, provided once at the app root
//! and injected into the header and sidebar. `select` is the only mutator;
//! nothing else in the tree writes module state.

use crate::features::modules::registry::{Module, ModuleRegistry};
use leptos::prelude::*;

#[derive(Clone, Copy)]
/// Module selection context shared through Leptos.
pub struct ModuleContext {
    registry: RwSignal<ModuleRegistry>,
    pub selected: Signal<Module>,
}

impl ModuleContext {
    fn new(registry: RwSignal<ModuleRegistry>) -> Self {
        let selected = Signal::derive(move || registry.with(|state| state.selected().clone()));
        Self { registry, selected }
    }

    /// Snapshot of the registry's modules, in display order.
    pub fn modules(&self) -> Vec<Module> {
        self.registry.with(|state| state.modules().to_vec())
    }

    /// Moves the selection. Unknown keys are ignored, matching the registry.
    pub fn select(&self, key: &str) {
        self.registry.update(|state| {
            state.select(key);
        });
    }
}

/// Provides the module context for the whole app.
#[component]
pub fn ModuleProvider(children: Children) -> impl IntoView {
    let registry = RwSignal::new(ModuleRegistry::with_defaults());
    provide_context(ModuleContext::new(registry));

    view! { {children()} }
}

/// Returns the module context or a detached default registry.
pub fn use_modules() -> ModuleContext {
    use_context::<ModuleContext>()
        .unwrap_or_else(|| ModuleContext::new(RwSignal::new(ModuleRegistry::with_defaults())))
}
