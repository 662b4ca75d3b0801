//! Module registry: defined once at startup, immutable apart from the
//! selection pointer. `select` with an unknown key is a silent no-op so a
//! stale or mistyped key can never wedge the console.

/// A selectable organization module.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Module {
    /// Stable key, unique within the registry; also the catalog key.
    pub key: String,
    /// Human-readable label shown in the header switcher.
    pub display_label: String,
}

impl Module {
    fn new(key: &str, display_label: &str) -> Self {
        Self {
            key: key.to_string(),
            display_label: display_label.to_string(),
        }
    }
}

/// Ordered modules plus the selected index. Display order matters; the first
/// module is the default selection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModuleRegistry {
    modules: Vec<Module>,
    selected: usize,
}

impl ModuleRegistry {
    /// Builds a registry from an ordered module list. Duplicate keys are
    /// dropped (first occurrence wins) and an empty list falls back to the
    /// defaults, so there is always a selectable module.
    pub fn new(modules: Vec<Module>) -> Self {
        let mut unique: Vec<Module> = Vec::with_capacity(modules.len());
        for module in modules {
            if unique.iter().all(|existing| existing.key != module.key) {
                unique.push(module);
            }
        }
        if unique.is_empty() {
            return Self::with_defaults();
        }
        Self {
            modules: unique,
            selected: 0,
        }
    }

    /// The shipped module set, in display order.
    pub fn with_defaults() -> Self {
        Self {
            modules: vec![
                Module::new("organization", "Organization"),
                Module::new("harivara", "Harivara"),
                Module::new("epuja", "E-Puja"),
                Module::new("temple-tour", "Temple Tour"),
                Module::new("temple-service", "Temple Service"),
            ],
            selected: 0,
        }
    }

    pub fn modules(&self) -> &[Module] {
        &self.modules
    }

    pub fn selected(&self) -> &Module {
        &self.modules[self.selected]
    }

    /// Moves the selection pointer. Unknown keys leave the selection
    /// unchanged and report `false`.
    pub fn select(&mut self, key: &str) -> bool {
        match self.modules.iter().position(|module| module.key == key) {
            Some(index) => {
                self.selected = index;
                true
            }
            None => false,
        }
    }
}

impl Default for ModuleRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::{Module, ModuleRegistry};

    #[test]
    fn the_first_module_is_selected_by_default() {
        let registry = ModuleRegistry::with_defaults();
        assert_eq!(registry.selected().key, "organization");
        assert_eq!(registry.modules().len(), 5);
    }

    #[test]
    fn selecting_a_known_key_moves_the_pointer() {
        let mut registry = ModuleRegistry::with_defaults();
        assert!(registry.select("epuja"));
        assert_eq!(registry.selected().display_label, "E-Puja");
    }

    #[test]
    fn selecting_an_unknown_key_is_a_silent_no_op() {
        let mut registry = ModuleRegistry::with_defaults();
        registry.select("harivara");
        assert!(!registry.select("astrology"));
        assert_eq!(registry.selected().key, "harivara");
    }

    #[test]
    fn duplicate_keys_keep_the_first_definition() {
        let registry = ModuleRegistry::new(vec![
            Module::new("one", "One"),
            Module::new("one", "Shadowed"),
            Module::new("two", "Two"),
        ]);
        assert_eq!(registry.modules().len(), 2);
        assert_eq!(registry.modules()[0].display_label, "One");
    }

    #[test]
    fn an_empty_list_falls_back_to_the_defaults() {
        let registry = ModuleRegistry::new(Vec::new());
        assert_eq!(registry.selected().key, "organization");
    }

    #[test]
    fn display_order_is_preserved() {
        let keys: Vec<_> = ModuleRegistry::with_defaults()
            .modules()
            .iter()
            .map(|module| module.key.clone())
            .collect();
        assert_eq!(
            keys,
            ["organization", "harivara", "epuja", "temple-tour", "temple-service"]
        );
    }
}
