//! The menu catalog: which sections and entries each module shows. The
//! built-in catalog below is the default; deployments may serve the same
//! shape from an endpoint (`sidebar_config_url`), in which case the fetched
//! payload replaces it wholesale after validation.

use crate::features::nav::types::{
    CatalogError, EntrySpec, MenuEntry, MenuSection, classify_siblings,
};
use std::collections::HashMap;

/// Validated menu sections per module key.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MenuCatalog {
    modules: HashMap<String, Vec<MenuSection>>,
}

impl MenuCatalog {
    /// Sections for a module, in catalog order. Unknown modules get an empty
    /// slice, which the sidebar renders as "no menu available".
    pub fn sections(&self, module_key: &str) -> &[MenuSection] {
        self.modules
            .get(module_key)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Top-level entries for a module, flattened across its sections in
    /// order. This is the sequence the resolver walks.
    pub fn top_level(&self, module_key: &str) -> impl Iterator<Item = &MenuEntry> {
        self.sections(module_key)
            .iter()
            .flat_map(|section| section.entries.iter())
    }

    /// Validates a wire payload into a catalog. Each element of a module's
    /// section list must be an object holding exactly one section so section
    /// order survives the trip through JSON.
    pub fn from_wire(payload: WireCatalog) -> Result<Self, CatalogError> {
        let mut modules = HashMap::new();
        for (module_key, wire_sections) in payload {
            let mut sections = Vec::with_capacity(wire_sections.len());
            for wire_section in wire_sections {
                if wire_section.len() != 1 {
                    return Err(CatalogError::AmbiguousSection);
                }
                for (name, specs) in wire_section {
                    sections.push(MenuSection {
                        name,
                        entries: classify_siblings(specs)?,
                    });
                }
            }
            modules.insert(module_key, sections);
        }
        Ok(Self { modules })
    }

    /// Parses and validates the JSON served by the catalog endpoint.
    pub fn from_json(json: &str) -> Result<Self, CatalogJsonError> {
        let payload: WireCatalog =
            serde_json::from_str(json).map_err(|err| CatalogJsonError::Json(err.to_string()))?;
        Self::from_wire(payload).map_err(CatalogJsonError::Invalid)
    }
}

/// `module key -> [ { section name: [entry...] } ]`, as served over the wire.
pub type WireCatalog = HashMap<String, Vec<HashMap<String, Vec<EntrySpec>>>>;

#[derive(Clone, Debug, PartialEq)]
pub enum CatalogJsonError {
    Json(String),
    Invalid(CatalogError),
}

impl std::fmt::Display for CatalogJsonError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogJsonError::Json(message) => write!(formatter, "catalog is not valid JSON: {message}"),
            CatalogJsonError::Invalid(err) => write!(formatter, "catalog is invalid: {err}"),
        }
    }
}

impl std::error::Error for CatalogJsonError {}

/// The shipped catalog. Paths mirror the route table in `routes::paths`.
pub fn builtin_catalog() -> MenuCatalog {
    let mut modules = HashMap::new();

    modules.insert(
        "organization".to_string(),
        vec![
            MenuSection {
                name: "Harivara One".to_string(),
                entries: vec![
                    MenuEntry::branch(
                        "Harivara One",
                        vec![
                            MenuEntry::leaf("Currency", "/organization/harivaraone/currency")
                                .icon("payments"),
                            MenuEntry::leaf(
                                "Currency - Intl",
                                "/organization/harivaraone/init-currency",
                            )
                            .disabled(),
                            MenuEntry::leaf(
                                "Country - Intl",
                                "/organization/harivaraone/country-inti",
                            )
                            .icon("public"),
                            MenuEntry::leaf("Entity", "/organization/harivaraone/entity-list")
                                .icon("category"),
                        ],
                    )
                    .icon("account_tree"),
                ],
            },
            MenuSection {
                name: "Configuration".to_string(),
                entries: vec![
                    MenuEntry::branch(
                        "Web & App Menus",
                        vec![
                            MenuEntry::leaf(
                                "Horizontal Menus (CA)",
                                "/organization/app-menus/horizontal-ca",
                            ),
                            MenuEntry::leaf(
                                "Vertical Menus (CA)",
                                "/organization/app-menus/vertical-ca",
                            ),
                            MenuEntry::leaf(
                                "Vertical Menus (VA)",
                                "/organization/app-menus/vertical-va",
                            ),
                        ],
                    )
                    .navigable("/organization/app-menus")
                    .icon("list"),
                    MenuEntry::branch(
                        "Tax Settings",
                        vec![MenuEntry::leaf("TDS", "/organization/tds-settings/tds").icon("gavel")],
                    )
                    .icon("settings"),
                    MenuEntry::branch(
                        "Company Info",
                        vec![
                            MenuEntry::leaf(
                                "Business Details",
                                "/organization/company-info/business-details",
                            )
                            .disabled(),
                            MenuEntry::leaf(
                                "GST Settings",
                                "/organization/company-info/gst-settings",
                            )
                            .icon("account_balance"),
                        ],
                    )
                    .icon("info"),
                ],
            },
            MenuSection {
                name: "Operations".to_string(),
                entries: vec![
                    MenuEntry::leaf("Locations", "/organization/locations").icon("location_on"),
                ],
            },
        ],
    );

    modules.insert(
        "harivara".to_string(),
        vec![MenuSection {
            name: "Service Desk".to_string(),
            entries: vec![
                MenuEntry::leaf("Dashboard", "/dashboard").icon("dashboard"),
                MenuEntry::leaf("Professionals", "/puja/professionals").icon("self_improvement"),
                MenuEntry::leaf("Puja Reviews", "/puja/reviews").icon("reviews"),
            ],
        }],
    );

    modules.insert(
        "epuja".to_string(),
        vec![MenuSection {
            name: "E-Puja".to_string(),
            entries: vec![
                MenuEntry::leaf("Dashboard", "/dashboard").icon("dashboard"),
                MenuEntry::leaf("Settings", "/epuja/settings").icon("settings").disabled(),
            ],
        }],
    );

    modules.insert(
        "temple-tour".to_string(),
        vec![MenuSection {
            name: "Temple Tour".to_string(),
            entries: vec![
                MenuEntry::leaf("Dashboard", "/dashboard").icon("dashboard"),
                MenuEntry::leaf("Settings", "/temple-tour/settings")
                    .icon("settings")
                    .disabled(),
            ],
        }],
    );

    modules.insert(
        "temple-service".to_string(),
        vec![MenuSection {
            name: "Temple Service".to_string(),
            entries: vec![
                MenuEntry::leaf("Dashboard", "/dashboard").icon("dashboard"),
                MenuEntry::leaf("Settings", "/temple-service/settings")
                    .icon("settings")
                    .disabled(),
            ],
        }],
    );

    MenuCatalog { modules }
}

#[cfg(test)]
mod tests {
    use super::{CatalogJsonError, MenuCatalog, builtin_catalog};
    use crate::features::modules::registry::ModuleRegistry;
    use crate::features::nav::resolver::resolve_open_menu;
    use crate::features::nav::types::CatalogError;
    use std::collections::HashSet;

    #[test]
    fn builtin_catalog_covers_every_default_module() {
        let catalog = builtin_catalog();
        for module in ModuleRegistry::with_defaults().modules() {
            assert!(
                !catalog.sections(&module.key).is_empty(),
                "module {} has no sections",
                module.key
            );
        }
    }

    #[test]
    fn builtin_top_level_labels_are_unique_per_module() {
        let catalog = builtin_catalog();
        for module in ModuleRegistry::with_defaults().modules() {
            let mut seen = HashSet::new();
            for entry in catalog.top_level(&module.key) {
                assert!(
                    seen.insert(entry.label.clone()),
                    "duplicate top-level label {} in {}",
                    entry.label,
                    module.key
                );
            }
        }
    }

    #[test]
    fn builtin_catalog_resolves_the_currency_route() {
        let catalog = builtin_catalog();
        let open = resolve_open_menu(
            catalog.top_level("organization"),
            "/organization/harivaraone/currency/edit/42",
        );
        assert_eq!(open, Some("Harivara One".to_string()));
    }

    #[test]
    fn unknown_modules_yield_an_empty_menu() {
        let catalog = builtin_catalog();
        assert!(catalog.sections("astrology").is_empty());
        assert_eq!(catalog.top_level("astrology").count(), 0);
    }

    #[test]
    fn wire_payloads_round_trip_through_validation() {
        let catalog = MenuCatalog::from_json(
            r#"{
                "organization": [
                    { "Tax Settings": [
                        { "label": "Tax Settings", "children": [
                            { "label": "TDS", "path": "/tax/tds" }
                        ]}
                    ]}
                ]
            }"#,
        )
        .expect("valid catalog");

        let sections = catalog.sections("organization");
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].name, "Tax Settings");
        assert_eq!(
            resolve_open_menu(catalog.top_level("organization"), "/tax/tds/detail"),
            Some("Tax Settings".to_string())
        );
    }

    #[test]
    fn invalid_wire_entries_are_rejected_as_a_whole() {
        let err = MenuCatalog::from_json(
            r#"{ "organization": [ { "Broken": [ { "label": "Ghost" } ] } ] }"#,
        )
        .unwrap_err();
        assert_eq!(
            err,
            CatalogJsonError::Invalid(CatalogError::Dangling("Ghost".to_string()))
        );
    }

    #[test]
    fn malformed_json_is_reported_not_panicked() {
        assert!(matches!(
            MenuCatalog::from_json("{ not json").unwrap_err(),
            CatalogJsonError::Json(_)
        ));
    }
}
