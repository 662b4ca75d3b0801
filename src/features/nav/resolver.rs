//! Pure route-to-menu resolution. Given the selected module's top-level
//! entries and the current path, decide which single top-level entry should
//! sit expanded and which rows highlight. No state, no side effects; the
//! sidebar re-runs this whenever the path or the selected module changes.

use crate::features::nav::types::MenuEntry;

/// An entry is active when its own path is a non-empty prefix of the current
/// path, or any descendant is active. `enabled` plays no part here;
/// activeness is purely a route question.
pub fn is_active(entry: &MenuEntry, current_path: &str) -> bool {
    if let Some(path) = entry.path() {
        if !path.is_empty() && current_path.starts_with(path) {
            return true;
        }
    }
    entry
        .children()
        .iter()
        .any(|child| is_active(child, current_path))
}

/// Returns the label of the first top-level entry whose subtree contains an
/// active entry, or `None` when nothing matches. First match wins by
/// iteration order; overlapping prefixes between siblings are a catalog
/// mistake, not something to arbitrate here.
pub fn resolve_open_menu<'a, I>(top_level: I, current_path: &str) -> Option<String>
where
    I: IntoIterator<Item = &'a MenuEntry>,
{
    top_level
        .into_iter()
        .find(|entry| is_active(entry, current_path))
        .map(|entry| entry.label.clone())
}

#[cfg(test)]
mod tests {
    use super::{is_active, resolve_open_menu};
    use crate::features::nav::types::MenuEntry;

    fn tax_settings() -> MenuEntry {
        MenuEntry::branch(
            "Tax Settings",
            vec![MenuEntry::leaf("TDS", "/tax/tds")],
        )
    }

    fn company_info() -> MenuEntry {
        MenuEntry::branch(
            "Company Info",
            vec![
                MenuEntry::leaf("GST Settings", "/company-info/gst-settings"),
                MenuEntry::leaf("Branches", "/company-info/branches").disabled(),
            ],
        )
    }

    #[test]
    fn opens_the_ancestor_of_a_prefix_matching_leaf() {
        let entries = vec![tax_settings(), company_info()];
        assert_eq!(
            resolve_open_menu(&entries, "/tax/tds/detail"),
            Some("Tax Settings".to_string())
        );
    }

    #[test]
    fn unrelated_paths_resolve_to_none() {
        let entries = vec![tax_settings(), company_info()];
        assert_eq!(resolve_open_menu(&entries, "/unrelated"), None);
    }

    #[test]
    fn resolution_is_pure_and_repeatable() {
        let entries = vec![tax_settings(), company_info()];
        let first = resolve_open_menu(&entries, "/company-info/gst-settings");
        let second = resolve_open_menu(&entries, "/company-info/gst-settings");
        assert_eq!(first, second);
        assert_eq!(first, Some("Company Info".to_string()));
    }

    #[test]
    fn first_matching_sibling_wins() {
        let entries = vec![
            MenuEntry::branch("First", vec![MenuEntry::leaf("Shared", "/shared")]),
            MenuEntry::branch("Second", vec![MenuEntry::leaf("Shared Too", "/shared/deep")]),
        ];
        assert_eq!(
            resolve_open_menu(&entries, "/shared/deep/item"),
            Some("First".to_string())
        );
    }

    #[test]
    fn a_matching_top_level_leaf_is_its_own_ancestor() {
        let entries = vec![MenuEntry::leaf("Locations", "/organization/locations")];
        assert_eq!(
            resolve_open_menu(&entries, "/organization/locations/add"),
            Some("Locations".to_string())
        );
    }

    #[test]
    fn activeness_recurses_through_nested_branches() {
        let deep = MenuEntry::branch(
            "Outer",
            vec![MenuEntry::branch(
                "Inner",
                vec![MenuEntry::leaf("Leaf", "/outer/inner/leaf")],
            )],
        );
        assert!(is_active(&deep, "/outer/inner/leaf"));
        assert!(is_active(&deep, "/outer/inner/leaf/edit/42"));
        assert!(!is_active(&deep, "/outer/inner"));
    }

    #[test]
    fn branch_paths_participate_in_matching() {
        let dual = MenuEntry::branch(
            "Menus",
            vec![MenuEntry::leaf("Horizontal", "/app-menus/horizontal-ca")],
        )
        .navigable("/app-menus");
        assert!(is_active(&dual, "/app-menus"));
        assert!(is_active(&dual, "/app-menus/vertical-va"));
    }

    #[test]
    fn disabled_entries_still_highlight_by_route() {
        let entries = vec![company_info()];
        assert_eq!(
            resolve_open_menu(&entries, "/company-info/branches"),
            Some("Company Info".to_string())
        );
    }

    #[test]
    fn an_empty_entry_list_never_matches() {
        let entries: Vec<MenuEntry> = Vec::new();
        assert_eq!(resolve_open_menu(&entries, "/tax/tds"), None);
    }
}
