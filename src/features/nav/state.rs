//! Sidebar UI state machine. One owner (the sidebar component) mutates this
//! through the methods below. The invariants (single-open accordion,
//! collapse clearing the open key, popovers living only in the collapsed
//! rail) are enforced here rather than scattered through view code.

/// Transient overlay shown for a branch while the rail is collapsed.
#[derive(Clone, Debug, PartialEq)]
pub struct PopoverTarget {
    /// Label of the branch whose children the overlay lists.
    pub menu_key: String,
    /// Viewport offset of the clicked row, used to anchor the overlay.
    pub anchor_top: f64,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SidebarState {
    collapsed: bool,
    open_menu_key: Option<String>,
    popover: Option<PopoverTarget>,
}

impl SidebarState {
    pub fn new(collapsed: bool) -> Self {
        Self {
            collapsed,
            ..Self::default()
        }
    }

    pub fn collapsed(&self) -> bool {
        self.collapsed
    }

    pub fn open_menu_key(&self) -> Option<&str> {
        self.open_menu_key.as_deref()
    }

    pub fn popover(&self) -> Option<&PopoverTarget> {
        self.popover.as_ref()
    }

    /// Accordion toggle for a top-level branch in the expanded panel: opening
    /// one closes any other, clicking the open one closes it.
    pub fn toggle_branch(&mut self, menu_key: &str) {
        if self.open_menu_key.as_deref() == Some(menu_key) {
            self.open_menu_key = None;
        } else {
            self.open_menu_key = Some(menu_key.to_string());
        }
    }

    /// Anchors the collapsed-rail overlay at a branch row. Leaves the
    /// accordion key untouched.
    pub fn open_popover(&mut self, menu_key: &str, anchor_top: f64) {
        self.popover = Some(PopoverTarget {
            menu_key: menu_key.to_string(),
            anchor_top,
        });
    }

    pub fn close_popover(&mut self) {
        self.popover = None;
    }

    /// Collapsing clears the accordion; it does not survive the mode switch.
    pub fn set_collapsed(&mut self, collapsed: bool) {
        self.collapsed = collapsed;
        self.popover = None;
        if collapsed {
            self.open_menu_key = None;
        }
    }

    pub fn toggle_collapsed(&mut self) {
        self.set_collapsed(!self.collapsed);
    }

    /// Applies a resolver result after the route (or module) actually
    /// changed. Any overlay closes; the accordion follows the resolver only
    /// while expanded.
    pub fn apply_route(&mut self, resolved: Option<String>) {
        self.popover = None;
        if !self.collapsed {
            self.open_menu_key = resolved;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::SidebarState;

    #[test]
    fn accordion_keeps_at_most_one_branch_open() {
        let mut state = SidebarState::new(false);
        state.toggle_branch("Tax Settings");
        assert_eq!(state.open_menu_key(), Some("Tax Settings"));

        state.toggle_branch("Company Info");
        assert_eq!(state.open_menu_key(), Some("Company Info"));

        state.toggle_branch("Company Info");
        assert_eq!(state.open_menu_key(), None);
    }

    #[test]
    fn collapsing_always_clears_the_open_branch() {
        let mut state = SidebarState::new(false);
        state.toggle_branch("Tax Settings");
        state.set_collapsed(true);
        assert!(state.collapsed());
        assert_eq!(state.open_menu_key(), None);
    }

    #[test]
    fn popovers_do_not_touch_the_accordion() {
        let mut state = SidebarState::new(true);
        state.open_popover("Tax Settings", 128.0);
        assert_eq!(state.open_menu_key(), None);
        assert_eq!(
            state.popover().map(|p| p.menu_key.as_str()),
            Some("Tax Settings")
        );

        state.close_popover();
        assert!(state.popover().is_none());
    }

    #[test]
    fn route_changes_drive_the_accordion_while_expanded() {
        let mut state = SidebarState::new(false);
        state.apply_route(Some("Tax Settings".to_string()));
        assert_eq!(state.open_menu_key(), Some("Tax Settings"));

        state.apply_route(None);
        assert_eq!(state.open_menu_key(), None);
    }

    #[test]
    fn route_changes_close_overlays_and_skip_the_accordion_while_collapsed() {
        let mut state = SidebarState::new(true);
        state.open_popover("Company Info", 64.0);
        state.apply_route(Some("Company Info".to_string()));
        assert!(state.popover().is_none());
        assert_eq!(state.open_menu_key(), None);
    }

    #[test]
    fn expanding_again_starts_from_a_clean_slate() {
        let mut state = SidebarState::new(false);
        state.toggle_branch("Tax Settings");
        state.toggle_collapsed();
        state.toggle_collapsed();
        assert!(!state.collapsed());
        assert_eq!(state.open_menu_key(), None);
    }
}
