//! App/web menu payloads. One record type serves the three published menu
//! books (horizontal CA, vertical CA, vertical VA); [`MenuKind`] carries the
//! query parameters that tell them apart.

use serde::{Deserialize, Serialize};

/// Which published menu book a screen works against.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuKind {
    HorizontalCa,
    VerticalCa,
    VerticalVa,
}

impl MenuKind {
    pub fn menu_type(self) -> &'static str {
        match self {
            MenuKind::HorizontalCa => "horizontal",
            MenuKind::VerticalCa | MenuKind::VerticalVa => "vertical",
        }
    }

    pub fn app_type(self) -> &'static str {
        match self {
            MenuKind::HorizontalCa | MenuKind::VerticalCa => "ca",
            MenuKind::VerticalVa => "va",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            MenuKind::HorizontalCa => "Horizontal Menus (CA)",
            MenuKind::VerticalCa => "Vertical Menus (CA)",
            MenuKind::VerticalVa => "Vertical Menus (VA)",
        }
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct AppMenu {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub menu_name: String,
    pub navigate_to: String,
    pub icon: String,
    pub status: bool,
    /// Sort position within the published menu.
    pub rearrange: u32,
    pub menu_type: String,
    pub app_type: String,
}

impl AppMenu {
    /// Blank editor values for the add form, pinned to one menu book.
    pub fn reference(kind: MenuKind) -> Self {
        Self {
            status: true,
            rearrange: 1,
            menu_type: kind.menu_type().to_string(),
            app_type: kind.app_type().to_string(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{AppMenu, MenuKind};

    #[test]
    fn kinds_map_to_their_query_parameters() {
        assert_eq!(MenuKind::HorizontalCa.menu_type(), "horizontal");
        assert_eq!(MenuKind::HorizontalCa.app_type(), "ca");
        assert_eq!(MenuKind::VerticalVa.menu_type(), "vertical");
        assert_eq!(MenuKind::VerticalVa.app_type(), "va");
    }

    #[test]
    fn reference_values_pin_the_menu_book() {
        let menu = AppMenu::reference(MenuKind::VerticalVa);
        assert_eq!(menu.menu_type, "vertical");
        assert_eq!(menu.app_type, "va");
        assert_eq!(menu.rearrange, 1);
    }
}
