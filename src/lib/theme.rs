//! Shared Tailwind class constants so the sidebar, header, and CRUD screens
//! stay visually consistent.

pub struct Theme;

impl Theme {
    /// Base classes for any sidebar row, branch or leaf.
    pub const NAV_ROW: &'static str =
        "w-full flex items-center gap-3 px-3 py-2 text-sm font-medium rounded-lg transition-colors";

    /// Added to a row whose subtree matches the current route.
    pub const NAV_ROW_ACTIVE: &'static str =
        "text-indigo-600 bg-indigo-50 dark:text-indigo-300 dark:bg-indigo-900/40 font-bold";

    /// Added to an interactive row that is not active.
    pub const NAV_ROW_IDLE: &'static str =
        "text-gray-500 dark:text-gray-400 hover:bg-gray-50 dark:hover:bg-gray-800 hover:text-gray-900 dark:hover:text-white";

    /// Added to a row whose entry is disabled in the catalog.
    pub const NAV_ROW_DISABLED: &'static str =
        "text-gray-300 dark:text-gray-600 cursor-not-allowed select-none";

    /// Material symbol icon inside a nav row.
    pub const NAV_ICON: &'static str = "material-symbols-outlined text-xl leading-none";

    /// Uppercase section heading above a group of nav rows.
    pub const NAV_SECTION: &'static str =
        "px-2 text-xs font-semibold text-gray-400 dark:text-gray-500 uppercase tracking-wider";

    /// Standard text input used across editor forms.
    pub const INPUT: &'static str =
        "bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-indigo-500 focus:border-indigo-500 block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:placeholder-gray-400 dark:text-white disabled:opacity-60 disabled:cursor-not-allowed";

    /// Label above a form input.
    pub const LABEL: &'static str =
        "block mb-2 text-sm font-medium text-gray-900 dark:text-white";

    /// Table header cell in list screens.
    pub const TH: &'static str =
        "px-6 py-3 text-left text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider";

    /// Table body cell in list screens.
    pub const TD: &'static str =
        "px-6 py-4 whitespace-nowrap text-sm text-gray-600 dark:text-gray-300";

    /// Inline icon button for row actions (edit, view, delete).
    pub const ROW_ACTION: &'static str =
        "text-gray-400 hover:text-indigo-600 dark:hover:text-indigo-400 transition-colors";
}
