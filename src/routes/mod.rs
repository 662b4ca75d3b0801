//! Route table and path constants. Every authenticated screen nests under the
//! shell layout; the sidebar catalog's paths must stay in step with the
//! literals in the `path!` macros below, which is why navigation code goes
//! through [`paths`] instead of repeating strings.

mod countries;
mod currencies;
mod dashboard;
mod entities;
mod gst;
mod locations;
mod login;
mod menus;
mod not_found;
mod professionals;
mod reviews;
mod tds;

pub(crate) use dashboard::DashboardPage;
pub(crate) use login::LoginPage;
pub(crate) use not_found::NotFoundPage;

use crate::components::AppShell;
use crate::features::currencies::types::CurrencyScope;
use crate::features::menus::types::MenuKind;
use countries::{CountriesListPage, CountryEditorPage};
use currencies::{CurrenciesListPage, CurrencyEditorPage};
use entities::{EntitiesListPage, EntityEditorPage};
use gst::{GstEditorPage, GstListPage};
use leptos::prelude::*;
use leptos_router::components::{ParentRoute, Redirect, Route, Routes};
use leptos_router::path;
use locations::{LocationAddPage, LocationsListPage};
use menus::{MenuEditorPage, MenusListPage};
use professionals::{ProfessionalAddPage, ProfessionalsListPage};
use reviews::ReviewsListPage;
use tds::{TdsEditorPage, TdsListPage};

/// How an editor page opened: blank form, editable record, or read-only.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum EditorMode {
    Add,
    Edit,
    View,
}

impl EditorMode {
    pub fn is_add(self) -> bool {
        matches!(self, EditorMode::Add)
    }

    pub fn is_view(self) -> bool {
        matches!(self, EditorMode::View)
    }

    pub fn verb(self) -> &'static str {
        match self {
            EditorMode::Add => "Add",
            EditorMode::Edit => "Edit",
            EditorMode::View => "View",
        }
    }
}

/// Canonical navigation targets. The sidebar catalog and all in-app links use
/// these so a route move happens in one place.
pub(crate) mod paths {
    pub const LOGIN: &str = "/login";
    pub const DASHBOARD: &str = "/dashboard";
    pub const CURRENCIES: &str = "/organization/harivaraone/currency";
    pub const INIT_CURRENCIES: &str = "/organization/harivaraone/init-currency";
    pub const COUNTRIES: &str = "/organization/harivaraone/country-inti";
    pub const ENTITIES: &str = "/organization/harivaraone/entity-list";
    pub const TDS: &str = "/organization/tds-settings/tds";
    pub const GST: &str = "/organization/company-info/gst-settings";
    pub const APP_MENUS_HORIZONTAL_CA: &str = "/organization/app-menus/horizontal-ca";
    pub const APP_MENUS_VERTICAL_CA: &str = "/organization/app-menus/vertical-ca";
    pub const APP_MENUS_VERTICAL_VA: &str = "/organization/app-menus/vertical-va";
    pub const LOCATIONS: &str = "/organization/locations";
    pub const PROFESSIONALS: &str = "/puja/professionals";
    pub const REVIEWS: &str = "/puja/reviews";

    pub fn add(base: &str) -> String {
        format!("{base}/add")
    }

    pub fn edit(base: &str, id: &str) -> String {
        format!("{base}/edit/{id}")
    }

    pub fn view(base: &str, id: &str) -> String {
        format!("{base}/view/{id}")
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFoundPage /> }>
            <Route path=path!("/login") view=LoginPage />
            <ParentRoute path=path!("") view=AppShell>
                <Route path=path!("/") view=|| view! { <Redirect path=paths::DASHBOARD /> } />
                <Route path=path!("/dashboard") view=DashboardPage />

                <Route
                    path=path!("/organization/harivaraone/currency")
                    view=|| view! { <CurrenciesListPage scope=CurrencyScope::Domestic /> }
                />
                <Route
                    path=path!("/organization/harivaraone/currency/add")
                    view=|| view! { <CurrencyEditorPage scope=CurrencyScope::Domestic mode=EditorMode::Add /> }
                />
                <Route
                    path=path!("/organization/harivaraone/currency/edit/:id")
                    view=|| view! { <CurrencyEditorPage scope=CurrencyScope::Domestic mode=EditorMode::Edit /> }
                />
                <Route
                    path=path!("/organization/harivaraone/currency/view/:id")
                    view=|| view! { <CurrencyEditorPage scope=CurrencyScope::Domestic mode=EditorMode::View /> }
                />

                <Route
                    path=path!("/organization/harivaraone/init-currency")
                    view=|| view! { <CurrenciesListPage scope=CurrencyScope::International /> }
                />
                <Route
                    path=path!("/organization/harivaraone/init-currency/add")
                    view=|| view! { <CurrencyEditorPage scope=CurrencyScope::International mode=EditorMode::Add /> }
                />
                <Route
                    path=path!("/organization/harivaraone/init-currency/edit/:id")
                    view=|| view! { <CurrencyEditorPage scope=CurrencyScope::International mode=EditorMode::Edit /> }
                />
                <Route
                    path=path!("/organization/harivaraone/init-currency/view/:id")
                    view=|| view! { <CurrencyEditorPage scope=CurrencyScope::International mode=EditorMode::View /> }
                />

                <Route path=path!("/organization/harivaraone/country-inti") view=CountriesListPage />
                <Route
                    path=path!("/organization/harivaraone/country-inti/add")
                    view=|| view! { <CountryEditorPage mode=EditorMode::Add /> }
                />
                <Route
                    path=path!("/organization/harivaraone/country-inti/edit/:id")
                    view=|| view! { <CountryEditorPage mode=EditorMode::Edit /> }
                />
                <Route
                    path=path!("/organization/harivaraone/country-inti/view/:id")
                    view=|| view! { <CountryEditorPage mode=EditorMode::View /> }
                />

                <Route path=path!("/organization/harivaraone/entity-list") view=EntitiesListPage />
                <Route
                    path=path!("/organization/harivaraone/entity-list/add")
                    view=|| view! { <EntityEditorPage mode=EditorMode::Add /> }
                />
                <Route
                    path=path!("/organization/harivaraone/entity-list/edit/:id")
                    view=|| view! { <EntityEditorPage mode=EditorMode::Edit /> }
                />
                <Route
                    path=path!("/organization/harivaraone/entity-list/view/:id")
                    view=|| view! { <EntityEditorPage mode=EditorMode::View /> }
                />

                <Route path=path!("/organization/tds-settings/tds") view=TdsListPage />
                <Route
                    path=path!("/organization/tds-settings/tds/add")
                    view=|| view! { <TdsEditorPage mode=EditorMode::Add /> }
                />
                <Route
                    path=path!("/organization/tds-settings/tds/edit/:id")
                    view=|| view! { <TdsEditorPage mode=EditorMode::Edit /> }
                />
                <Route
                    path=path!("/organization/tds-settings/tds/view/:id")
                    view=|| view! { <TdsEditorPage mode=EditorMode::View /> }
                />

                <Route path=path!("/organization/company-info/gst-settings") view=GstListPage />
                <Route
                    path=path!("/organization/company-info/gst-settings/add")
                    view=|| view! { <GstEditorPage mode=EditorMode::Add /> }
                />
                <Route
                    path=path!("/organization/company-info/gst-settings/edit/:id")
                    view=|| view! { <GstEditorPage mode=EditorMode::Edit /> }
                />
                <Route
                    path=path!("/organization/company-info/gst-settings/view/:id")
                    view=|| view! { <GstEditorPage mode=EditorMode::View /> }
                />

                <Route
                    path=path!("/organization/app-menus")
                    view=|| view! { <Redirect path=paths::APP_MENUS_HORIZONTAL_CA /> }
                />
                <Route
                    path=path!("/organization/app-menus/horizontal-ca")
                    view=|| view! { <MenusListPage kind=MenuKind::HorizontalCa /> }
                />
                <Route
                    path=path!("/organization/app-menus/horizontal-ca/add")
                    view=|| view! { <MenuEditorPage kind=MenuKind::HorizontalCa mode=EditorMode::Add /> }
                />
                <Route
                    path=path!("/organization/app-menus/horizontal-ca/edit/:id")
                    view=|| view! { <MenuEditorPage kind=MenuKind::HorizontalCa mode=EditorMode::Edit /> }
                />
                <Route
                    path=path!("/organization/app-menus/horizontal-ca/view/:id")
                    view=|| view! { <MenuEditorPage kind=MenuKind::HorizontalCa mode=EditorMode::View /> }
                />
                <Route
                    path=path!("/organization/app-menus/vertical-ca")
                    view=|| view! { <MenusListPage kind=MenuKind::VerticalCa /> }
                />
                <Route
                    path=path!("/organization/app-menus/vertical-ca/add")
                    view=|| view! { <MenuEditorPage kind=MenuKind::VerticalCa mode=EditorMode::Add /> }
                />
                <Route
                    path=path!("/organization/app-menus/vertical-ca/edit/:id")
                    view=|| view! { <MenuEditorPage kind=MenuKind::VerticalCa mode=EditorMode::Edit /> }
                />
                <Route
                    path=path!("/organization/app-menus/vertical-ca/view/:id")
                    view=|| view! { <MenuEditorPage kind=MenuKind::VerticalCa mode=EditorMode::View /> }
                />
                <Route
                    path=path!("/organization/app-menus/vertical-va")
                    view=|| view! { <MenusListPage kind=MenuKind::VerticalVa /> }
                />
                <Route
                    path=path!("/organization/app-menus/vertical-va/add")
                    view=|| view! { <MenuEditorPage kind=MenuKind::VerticalVa mode=EditorMode::Add /> }
                />
                <Route
                    path=path!("/organization/app-menus/vertical-va/edit/:id")
                    view=|| view! { <MenuEditorPage kind=MenuKind::VerticalVa mode=EditorMode::Edit /> }
                />
                <Route
                    path=path!("/organization/app-menus/vertical-va/view/:id")
                    view=|| view! { <MenuEditorPage kind=MenuKind::VerticalVa mode=EditorMode::View /> }
                />

                <Route path=path!("/organization/locations") view=LocationsListPage />
                <Route path=path!("/organization/locations/add") view=LocationAddPage />

                <Route path=path!("/puja/professionals") view=ProfessionalsListPage />
                <Route path=path!("/puja/professionals/add") view=ProfessionalAddPage />
                <Route path=path!("/puja/reviews") view=ReviewsListPage />

                <Route path=path!("/*any") view=NotFoundPage />
            </ParentRoute>
        </Routes>
    }
}
