//! Client helpers for the published app/web menu endpoints.

use crate::app_lib::{AppError, delete_resource, get_data, post_json, put_json};
use crate::features::menus::types::{AppMenu, MenuKind};

/// Fetches the active records of one menu book.
pub async fn list_menus(kind: MenuKind) -> Result<Vec<AppMenu>, AppError> {
    get_data(&format!(
        "/menu/?menuType={}&appType={}&Status=true",
        kind.menu_type(),
        kind.app_type()
    ))
    .await
}

pub async fn get_menu(id: &str) -> Result<AppMenu, AppError> {
    let trimmed = id.trim();
    if trimmed.is_empty() {
        return Err(AppError::Config("Menu id is required.".to_string()));
    }
    get_data(&format!("/menu/id/{trimmed}")).await
}

pub async fn create_menu(menu: &AppMenu) -> Result<(), AppError> {
    post_json("/menu/", menu).await
}

pub async fn update_menu(menu: &AppMenu) -> Result<(), AppError> {
    put_json("/menu/", menu).await
}

pub async fn delete_menu(id: &str) -> Result<(), AppError> {
    delete_resource(&format!("/menu/id/{id}")).await
}
