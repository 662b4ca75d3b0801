//! Client helpers for the TDS settings endpoints. The entity editor also
//! uses `list_tds_settings` to offer TDS types as options.

use crate::app_lib::{AppError, delete_resource, get_data, post_json, put_json};
use crate::features::tds::types::TdsSetting;

pub async fn list_tds_settings() -> Result<Vec<TdsSetting>, AppError> {
    get_data("/tds-settings/").await
}

pub async fn get_tds_setting(id: &str) -> Result<TdsSetting, AppError> {
    let trimmed = id.trim();
    if trimmed.is_empty() {
        return Err(AppError::Config("TDS setting id is required.".to_string()));
    }
    get_data(&format!("/tds-settings/id/{trimmed}")).await
}

pub async fn create_tds_setting(setting: &TdsSetting) -> Result<(), AppError> {
    post_json("/tds-settings/", setting).await
}

pub async fn update_tds_setting(setting: &TdsSetting) -> Result<(), AppError> {
    put_json("/tds-settings/", setting).await
}

pub async fn delete_tds_setting(id: &str) -> Result<(), AppError> {
    delete_resource(&format!("/tds-settings/id/{id}")).await
}
