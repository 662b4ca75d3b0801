//! Client helpers for the GST settings endpoints. Create and update use the
//! paths the backend actually exposes, which are not symmetrical.

use crate::app_lib::{AppError, delete_resource, get_data, post_json, put_json};
use crate::features::gst::types::GstSetting;

pub async fn list_gst_settings() -> Result<Vec<GstSetting>, AppError> {
    get_data("/gst-settings/").await
}

pub async fn get_gst_setting(id: &str) -> Result<GstSetting, AppError> {
    let trimmed = id.trim();
    if trimmed.is_empty() {
        return Err(AppError::Config("GST setting id is required.".to_string()));
    }
    get_data(&format!("/gst-settings/id/{trimmed}")).await
}

pub async fn create_gst_setting(setting: &GstSetting) -> Result<(), AppError> {
    post_json("/gst-settings/create/", setting).await
}

pub async fn update_gst_setting(setting: &GstSetting) -> Result<(), AppError> {
    put_json("/gst-settings", setting).await
}

pub async fn delete_gst_setting(id: &str) -> Result<(), AppError> {
    delete_resource(&format!("/gst-settings/id/{id}")).await
}
