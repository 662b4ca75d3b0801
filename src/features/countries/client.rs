//! Client helpers for the country endpoints.

use crate::app_lib::{AppError, delete_resource, get_data, post_json, put_json};
use crate::features::countries::types::Country;

pub async fn list_countries() -> Result<Vec<Country>, AppError> {
    get_data("/country/").await
}

pub async fn get_country(id: &str) -> Result<Country, AppError> {
    let trimmed = id.trim();
    if trimmed.is_empty() {
        return Err(AppError::Config("Country id is required.".to_string()));
    }
    get_data(&format!("/country/id/{trimmed}")).await
}

pub async fn create_country(country: &Country) -> Result<(), AppError> {
    post_json("/country/", country).await
}

pub async fn update_country(country: &Country) -> Result<(), AppError> {
    put_json("/country/", country).await
}

pub async fn delete_country(id: &str) -> Result<(), AppError> {
    delete_resource(&format!("/country/id/{id}")).await
}
