//! Client helpers for the currency endpoints.

use crate::app_lib::{AppError, delete_resource, get_data, post_json, put_json};
use crate::features::currencies::types::{Currency, CurrencyScope};

/// Fetches the currency list for one scope (domestic or international).
pub async fn list_currencies(scope: CurrencyScope) -> Result<Vec<Currency>, AppError> {
    get_data(&format!("/currency/?currency_type={}", scope.as_query())).await
}

/// Fetches one currency by id after basic input validation.
pub async fn get_currency(id: &str) -> Result<Currency, AppError> {
    let trimmed = id.trim();
    if trimmed.is_empty() {
        return Err(AppError::Config("Currency id is required.".to_string()));
    }
    get_data(&format!("/currency/id/{trimmed}")).await
}

pub async fn create_currency(currency: &Currency) -> Result<(), AppError> {
    post_json("/currency/", currency).await
}

pub async fn update_currency(currency: &Currency) -> Result<(), AppError> {
    put_json("/currency/", currency).await
}

pub async fn delete_currency(id: &str) -> Result<(), AppError> {
    delete_resource(&format!("/currency/id/{id}")).await
}
