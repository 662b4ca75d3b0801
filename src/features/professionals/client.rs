//! Client helpers for the professional hub endpoints. Lists are paginated.

use crate::app_lib::envelope::Page;
use crate::app_lib::{AppError, delete_resource, get_page, post_json};
use crate::features::professionals::types::Professional;

pub async fn list_professionals(page: u32, limit: u32) -> Result<Page<Professional>, AppError> {
    get_page(&format!("/professional-hub/?page={page}&limit={limit}")).await
}

pub async fn create_professional(professional: &Professional) -> Result<(), AppError> {
    post_json("/professional-hub/", professional).await
}

pub async fn delete_professional(id: &str) -> Result<(), AppError> {
    delete_resource(&format!("/professional-hub/id/{id}")).await
}
