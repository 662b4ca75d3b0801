//! Client helpers for the location endpoints. Lists are paginated.

use crate::app_lib::envelope::Page;
use crate::app_lib::{AppError, get_page, post_json};
use crate::features::locations::types::Location;

pub async fn list_locations(page: u32, limit: u32) -> Result<Page<Location>, AppError> {
    get_page(&format!("/location/?page={page}&limit={limit}")).await
}

pub async fn create_location(location: &Location) -> Result<(), AppError> {
    post_json("/location/", location).await
}
