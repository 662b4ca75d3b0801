//! Client helpers for the review endpoints. Lists are paginated.

use crate::app_lib::envelope::Page;
use crate::app_lib::{AppError, delete_resource, get_page};
use crate::features::reviews::types::PujaReview;

pub async fn list_reviews(page: u32, limit: u32) -> Result<Page<PujaReview>, AppError> {
    get_page(&format!("/professional-review/?page={page}&limit={limit}")).await
}

pub async fn delete_review(id: &str) -> Result<(), AppError> {
    delete_resource(&format!("/professional-review/id/{id}")).await
}
