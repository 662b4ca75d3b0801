//! Client helpers for the entity endpoints.

use crate::app_lib::{AppError, delete_resource, get_data, post_json, put_json};
use crate::features::entities::types::Entity;

pub async fn list_entities() -> Result<Vec<Entity>, AppError> {
    get_data("/entity/").await
}

pub async fn get_entity(id: &str) -> Result<Entity, AppError> {
    let trimmed = id.trim();
    if trimmed.is_empty() {
        return Err(AppError::Config("Entity id is required.".to_string()));
    }
    get_data(&format!("/entity/id/{trimmed}")).await
}

pub async fn create_entity(entity: &Entity) -> Result<(), AppError> {
    post_json("/entity/", entity).await
}

pub async fn update_entity(entity: &Entity) -> Result<(), AppError> {
    put_json("/entity/", entity).await
}

pub async fn delete_entity(id: &str) -> Result<(), AppError> {
    delete_resource(&format!("/entity/id/{id}")).await
}
