use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use std::sync::Arc;

use crate::api::dtos::requests::CreateCategoryRequest;
use crate::domain::models::business::ServiceCategory;
use crate::error::AppError;
use crate::state::AppState;

pub async fn create_category(
    State(state): State<Arc<AppState>>,
    Path(business_id): Path<String>,
    Json(payload): Json<CreateCategoryRequest>,
) -> Result<impl IntoResponse, AppError> {
    if payload.name.trim().is_empty() {
        return Err(AppError::Validation("Category name is required".into()));
    }

    let sort_order = match payload.sort_order {
        Some(order) => order,
        None => state.category_repo.list(&business_id).await?.len() as i32,
    };

    let category = ServiceCategory::new(business_id, payload.name, sort_order);
    let created = state.category_repo.create(&category).await?;
    Ok(Json(created))
}

pub async fn list_categories(
    State(state): State<Arc<AppState>>,
    Path(business_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let categories = state.category_repo.list(&business_id).await?;
    Ok(Json(categories))
}

pub async fn delete_category(
    State(state): State<Arc<AppState>>,
    Path((business_id, category_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    state.category_repo.delete(&business_id, &category_id).await?;
    Ok(Json(serde_json::json!({"status": "deleted"})))
}
