use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use tracing::info;

use crate::api::dtos::requests::{CreateServiceRequest, UpdateServiceRequest};
use crate::domain::models::service::{DurationOption, NewServiceParams, Service};
use crate::error::AppError;
use crate::state::AppState;

fn validate_options(options: &[DurationOption]) -> Result<(), AppError> {
    for option in options {
        if option.duration_min <= 0 {
            return Err(AppError::Validation(
                "Duration option must have a positive duration".into(),
            ));
        }
    }
    Ok(())
}

pub async fn create_service(
    State(state): State<Arc<AppState>>,
    Path(business_id): Path<String>,
    Json(payload): Json<CreateServiceRequest>,
) -> Result<impl IntoResponse, AppError> {
    if payload.name.trim().is_empty() {
        return Err(AppError::Validation("Service name is required".into()));
    }
    if payload.duration_min <= 0 {
        return Err(AppError::Validation("Service duration must be positive".into()));
    }
    let capacity = payload.capacity.unwrap_or(1);
    if capacity < 1 {
        return Err(AppError::Validation("Service capacity must be at least 1".into()));
    }
    validate_options(&payload.options)?;

    let service = Service::new(NewServiceParams {
        business_id,
        category_id: payload.category_id,
        name: payload.name,
        duration_min: payload.duration_min,
        price_cents: payload.price_cents.unwrap_or(0),
        capacity,
        options: payload.options,
    });

    let created = state.service_repo.create(&service).await?;
    info!("Service created: {} ({})", created.id, created.name);
    Ok(Json(created))
}

pub async fn list_services(
    State(state): State<Arc<AppState>>,
    Path(business_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let services = state.service_repo.list(&business_id).await?;
    Ok(Json(services))
}

pub async fn get_service(
    State(state): State<Arc<AppState>>,
    Path((business_id, service_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let service = state
        .service_repo
        .find_by_id(&business_id, &service_id)
        .await?
        .ok_or(AppError::NotFound("Service not found".into()))?;
    Ok(Json(service))
}

pub async fn update_service(
    State(state): State<Arc<AppState>>,
    Path((business_id, service_id)): Path<(String, String)>,
    Json(payload): Json<UpdateServiceRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut service = state
        .service_repo
        .find_by_id(&business_id, &service_id)
        .await?
        .ok_or(AppError::NotFound("Service not found".into()))?;

    if let Some(val) = payload.category_id {
        service.category_id = Some(val);
    }
    if let Some(val) = payload.name {
        service.name = val;
    }
    if let Some(val) = payload.duration_min {
        if val <= 0 {
            return Err(AppError::Validation("Service duration must be positive".into()));
        }
        service.duration_min = val;
    }
    if let Some(val) = payload.price_cents {
        service.price_cents = val;
    }
    if let Some(val) = payload.capacity {
        if val < 1 {
            return Err(AppError::Validation("Service capacity must be at least 1".into()));
        }
        service.capacity = val;
    }
    if let Some(options) = payload.options {
        validate_options(&options)?;
        service.options_json =
            serde_json::to_string(&options).map_err(|_| AppError::Internal)?;
    }
    if let Some(val) = payload.is_active {
        service.is_active = val;
    }

    let updated = state.service_repo.update(&service).await?;
    Ok(Json(updated))
}

pub async fn delete_service(
    State(state): State<Arc<AppState>>,
    Path((business_id, service_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    state.service_repo.delete(&business_id, &service_id).await?;
    info!("Service deleted: {}", service_id);
    Ok(Json(serde_json::json!({"status": "deleted"})))
}
