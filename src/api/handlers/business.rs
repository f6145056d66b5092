use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use tracing::info;

use crate::api::dtos::requests::{CreateBusinessRequest, UpdateBusinessRequest};
use crate::domain::models::business::Business;
use crate::domain::models::schedule::{ScheduleSet, WeekSchedule};
use crate::error::AppError;
use crate::state::AppState;

pub async fn create_business(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateBusinessRequest>,
) -> Result<impl IntoResponse, AppError> {
    if payload.name.trim().is_empty() {
        return Err(AppError::Validation("Business name is required".into()));
    }
    if payload.slug.trim().is_empty() {
        return Err(AppError::Validation("Business slug is required".into()));
    }

    if state.business_repo.find_by_slug(&payload.slug).await?.is_some() {
        return Err(AppError::Conflict("Slug already in use".into()));
    }

    let business = Business::new(payload.name, payload.slug);
    let mut created = state.business_repo.create(&business).await?;

    // Every business starts with a standard Mon-Fri schedule as its
    // active set, so the booking page works before any configuration.
    let schedule = ScheduleSet::new(
        created.id.clone(),
        "Default hours".to_string(),
        &WeekSchedule::default(),
    );
    let schedule = state.schedule_repo.create(&schedule).await?;

    created.active_schedule_id = Some(schedule.id);
    let created = state.business_repo.update(&created).await?;

    info!("Business created: {} ({})", created.id, created.slug);
    Ok(Json(created))
}

pub async fn get_business_by_slug(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let business = state
        .business_repo
        .find_by_slug(&slug)
        .await?
        .ok_or(AppError::NotFound("Business not found".into()))?;
    Ok(Json(business))
}

pub async fn get_business(
    State(state): State<Arc<AppState>>,
    Path(business_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let business = state
        .business_repo
        .find_by_id(&business_id)
        .await?
        .ok_or(AppError::NotFound("Business not found".into()))?;
    Ok(Json(business))
}

pub async fn update_business(
    State(state): State<Arc<AppState>>,
    Path(business_id): Path<String>,
    Json(payload): Json<UpdateBusinessRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut business = state
        .business_repo
        .find_by_id(&business_id)
        .await?
        .ok_or(AppError::NotFound("Business not found".into()))?;

    if let Some(name) = payload.name {
        business.name = name;
    }
    if let Some(slug) = payload.slug {
        business.slug = slug;
    }

    let updated = state.business_repo.update(&business).await?;
    Ok(Json(updated))
}
