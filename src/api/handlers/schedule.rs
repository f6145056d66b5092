use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use chrono::Weekday;
use std::sync::Arc;
use tracing::info;

use crate::api::dtos::requests::{CreateScheduleRequest, UpdateTimeRangeRequest};
use crate::api::dtos::responses::ScheduleResponse;
use crate::domain::models::schedule::ScheduleSet;
use crate::error::AppError;
use crate::state::AppState;

fn parse_weekday(raw: &str) -> Result<Weekday, AppError> {
    match raw.to_ascii_lowercase().as_str() {
        "monday" => Ok(Weekday::Mon),
        "tuesday" => Ok(Weekday::Tue),
        "wednesday" => Ok(Weekday::Wed),
        "thursday" => Ok(Weekday::Thu),
        "friday" => Ok(Weekday::Fri),
        "saturday" => Ok(Weekday::Sat),
        "sunday" => Ok(Weekday::Sun),
        _ => Err(AppError::Validation(format!("Unknown weekday: {}", raw))),
    }
}

async fn load_schedule(
    state: &AppState,
    business_id: &str,
    schedule_id: &str,
) -> Result<ScheduleSet, AppError> {
    state
        .schedule_repo
        .find_by_id(business_id, schedule_id)
        .await?
        .ok_or(AppError::NotFound("Schedule not found".into()))
}

pub async fn create_schedule(
    State(state): State<Arc<AppState>>,
    Path(business_id): Path<String>,
    Json(payload): Json<CreateScheduleRequest>,
) -> Result<impl IntoResponse, AppError> {
    if payload.name.trim().is_empty() {
        return Err(AppError::Validation("Schedule name is required".into()));
    }

    let week = payload.week.unwrap_or_default();
    for day in [
        &week.monday,
        &week.tuesday,
        &week.wednesday,
        &week.thursday,
        &week.friday,
        &week.saturday,
        &week.sunday,
    ] {
        for range in &day.time_slots {
            range.parse()?;
        }
    }

    let schedule = ScheduleSet::new(business_id, payload.name, &week);
    let created = state.schedule_repo.create(&schedule).await?;
    info!("Schedule created: {} ({})", created.id, created.name);
    Ok(Json(ScheduleResponse::from_set(&created)?))
}

pub async fn list_schedules(
    State(state): State<Arc<AppState>>,
    Path(business_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let schedules = state.schedule_repo.list(&business_id).await?;
    let responses = schedules
        .iter()
        .map(ScheduleResponse::from_set)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Json(responses))
}

pub async fn get_schedule(
    State(state): State<Arc<AppState>>,
    Path((business_id, schedule_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let schedule = load_schedule(&state, &business_id, &schedule_id).await?;
    Ok(Json(ScheduleResponse::from_set(&schedule)?))
}

/// Re-points the business's single active schedule set.
pub async fn activate_schedule(
    State(state): State<Arc<AppState>>,
    Path((business_id, schedule_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let schedule = load_schedule(&state, &business_id, &schedule_id).await?;

    let mut business = state
        .business_repo
        .find_by_id(&business_id)
        .await?
        .ok_or(AppError::NotFound("Business not found".into()))?;

    business.active_schedule_id = Some(schedule.id.clone());
    let updated = state.business_repo.update(&business).await?;
    info!("Active schedule for {} is now {}", business_id, schedule.id);
    Ok(Json(updated))
}

pub async fn toggle_day(
    State(state): State<Arc<AppState>>,
    Path((business_id, schedule_id, weekday)): Path<(String, String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let weekday = parse_weekday(&weekday)?;
    let mut schedule = load_schedule(&state, &business_id, &schedule_id).await?;
    schedule.toggle_day(weekday)?;
    let updated = state.schedule_repo.update(&schedule).await?;
    Ok(Json(ScheduleResponse::from_set(&updated)?))
}

pub async fn add_time_range(
    State(state): State<Arc<AppState>>,
    Path((business_id, schedule_id, weekday)): Path<(String, String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let weekday = parse_weekday(&weekday)?;
    let mut schedule = load_schedule(&state, &business_id, &schedule_id).await?;
    schedule.add_time_range(weekday)?;
    let updated = state.schedule_repo.update(&schedule).await?;
    Ok(Json(ScheduleResponse::from_set(&updated)?))
}

pub async fn update_time_range(
    State(state): State<Arc<AppState>>,
    Path((business_id, schedule_id, weekday, index)): Path<(String, String, String, usize)>,
    Json(payload): Json<UpdateTimeRangeRequest>,
) -> Result<impl IntoResponse, AppError> {
    let weekday = parse_weekday(&weekday)?;
    let mut schedule = load_schedule(&state, &business_id, &schedule_id).await?;
    schedule.update_time_range(weekday, index, payload.into())?;
    let updated = state.schedule_repo.update(&schedule).await?;
    Ok(Json(ScheduleResponse::from_set(&updated)?))
}

pub async fn remove_time_range(
    State(state): State<Arc<AppState>>,
    Path((business_id, schedule_id, weekday, index)): Path<(String, String, String, usize)>,
) -> Result<impl IntoResponse, AppError> {
    let weekday = parse_weekday(&weekday)?;
    let mut schedule = load_schedule(&state, &business_id, &schedule_id).await?;
    schedule.remove_time_range(weekday, index)?;
    let updated = state.schedule_repo.update(&schedule).await?;
    Ok(Json(ScheduleResponse::from_set(&updated)?))
}
