use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};
use chrono::{Datelike, NaiveDate, TimeZone, Utc};
use std::sync::Arc;
use tracing::{info, warn};

use crate::api::dtos::requests::{AvailabilityQuery, CreateBookingRequest, SlotsQuery};
use crate::api::dtos::responses::{AvailabilityResponse, SlotsResponse};
use crate::domain::models::booking::{STATUS_CANCELLED, STATUS_CONFIRMED};
use crate::domain::models::schedule::DaySchedule;
use crate::domain::models::service::Service;
use crate::domain::services::{availability, commit, slots::calculate_slots};
use crate::domain::services::wizard::{BookingDraft, ClientInfo};
use crate::error::AppError;
use crate::state::AppState;

fn parse_date(raw: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| AppError::Validation("Invalid date format (expected YYYY-MM-DD)".into()))
}

/// Resolves the weekday schedule the business's active set prescribes for
/// `date`, plus that day's existing bookings.
async fn day_context(
    state: &AppState,
    business_id: &str,
    date: NaiveDate,
) -> Result<(DaySchedule, Vec<crate::domain::models::booking::Booking>), AppError> {
    let business = state
        .business_repo
        .find_by_id(business_id)
        .await?
        .ok_or(AppError::NotFound("Business not found".into()))?;

    let schedule_id = business
        .active_schedule_id
        .ok_or(AppError::NotFound("Business has no active schedule".into()))?;

    let schedule = state
        .schedule_repo
        .find_by_id(business_id, &schedule_id)
        .await?
        .ok_or(AppError::NotFound("Active schedule not found".into()))?;

    let week = schedule.week()?;
    let day = week.day(date.weekday()).clone();

    let day_start = Utc.from_utc_datetime(&date.and_hms_opt(0, 0, 0).unwrap());
    let day_end = day_start + chrono::Duration::days(1);
    let existing = state
        .booking_repo
        .list_by_range(business_id, day_start, day_end)
        .await?;

    Ok((day, existing))
}

async fn load_bookable_service(
    state: &AppState,
    business_id: &str,
    service_id: &str,
) -> Result<Service, AppError> {
    let service = state
        .service_repo
        .find_by_id(business_id, service_id)
        .await?
        .ok_or(AppError::NotFound("Service not found".into()))?;
    if !service.is_active {
        return Err(AppError::Validation("Service is not bookable".into()));
    }
    Ok(service)
}

pub async fn get_slots(
    State(state): State<Arc<AppState>>,
    Path((business_id, service_id)): Path<(String, String)>,
    Query(query): Query<SlotsQuery>,
) -> Result<impl IntoResponse, AppError> {
    let date = parse_date(&query.date)?;
    let service = load_bookable_service(&state, &business_id, &service_id).await?;
    let (day, existing) = day_context(&state, &business_id, date).await?;

    let slots = calculate_slots(&day, &service, date, &existing, Utc::now());
    Ok(Json(SlotsResponse { date: query.date, slots }))
}

pub async fn check_availability(
    State(state): State<Arc<AppState>>,
    Path(business_id): Path<String>,
    Query(query): Query<AvailabilityQuery>,
) -> Result<impl IntoResponse, AppError> {
    let date = parse_date(&query.date)?;
    if query.duration_min <= 0 {
        return Err(AppError::Validation("Duration must be positive".into()));
    }

    // Capacity comes from the service when the caller names one; a bare
    // query answers for single-seat slots.
    let capacity = match &query.service_id {
        Some(service_id) => {
            load_bookable_service(&state, &business_id, service_id)
                .await?
                .capacity
        }
        None => 1,
    };

    let available = availability::is_available(
        state.booking_repo.as_ref(),
        &business_id,
        date,
        &query.time,
        query.duration_min,
        capacity,
    )
    .await?;

    Ok(Json(AvailabilityResponse { available }))
}

pub async fn create_booking(
    State(state): State<Arc<AppState>>,
    Path(business_id): Path<String>,
    Json(payload): Json<CreateBookingRequest>,
) -> Result<impl IntoResponse, AppError> {
    info!("create_booking: starting for business {}", business_id);

    let date = parse_date(&payload.date)?;
    let service = load_bookable_service(&state, &business_id, &payload.service_id).await?;
    let (day, existing) = day_context(&state, &business_id, date).await?;

    // The requested start must be one of the slots we would offer right
    // now; this covers closed days, out-of-hours times and already-taken
    // slots in one check.
    let valid_slots = calculate_slots(&day, &service, date, &existing, Utc::now());
    if !valid_slots.iter().any(|s| s == &payload.time) {
        warn!(
            "Booking rejected: slot {} {} not offered. Valid slots: {:?}",
            payload.date, payload.time, valid_slots
        );
        return Err(AppError::SlotUnavailable);
    }

    let draft = BookingDraft {
        selected_category: service.category_id.clone(),
        selected_service: Some(service),
        selected_date: Some(date),
        selected_time: Some(payload.time),
        client: ClientInfo {
            first_name: payload.first_name,
            last_name: payload.last_name,
            email: payload.email,
            phone: payload.phone.unwrap_or_default(),
            notes: payload.notes.unwrap_or_default(),
        },
    };

    let created = commit::submit(state.booking_repo.as_ref(), &business_id, &draft).await?;
    Ok(Json(created))
}

pub async fn list_bookings(
    State(state): State<Arc<AppState>>,
    Path(business_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let bookings = state.booking_repo.list_by_business(&business_id).await?;
    Ok(Json(bookings))
}

pub async fn get_booking(
    State(state): State<Arc<AppState>>,
    Path((business_id, booking_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let booking = state
        .booking_repo
        .find_by_id(&business_id, &booking_id)
        .await?
        .ok_or(AppError::NotFound("Booking not found".into()))?;
    Ok(Json(booking))
}

pub async fn confirm_booking(
    State(state): State<Arc<AppState>>,
    Path((business_id, booking_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let updated = state
        .booking_repo
        .update_status(&business_id, &booking_id, STATUS_CONFIRMED)
        .await?;
    info!("Booking confirmed: {}", updated.id);
    Ok(Json(updated))
}

pub async fn cancel_booking(
    State(state): State<Arc<AppState>>,
    Path((business_id, booking_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let updated = state
        .booking_repo
        .update_status(&business_id, &booking_id, STATUS_CANCELLED)
        .await?;
    info!("Booking cancelled: {}", updated.id);
    Ok(Json(updated))
}

pub async fn delete_booking(
    State(state): State<Arc<AppState>>,
    Path((business_id, booking_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    state.booking_repo.delete(&business_id, &booking_id).await?;
    info!("Booking deleted: {}", booking_id);
    Ok(Json(serde_json::json!({"status": "deleted"})))
}
