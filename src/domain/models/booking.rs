use chrono::{DateTime, Duration, NaiveDate, NaiveTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::error::AppError;

pub const STATUS_PENDING: &str = "pending";
pub const STATUS_CONFIRMED: &str = "confirmed";
pub const STATUS_CANCELLED: &str = "cancelled";

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Booking {
    pub id: String,
    pub business_id: String,
    pub service_id: String,
    pub service_name: String,
    pub date: NaiveDate,
    // Wall-clock start, "HH:MM". With `date` this is the slot key.
    pub time: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub duration_min: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub notes: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

pub struct NewBookingParams {
    pub business_id: String,
    pub service_id: String,
    pub service_name: String,
    pub date: NaiveDate,
    pub time: String,
    pub duration_min: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub notes: Option<String>,
}

impl Booking {
    pub fn new(params: NewBookingParams) -> Result<Self, AppError> {
        let (start_time, end_time) =
            slot_bounds(params.date, &params.time, params.duration_min)?;

        Ok(Self {
            id: Uuid::new_v4().to_string(),
            business_id: params.business_id,
            service_id: params.service_id,
            service_name: params.service_name,
            date: params.date,
            time: params.time,
            start_time,
            end_time,
            duration_min: params.duration_min,
            first_name: params.first_name,
            last_name: params.last_name,
            email: params.email,
            phone: params.phone,
            notes: params.notes,
            status: STATUS_PENDING.to_string(),
            created_at: Utc::now(),
        })
    }
}

/// Resolves a date + "HH:MM" + duration into the UTC interval used for
/// overlap queries.
pub fn slot_bounds(
    date: NaiveDate,
    time: &str,
    duration_min: i32,
) -> Result<(DateTime<Utc>, DateTime<Utc>), AppError> {
    let t = NaiveTime::parse_from_str(time, "%H:%M")
        .map_err(|_| AppError::Validation("Invalid time format (HH:MM)".into()))?;
    let start = Utc.from_utc_datetime(&date.and_time(t));
    let end = start + Duration::minutes(duration_min as i64);
    Ok((start, end))
}
