use serde::Deserialize;

use crate::domain::models::schedule::{TimeRange, WeekSchedule};
use crate::domain::models::service::DurationOption;

#[derive(Deserialize)]
pub struct CreateBusinessRequest {
    pub name: String,
    pub slug: String,
}

#[derive(Deserialize)]
pub struct UpdateBusinessRequest {
    pub name: Option<String>,
    pub slug: Option<String>,
}

#[derive(Deserialize)]
pub struct CreateCategoryRequest {
    pub name: String,
    pub sort_order: Option<i32>,
}

#[derive(Deserialize)]
pub struct CreateServiceRequest {
    pub category_id: Option<String>,
    pub name: String,
    pub duration_min: i32,
    pub price_cents: Option<i64>,
    pub capacity: Option<i32>,
    #[serde(default)]
    pub options: Vec<DurationOption>,
}

#[derive(Deserialize)]
pub struct UpdateServiceRequest {
    pub category_id: Option<String>,
    pub name: Option<String>,
    pub duration_min: Option<i32>,
    pub price_cents: Option<i64>,
    pub capacity: Option<i32>,
    pub options: Option<Vec<DurationOption>>,
    pub is_active: Option<bool>,
}

#[derive(Deserialize)]
pub struct CreateScheduleRequest {
    pub name: String,
    pub week: Option<WeekSchedule>,
}

#[derive(Deserialize)]
pub struct UpdateTimeRangeRequest {
    pub start: String,
    pub end: String,
}

impl From<UpdateTimeRangeRequest> for TimeRange {
    fn from(req: UpdateTimeRangeRequest) -> Self {
        TimeRange { start: req.start, end: req.end }
    }
}

#[derive(Deserialize)]
pub struct SlotsQuery {
    pub date: String,
}

#[derive(Deserialize)]
pub struct AvailabilityQuery {
    pub date: String,
    pub time: String,
    pub duration_min: i32,
    // Without a service id the check assumes capacity 1.
    pub service_id: Option<String>,
}

#[derive(Deserialize)]
pub struct CreateBookingRequest {
    pub service_id: String,
    pub date: String,
    pub time: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub notes: Option<String>,
}
