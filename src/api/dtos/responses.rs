use serde::Serialize;

use crate::domain::models::schedule::{ScheduleSet, WeekSchedule};
use crate::error::AppError;

#[derive(Serialize)]
pub struct SlotsResponse {
    pub date: String,
    pub slots: Vec<String>,
}

#[derive(Serialize)]
pub struct AvailabilityResponse {
    pub available: bool,
}

/// Schedule sets are stored with the week as a JSON column; responses
/// expose it structured.
#[derive(Serialize)]
pub struct ScheduleResponse {
    pub id: String,
    pub business_id: String,
    pub name: String,
    pub week: WeekSchedule,
}

impl ScheduleResponse {
    pub fn from_set(set: &ScheduleSet) -> Result<Self, AppError> {
        Ok(Self {
            id: set.id.clone(),
            business_id: set.business_id.clone(),
            name: set.name.clone(),
            week: set.week()?,
        })
    }
}
