use chrono::{DateTime, NaiveTime, Utc, Weekday};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::error::AppError;

/// An open interval of wall-clock time within a day, "HH:MM" 24h format.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TimeRange {
    pub start: String,
    pub end: String,
}

impl TimeRange {
    pub fn default_hours() -> Self {
        Self {
            start: "09:00".to_string(),
            end: "17:00".to_string(),
        }
    }

    pub fn parse(&self) -> Result<(NaiveTime, NaiveTime), AppError> {
        let start = NaiveTime::parse_from_str(&self.start, "%H:%M")
            .map_err(|_| AppError::Validation("Invalid start time (expected HH:MM)".into()))?;
        let end = NaiveTime::parse_from_str(&self.end, "%H:%M")
            .map_err(|_| AppError::Validation("Invalid end time (expected HH:MM)".into()))?;
        if start >= end {
            return Err(AppError::Validation("Range start must be before end".into()));
        }
        Ok((start, end))
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct DaySchedule {
    pub is_active: bool,
    pub time_slots: Vec<TimeRange>,
}

impl DaySchedule {
    pub fn open() -> Self {
        Self {
            is_active: true,
            time_slots: vec![TimeRange::default_hours()],
        }
    }

    pub fn closed() -> Self {
        Self {
            is_active: false,
            time_slots: vec![TimeRange::default_hours()],
        }
    }
}

// One owned `DaySchedule` per weekday, so lookups are total.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct WeekSchedule {
    pub monday: DaySchedule,
    pub tuesday: DaySchedule,
    pub wednesday: DaySchedule,
    pub thursday: DaySchedule,
    pub friday: DaySchedule,
    pub saturday: DaySchedule,
    pub sunday: DaySchedule,
}

impl Default for WeekSchedule {
    // Monday through Friday open 09:00-17:00, weekend closed.
    fn default() -> Self {
        Self {
            monday: DaySchedule::open(),
            tuesday: DaySchedule::open(),
            wednesday: DaySchedule::open(),
            thursday: DaySchedule::open(),
            friday: DaySchedule::open(),
            saturday: DaySchedule::closed(),
            sunday: DaySchedule::closed(),
        }
    }
}

impl WeekSchedule {
    pub fn day(&self, weekday: Weekday) -> &DaySchedule {
        match weekday {
            Weekday::Mon => &self.monday,
            Weekday::Tue => &self.tuesday,
            Weekday::Wed => &self.wednesday,
            Weekday::Thu => &self.thursday,
            Weekday::Fri => &self.friday,
            Weekday::Sat => &self.saturday,
            Weekday::Sun => &self.sunday,
        }
    }

    pub fn day_mut(&mut self, weekday: Weekday) -> &mut DaySchedule {
        match weekday {
            Weekday::Mon => &mut self.monday,
            Weekday::Tue => &mut self.tuesday,
            Weekday::Wed => &mut self.wednesday,
            Weekday::Thu => &mut self.thursday,
            Weekday::Fri => &mut self.friday,
            Weekday::Sat => &mut self.saturday,
            Weekday::Sun => &mut self.sunday,
        }
    }
}

/// A named weekly template of open hours; one set is active per business.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct ScheduleSet {
    pub id: String,
    pub business_id: String,
    pub name: String,
    pub week_json: String,
    pub created_at: DateTime<Utc>,
}

impl ScheduleSet {
    pub fn new(business_id: String, name: String, week: &WeekSchedule) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            business_id,
            name,
            week_json: serde_json::to_string(week).unwrap_or_else(|_| "{}".to_string()),
            created_at: Utc::now(),
        }
    }

    pub fn week(&self) -> Result<WeekSchedule, AppError> {
        serde_json::from_str(&self.week_json)
            .map_err(|_| AppError::Validation("Corrupt schedule data".into()))
    }

    fn store_week(&mut self, week: &WeekSchedule) {
        self.week_json = serde_json::to_string(week).unwrap_or_else(|_| "{}".to_string());
    }

    // Flipping a day closed keeps its ranges; they are just not consulted.
    pub fn toggle_day(&mut self, weekday: Weekday) -> Result<(), AppError> {
        let mut week = self.week()?;
        let day = week.day_mut(weekday);
        day.is_active = !day.is_active;
        self.store_week(&week);
        Ok(())
    }

    // New ranges start as the default 09:00-17:00 and are edited in place.
    pub fn add_time_range(&mut self, weekday: Weekday) -> Result<(), AppError> {
        let mut week = self.week()?;
        week.day_mut(weekday).time_slots.push(TimeRange::default_hours());
        self.store_week(&week);
        Ok(())
    }

    pub fn update_time_range(
        &mut self,
        weekday: Weekday,
        index: usize,
        range: TimeRange,
    ) -> Result<(), AppError> {
        range.parse()?;
        let mut week = self.week()?;
        let slots = &mut week.day_mut(weekday).time_slots;
        let slot = slots
            .get_mut(index)
            .ok_or_else(|| AppError::NotFound("Time range not found".into()))?;
        *slot = range;
        self.store_week(&week);
        Ok(())
    }

    // Removing the last range of an active day is allowed; such a day
    // yields no slots until a range is added back.
    pub fn remove_time_range(&mut self, weekday: Weekday, index: usize) -> Result<(), AppError> {
        let mut week = self.week()?;
        let slots = &mut week.day_mut(weekday).time_slots;
        if index >= slots.len() {
            return Err(AppError::NotFound("Time range not found".into()));
        }
        slots.remove(index);
        self.store_week(&week);
        Ok(())
    }
}
