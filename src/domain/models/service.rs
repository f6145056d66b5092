use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A named sub-variant of a service with its own duration and price
/// (e.g. "Short consultation" / "Extended consultation").
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct DurationOption {
    pub name: String,
    pub duration_min: i32,
    pub price_cents: i64,
}

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Service {
    pub id: String,
    pub business_id: String,
    pub category_id: Option<String>,
    pub name: String,
    pub duration_min: i32,
    pub price_cents: i64,
    /// Concurrent bookings allowed for the same slot. The public booking
    /// flow creates services with capacity 1.
    pub capacity: i32,
    pub options_json: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

pub struct NewServiceParams {
    pub business_id: String,
    pub category_id: Option<String>,
    pub name: String,
    pub duration_min: i32,
    pub price_cents: i64,
    pub capacity: i32,
    pub options: Vec<DurationOption>,
}

impl Service {
    pub fn new(params: NewServiceParams) -> Self {
        let options_json =
            serde_json::to_string(&params.options).unwrap_or_else(|_| "[]".to_string());
        Self {
            id: Uuid::new_v4().to_string(),
            business_id: params.business_id,
            category_id: params.category_id,
            name: params.name,
            duration_min: params.duration_min,
            price_cents: params.price_cents,
            capacity: params.capacity,
            options_json,
            is_active: true,
            created_at: Utc::now(),
        }
    }

    pub fn duration_options(&self) -> Vec<DurationOption> {
        serde_json::from_str(&self.options_json).unwrap_or_default()
    }
}
