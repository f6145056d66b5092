use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Business {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub active_schedule_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Business {
    pub fn new(name: String, slug: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            slug,
            active_schedule_id: None,
            created_at: Utc::now(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct ServiceCategory {
    pub id: String,
    pub business_id: String,
    pub name: String,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
}

impl ServiceCategory {
    pub fn new(business_id: String, name: String, sort_order: i32) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            business_id,
            name,
            sort_order,
            created_at: Utc::now(),
        }
    }
}
