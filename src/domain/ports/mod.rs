use crate::domain::models::{
    booking::Booking,
    business::{Business, ServiceCategory},
    schedule::ScheduleSet,
    service::Service,
};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait BusinessRepository: Send + Sync {
    async fn create(&self, business: &Business) -> Result<Business, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Business>, AppError>;
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Business>, AppError>;
    async fn update(&self, business: &Business) -> Result<Business, AppError>;
}

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn create(&self, category: &ServiceCategory) -> Result<ServiceCategory, AppError>;
    async fn list(&self, business_id: &str) -> Result<Vec<ServiceCategory>, AppError>;
    async fn delete(&self, business_id: &str, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait ServiceRepository: Send + Sync {
    async fn create(&self, service: &Service) -> Result<Service, AppError>;
    async fn find_by_id(&self, business_id: &str, id: &str) -> Result<Option<Service>, AppError>;
    async fn list(&self, business_id: &str) -> Result<Vec<Service>, AppError>;
    async fn update(&self, service: &Service) -> Result<Service, AppError>;
    async fn delete(&self, business_id: &str, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait ScheduleRepository: Send + Sync {
    async fn create(&self, schedule: &ScheduleSet) -> Result<ScheduleSet, AppError>;
    async fn find_by_id(&self, business_id: &str, id: &str)
        -> Result<Option<ScheduleSet>, AppError>;
    async fn list(&self, business_id: &str) -> Result<Vec<ScheduleSet>, AppError>;
    async fn update(&self, schedule: &ScheduleSet) -> Result<ScheduleSet, AppError>;
    async fn delete(&self, business_id: &str, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait BookingRepository: Send + Sync {
    // Check-and-insert in one transaction; rejects with `SlotUnavailable`
    // once the slot holds `capacity` live bookings.
    async fn create(&self, booking: &Booking, capacity: i32) -> Result<Booking, AppError>;
    async fn find_by_id(&self, business_id: &str, id: &str) -> Result<Option<Booking>, AppError>;
    async fn list_by_business(&self, business_id: &str) -> Result<Vec<Booking>, AppError>;
    async fn list_by_range(
        &self,
        business_id: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Booking>, AppError>;
    async fn count_overlap(
        &self,
        business_id: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<i64, AppError>;
    async fn update_status(
        &self,
        business_id: &str,
        id: &str,
        status: &str,
    ) -> Result<Booking, AppError>;
    async fn delete(&self, business_id: &str, id: &str) -> Result<(), AppError>;
}
