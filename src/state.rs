use std::sync::Arc;

use crate::config::Config;
use crate::domain::ports::{
    BookingRepository, BusinessRepository, CategoryRepository, ScheduleRepository,
    ServiceRepository,
};

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub business_repo: Arc<dyn BusinessRepository>,
    pub category_repo: Arc<dyn CategoryRepository>,
    pub service_repo: Arc<dyn ServiceRepository>,
    pub schedule_repo: Arc<dyn ScheduleRepository>,
    pub booking_repo: Arc<dyn BookingRepository>,
}
