pub mod sqlite_booking_repo;
pub mod sqlite_business_repo;
pub mod sqlite_schedule_repo;
pub mod sqlite_service_repo;
