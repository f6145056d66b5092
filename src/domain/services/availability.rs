use chrono::NaiveDate;

use crate::domain::models::booking::slot_bounds;
use crate::domain::ports::BookingRepository;
use crate::error::AppError;

/// Whether fewer than `capacity` non-cancelled bookings overlap
/// `[start, start + duration)`. Point-in-time answer; the commit path
/// re-checks inside its insert transaction.
pub async fn is_available(
    booking_repo: &dyn BookingRepository,
    business_id: &str,
    date: NaiveDate,
    time: &str,
    duration_min: i32,
    capacity: i32,
) -> Result<bool, AppError> {
    let (start, end) = slot_bounds(date, time, duration_min)?;
    let overlapping = booking_repo.count_overlap(business_id, start, end).await?;
    Ok(overlapping < capacity.max(1) as i64)
}
