use tracing::{info, warn};

use crate::domain::models::booking::{Booking, NewBookingParams};
use crate::domain::ports::BookingRepository;
use crate::domain::services::availability;
use crate::domain::services::wizard::BookingDraft;
use crate::error::AppError;

/// Persists a fully-specified booking draft. A lost slot surfaces as
/// [`AppError::SlotUnavailable`] so callers can route the customer back to
/// time selection.
pub async fn submit(
    booking_repo: &dyn BookingRepository,
    business_id: &str,
    draft: &BookingDraft,
) -> Result<Booking, AppError> {
    let service = draft
        .selected_service
        .as_ref()
        .ok_or_else(|| AppError::Validation("No service selected".into()))?;
    let date = draft
        .selected_date
        .ok_or_else(|| AppError::Validation("No date selected".into()))?;
    let time = draft
        .selected_time
        .as_deref()
        .ok_or_else(|| AppError::Validation("No time selected".into()))?;

    if draft.client.first_name.trim().is_empty() || draft.client.last_name.trim().is_empty() {
        return Err(AppError::Validation("Client name is required".into()));
    }
    if draft.client.email.trim().is_empty() {
        return Err(AppError::Validation("Client email is required".into()));
    }

    let free = availability::is_available(
        booking_repo,
        business_id,
        date,
        time,
        service.duration_min,
        service.capacity,
    )
    .await?;

    if !free {
        warn!(
            business_id,
            %date,
            time,
            "booking rejected: slot taken between selection and submit"
        );
        return Err(AppError::SlotUnavailable);
    }

    let phone = Some(draft.client.phone.trim().to_string()).filter(|p| !p.is_empty());
    let notes = Some(draft.client.notes.trim().to_string()).filter(|n| !n.is_empty());

    let booking = Booking::new(NewBookingParams {
        business_id: business_id.to_string(),
        service_id: service.id.clone(),
        service_name: service.name.clone(),
        date,
        time: time.to_string(),
        duration_min: service.duration_min,
        first_name: draft.client.first_name.trim().to_string(),
        last_name: draft.client.last_name.trim().to_string(),
        email: draft.client.email.trim().to_string(),
        phone,
        notes,
    })?;

    let created = booking_repo.create(&booking, service.capacity).await?;
    info!(booking_id = %created.id, business_id, "booking committed");
    Ok(created)
}
