use axum::Json;

use crate::errors::AppError;
use crate::models::{BookingConfirmation, BookingRequest};
use crate::services::booking;

// POST /book_appointment
pub async fn book_appointment(
    Json(payload): Json<BookingRequest>,
) -> Result<Json<BookingConfirmation>, AppError> {
    payload.validate().inspect_err(|e| {
        tracing::warn!(error = %e, "rejected booking request");
    })?;

    let confirmation = booking::book_appointment(&payload).inspect_err(|e| {
        tracing::warn!(error = %e, slot = %payload.slot_iso, "could not parse booking slot");
    })?;

    Ok(Json(confirmation))
}
