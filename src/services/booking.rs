use chrono::{DateTime, FixedOffset};

use crate::errors::AppError;
use crate::models::{BookingConfirmation, BookingRequest};

/// Shown on every confirmation regardless of the slot's own offset.
pub const ZONE_LABEL: &str = "AEST";

const BOOKING_ID_PREFIX: &str = "RS-";

/// Fallback formats for ISO-8601 inputs RFC 3339 does not cover.
const SLOT_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%dT%H:%M%:z",
    "%Y-%m-%d %H:%M%:z",
];

pub fn parse_slot(slot_iso: &str) -> Result<DateTime<FixedOffset>, AppError> {
    let slot = slot_iso.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(slot) {
        return Ok(dt);
    }
    SLOT_FORMATS
        .iter()
        .find_map(|fmt| DateTime::parse_from_str(slot, fmt).ok())
        .ok_or_else(|| {
            AppError::InvalidSlot(format!(
                "'{slot_iso}' is not an ISO-8601 datetime with a UTC offset"
            ))
        })
}

/// Local wall-clock time of the slot, no zone conversion.
pub fn booking_id(slot: &DateTime<FixedOffset>) -> String {
    format!("{BOOKING_ID_PREFIX}{}", slot.format("%Y%m%d-%H%M"))
}

pub fn confirmation_message(slot: &DateTime<FixedOffset>) -> String {
    format!("Booked {} {ZONE_LABEL}", slot.format("%a %d %b %H:%M"))
}

pub fn book_appointment(request: &BookingRequest) -> Result<BookingConfirmation, AppError> {
    let slot = parse_slot(&request.slot_iso)?;
    let confirmation = BookingConfirmation {
        ok: true,
        booking_id: booking_id(&slot),
        message: confirmation_message(&slot),
    };

    tracing::info!(
        booking_id = %confirmation.booking_id,
        mode = %request.mode,
        "appointment booked"
    );

    Ok(confirmation)
}
