use std::fmt;

use crate::models::{BookingForm, BookingLookup};
use crate::services::normalize;

/// A single schema violation: which field and why. Surfaced next to the
/// matching input by the rendering layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub path: &'static str,
    pub message: &'static str,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

fn violation(path: &'static str, message: &'static str) -> FieldError {
    FieldError { path, message }
}

/// Schema check for the booking form. Pure; collects every violation so
/// the caller can show them all at once.
pub fn validate_booking(form: &BookingForm) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if form.name.is_empty() {
        errors.push(violation("name", "Name is required"));
    }
    if form.phone_number.is_empty() {
        errors.push(violation("phone_number", "Phone number is required"));
    }
    if normalize::started_at(&form.started_at).is_none() {
        errors.push(violation("started_at", "Invalid date"));
    }
    if form.office_space_id < 1 {
        errors.push(violation("office_space_id", "Office space id is required"));
    }

    errors
}

/// Schema check for looking up an existing booking.
pub fn validate_lookup(lookup: &BookingLookup) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if lookup.booking_trx_id.is_empty() {
        errors.push(violation("booking_trx_id", "Booking transaction id is required"));
    }
    if lookup.phone_number.is_empty() {
        errors.push(violation("phone_number", "Phone number is required"));
    }

    errors
}
