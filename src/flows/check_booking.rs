use anyhow::Result;

use crate::flows::confirmation;
use crate::models::BookingLookup;
use crate::services::{normalize, validation};
use crate::state::AppState;

const LOOKUP_FALLBACK: &str = "An error occurred while looking up the booking";

/// Look up an existing booking by transaction code and phone number.
pub async fn run(state: &AppState, booking_trx_id: String, phone_number: String) -> Result<()> {
    let lookup = BookingLookup {
        booking_trx_id,
        phone_number,
    };

    let field_errors = validation::validate_lookup(&lookup);
    if !field_errors.is_empty() {
        for field_error in &field_errors {
            eprintln!("  {field_error}");
        }
        anyhow::bail!("booking lookup was not attempted");
    }

    // The stored phone number is the normalized one the booking was
    // submitted with, so the lookup must normalize the same way.
    let lookup = BookingLookup {
        phone_number: normalize::phone_number(&lookup.phone_number),
        ..lookup
    };

    match state.api.check_booking(&lookup).await {
        Ok(Some(booking)) => {
            confirmation::render(&state.config, &booking.office, &booking);
            Ok(())
        }
        Ok(None) => anyhow::bail!("Booking not found"),
        Err(err) => anyhow::bail!("{}", err.user_message(LOOKUP_FALLBACK)),
    }
}
