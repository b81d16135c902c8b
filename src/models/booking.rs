use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Office;

/// A confirmed booking as returned by the API. Only ever received,
/// never constructed locally.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingDetails {
    pub id: i64,
    pub name: String,
    pub phone_number: String,
    /// Server-assigned receipt reference shown to the customer.
    pub booking_trx_id: String,
    pub is_paid: bool,
    pub duration: i64,
    pub total_amount: i64,
    pub started_at: NaiveDate,
    pub ended_at: NaiveDate,
    pub office: Office,
}

/// JSON body of the booking write, already normalized.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingRequest {
    pub name: String,
    pub phone_number: String,
    pub started_at: NaiveDate,
    pub office_space_id: i64,
    pub total_amount: i64,
}

/// JSON body for looking up an existing booking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingLookup {
    pub booking_trx_id: String,
    pub phone_number: String,
}
