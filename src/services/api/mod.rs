pub mod http;

use async_trait::async_trait;

use crate::errors::ApiError;
use crate::models::{BookingDetails, BookingLookup, BookingRequest, Office};

#[async_trait]
pub trait BookingApi: Send + Sync {
    /// Fetch one office by slug. `Ok(None)` means the API answered but
    /// no office exists under that slug.
    async fn fetch_office(&self, slug: &str) -> Result<Option<Office>, ApiError>;

    /// Write a booking. Attempted exactly once per user action; there is
    /// no retry policy.
    async fn submit_booking(&self, request: &BookingRequest) -> Result<BookingDetails, ApiError>;

    /// Look up an existing booking by transaction code and phone number.
    async fn check_booking(
        &self,
        lookup: &BookingLookup,
    ) -> Result<Option<BookingDetails>, ApiError>;
}
