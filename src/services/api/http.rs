use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use super::BookingApi;
use crate::errors::ApiError;
use crate::models::{BookingDetails, BookingLookup, BookingRequest, Office};

/// Success payloads arrive wrapped in a `data` field.
#[derive(Deserialize)]
struct Envelope<T> {
    data: Option<T>,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    message: Option<String>,
}

pub struct HttpBookingApi {
    base_url: String,
    client: reqwest::Client,
}

impl HttpBookingApi {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// Unwrap the response envelope. Non-success statuses become
    /// `Rejected`, carrying the server's `message` field when the body
    /// has one.
    async fn read_envelope<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<Envelope<T>, ApiError> {
        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ErrorEnvelope>()
                .await
                .ok()
                .and_then(|body| body.message);
            return Err(ApiError::Rejected {
                status: status.as_u16(),
                message,
            });
        }
        response
            .json()
            .await
            .map_err(|err| ApiError::InvalidResponse(err.to_string()))
    }
}

#[async_trait]
impl BookingApi for HttpBookingApi {
    async fn fetch_office(&self, slug: &str) -> Result<Option<Office>, ApiError> {
        tracing::info!(slug = %slug, "fetching office");

        let response = self
            .client
            .get(self.url(&format!("office/{slug}")))
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        Ok(Self::read_envelope(response).await?.data)
    }

    async fn submit_booking(&self, request: &BookingRequest) -> Result<BookingDetails, ApiError> {
        tracing::info!(
            office_space_id = request.office_space_id,
            total_amount = request.total_amount,
            "submitting booking transaction"
        );

        let response = self
            .client
            .post(self.url("booking-transaction"))
            .json(request)
            .send()
            .await?;

        Self::read_envelope(response)
            .await?
            .data
            .ok_or_else(|| ApiError::InvalidResponse("missing booking data".to_string()))
    }

    async fn check_booking(
        &self,
        lookup: &BookingLookup,
    ) -> Result<Option<BookingDetails>, ApiError> {
        tracing::info!(booking_trx_id = %lookup.booking_trx_id, "checking booking");

        let response = self
            .client
            .post(self.url("check-booking"))
            .json(lookup)
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        Ok(Self::read_envelope(response).await?.data)
    }
}
