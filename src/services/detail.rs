use crate::errors::ApiError;
use crate::models::{BookingForm, Office};
use crate::services::api::BookingApi;
use crate::services::pricing::{self, CodeSource};

/// Shown when the office fetch fails for a reason the transport layer
/// cannot describe itself.
const FETCH_FALLBACK: &str = "An error occurred while fetching data";

/// State exposed to the rendering layer after a detail load.
#[derive(Debug, Clone)]
pub struct OfficeDetail {
    pub loading: bool,
    pub error: Option<String>,
    pub office: Option<Office>,
    pub unique_code: i64,
    pub total_amount: i64,
}

impl OfficeDetail {
    /// Initial state, before the fetch resolves.
    pub fn pending() -> Self {
        Self {
            loading: true,
            error: None,
            office: None,
            unique_code: 0,
            total_amount: 0,
        }
    }

    /// Form defaults derived from the loaded office: id and grand total
    /// filled in, editable fields empty. `None` until an office loads.
    pub fn booking_form(&self) -> Option<BookingForm> {
        self.office
            .as_ref()
            .map(|office| BookingForm::for_office(office.id, self.total_amount))
    }
}

/// Fetch the office behind `slug` and derive its pricing. Runs once per
/// page entry; every load draws a fresh unique code, so a reload
/// produces a different code and total.
pub async fn load(api: &dyn BookingApi, slug: &str, codes: &dyn CodeSource) -> OfficeDetail {
    let mut state = OfficeDetail::pending();

    match api.fetch_office(slug).await {
        Ok(Some(office)) => {
            let unique_code = codes.unique_code();
            let total_amount = pricing::grand_total(office.price, unique_code);
            tracing::info!(
                slug = %slug,
                office_id = office.id,
                unique_code,
                total_amount,
                "office loaded"
            );

            state.office = Some(office);
            state.unique_code = unique_code;
            state.total_amount = total_amount;
        }
        Ok(None) => {
            tracing::warn!(slug = %slug, "office not found");
        }
        Err(err) => {
            tracing::warn!(slug = %slug, error = %err, "office fetch failed");
            state.error = Some(fetch_error_message(&err));
        }
    }

    state.loading = false;
    state
}

fn fetch_error_message(err: &ApiError) -> String {
    err.user_message(FETCH_FALLBACK)
}
