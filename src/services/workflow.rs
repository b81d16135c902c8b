use crate::models::{BookingDetails, BookingForm, BookingRequest, Office};
use crate::services::api::BookingApi;
use crate::services::normalize;
use crate::services::validation::{self, FieldError};

/// Shown when a failed submission carries nothing better.
const SUBMIT_FALLBACK: &str = "An error occurred while booking the office";

/// Everything the confirmation view needs. Carried in memory; the
/// confirmation view performs no further network read.
#[derive(Debug, Clone)]
pub struct Handoff {
    pub office: Office,
    pub booking: BookingDetails,
}

/// Form lifecycle. The submit control is disabled exactly while the
/// state is `Submitting`, which is the only duplicate-submission guard.
#[derive(Debug, Clone)]
pub enum FlowState {
    Editing {
        field_errors: Vec<FieldError>,
        error: Option<String>,
    },
    Submitting,
    Succeeded(Handoff),
}

impl FlowState {
    fn editing() -> Self {
        FlowState::Editing {
            field_errors: Vec::new(),
            error: None,
        }
    }
}

pub struct SubmitWorkflow<'a> {
    api: &'a dyn BookingApi,
    office: Office,
    state: FlowState,
}

impl<'a> SubmitWorkflow<'a> {
    pub fn new(api: &'a dyn BookingApi, office: Office) -> Self {
        Self {
            api,
            office,
            state: FlowState::editing(),
        }
    }

    pub fn state(&self) -> &FlowState {
        &self.state
    }

    /// Drive one submit attempt: validate, normalize, write, hand off.
    /// A submit while one is already in flight is ignored. A schema
    /// violation or a rejected write returns the form to `Editing` with
    /// the errors attached; no partial state survives a failed attempt.
    pub async fn submit(&mut self, form: &BookingForm) -> &FlowState {
        if matches!(self.state, FlowState::Submitting) {
            return &self.state;
        }

        let field_errors = validation::validate_booking(form);
        if !field_errors.is_empty() {
            self.state = FlowState::Editing {
                field_errors,
                error: None,
            };
            return &self.state;
        }

        self.state = FlowState::Submitting;

        // validate_booking already parsed the date; a miss here means the
        // form changed after the schema check.
        let Some(request) = normalized_request(form) else {
            self.state = FlowState::Editing {
                field_errors: vec![FieldError {
                    path: "started_at",
                    message: "Invalid date",
                }],
                error: None,
            };
            return &self.state;
        };

        tracing::info!(
            office_space_id = request.office_space_id,
            total_amount = request.total_amount,
            "submitting booking"
        );

        self.state = match self.api.submit_booking(&request).await {
            Ok(booking) => FlowState::Succeeded(Handoff {
                office: self.office.clone(),
                booking,
            }),
            Err(err) => {
                tracing::warn!(error = %err, "booking submission failed");
                FlowState::Editing {
                    field_errors: Vec::new(),
                    error: Some(err.user_message(SUBMIT_FALLBACK)),
                }
            }
        };
        &self.state
    }
}

/// The wire body: phone digits with country code, date reduced to a
/// calendar day, derived fields passed through untouched.
pub fn normalized_request(form: &BookingForm) -> Option<BookingRequest> {
    let started_at = normalize::started_at(&form.started_at)?;

    Some(BookingRequest {
        name: form.name.clone(),
        phone_number: normalize::phone_number(&form.phone_number),
        started_at,
        office_space_id: form.office_space_id,
        total_amount: form.total_amount,
    })
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use chrono::NaiveDate;

    use super::*;
    use crate::errors::ApiError;
    use crate::models::{BookingLookup, City};

    struct StubApi {
        submitted: Mutex<Vec<BookingRequest>>,
        reject: Option<(u16, Option<String>)>,
    }

    impl StubApi {
        fn new() -> Self {
            Self {
                submitted: Mutex::new(Vec::new()),
                reject: None,
            }
        }

        fn rejecting(status: u16, message: Option<&str>) -> Self {
            Self {
                submitted: Mutex::new(Vec::new()),
                reject: Some((status, message.map(str::to_string))),
            }
        }

        fn submitted_count(&self) -> usize {
            self.submitted.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl BookingApi for StubApi {
        async fn fetch_office(&self, _slug: &str) -> Result<Option<Office>, ApiError> {
            Ok(Some(office()))
        }

        async fn submit_booking(
            &self,
            request: &BookingRequest,
        ) -> Result<BookingDetails, ApiError> {
            if let Some((status, message)) = &self.reject {
                return Err(ApiError::Rejected {
                    status: *status,
                    message: message.clone(),
                });
            }
            self.submitted.lock().unwrap().push(request.clone());
            Ok(confirmed(request))
        }

        async fn check_booking(
            &self,
            _lookup: &BookingLookup,
        ) -> Result<Option<BookingDetails>, ApiError> {
            Ok(None)
        }
    }

    fn office() -> Office {
        Office {
            id: 7,
            price: 1_000_000,
            duration: 20,
            name: "WeWork Sudirman".to_string(),
            slug: "wework-sudirman".to_string(),
            thumbnail: "thumbnails/wework.png".to_string(),
            about: "Quiet floors".to_string(),
            address: "Jl. Jend. Sudirman".to_string(),
            photos: Vec::new(),
            benefits: Vec::new(),
            city: Some(City {
                id: 1,
                name: "Jakarta Pusat".to_string(),
                slug: "jakarta-pusat".to_string(),
                photo: "cities/jakarta.png".to_string(),
                office_spaces_count: 0,
                office_spaces: Vec::new(),
            }),
        }
    }

    fn confirmed(request: &BookingRequest) -> BookingDetails {
        BookingDetails {
            id: 1,
            name: request.name.clone(),
            phone_number: request.phone_number.clone(),
            booking_trx_id: "FO1893009".to_string(),
            is_paid: false,
            duration: 20,
            total_amount: request.total_amount,
            started_at: request.started_at,
            ended_at: request.started_at + chrono::Duration::days(20),
            office: office(),
        }
    }

    fn filled_form() -> BookingForm {
        BookingForm {
            name: "Putri".to_string(),
            phone_number: "081234567890".to_string(),
            started_at: "2025-09-01".to_string(),
            office_space_id: 7,
            total_amount: 999_750,
        }
    }

    #[tokio::test]
    async fn test_valid_submit_succeeds_with_handoff() {
        let api = StubApi::new();
        let mut workflow = SubmitWorkflow::new(&api, office());

        let state = workflow.submit(&filled_form()).await;
        match state {
            FlowState::Succeeded(handoff) => {
                assert_eq!(handoff.office.slug, "wework-sudirman");
                assert_eq!(handoff.booking.booking_trx_id, "FO1893009");
            }
            other => panic!("expected success, got {other:?}"),
        }
        assert_eq!(api.submitted_count(), 1);
    }

    #[tokio::test]
    async fn test_submit_normalizes_phone_and_date() {
        let api = StubApi::new();
        let mut workflow = SubmitWorkflow::new(&api, office());

        let mut form = filled_form();
        form.phone_number = "081234567890".to_string();
        form.started_at = "2025-09-01T15:30:00".to_string();
        workflow.submit(&form).await;

        let submitted = api.submitted.lock().unwrap();
        assert_eq!(submitted[0].phone_number, "6281234567890");
        assert_eq!(
            submitted[0].started_at,
            NaiveDate::from_ymd_opt(2025, 9, 1).unwrap()
        );
        assert_eq!(submitted[0].total_amount, 999_750);
    }

    #[tokio::test]
    async fn test_validation_failure_blocks_network_call() {
        let api = StubApi::new();
        let mut workflow = SubmitWorkflow::new(&api, office());

        let mut form = filled_form();
        form.name.clear();

        match workflow.submit(&form).await {
            FlowState::Editing {
                field_errors,
                error,
            } => {
                assert_eq!(field_errors.len(), 1);
                assert_eq!(field_errors[0].path, "name");
                assert!(error.is_none());
            }
            other => panic!("expected editing state, got {other:?}"),
        }
        assert_eq!(api.submitted_count(), 0);
    }

    #[tokio::test]
    async fn test_rejected_submit_returns_to_editing_with_server_message() {
        let api = StubApi::rejecting(422, Some("Office is fully booked"));
        let mut workflow = SubmitWorkflow::new(&api, office());

        match workflow.submit(&filled_form()).await {
            FlowState::Editing {
                field_errors,
                error,
            } => {
                assert!(field_errors.is_empty());
                assert_eq!(error.as_deref(), Some("Office is fully booked"));
            }
            other => panic!("expected editing state, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_rejected_submit_without_body_message() {
        let api = StubApi::rejecting(500, None);
        let mut workflow = SubmitWorkflow::new(&api, office());

        match workflow.submit(&filled_form()).await {
            FlowState::Editing { error, .. } => {
                assert_eq!(error.as_deref(), Some("request failed with status 500"));
            }
            other => panic!("expected editing state, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_submit_ignored_while_in_flight() {
        let api = StubApi::new();
        let mut workflow = SubmitWorkflow::new(&api, office());
        workflow.state = FlowState::Submitting;

        let state = workflow.submit(&filled_form()).await;
        assert!(matches!(state, FlowState::Submitting));
        assert_eq!(api.submitted_count(), 0);
    }

    #[tokio::test]
    async fn test_failed_submit_can_be_retried() {
        let reject = StubApi::rejecting(500, None);
        let mut workflow = SubmitWorkflow::new(&reject, office());
        workflow.submit(&filled_form()).await;
        assert!(matches!(workflow.state(), FlowState::Editing { .. }));

        let ok = StubApi::new();
        let mut workflow = SubmitWorkflow::new(&ok, office());
        let state = workflow.submit(&filled_form()).await;
        assert!(matches!(state, FlowState::Succeeded(_)));
    }
}
