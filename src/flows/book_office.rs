use anyhow::Result;

use crate::flows::{confirmation, office_detail};
use crate::services::detail;
use crate::services::workflow::{FlowState, SubmitWorkflow};
use crate::state::AppState;

/// Details collected from the user for one booking attempt.
pub struct BookingInput {
    pub name: String,
    pub phone_number: String,
    pub started_at: String,
}

/// Book an office: load it, derive the pricing, validate and submit the
/// form, then render the confirmation from the server's response.
pub async fn run(state: &AppState, slug: &str, input: BookingInput) -> Result<()> {
    let loaded = detail::load(state.api.as_ref(), slug, state.codes.as_ref()).await;

    if let Some(error) = &loaded.error {
        anyhow::bail!("{error}");
    }
    let (office, mut form) = match (&loaded.office, loaded.booking_form()) {
        (Some(office), Some(form)) => (office.clone(), form),
        _ => anyhow::bail!("Office not found"),
    };

    println!("{}", office.name);
    if let Some(city) = &office.city {
        println!("{}", city.name);
    }
    println!();
    office_detail::print_order_details(office.duration, office.price, &loaded);
    println!();

    form.name = input.name;
    form.phone_number = input.phone_number;
    form.started_at = input.started_at;

    let mut workflow = SubmitWorkflow::new(state.api.as_ref(), office);
    match workflow.submit(&form).await {
        FlowState::Succeeded(handoff) => {
            confirmation::render(&state.config, &handoff.office, &handoff.booking);
            Ok(())
        }
        FlowState::Editing {
            field_errors,
            error,
        } => {
            for field_error in field_errors {
                eprintln!("  {field_error}");
            }
            if let Some(message) = error {
                eprintln!("  {message}");
            }
            anyhow::bail!("booking was not submitted")
        }
        FlowState::Submitting => anyhow::bail!("booking is still in flight"),
    }
}
