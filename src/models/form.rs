/// User-edited booking form. `office_space_id` and `total_amount` are
/// derived from the loaded office and never touched by the name, phone
/// and date inputs.
#[derive(Debug, Clone)]
pub struct BookingForm {
    pub name: String,
    pub phone_number: String,
    /// Raw date input; normalized to a calendar date at submission.
    pub started_at: String,
    pub office_space_id: i64,
    pub total_amount: i64,
}

impl BookingForm {
    /// Form defaults for a freshly loaded office: editable fields empty,
    /// derived fields filled in.
    pub fn for_office(office_space_id: i64, total_amount: i64) -> Self {
        Self {
            name: String::new(),
            phone_number: String::new(),
            started_at: String::new(),
            office_space_id,
            total_amount,
        }
    }
}
