pub mod booking;
pub mod form;
pub mod office;

pub use booking::{BookingDetails, BookingLookup, BookingRequest};
pub use form::BookingForm;
pub use office::{City, Office, OfficeBenefit, OfficePhoto};
