use crate::config::AppConfig;
use crate::models::{BookingDetails, Office};
use crate::services::format;

/// Confirmation view, rendered entirely from the handed-off office and
/// booking payload; no further network read happens here.
pub fn render(config: &AppConfig, office: &Office, booking: &BookingDetails) {
    println!("Booking Finished");
    println!();
    println!("{}", office.name);
    if let Some(city) = &office.city {
        println!("{}", city.name);
    }
    println!(
        "{}",
        format::asset_url(&config.storage_base_url, &office.thumbnail)
    );
    println!();
    println!("{}", booking.booking_trx_id);
    println!("Save your booking ID securely");
    println!();
    println!("Booked for   {}", booking.name);
    println!("Duration     {} Days Working", booking.duration);
    println!("Started At   {}", booking.started_at.format("%Y-%m-%d"));
    println!("Ended At     {}", booking.ended_at.format("%Y-%m-%d"));
    println!("Total        {}", format::rupiah(booking.total_amount));
    println!(
        "Status       {}",
        if booking.is_paid { "paid" } else { "awaiting payment" }
    );
    println!();
    println!("Your order is being processed; we will let you know the status by SMS.");
}
