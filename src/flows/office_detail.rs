use anyhow::Result;

use crate::services::{detail, format};
use crate::state::AppState;

/// Show one office space with its pricing breakdown.
pub async fn run(state: &AppState, slug: &str) -> Result<()> {
    let loaded = detail::load(state.api.as_ref(), slug, state.codes.as_ref()).await;

    if let Some(error) = &loaded.error {
        anyhow::bail!("{error}");
    }
    let Some(office) = &loaded.office else {
        anyhow::bail!("Office not found");
    };

    println!("{}", office.name);
    if let Some(city) = &office.city {
        println!("{}", city.name);
    }
    println!("{}", office.address);
    println!();
    println!("{}", office.about);

    if !office.benefits.is_empty() {
        println!();
        println!("Benefits:");
        for benefit in &office.benefits {
            println!("  - {}", benefit.name);
        }
    }
    if !office.photos.is_empty() {
        println!();
        println!("Photos:");
        for photo in &office.photos {
            println!(
                "  {}",
                format::asset_url(&state.config.storage_base_url, &photo.photo)
            );
        }
    }

    println!();
    print_order_details(office.duration, office.price, &loaded);

    Ok(())
}

/// The order-details card: duration, sub total, unique code deduction
/// and the grand total the customer must transfer.
pub fn print_order_details(duration: i64, price: i64, loaded: &detail::OfficeDetail) {
    println!("Duration     {duration} Days Working");
    println!("Sub Total    Rp {price}");
    println!("Unique Code  -Rp {}", loaded.unique_code);
    println!("Grand Total  {}", format::rupiah(loaded.total_amount));
    println!();
    println!("Please pay the exact grand total so the transfer can be matched by its unique code.");
}
