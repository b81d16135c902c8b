use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use rent_office::config::AppConfig;
use rent_office::flows;
use rent_office::services::api::http::HttpBookingApi;
use rent_office::services::pricing::RandomCode;
use rent_office::state::AppState;

/// Office-rental booking client.
#[derive(Parser, Debug)]
#[command(name = "rent-office")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show an office space and its pricing breakdown
    Office {
        /// Office slug, e.g. "wework-sudirman"
        slug: String,
    },

    /// Book an office space
    Book {
        /// Office slug to book
        slug: String,

        /// Full name on the booking
        #[arg(long)]
        name: String,

        /// Contact phone number, any format
        #[arg(long)]
        phone: String,

        /// First rental day (YYYY-MM-DD)
        #[arg(long)]
        started_at: String,
    },

    /// Look up an existing booking
    Check {
        /// Transaction code from the confirmation receipt
        #[arg(long)]
        booking_trx_id: String,

        /// Phone number the booking was made with
        #[arg(long)]
        phone: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let cli = Cli::parse();
    let config = AppConfig::from_env();

    let state = AppState {
        api: Box::new(HttpBookingApi::new(config.api_base_url.clone())),
        codes: Box::new(RandomCode),
        config,
    };

    match cli.command {
        Command::Office { slug } => flows::office_detail::run(&state, &slug).await,
        Command::Book {
            slug,
            name,
            phone,
            started_at,
        } => {
            let input = flows::book_office::BookingInput {
                name,
                phone_number: phone,
                started_at,
            };
            flows::book_office::run(&state, &slug, input).await
        }
        Command::Check {
            booking_trx_id,
            phone,
        } => flows::check_booking::run(&state, booking_trx_id, phone).await,
    }
}
