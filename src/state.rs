use crate::config::AppConfig;
use crate::services::api::BookingApi;
use crate::services::pricing::CodeSource;

pub struct AppState {
    pub config: AppConfig,
    pub api: Box<dyn BookingApi>,
    pub codes: Box<dyn CodeSource>,
}
