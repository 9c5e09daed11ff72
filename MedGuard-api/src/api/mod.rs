pub mod handlers;
pub mod routes;
pub mod state;

use axum::Router;

use med_guard_data::external::ExternalError;
use med_guard_domain::config::AppConfig;

pub use routes::create_app;
pub use state::AppState;

/// Create the application router with production services
pub fn create_application(config: AppConfig) -> Result<Router, ExternalError> {
    let state = AppState::from_config(config)?;
    Ok(create_app(state))
}
