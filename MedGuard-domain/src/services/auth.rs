use thiserror::Error;
use tracing::{info, instrument, warn};
use validator::Validate;

use crate::entities::auth::{LoginOutcome, LoginRequest};
use crate::entities::notice::Notice;
use crate::validation::describe_validation_errors;

/// Login errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LoginError {
    /// The form failed validation; one message per failed rule
    #[error("Invalid login form: {}", .0.join(", "))]
    InvalidForm(Vec<String>),
}

/// Accept any well-formed login. There is no account store and no token.
#[instrument(skip(request))]
pub fn login(request: &LoginRequest) -> Result<LoginOutcome, LoginError> {
    if let Err(errors) = request.validate() {
        let messages = describe_validation_errors(&errors);
        warn!(?messages, "Login form rejected");
        return Err(LoginError::InvalidForm(messages));
    }

    info!("Simulated login accepted");
    Ok(LoginOutcome {
        notice: Notice::info("Login Successful", "Welcome back!"),
        redirect_to: "/".to_string(),
    })
}
