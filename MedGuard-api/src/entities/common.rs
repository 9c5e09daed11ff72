use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use med_guard_domain::entities::notice::Notice;
use med_guard_domain::entities::metrics::Violation;
use med_guard_domain::services::{
    BmiError, LoginError, MetricsError, PillError, ScanError, SearchError,
};

/// Error response format for API
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error type/code - machine-readable identifier
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// Optional list of individual problems
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<String>>,

    /// Notices to show the user, one per problem
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notices: Option<Vec<Notice>>,
}

impl ErrorResponse {
    /// Create a not found error response
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            error: "not_found".to_string(),
            message: message.into(),
            details: None,
            notices: None,
        }
    }

    /// Create a validation error response
    pub fn validation_error(
        message: impl Into<String>,
        details: Option<Vec<String>>,
        notices: Option<Vec<Notice>>,
    ) -> Self {
        Self {
            error: "validation_error".to_string(),
            message: message.into(),
            details,
            notices,
        }
    }

    /// Create an internal error response
    pub fn internal_error() -> Self {
        Self {
            error: "internal_error".to_string(),
            message: "An unexpected error occurred".to_string(),
            details: None,
            notices: None,
        }
    }

    /// Validation error carrying a single notice
    fn from_notice(notice: Notice) -> Self {
        Self::validation_error(notice.description.clone(), None, Some(vec![notice]))
    }
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> Response {
        let status = match self.error.as_str() {
            "not_found" => StatusCode::NOT_FOUND,
            "validation_error" => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(self)).into_response()
    }
}

impl From<MetricsError> for ErrorResponse {
    fn from(err: MetricsError) -> Self {
        let message = err.to_string();
        match err {
            MetricsError::Validation(violations) => Self::validation_error(
                message,
                Some(violations.iter().map(|v| v.message.clone()).collect()),
                Some(violations.iter().map(Violation::notice).collect()),
            ),
        }
    }
}

impl From<BmiError> for ErrorResponse {
    fn from(err: BmiError) -> Self {
        Self::validation_error(err.to_string(), None, None)
    }
}

impl From<SearchError> for ErrorResponse {
    fn from(err: SearchError) -> Self {
        Self::from_notice(err.notice())
    }
}

impl From<PillError> for ErrorResponse {
    fn from(err: PillError) -> Self {
        Self::from_notice(err.notice())
    }
}

impl From<ScanError> for ErrorResponse {
    fn from(err: ScanError) -> Self {
        match err {
            ScanError::NoResult | ScanError::UnknownAction(_) => Self::not_found(err.to_string()),
            _ => Self::from_notice(err.notice()),
        }
    }
}

impl From<LoginError> for ErrorResponse {
    fn from(err: LoginError) -> Self {
        match err {
            LoginError::InvalidForm(messages) => {
                Self::validation_error("Invalid login form", Some(messages), None)
            }
        }
    }
}

/// Query parameters for the search endpoints
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct SearchQuery {
    /// Search term
    pub q: Option<String>,
}
