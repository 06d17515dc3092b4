//! RFC 7807 problem details and their actix response mapping.

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use std::fmt;

pub const APPLICATION_PROBLEM_JSON: &str = "application/problem+json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProblemDetails {
    #[serde(rename = "type")]
    pub type_uri: String,
    pub title: String,
    pub status: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance: Option<String>,
}

impl ProblemDetails {
    /// Problem with the default `type` and `title` for `status`.
    pub fn for_status(status: StatusCode) -> Self {
        let (type_uri, title) = match status {
            StatusCode::BAD_REQUEST => (
                "https://tools.ietf.org/html/rfc9110#section-15.5.1",
                "Bad Request",
            ),
            StatusCode::NOT_FOUND => (
                "https://tools.ietf.org/html/rfc9110#section-15.5.5",
                "Not Found",
            ),
            StatusCode::INTERNAL_SERVER_ERROR => (
                "https://tools.ietf.org/html/rfc9110#section-15.6.1",
                "An error occurred while processing your request.",
            ),
            other => ("about:blank", other.canonical_reason().unwrap_or("Unknown")),
        };
        Self {
            type_uri: type_uri.to_string(),
            title: title.to_string(),
            status: status.as_u16(),
            detail: None,
            instance: None,
        }
    }

    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self::for_status(StatusCode::BAD_REQUEST).with_detail(detail)
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn with_instance(mut self, instance: impl Into<String>) -> Self {
        self.instance = Some(instance.into());
        self
    }

    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    pub fn to_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .content_type(APPLICATION_PROBLEM_JSON)
            .json(self)
    }
}

impl fmt::Display for ProblemDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.detail {
            Some(detail) => write!(f, "{} ({}): {}", self.title, self.status, detail),
            None => write!(f, "{} ({})", self.title, self.status),
        }
    }
}

// Lets extractor error handlers return a problem as an `actix_web::Error`.
impl ResponseError for ProblemDetails {
    fn status_code(&self) -> StatusCode {
        ProblemDetails::status_code(self)
    }

    fn error_response(&self) -> HttpResponse {
        self.to_response()
    }
}
