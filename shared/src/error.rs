//! Error types for the schedule Lambda.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while handling a schedule request.
#[derive(Error, Debug)]
pub enum Error {
    /// HTTP method the router does not dispatch
    #[error("Method not allowed: {0}")]
    MethodNotAllowed(String),

    /// No record stored for the requested key
    #[error("Not found: {0}")]
    NotFound(String),

    /// Path parameter or body could not be coerced
    #[error("Validation error: {0}")]
    Validation(String),

    /// DynamoDB call failed or returned an unreadable item
    #[error("Store error: {0}")]
    Store(String),

    /// IP lookup answered with something other than 200
    #[error("Non 200 response from IP lookup: {0}")]
    Non200Response(u16),

    /// IP lookup answered 200 with an empty body
    #[error("No IP in HTTP response")]
    NoIp,

    /// Outbound HTTP transport error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Get HTTP status code for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            Error::Validation(_) => 400,
            Error::NotFound(_) => 404,
            Error::MethodNotAllowed(_) => 405,
            Error::Non200Response(_) | Error::NoIp | Error::Http(_) => 502,
            _ => 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(Error::MethodNotAllowed("DELETE".into()).status_code(), 405);
        assert_eq!(Error::NotFound("42".into()).status_code(), 404);
        assert_eq!(Error::Validation("sid".into()).status_code(), 400);
        assert_eq!(Error::Non200Response(503).status_code(), 502);
        assert_eq!(Error::NoIp.status_code(), 502);
        assert_eq!(Error::Store("timeout".into()).status_code(), 500);
        assert_eq!(Error::Config("ROUTER_VARIANT".into()).status_code(), 500);
    }
}
