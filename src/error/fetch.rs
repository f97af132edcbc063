//! HTTP download errors

use super::BootstrapError;

/// Creates a transport failure error for `url`
pub fn failed(url: impl Into<String>, reason: impl ToString) -> BootstrapError {
    BootstrapError::FetchFailed {
        url: url.into(),
        reason: reason.to_string(),
    }
}

/// Creates an error for a non-success HTTP status
pub fn http_status(url: impl Into<String>, status: u16) -> BootstrapError {
    BootstrapError::HttpStatus {
        url: url.into(),
        status,
    }
}

/// Creates an invalid URL error
pub fn invalid_url(url: impl Into<String>, reason: impl ToString) -> BootstrapError {
    BootstrapError::InvalidUrl {
        url: url.into(),
        reason: reason.to_string(),
    }
}
