// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Manifest(String),
    /// Remote slide image could not be downloaded.
    Fetch(String),
    Relay(RelayError),
}

/// Failures of a contact relay submission.
/// Used to pick a localized message and a log line; the user only ever sees
/// the static failure text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelayError {
    /// No access key configured for the relay endpoint.
    MissingAccessKey,

    /// Request never produced a response (DNS, TLS, connection reset).
    Network(String),

    /// Relay answered with a non-success HTTP status.
    HttpStatus(u16),

    /// Response body was not the expected JSON.
    InvalidResponse(String),

    /// Relay parsed the request but reported `success: false`.
    Rejected(String),
}

impl RelayError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            RelayError::MissingAccessKey => "error-relay-missing-key",
            RelayError::Network(_) => "error-relay-network",
            RelayError::HttpStatus(_) => "error-relay-http-status",
            RelayError::InvalidResponse(_) => "error-relay-invalid-response",
            RelayError::Rejected(_) => "error-relay-rejected",
        }
    }
}

impl fmt::Display for RelayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RelayError::MissingAccessKey => write!(f, "No relay access key configured"),
            RelayError::Network(msg) => write!(f, "Network error: {}", msg),
            RelayError::HttpStatus(status) => write!(f, "Relay returned HTTP {}", status),
            RelayError::InvalidResponse(msg) => write!(f, "Invalid relay response: {}", msg),
            RelayError::Rejected(msg) => write!(f, "Relay rejected submission: {}", msg),
        }
    }
}

impl std::error::Error for RelayError {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Manifest(e) => write!(f, "Manifest Error: {}", e),
            Error::Fetch(e) => write!(f, "Fetch Error: {}", e),
            Error::Relay(e) => write!(f, "Relay Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<RelayError> for Error {
    fn from(err: RelayError) -> Self {
        Error::Relay(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
