// SPDX-License-Identifier: MPL-2.0
use crate::domain::portfolio::{ImageId, Order};
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    Io(String),
    Config(String),
    Network(NetworkError),
    NotFound(NotFoundError),
}

/// Failures of the remote list fetch.
///
/// Every variant renders as an empty gallery; the distinction only matters
/// for logging and for the retry loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NetworkError {
    /// The service could not be reached (DNS, connect, timeout, TLS).
    Unreachable(String),

    /// The service answered with a non-success HTTP status.
    Status(u16),

    /// The body could not be decoded, or it violates collection invariants
    /// (duplicate orders or identifiers).
    Malformed(String),

    /// The base address from the configuration is not a valid URL.
    InvalidAddress(String),
}

impl fmt::Display for NetworkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkError::Unreachable(msg) => write!(f, "Service unreachable: {}", msg),
            NetworkError::Status(code) => write!(f, "HTTP status: {}", code),
            NetworkError::Malformed(msg) => write!(f, "Malformed response: {}", msg),
            NetworkError::InvalidAddress(msg) => write!(f, "Invalid service address: {}", msg),
        }
    }
}

/// Lookup into a gallery that has no matching descriptor.
///
/// Reaching this through the navigation controller means a stale gallery was
/// mixed in or a boundary check was skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotFoundError {
    Id(ImageId),
    Order(Order),
}

impl fmt::Display for NotFoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotFoundError::Id(id) => write!(f, "No image with id {}", id),
            NotFoundError::Order(order) => write!(f, "No image at position {}", order),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Network(e) => write!(f, "Network Error: {}", e),
            Error::NotFound(e) => write!(f, "Not Found: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<NetworkError> for Error {
    fn from(err: NetworkError) -> Self {
        Error::Network(err)
    }
}

impl From<NotFoundError> for Error {
    fn from(err: NotFoundError) -> Self {
        Error::NotFound(err)
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

impl From<reqwest::Error> for NetworkError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            NetworkError::Status(status.as_u16())
        } else if err.is_decode() {
            NetworkError::Malformed(err.to_string())
        } else {
            NetworkError::Unreachable(err.to_string())
        }
    }
}

impl From<serde_json::Error> for NetworkError {
    fn from(err: serde_json::Error) -> Self {
        NetworkError::Malformed(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
