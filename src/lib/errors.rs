//! Error type shared by HTTP helpers, flows, and the session store. Variants
//! are grouped into three classes through [`AppError::kind`] so views can pick
//! a message tone without looking at message text.

use std::fmt;

/// Message shown whenever the backend could not be reached at all.
pub const NETWORK_ERROR_MESSAGE: &str = "Network error: Could not connect to the backend server.";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppError {
    Config(String),
    Network(String),
    Rejected {
        status: u16,
        message: Option<String>,
    },
    Parse(String),
    Serialization(String),
    Storage(String),
}

/// Where a failure originated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// Caught in the browser before (or instead of) a network round trip.
    Local,
    /// The request never reached the backend.
    Network,
    /// The backend answered with an error or an unusable body.
    Backend,
}

impl AppError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::Network(_) => ErrorKind::Network,
            AppError::Rejected { .. } | AppError::Parse(_) => ErrorKind::Backend,
            AppError::Config(_)
            | AppError::Serialization(_)
            | AppError::Storage(_) => ErrorKind::Local,
        }
    }

    /// Text shown to the user. `fallback` covers backend failures that did not
    /// carry an `error` message of their own.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            AppError::Network(_) => NETWORK_ERROR_MESSAGE.to_string(),
            AppError::Rejected {
                message: Some(message),
                ..
            } => message.clone(),
            AppError::Rejected { message: None, .. } | AppError::Parse(_) => fallback.to_string(),
            AppError::Config(message)
            | AppError::Serialization(message)
            | AppError::Storage(message) => message.clone(),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(message) => write!(formatter, "Config error: {message}"),
            AppError::Network(message) => write!(formatter, "Network error: {message}"),
            AppError::Rejected {
                status,
                message: Some(message),
            } => write!(formatter, "Request failed ({status}): {message}"),
            AppError::Rejected {
                status,
                message: None,
            } => write!(formatter, "Request failed ({status})"),
            AppError::Parse(message) => write!(formatter, "Response error: {message}"),
            AppError::Serialization(message) => write!(formatter, "Request error: {message}"),
            AppError::Storage(message) => write!(formatter, "Storage error: {message}"),
        }
    }
}

impl std::error::Error for AppError {}
