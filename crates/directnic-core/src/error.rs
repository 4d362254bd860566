//! Error types for the updater
//!
//! This module defines all error types used throughout the crate.

use thiserror::Error;

/// Result type alias for updater operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for the updater
#[derive(Error, Debug)]
pub enum Error {
    /// No settings file found in any search directory
    #[error("no config found")]
    ConfigNotFound,

    /// Settings file exists but is unreadable, unparseable, or lacks a
    /// valid `update-url`
    #[error("config error: {0}")]
    Config(String),

    /// Transport-level failure on an outbound call, including body reads
    #[error("network error: {0}")]
    Network(String),

    /// Non-200 status from an upstream call
    #[error("{call} failed with status {status}")]
    Status {
        /// Which upstream call failed
        call: &'static str,
        /// HTTP status code returned
        status: u16,
    },

    /// Update call returned 200 but the body lacked the success marker
    #[error("update rejected: {body}")]
    Rejected {
        /// Full response body, kept for diagnostics
        body: String,
    },
}

impl Error {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a network error
    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network(msg.into())
    }

    /// Create a status error for a named upstream call
    pub fn status(call: &'static str, status: u16) -> Self {
        Self::Status { call, status }
    }

    /// Create a rejected-update error carrying the response body
    pub fn rejected(body: impl Into<String>) -> Self {
        Self::Rejected { body: body.into() }
    }
}
