//! Error type for remote catalog calls.
//!
//! # Design
//! Every failed remote call surfaces as a single `TransportError`. The two
//! variants only differ in where the failure came from: `Client` when no
//! usable response was obtained (network failure, unserializable request,
//! undecodable body), `Backend` when the endpoint answered with a failing
//! status. The `Display` text is the message shown to the user.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// No usable response: connection, serialization or decoding failure.
    #[error("An error occurred: {message}")]
    Client { message: String },

    /// The endpoint returned a non-2xx status.
    #[error("Backend returned code {status}, body was: {body}")]
    Backend { status: u16, body: String },
}

impl TransportError {
    pub fn client(message: impl Into<String>) -> Self {
        TransportError::Client {
            message: message.into(),
        }
    }

    pub fn backend(status: u16, body: impl Into<String>) -> Self {
        TransportError::Backend {
            status,
            body: body.into(),
        }
    }

    /// The human-readable message for display.
    pub fn message(&self) -> String {
        self.to_string()
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            TransportError::Backend { status, .. } => Some(*status),
            TransportError::Client { .. } => None,
        }
    }

    pub fn is_backend(&self) -> bool {
        matches!(self, TransportError::Backend { .. })
    }
}

/// Errors raised while reading configuration from the environment.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid timeout {value:?}: expected a whole number of seconds")]
    InvalidTimeout { value: String },
}
