//! Error types for asset_gateway
//!
//! Loaders never surface these to callers; they are logged once at the
//! adapter boundary and collapsed into an absent result.

use thiserror::Error;

/// Failure status reported by a host asset subsystem.
///
/// Hosts may fail without any detail, so both fields are optional.
#[derive(Error, Debug, Clone, Default, PartialEq, Eq)]
#[error("{}", .message.as_deref().unwrap_or("unknown error"))]
pub struct HostError {
    /// Human readable reason, if the host provided one
    pub message: Option<String>,
    /// Host-side stack trace or diagnostic dump
    pub trace: Option<String>,
}

impl HostError {
    /// Failure with a message
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            trace: None,
        }
    }

    /// Failure status with no detail at all
    pub fn unspecified() -> Self {
        Self::default()
    }

    /// Attach a trace to this failure
    pub fn with_trace(mut self, trace: impl Into<String>) -> Self {
        self.trace = Some(trace.into());
        self
    }
}

/// Why a load resolved to nothing
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    #[error("asset path cannot be empty")]
    InvalidPath,

    #[error("failed to load asset at path '{path}': {source}")]
    Host {
        path: String,
        #[source]
        source: HostError,
    },

    #[error("unexpected fault while loading asset at path '{path}': {message}")]
    Fault { path: String, message: String },

    #[error("asset at path '{path}' is not a {expected}")]
    TypeMismatch { path: String, expected: &'static str },
}

/// Unrecognised loader backend name
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown asset loader kind '{0}', expected 'managed' or 'simple'")]
pub struct ParseLoaderKindError(pub String);

/// Result type alias for asset operations
pub type Result<T> = std::result::Result<T, LoadError>;
