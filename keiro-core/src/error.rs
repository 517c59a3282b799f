//! Error types for Keiro.
//!
//! This module provides a structured error hierarchy using `thiserror`:
//!
//! - [`KeiroError`] - Top-level error type for all Keiro operations
//! - [`ConfigurationError`] - Errors raised while initializing a hub
//! - [`DispatchError`] - Errors surfaced by a dispatch call

use thiserror::Error;

/// A boxed error type for dynamic error handling.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Top-level error type for all Keiro operations.
#[derive(Error, Debug)]
pub enum KeiroError {
    /// Initialization failed.
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    /// A dispatch call failed.
    #[error("dispatch error: {0}")]
    Dispatch(#[from] DispatchError),

    /// The background initialization task did not complete.
    #[error("background initialization failed")]
    Background(#[source] BoxError),
}

/// Errors raised while populating the registry.
///
/// Configuration errors surface at startup, never at dispatch time.
#[derive(Error, Debug)]
pub enum ConfigurationError {
    /// A record was registered without a group name.
    #[error("listener `{identity}` was registered with an empty group")]
    EmptyGroup {
        /// Name of the offending identity.
        identity: String,
    },

    /// An identity could not be turned into a listener.
    #[error("listener `{identity}` could not be constructed")]
    Unresolvable {
        /// Name of the offending identity.
        identity: String,
        /// Why construction failed.
        #[source]
        source: BoxError,
    },

    /// A loader failed to produce its records.
    #[error("loader `{loader}` failed")]
    Loader {
        /// Name of the failing loader.
        loader: String,
        /// The loader's error.
        #[source]
        source: BoxError,
    },
}

/// Errors that can occur during event dispatch.
#[derive(Error, Debug)]
pub enum DispatchError {
    /// A listener returned an error; the remaining listeners were skipped.
    #[error("listener `{identity}` in group `{group}` failed")]
    Listener {
        /// Group being dispatched.
        group: String,
        /// Name of the failing listener's identity.
        identity: String,
        /// The listener's error.
        #[source]
        source: BoxError,
    },
}

impl From<BoxError> for KeiroError {
    fn from(err: BoxError) -> Self {
        KeiroError::Background(err)
    }
}
