//! # keiro-core
//!
//! Core data model and capability traits for the Keiro event dispatcher.
//!
//! This crate has minimal dependencies and is designed to be imported by
//! modules that only need to *declare* listeners, without pulling in the
//! dispatch engine from `keiro-std`.
//!
//! # Building Blocks
//!
//! ## [`Listener`]
//!
//! The single capability a module implements to take part in dispatch. It
//! receives a [`Payload`] and answers whether propagation should stop.
//!
//! ## [`RegistrationRecord`]
//!
//! Immutable metadata describing one listener: its group, [priority], [`Flag`]
//! and an [`Identity`] able to construct the listener once at startup.
//!
//! ## [`Loader`]
//!
//! Supplies registration records to the initializer. How they are discovered
//! (link-time collection, manual registration, runtime scan) is up to the
//! loader.
//!
//! # Error Types
//!
//! - [`KeiroError`] - Top-level error type
//! - [`ConfigurationError`] - Initialization errors
//! - [`DispatchError`] - Listener failures surfaced by dispatch

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod error;
mod flag;
mod listener;
mod loader;
mod payload;
mod record;

pub mod priority;

// Re-exports
pub use error::{BoxError, ConfigurationError, DispatchError, KeiroError};
pub use flag::Flag;
pub use listener::{BoxListener, Listener, ListenerResult};
pub use loader::Loader;
pub use payload::Payload;
pub use record::{Identity, RegistrationRecord};
