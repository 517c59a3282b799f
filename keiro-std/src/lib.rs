//! # keiro-std
//!
//! The dispatch engine of the Keiro event dispatcher.
//!
//! This crate provides:
//! - **Registry**: [`RegistryBuilder`] and the immutable [`Registry`]
//! - **Initialization**: [`EventHub`], populated at most once from loaders
//! - **Dispatch**: [`Dispatcher`] with priority order, flag filtering and stop signals
//! - **Loaders**: manual, closure-backed, and `inventory`-backed
//! - **Listeners**: `from_fn` and the [`ListenerExt`](listeners::ListenerExt) combinators
//! - **Global hub**: a process-wide [`EventHub`] in [`global`]

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core traits
pub use keiro_core;

// Modules
pub mod config;
pub mod dispatch;
pub mod global;
pub mod hub;
pub mod listeners;
pub mod loaders;
pub mod registry;
pub mod testing;

pub use config::{DispatchConfig, FlagMatching, ResolutionPolicy};
pub use dispatch::{DispatchOutcome, Dispatcher};
pub use hub::EventHub;
pub use registry::{Entry, Registry, RegistryBuilder};

#[cfg(feature = "inventory")]
pub use inventory;
