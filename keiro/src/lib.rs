//! # keiro - Group-Scoped Event Dispatch
//!
//! `keiro` lets independently built modules of one application talk to each
//! other without sharing types. Producers dispatch a named *group*, optionally
//! with a [`Flag`] and a [`Payload`]; every [`Listener`] registered in that
//! group receives the event in priority order, and any of them can stop
//! further propagation.
//!
//! ## Quick Start
//!
//! ```rust
//! use keiro::{EventHub, Identity, Listener, ListenerResult, Payload, RegistrationRecord};
//! use keiro::loaders::ManualLoader;
//!
//! #[derive(Default)]
//! struct ClearCache;
//!
//! impl Listener for ClearCache {
//!     fn on_receive(&self, payload: &Payload) -> ListenerResult {
//!         let _user = payload.get::<u64>("user_id");
//!         Ok(false)
//!     }
//! }
//!
//! let loader = ManualLoader::new()
//!     .register(RegistrationRecord::new("logout", Identity::of::<ClearCache>()));
//!
//! let hub = EventHub::new();
//! hub.initialize([loader]).unwrap();
//! hub.dispatch_payload("logout", &Payload::new().with("user_id", 7_u64)).unwrap();
//! ```
//!
//! ## Registration Paths
//!
//! - **Link time** (features `macros` + `inventory`): annotate a listener type
//!   with `#[receiver(group = "...")]` and call [`EventHub::static_init`].
//! - **Runtime**: hand any [`Loader`] to [`EventHub::initialize`], or to
//!   `EventHub::initialize_in_background` (feature `tokio`) when discovery is
//!   expensive.

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use keiro_core::{
    // Error types
    BoxError,
    // Listener
    BoxListener,
    ConfigurationError,
    DispatchError,
    // Data model
    Flag,
    Identity,
    KeiroError,
    Listener,
    ListenerResult,
    // Loader
    Loader,
    Payload,
    RegistrationRecord,
    priority,
};

pub use keiro_std::{
    // Configuration
    DispatchConfig,
    // Dispatch
    DispatchOutcome,
    Dispatcher,
    // Registry
    Entry,
    // Initialization
    EventHub,
    FlagMatching,
    Registry,
    RegistryBuilder,
    ResolutionPolicy,
};

#[cfg(feature = "inventory")]
pub use keiro_std::loaders::Receiver;

/// The process-wide hub and free functions operating on it.
pub mod global {
    #![allow(clippy::wildcard_imports)]
    pub use keiro_std::global::*;
}

/// Standard loaders.
pub mod loaders {
    #![allow(clippy::wildcard_imports)]
    pub use keiro_std::loaders::*;
}

/// Standard listener implementations.
pub mod listeners {
    #![allow(clippy::wildcard_imports)]
    pub use keiro_std::listeners::*;
}

/// Testing utilities.
pub mod testing {
    #![allow(clippy::wildcard_imports)]
    pub use keiro_std::testing::*;
}

/// Prelude module - common imports for Keiro.
///
/// # Usage
///
/// ```rust,ignore
/// use keiro::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        BoxError,
        EventHub,
        Flag,
        Identity,
        Listener,
        ListenerResult,
        Loader,
        Payload,
        RegistrationRecord,
        listeners::{ListenerExt, from_fn},
        priority,
    };
}

#[cfg(feature = "macros")]
pub use keiro_macros::receiver;

#[cfg(feature = "inventory")]
pub use inventory;
