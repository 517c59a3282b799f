//! Standard [`Loader`](keiro_core::Loader) implementations.
//!
//! - [`ManualLoader`]: records registered by explicit calls
//! - [`FnLoader`]: records produced by a closure, e.g. a runtime scan
//! - [`InventoryLoader`]: records collected at link time (feature `inventory`)

mod func;
mod manual;

#[cfg(feature = "inventory")]
mod collected;

pub use func::FnLoader;
pub use manual::ManualLoader;

#[cfg(feature = "inventory")]
pub use collected::{InventoryLoader, Receiver};
