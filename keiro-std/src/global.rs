//! The process-wide hub.
//!
//! Modules that cannot share an [`EventHub`] by reference can use the one
//! returned by [`hub`]. It uses the default configuration and follows the
//! same at-most-once initialization as any other hub.

use crate::{dispatch::DispatchOutcome, hub::EventHub};
use keiro_core::{ConfigurationError, DispatchError, Flag, Loader, Payload};

static HUB: EventHub = EventHub::new();

/// The process-wide hub.
pub fn hub() -> &'static EventHub {
    &HUB
}

/// Initialize the process-wide hub from `loaders`.
pub fn initialize<I>(loaders: I) -> Result<(), ConfigurationError>
where
    I: IntoIterator,
    I::Item: Loader,
{
    HUB.initialize(loaders)
}

/// Initialize the process-wide hub from link-time receivers.
#[cfg(feature = "inventory")]
pub fn static_init() -> Result<(), ConfigurationError> {
    HUB.static_init()
}

/// Dispatch to every listener of `group` on the process-wide hub.
pub fn dispatch(group: &str) -> Result<DispatchOutcome, DispatchError> {
    HUB.dispatch(group)
}

/// Dispatch to the listeners of `group` matching `flag` on the process-wide hub.
pub fn dispatch_flagged(group: &str, flag: impl Into<Flag>) -> Result<DispatchOutcome, DispatchError> {
    HUB.dispatch_flagged(group, flag)
}

/// Dispatch `payload` to every listener of `group` on the process-wide hub.
pub fn dispatch_payload(group: &str, payload: &Payload) -> Result<DispatchOutcome, DispatchError> {
    HUB.dispatch_payload(group, payload)
}

/// Dispatch `payload` to the listeners of `group` matching `flag` on the
/// process-wide hub.
pub fn dispatch_with(
    group: &str,
    flag: impl Into<Flag>,
    payload: &Payload,
) -> Result<DispatchOutcome, DispatchError> {
    HUB.dispatch_with(group, flag, payload)
}
