//! # Listener
//!
//! The one capability a module implements to receive events from its group.
//!
//! A listener knows nothing about the registry, the dispatcher, or the other
//! listeners of its group. It is handed the event [`Payload`] and answers a
//! single question: should propagation stop here?
//!
//! - `Ok(false)` lets the next listener in the group run.
//! - `Ok(true)` stops propagation for this dispatch call only.
//! - `Err(_)` aborts the dispatch call and is returned to its caller.

use crate::{error::BoxError, payload::Payload};

/// Result of a listener invocation: `Ok(true)` stops propagation.
pub type ListenerResult = Result<bool, BoxError>;

/// A boxed, type-erased listener as stored by the registry.
pub type BoxListener = Box<dyn Listener>;

/// A receiver of group-scoped events.
///
/// The default [`on_receive`](Listener::on_receive) ignores the payload and
/// never stops propagation, so a marker implementation is valid.
///
/// # Example
///
/// ```rust
/// use keiro_core::{Listener, ListenerResult, Payload};
///
/// struct RejectGuests;
///
/// impl Listener for RejectGuests {
///     fn on_receive(&self, payload: &Payload) -> ListenerResult {
///         Ok(payload.get::<bool>("guest") == Some(&true))
///     }
/// }
///
/// assert!(RejectGuests.on_receive(&Payload::new().with("guest", true)).unwrap());
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a `Listener`",
    label = "missing `Listener` implementation",
    note = "Listeners must be `Send + Sync + 'static` and implement `Listener` (the default `on_receive` never stops propagation)."
)]
pub trait Listener: Send + Sync + 'static {
    /// Called when an event is dispatched to this listener's group.
    fn on_receive(&self, payload: &Payload) -> ListenerResult {
        let _ = payload;
        Ok(false)
    }
}

impl Listener for BoxListener {
    fn on_receive(&self, payload: &Payload) -> ListenerResult {
        (**self).on_receive(payload)
    }
}

impl<L: Listener> Listener for std::sync::Arc<L> {
    fn on_receive(&self, payload: &Payload) -> ListenerResult {
        (**self).on_receive(payload)
    }
}
