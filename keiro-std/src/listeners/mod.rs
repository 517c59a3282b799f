//! Standard listener implementations and combinators.

mod catch;
mod from_fn;
mod when;

pub use catch::Catch;
pub use from_fn::{FromFn, from_fn};
pub use when::When;

use keiro_core::{BoxError, Listener, Payload};

/// Combinators available on every [`Listener`].
pub trait ListenerExt: Listener + Sized {
    /// Recover from errors returned by this listener.
    ///
    /// `handler` receives the error and decides whether propagation stops,
    /// so one failing listener no longer aborts the whole dispatch.
    fn catch<F>(self, handler: F) -> Catch<Self, F>
    where
        F: Fn(BoxError) -> bool + Send + Sync + 'static,
    {
        Catch::new(self, handler)
    }

    /// Only run this listener when `predicate` accepts the payload.
    ///
    /// A rejected payload never stops propagation.
    fn when<P>(self, predicate: P) -> When<Self, P>
    where
        P: Fn(&Payload) -> bool + Send + Sync + 'static,
    {
        When::new(self, predicate)
    }
}

impl<L: Listener> ListenerExt for L {}
