use keiro_core::{Listener, ListenerResult, Payload};

/// A listener backed by a closure.
#[derive(Clone)]
pub struct FromFn<F> {
    f: F,
}

/// Create a listener from a closure.
///
/// # Example
///
/// ```rust
/// use keiro_core::{Listener, Payload};
/// use keiro_std::listeners::from_fn;
///
/// let stop_on_admin = from_fn(|payload: &Payload| Ok(payload.contains_key("admin")));
/// assert!(!stop_on_admin.on_receive(&Payload::new()).unwrap());
/// ```
pub fn from_fn<F>(f: F) -> FromFn<F>
where
    F: Fn(&Payload) -> ListenerResult + Send + Sync + 'static,
{
    FromFn { f }
}

impl<F> Listener for FromFn<F>
where
    F: Fn(&Payload) -> ListenerResult + Send + Sync + 'static,
{
    fn on_receive(&self, payload: &Payload) -> ListenerResult {
        (self.f)(payload)
    }
}
