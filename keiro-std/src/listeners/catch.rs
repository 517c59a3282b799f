use keiro_core::{BoxError, Listener, ListenerResult, Payload};

/// Listener that turns the inner listener's errors into a stop decision.
///
/// Created by [`ListenerExt::catch`](super::ListenerExt::catch).
#[derive(Clone)]
pub struct Catch<L, F> {
    listener: L,
    handler: F,
}

impl<L, F> Catch<L, F> {
    /// Wrap `listener`.
    pub fn new(listener: L, handler: F) -> Self {
        Self { listener, handler }
    }
}

impl<L, F> Listener for Catch<L, F>
where
    L: Listener,
    F: Fn(BoxError) -> bool + Send + Sync + 'static,
{
    fn on_receive(&self, payload: &Payload) -> ListenerResult {
        match self.listener.on_receive(payload) {
            Ok(stop) => Ok(stop),
            Err(e) => Ok((self.handler)(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::listeners::{ListenerExt, from_fn};
    use keiro_core::{Listener, Payload};

    #[test]
    fn error_becomes_decision() {
        let failing = from_fn(|_: &Payload| Err("offline".into()));

        let swallow = failing.clone().catch(|_| false);
        let halt = failing.catch(|e| e.to_string() == "offline");

        assert!(!swallow.on_receive(&Payload::new()).unwrap());
        assert!(halt.on_receive(&Payload::new()).unwrap());
    }
}
