use keiro_core::{Listener, ListenerResult, Payload};

/// Listener gated by a payload predicate.
///
/// Created by [`ListenerExt::when`](super::ListenerExt::when).
#[derive(Clone)]
pub struct When<L, P> {
    listener: L,
    predicate: P,
}

impl<L, P> When<L, P> {
    /// Wrap `listener`.
    pub fn new(listener: L, predicate: P) -> Self {
        Self {
            listener,
            predicate,
        }
    }
}

impl<L, P> Listener for When<L, P>
where
    L: Listener,
    P: Fn(&Payload) -> bool + Send + Sync + 'static,
{
    fn on_receive(&self, payload: &Payload) -> ListenerResult {
        if (self.predicate)(payload) {
            self.listener.on_receive(payload)
        } else {
            Ok(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::listeners::{ListenerExt, from_fn};
    use keiro_core::{Listener, Payload};

    #[test]
    fn rejected_payload_continues() {
        let gated = from_fn(|_: &Payload| Ok(true)).when(|p| p.contains_key("vip"));

        assert!(!gated.on_receive(&Payload::new()).unwrap());
        assert!(gated.on_receive(&Payload::new().with("vip", ())).unwrap());
    }
}
