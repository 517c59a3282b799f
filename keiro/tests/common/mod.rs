#![allow(dead_code)]

use keiro::{
    EventHub, Identity, Listener, ListenerResult, Payload, RegistrationRecord,
    loaders::ManualLoader,
    testing::{Journal, RecordingListener},
};

// ============================================================================
// Test Listeners
// ============================================================================

/// Records the `"step"` payload entry, if present, then continues.
#[derive(Clone)]
pub struct PayloadEcho {
    pub journal: Journal,
}

impl Listener for PayloadEcho {
    fn on_receive(&self, payload: &Payload) -> ListenerResult {
        let step = payload.get::<&str>("step").copied().unwrap_or("none");
        self.journal.push(step);
        Ok(false)
    }
}

// ============================================================================
// Fixtures
// ============================================================================

/// A hub initialized from `records`.
pub fn hub_with(records: impl IntoIterator<Item = RegistrationRecord>) -> EventHub {
    let hub = EventHub::new();
    hub.initialize([records.into_iter().collect::<ManualLoader>()])
        .expect("fixture records must resolve");
    hub
}

/// Shorthand for a recording listener's record.
pub fn recorder(
    journal: &Journal,
    label: &str,
    group: &str,
    priority: i32,
    flag: u32,
    stop: bool,
) -> RegistrationRecord {
    let listener = RecordingListener::new(label, journal);
    let listener = if stop { listener.stopping() } else { listener };
    listener.record(group, priority, flag)
}

/// A record whose identity always fails to resolve.
pub fn unresolvable(group: &'static str, name: &'static str) -> RegistrationRecord {
    RegistrationRecord::new(
        group,
        Identity::new(name, || Err("no default constructor".into())),
    )
}
