//! Link-time registration through `#[receiver]`.

use keiro::{EventHub, Flag, Listener, ListenerResult, Payload, priority, receiver};
use std::sync::Mutex;

static JOURNAL: Mutex<Vec<&'static str>> = Mutex::new(Vec::new());

fn journal() -> Vec<&'static str> {
    JOURNAL.lock().unwrap().clone()
}

#[receiver(group = "macro.login", priority = priority::LOW)]
#[derive(Default)]
struct Analytics;

impl Listener for Analytics {
    fn on_receive(&self, _payload: &Payload) -> ListenerResult {
        JOURNAL.lock().unwrap().push("analytics");
        Ok(false)
    }
}

#[receiver(group = "macro.login", priority = priority::HIGH, flag = 0b10, name = "session-guard")]
#[derive(Default)]
struct SessionGuard;

impl Listener for SessionGuard {
    fn on_receive(&self, payload: &Payload) -> ListenerResult {
        JOURNAL.lock().unwrap().push("guard");
        Ok(payload.contains_key("banned"))
    }
}

#[receiver(group = "macro.login")]
#[derive(Default)]
struct Profile;

impl Listener for Profile {
    fn on_receive(&self, _payload: &Payload) -> ListenerResult {
        JOURNAL.lock().unwrap().push("profile");
        Ok(false)
    }
}

#[test]
fn test_receivers_are_collected_and_ordered() {
    let hub = EventHub::new();
    hub.static_init().unwrap();

    let registry = hub.registry().unwrap();
    let entries = registry.listeners_of("macro.login").unwrap();
    let names: Vec<_> = entries
        .iter()
        .map(|e| e.record().identity().name())
        .collect();

    assert_eq!(names.len(), 3);
    assert_eq!(names[0], "session-guard");
    assert!(names[1].ends_with("::Profile"));
    assert!(names[2].ends_with("::Analytics"));
    assert_eq!(entries[0].record().flag(), Flag::new(0b10));
    assert_eq!(entries[1].record().priority(), priority::MEDIUM);
    assert_eq!(entries[1].record().flag(), Flag::ALL);
    assert!(entries.iter().all(|e| e.record().module() == Some("keiro")));

    hub.dispatch("macro.login").unwrap();
    assert_eq!(journal(), ["guard", "profile", "analytics"]);

    JOURNAL.lock().unwrap().clear();
    hub.dispatch_flagged("macro.login", 0b10_u32).unwrap();
    assert_eq!(journal(), ["guard"]);

    JOURNAL.lock().unwrap().clear();
    let outcome = hub
        .dispatch_payload("macro.login", &Payload::new().with("banned", ()))
        .unwrap();
    assert!(outcome.stopped);
    assert_eq!(journal(), ["guard"]);
}
