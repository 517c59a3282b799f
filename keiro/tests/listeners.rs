//! Listener combinators inside a hub.

use keiro::{
    Identity, Payload, RegistrationRecord,
    listeners::{ListenerExt, from_fn},
    testing::{FailingListener, Journal},
};

mod common;
use common::{hub_with, recorder};

#[test]
fn test_catch_lets_siblings_run() {
    let journal = Journal::new();
    let errors = Journal::new();
    let sink = errors.clone();

    let guarded = FailingListener::new("timeout").catch(move |e| {
        sink.push(e.to_string());
        false
    });

    let hub = hub_with([
        RegistrationRecord::new("sync", Identity::from_instance("guarded", guarded))
            .with_priority(0),
        recorder(&journal, "next", "sync", 1, 0, false),
    ]);

    let outcome = hub.dispatch("sync").unwrap();

    assert_eq!(errors.entries(), ["timeout"]);
    assert_eq!(journal.entries(), ["next"]);
    assert_eq!(outcome.invoked_count, 2);
}

#[test]
fn test_when_gates_on_payload() {
    let journal = Journal::new();
    let log = journal.clone();
    let vip_only = from_fn(move |_: &Payload| {
        log.push("vip");
        Ok(true)
    })
    .when(|payload| payload.get::<bool>("vip") == Some(&true));

    let hub = hub_with([
        RegistrationRecord::new("checkout", Identity::from_instance("vip", vip_only))
            .with_priority(0),
        recorder(&journal, "regular", "checkout", 1, 0, false),
    ]);

    hub.dispatch_payload("checkout", &Payload::new().with("vip", false))
        .unwrap();
    hub.dispatch_payload("checkout", &Payload::new().with("vip", true))
        .unwrap();

    assert_eq!(journal.entries(), ["regular", "vip"]);
}
