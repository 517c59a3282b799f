//! Background initialization on tokio's blocking pool.

use keiro::{EventHub, loaders::FnLoader, testing::Journal};
use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

mod common;
use common::recorder;

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_background_init_publishes_registry() {
    let journal = Journal::new();
    let scans = Arc::new(AtomicUsize::new(0));

    let loader = {
        let journal = journal.clone();
        let scans = scans.clone();
        FnLoader::new("scan", move || {
            scans.fetch_add(1, Ordering::SeqCst);
            Ok(vec![recorder(&journal, "scanned", "boot", 0, 0, false)])
        })
    };

    let hub = Arc::new(EventHub::new());
    hub.clone()
        .initialize_in_background(vec![loader])
        .await
        .unwrap();
    hub.clone()
        .initialize_in_background(Vec::<FnLoader>::new())
        .await
        .unwrap();

    assert_eq!(scans.load(Ordering::SeqCst), 1);
    hub.dispatch("boot").unwrap();
    assert_eq!(journal.entries(), ["scanned"]);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_background_init_reports_configuration_errors() {
    let loader = FnLoader::new("broken-scan", || Err("archive unreadable".into()));
    let hub = Arc::new(EventHub::new());

    let err = hub.clone().initialize_in_background(vec![loader]).await.unwrap_err();

    assert!(matches!(err, keiro::KeiroError::Configuration(_)));
    assert!(!hub.is_initialized());
}
