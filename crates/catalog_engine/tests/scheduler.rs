use std::time::Duration;

use catalog_engine::AutoplayScheduler;
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::time::timeout;

#[tokio::test]
async fn fires_once_after_delay_with_its_generation() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut scheduler = AutoplayScheduler::new();
    scheduler.schedule(&Handle::current(), 7, Duration::from_millis(10), move |generation| {
        let _ = tx.send(generation);
    });

    let fired = timeout(Duration::from_secs(2), rx.recv()).await.expect("fired");
    assert_eq!(fired, Some(7));
    // The sender was consumed by the single firing.
    assert_eq!(rx.recv().await, None);
}

#[tokio::test]
async fn cancel_prevents_firing() {
    let (tx, mut rx) = mpsc::unbounded_channel::<u64>();
    let mut scheduler = AutoplayScheduler::new();
    scheduler.schedule(&Handle::current(), 1, Duration::from_millis(50), move |generation| {
        let _ = tx.send(generation);
    });
    scheduler.cancel();

    // The cancelled task drops its callback, closing the channel without a value.
    let outcome = timeout(Duration::from_secs(2), rx.recv()).await.expect("closed");
    assert_eq!(outcome, None);
}

#[tokio::test]
async fn rescheduling_replaces_the_pending_advance() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut scheduler = AutoplayScheduler::new();
    let first = tx.clone();
    scheduler.schedule(&Handle::current(), 1, Duration::from_millis(50), move |generation| {
        let _ = first.send(generation);
    });
    scheduler.schedule(&Handle::current(), 2, Duration::from_millis(10), move |generation| {
        let _ = tx.send(generation);
    });

    let fired = timeout(Duration::from_secs(2), rx.recv()).await.expect("fired");
    assert_eq!(fired, Some(2));
    assert_eq!(timeout(Duration::from_secs(2), rx.recv()).await.expect("closed"), None);
}

#[tokio::test]
async fn dropping_the_scheduler_cancels() {
    let (tx, mut rx) = mpsc::unbounded_channel::<u64>();
    {
        let mut scheduler = AutoplayScheduler::new();
        scheduler.schedule(&Handle::current(), 3, Duration::from_millis(50), move |generation| {
            let _ = tx.send(generation);
        });
    }
    let outcome = timeout(Duration::from_secs(2), rx.recv()).await.expect("closed");
    assert_eq!(outcome, None);
}
