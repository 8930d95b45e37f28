//! Black-box suite for construction snapshots and the fleet helpers.

mod support;

use std::sync::Arc;

use tokio::time::Duration;

use support::{finish, fuzz_buzz, noop, slow};
use workforce::{farm, force, work, Offer, ObserverRef, StatsCollector, WorkError, Worker};

#[test]
fn hire_with_defaults() {
    let config = Worker::hire("", None, []).config();

    assert_eq!(config.ident, "anonymous");
    assert!(config.listeners.is_empty());
    assert_eq!(config.overtime, 1_000_000);
    assert_eq!(config.slot_capacity, 1_000_000);
    assert!(!config.busy);
}

#[test]
fn hire_with_offers() {
    let listeners: Vec<ObserverRef> = vec![
        Arc::new(StatsCollector::new()),
        Arc::new(StatsCollector::new()),
    ];

    let config = Worker::hire(
        "cozy",
        Some(noop()),
        [Offer::listeners(listeners), Offer::overtime(100)],
    )
    .config();

    assert_eq!(config.ident, "cozy");
    assert_eq!(config.listeners.len(), 2);
    assert_eq!(config.overtime, 100);
    assert_eq!(config.slot_capacity, 100);
    assert!(!config.busy);
}

#[test]
fn hire_with_negative_overtime() {
    let config = Worker::hire("negative one", None, [Offer::overtime(-42)]).config();

    assert_eq!(config.ident, "negative one");
    assert_eq!(config.overtime, -42);
    assert_eq!(config.slot_capacity, 0);
}

#[tokio::test(start_paused = true)]
async fn work_runs_a_single_throwaway_worker() {
    let outcome = work(noop(), 1, Duration::from_secs(1), []).await;
    assert!(matches!(outcome.unwrap_err(), WorkError::DeadlineElapsed));

    let outcome = work(noop(), -1, Duration::from_secs(1), []).await;
    assert!(matches!(outcome.unwrap_err(), WorkError::InvalidRps { .. }));
}

#[tokio::test(start_paused = true)]
async fn farm_runs_every_worker_under_one_deadline() {
    let crew: Vec<Arc<StatsCollector>> =
        (0..3).map(|_| Arc::new(StatsCollector::new())).collect();
    let workers = vec![
        Arc::new(Worker::hire(
            "#1",
            Some(slow()),
            [
                Offer::listeners(vec![Arc::clone(&crew[0]) as ObserverRef]),
                Offer::overtime(10),
            ],
        )),
        Arc::new(Worker::hire(
            "#2",
            Some(fuzz_buzz()),
            [
                Offer::listeners(vec![Arc::clone(&crew[1]) as ObserverRef]),
                Offer::overtime(10),
            ],
        )),
        Arc::new(Worker::hire(
            "#3",
            Some(noop()),
            [Offer::listeners(vec![Arc::clone(&crew[2]) as ObserverRef])],
        )),
    ];
    let held: Vec<Arc<Worker>> = workers.iter().map(Arc::clone).collect();

    let outcome = farm(workers, 10, Duration::from_secs(1)).await;
    assert!(matches!(outcome.unwrap_err(), WorkError::DeadlineElapsed));

    let received: u64 = crew.iter().map(|stats| stats.snapshot().received).sum();
    assert!(received > 22, "received = {received}");

    for worker in &held {
        assert!(!worker.config().busy);
    }
}

#[tokio::test(start_paused = true)]
async fn farm_surfaces_the_first_fatal_error_and_drains_siblings() {
    let stats = Arc::new(StatsCollector::new());
    let workers = vec![
        Arc::new(Worker::hire(
            "healthy",
            Some(noop()),
            [Offer::listeners(vec![Arc::clone(&stats) as ObserverRef])],
        )),
        Arc::new(Worker::hire("nameless", None, [])),
    ];
    let held: Vec<Arc<Worker>> = workers.iter().map(Arc::clone).collect();

    let error = farm(workers, 10, Duration::from_secs(1)).await.unwrap_err();

    assert!(matches!(error, WorkError::MissingTarget { .. }));
    for worker in &held {
        assert!(!worker.config().busy);
    }
}

#[tokio::test(start_paused = true)]
async fn force_runs_identically_configured_workers() {
    let stats = Arc::new(StatsCollector::new());

    let outcome = force(
        noop(),
        10,
        Duration::from_secs(1),
        3,
        [
            Offer::listeners(vec![Arc::clone(&stats) as ObserverRef]),
            Offer::overtime(10),
        ],
    )
    .await;

    assert!(matches!(outcome.unwrap_err(), WorkError::DeadlineElapsed));

    let totals = stats.snapshot();
    assert!(totals.received > 22, "received = {}", totals.received);
    assert_eq!(totals.cancelled, 0);
}

#[tokio::test(start_paused = true)]
async fn force_rejects_what_its_workers_reject() {
    let outcome = force(noop(), -42, Duration::from_secs(1), 3, []).await;

    assert!(matches!(outcome.unwrap_err(), WorkError::InvalidRps { .. }));
}

#[tokio::test(start_paused = true)]
async fn a_failing_target_never_stops_the_worker() {
    let stats = Arc::new(StatsCollector::new());
    let always_failing = workforce::targets::TargetFn::arc(|_ctx| async {
        Err(workforce::targets::TargetError::from("boom"))
    });

    let outcome = work(
        always_failing,
        10,
        Duration::from_secs(2),
        [Offer::listeners(vec![Arc::clone(&stats) as ObserverRef])],
    )
    .await;
    assert!(finish(outcome).is_ok());

    let totals = stats.snapshot();
    assert!(totals.received >= 18, "received = {}", totals.received);
    assert_eq!(totals.failure, totals.received);
    assert_eq!(totals.success, 0);
}
