use crate::app::services::places::FixedIntervalGate;
use std::time::Duration;
use tokio::time::Instant;

#[tokio::test]
async fn test_first_pass_is_immediate() {
    let mut gate = FixedIntervalGate::new(Duration::from_secs(5));
    let start = Instant::now();

    gate.wait().await;

    assert!(start.elapsed() < Duration::from_secs(1));
}

#[tokio::test]
async fn test_successive_passes_are_spaced() {
    let interval = Duration::from_millis(30);
    let mut gate = FixedIntervalGate::new(interval);
    let start = Instant::now();

    gate.wait().await;
    gate.wait().await;
    gate.wait().await;

    assert!(start.elapsed() >= interval * 2);
}

#[tokio::test]
async fn test_zero_interval_never_sleeps() {
    let mut gate = FixedIntervalGate::new(Duration::ZERO);
    let start = Instant::now();

    for _ in 0..100 {
        gate.wait().await;
    }

    assert!(start.elapsed() < Duration::from_secs(1));
    assert_eq!(gate.interval(), Duration::ZERO);
}
