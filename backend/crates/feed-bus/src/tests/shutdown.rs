use crate::{ShutdownCoordinator, ShutdownGuard};

use tokio::time::{Duration, timeout};

#[tokio::test]
async fn given_coordinator_when_shutdown_triggered_then_guard_notified() {
    let coordinator = ShutdownCoordinator::new();
    let mut guard = ShutdownGuard::new(&coordinator);

    let coord_clone = coordinator.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(10)).await;
        coord_clone.shutdown();
    });

    let result = timeout(Duration::from_millis(500), guard.wait()).await;
    assert!(result.is_ok(), "Shutdown signal should be received");
}

#[tokio::test]
async fn given_shutdown_already_triggered_when_guard_created_then_wait_returns() {
    let coordinator = ShutdownCoordinator::new();
    coordinator.shutdown();

    let mut late_guard = coordinator.subscribe_guard();

    let result = timeout(Duration::from_millis(50), late_guard.wait()).await;
    assert!(result.is_ok());
    assert!(late_guard.is_shutdown());
}

#[tokio::test]
async fn given_coordinator_dropped_without_shutdown_when_waiting_then_pends() {
    let coordinator = ShutdownCoordinator::new();
    let mut guard = coordinator.subscribe_guard();
    drop(coordinator);

    let result = timeout(Duration::from_millis(20), guard.wait()).await;
    assert!(result.is_err());
}

#[test]
fn given_new_coordinator_when_checked_then_not_shutdown() {
    let coordinator = ShutdownCoordinator::new();
    let guard = ShutdownGuard::new(&coordinator);

    assert!(!coordinator.is_shutdown());
    assert!(!guard.is_shutdown());
}

#[test]
fn given_shutdown_twice_when_checked_then_still_shutdown() {
    let coordinator = ShutdownCoordinator::new();

    coordinator.shutdown();
    coordinator.shutdown();

    assert!(coordinator.is_shutdown());
}
