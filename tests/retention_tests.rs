// Retention worker tests: one prune tick, spawn and shutdown

mod common;

use chrono::{Duration, Utc};
use common::*;
use labaudit::analysis::AuditAnalysis;
use labaudit::config::StalenessConfig;
use labaudit::models::DailyEquipmentStatus;
use labaudit::retention_worker::{self, RetentionWorkerConfig};
use labaudit::snapshot_store::{SnapshotStore, SqliteSnapshotStore};
use std::sync::Arc;
use tempfile::TempDir;

fn worker_config() -> RetentionWorkerConfig {
    RetentionWorkerConfig {
        retention_days: 30,
        prune_interval_secs: 3600,
        vacuum_schedule: None,
        vacuum_interval_secs: 86_400,
    }
}

async fn seeded_store(dir: &TempDir) -> SqliteSnapshotStore {
    let path = dir.path().join("audit.db");
    let store = SqliteSnapshotStore::connect(path.to_str().unwrap(), 2)
        .await
        .unwrap();
    store.init().await.unwrap();

    let now = Utc::now();
    // Equipment 1: two captures past retention, one recent.
    store
        .save_snapshot(1, now - Duration::days(200), &healthy_hardware())
        .await
        .unwrap();
    store
        .save_snapshot(1, now - Duration::days(100), &healthy_hardware())
        .await
        .unwrap();
    store
        .save_snapshot(1, now - Duration::days(2), &healthy_hardware())
        .await
        .unwrap();
    // Equipment 2: a single capture past retention; it is still the latest.
    store
        .save_snapshot(2, now - Duration::days(150), &healthy_security())
        .await
        .unwrap();
    store
}

#[tokio::test]
async fn retention_tick_prunes_superseded_only() {
    let dir = TempDir::new().unwrap();
    let store = seeded_store(&dir).await;
    assert_eq!(store.count_snapshots().await.unwrap(), 4);

    let pruned = retention_worker::run_one_tick(&store, &worker_config())
        .await
        .unwrap();
    // Only the 200-day capture goes: the 100-day one is still the latest for dates
    // inside the window, and equipment 2's single capture is never superseded.
    assert_eq!(pruned, 1);
    assert_eq!(store.count_snapshots().await.unwrap(), 3);

    let now = Utc::now();
    assert!(store.latest_hardware(1, now).await.unwrap().is_some());
    assert!(store.latest_security(2, now).await.unwrap().is_some());

    let second = retention_worker::run_one_tick(&store, &worker_config())
        .await
        .unwrap();
    assert_eq!(second, 0);
}

#[tokio::test]
async fn retention_tick_respects_retention_window() {
    let dir = TempDir::new().unwrap();
    let store = seeded_store(&dir).await;
    let config = RetentionWorkerConfig {
        retention_days: 365,
        ..worker_config()
    };
    let pruned = retention_worker::run_one_tick(&store, &config).await.unwrap();
    assert_eq!(pruned, 0);
    assert_eq!(store.count_snapshots().await.unwrap(), 4);
}

#[tokio::test]
async fn retention_worker_prunes_on_start_and_shuts_down() {
    let dir = TempDir::new().unwrap();
    let store = Arc::new(seeded_store(&dir).await);
    let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel();

    let handle = retention_worker::spawn(store.clone(), worker_config(), shutdown_rx);

    // The first interval tick fires immediately.
    let mut remaining = store.count_snapshots().await.unwrap();
    for _ in 0..50 {
        if remaining == 3 {
            break;
        }
        tokio::time::sleep(std::time::Duration::from_millis(20)).await;
        remaining = store.count_snapshots().await.unwrap();
    }
    assert_eq!(remaining, 3);

    shutdown_tx.send(()).unwrap();
    tokio::time::timeout(std::time::Duration::from_secs(5), handle)
        .await
        .expect("worker stops after shutdown")
        .unwrap();
}

#[tokio::test]
async fn retention_tick_keeps_in_window_results_stable() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("audit.db");
    let store = Arc::new(
        SqliteSnapshotStore::connect(path.to_str().unwrap(), 2)
            .await
            .unwrap(),
    );
    store.init().await.unwrap();

    let now = Utc::now();
    store.upsert_laboratory(&laboratory(1, "Lab 1")).await.unwrap();
    store
        .upsert_equipment(&equipment(1, "PC-01", 1, now - Duration::days(400)))
        .await
        .unwrap();
    store
        .save_snapshot(1, now - Duration::days(100), &healthy_hardware())
        .await
        .unwrap();
    store
        .save_snapshot(1, now - Duration::days(5), &healthy_hardware())
        .await
        .unwrap();

    let thresholds = StalenessConfig {
        hardware_days: 365,
        ..StalenessConfig::default()
    };
    let analysis = AuditAnalysis::new(store.clone(), thresholds, 2);
    let in_window = (now - Duration::days(60)).date_naive();

    let before = analysis.build_detail(1, in_window).await.unwrap();
    assert_eq!(before.status, DailyEquipmentStatus::Operative);
    assert!(before.hardware.data.is_some());

    let config = RetentionWorkerConfig {
        retention_days: 90,
        ..worker_config()
    };
    let pruned = retention_worker::run_one_tick(&store, &config).await.unwrap();
    assert_eq!(pruned, 0);

    let after = analysis.build_detail(1, in_window).await.unwrap();
    assert_eq!(after, before);
}
