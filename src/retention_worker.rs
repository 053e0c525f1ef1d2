// Background worker: prune superseded snapshots past retention, then VACUUM on a schedule.
// The latest snapshot per equipment and domain is never pruned.

use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tracing::{debug, info, instrument, warn};

use crate::snapshot_store::SqliteSnapshotStore;

#[derive(Debug, Clone)]
pub struct RetentionWorkerConfig {
    pub retention_days: u32,
    pub prune_interval_secs: u64,
    /// Optional cron expression for VACUUM (e.g. "0 0 3 * * *" = 03:00 daily). Uses local time.
    pub vacuum_schedule: Option<String>,
    /// Run VACUUM every N seconds when vacuum_schedule is not set.
    pub vacuum_interval_secs: u64,
}

/// Spawns the retention worker. Returns a join handle; the task exits on `shutdown_rx`.
pub fn spawn(
    store: Arc<SqliteSnapshotStore>,
    config: RetentionWorkerConfig,
    shutdown_rx: tokio::sync::oneshot::Receiver<()>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        run(store, config, shutdown_rx).await;
    })
}

#[instrument(skip(store, shutdown_rx), fields(prune_interval_secs = config.prune_interval_secs))]
async fn run(
    store: Arc<SqliteSnapshotStore>,
    config: RetentionWorkerConfig,
    mut shutdown_rx: tokio::sync::oneshot::Receiver<()>,
) {
    let mut prune_interval = tokio::time::interval(Duration::from_secs(config.prune_interval_secs));
    prune_interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    let (vacuum_tx, mut vacuum_rx) = tokio::sync::mpsc::channel::<()>(1);
    let scheduler = tokio::spawn(vacuum_scheduler(config.clone(), vacuum_tx));

    loop {
        tokio::select! {
            _ = prune_interval.tick() => {
                if let Err(e) = run_one_tick(&store, &config).await {
                    warn!(error = %e, "retention tick failed");
                }
            }
            _ = vacuum_rx.recv() => {
                if let Err(e) = store.vacuum().await {
                    warn!(error = %e, "vacuum failed");
                } else {
                    info!("vacuum complete");
                }
            }
            _ = &mut shutdown_rx => {
                debug!("retention worker shutting down");
                break;
            }
        }
    }
    scheduler.abort();
}

/// Sends a message on `tx` at each VACUUM time (cron or fixed interval). Uses local time for cron.
async fn vacuum_scheduler(config: RetentionWorkerConfig, tx: tokio::sync::mpsc::Sender<()>) {
    if let Some(ref cron_str) = config.vacuum_schedule {
        let Ok(schedule) = cron::Schedule::from_str(cron_str) else {
            warn!(cron = %cron_str, "invalid vacuum_schedule; VACUUM will not run");
            return;
        };
        loop {
            let now = chrono::Local::now();
            let next = schedule.after(&now).next();
            if let Some(next) = next {
                let delay = (next - now).to_std().unwrap_or(Duration::from_secs(1));
                tokio::time::sleep(delay).await;
                if tx.send(()).await.is_err() {
                    break;
                }
            } else {
                tokio::time::sleep(Duration::from_secs(3600)).await;
            }
        }
    } else {
        let interval = Duration::from_secs(config.vacuum_interval_secs);
        loop {
            tokio::time::sleep(interval).await;
            if tx.send(()).await.is_err() {
                break;
            }
        }
    }
}

/// Runs one prune pass. Returns the number of snapshots deleted.
pub async fn run_one_tick(
    store: &SqliteSnapshotStore,
    config: &RetentionWorkerConfig,
) -> anyhow::Result<u64> {
    let cutoff = Utc::now() - chrono::Duration::days(i64::from(config.retention_days));
    let pruned = store.prune_superseded_before(cutoff).await?;
    if pruned > 0 {
        info!(pruned_snapshots = pruned, %cutoff, "superseded snapshots pruned");
    }
    Ok(pruned)
}
