use anyhow::Result;
use labaudit::*;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::FormatTime;

struct LocalTimer;

impl FormatTime for LocalTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(
            w,
            "{}",
            chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z")
        )
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_timer(LocalTimer)
        .with_env_filter(filter)
        .init();

    let app_config = config::AppConfig::load()?;

    let store = Arc::new(
        snapshot_store::SqliteSnapshotStore::connect(
            &app_config.database.path,
            app_config.database.max_pool_size,
        )
        .await?,
    );
    store.init().await?;

    let analysis = Arc::new(analysis::AuditAnalysis::new(
        store.clone(),
        app_config.staleness,
        app_config.analysis.max_concurrent_equipment,
    ));

    let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel();
    let retention_handle = retention_worker::spawn(
        store.clone(),
        retention_worker::RetentionWorkerConfig {
            retention_days: app_config.database.retention_days,
            prune_interval_secs: app_config.database.prune_interval_secs,
            vacuum_schedule: app_config.database.vacuum_schedule.clone(),
            vacuum_interval_secs: app_config.database.vacuum_interval_secs,
        },
        shutdown_rx,
    );

    let app = routes::app(analysis);
    let addr = format!("{}:{}", app_config.server.host, app_config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(
        staleness = ?app_config.staleness,
        "Listening on http://{}",
        addr
    );

    tokio::select! {
        result = axum::serve(listener, app) => {
            result?;
        }
        _ = async {
            #[cfg(unix)]
            {
                let mut sigterm = match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
                    Ok(s) => s,
                    Err(_) => {
                        let _ = tokio::signal::ctrl_c().await;
                        return;
                    }
                };
                tokio::select! {
                    _ = tokio::signal::ctrl_c() => {}
                    _ = sigterm.recv() => {}
                }
            }
            #[cfg(not(unix))]
            {
                let _ = tokio::signal::ctrl_c().await;
            }
        } => {
            tracing::info!("Received shutdown signal");
            let _ = shutdown_tx.send(());
            let _ = retention_handle.await;
        }
    }

    Ok(())
}
