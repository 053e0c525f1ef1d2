// HTTP routes

mod http;

use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::analysis::AuditAnalysis;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) analysis: Arc<AuditAnalysis>,
}

pub fn app(analysis: Arc<AuditAnalysis>) -> Router {
    let state = AppState { analysis };
    Router::new()
        .route("/version", get(http::version_handler)) // GET /version
        .route("/audit-analysis/daily", get(http::daily_heatmap_handler)) // GET /audit-analysis/daily?laboratoryId&date
        .route(
            "/audit-analysis/equipment-detail",
            get(http::equipment_detail_handler),
        ) // GET /audit-analysis/equipment-detail?equipmentId&date
        .route(
            "/{domain}/equipment/{id}/latest",
            get(http::latest_snapshot_handler),
        ) // GET /hardware/equipment/{id}/latest, /software/..., /security/..., /performance/...
        .route(
            "/{domain}/equipment/{id}/history",
            get(http::snapshot_history_handler),
        ) // GET /{domain}/equipment/{id}/history?from&to
        .route(
            "/{domain}/equipment/{id}/averages",
            get(http::performance_averages_handler),
        ) // GET /performance/equipment/{id}/averages?from&to (performance only)
        .route("/security/risks", get(http::security_risks_handler)) // GET /security/risks
        .route("/security/no-antivirus", get(http::no_antivirus_handler)) // GET /security/no-antivirus
        .route(
            "/security/pending-updates",
            get(http::pending_updates_handler),
        ) // GET /security/pending-updates
        .route("/performance/alerts", get(http::performance_alerts_handler)) // GET /performance/alerts
        .layer(CorsLayer::new().allow_origin(Any))
        .with_state(state)
}
