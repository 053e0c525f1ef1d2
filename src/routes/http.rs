// GET handlers: version, daily heat map, equipment detail, snapshot browsing, finding lists

use axum::{
    Json,
    extract::{Path, Query, State, rejection::QueryRejection},
    response::IntoResponse,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::AppState;
use crate::analysis::calendar::{parse_instant, parse_reference_date};
use crate::error::AuditError;
use crate::models::{Domain, SecurityFinding};

const NAME: &str = env!("CARGO_PKG_NAME");
const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct DailyQuery {
    laboratory_id: i64,
    date: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct DetailQuery {
    equipment_id: i64,
    date: String,
}

#[derive(Debug, Deserialize)]
pub(super) struct RangeQuery {
    from: String,
    to: String,
}

impl RangeQuery {
    fn bounds(&self) -> Result<(DateTime<Utc>, DateTime<Utc>), AuditError> {
        Ok((
            parse_instant("from", &self.from)?,
            parse_instant("to", &self.to)?,
        ))
    }
}

fn today() -> chrono::NaiveDate {
    Utc::now().date_naive()
}

/// `{domain}/equipment/{id}` segments. An unknown domain has no such resource.
fn parse_target(domain: &str, id: &str) -> Result<(Domain, i64), AuditError> {
    let domain = domain.parse::<Domain>().map_err(AuditError::NotFound)?;
    let id = id
        .parse::<i64>()
        .map_err(|_| AuditError::BadRequest(format!("invalid equipment id '{id}'")))?;
    Ok((domain, id))
}

/// GET /version: service name and version (from Cargo.toml at build time).
pub(super) async fn version_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "name": NAME,
        "version": VERSION,
    }))
}

/// GET /audit-analysis/daily: lab heat map for one day.
pub(super) async fn daily_heatmap_handler(
    State(state): State<AppState>,
    query: Result<Query<DailyQuery>, QueryRejection>,
) -> Result<impl IntoResponse, AuditError> {
    let Query(q) = query?;
    let date = parse_reference_date(&q.date, today())?;
    let heatmap = state.analysis.build_heatmap(q.laboratory_id, date).await?;
    Ok(Json(heatmap))
}

/// GET /audit-analysis/equipment-detail: four domain refs, status and comparison.
pub(super) async fn equipment_detail_handler(
    State(state): State<AppState>,
    query: Result<Query<DetailQuery>, QueryRejection>,
) -> Result<impl IntoResponse, AuditError> {
    let Query(q) = query?;
    let date = parse_reference_date(&q.date, today())?;
    let detail = state.analysis.build_detail(q.equipment_id, date).await?;
    Ok(Json(detail))
}

/// GET /{domain}/equipment/{id}/latest
pub(super) async fn latest_snapshot_handler(
    State(state): State<AppState>,
    Path((domain, id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AuditError> {
    let (domain, id) = parse_target(&domain, &id)?;
    Ok(Json(state.analysis.latest_snapshot(domain, id).await?))
}

/// GET /{domain}/equipment/{id}/history?from&to: RFC 3339 instants, `to` exclusive.
pub(super) async fn snapshot_history_handler(
    State(state): State<AppState>,
    Path((domain, id)): Path<(String, String)>,
    query: Result<Query<RangeQuery>, QueryRejection>,
) -> Result<impl IntoResponse, AuditError> {
    let (domain, id) = parse_target(&domain, &id)?;
    let (from, to) = query?.bounds()?;
    let history = state
        .analysis
        .snapshot_history(domain, id, from, to)
        .await?;
    Ok(Json(history))
}

/// GET /performance/equipment/{id}/averages?from&to: other domains have no averages.
pub(super) async fn performance_averages_handler(
    State(state): State<AppState>,
    Path((domain, id)): Path<(String, String)>,
    query: Result<Query<RangeQuery>, QueryRejection>,
) -> Result<impl IntoResponse, AuditError> {
    let (domain, id) = parse_target(&domain, &id)?;
    if domain != Domain::Performance {
        return Err(AuditError::NotFound(format!("{domain} averages")));
    }
    let (from, to) = query?.bounds()?;
    let averages = state.analysis.performance_averages(id, from, to).await?;
    Ok(Json(averages))
}

/// GET /security/risks
pub(super) async fn security_risks_handler(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AuditError> {
    let flagged = state
        .analysis
        .security_findings(SecurityFinding::Risk)
        .await?;
    Ok(Json(flagged))
}

/// GET /security/no-antivirus
pub(super) async fn no_antivirus_handler(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AuditError> {
    let flagged = state
        .analysis
        .security_findings(SecurityFinding::NoAntivirus)
        .await?;
    Ok(Json(flagged))
}

/// GET /security/pending-updates
pub(super) async fn pending_updates_handler(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AuditError> {
    let flagged = state
        .analysis
        .security_findings(SecurityFinding::PendingUpdates)
        .await?;
    Ok(Json(flagged))
}

/// GET /performance/alerts
pub(super) async fn performance_alerts_handler(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AuditError> {
    Ok(Json(state.analysis.performance_alerts().await?))
}
