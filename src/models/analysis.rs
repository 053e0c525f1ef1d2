// Derived daily views: status, comparison, snapshot refs, heat map and detail payloads

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::{
    EquipmentRef, HardwareSnapshot, LaboratoryRef, PerformanceSnapshot, SecuritySnapshot,
    Snapshot, SoftwareInventory,
};

/// Worst-case health classification of one equipment on one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DailyEquipmentStatus {
    Operative,
    Degraded,
    Critical,
    NoData,
}

impl DailyEquipmentStatus {
    /// Severity rank: operative < degraded < critical. `NoData` is unranked.
    pub fn severity_rank(self) -> Option<u8> {
        match self {
            DailyEquipmentStatus::Operative => Some(0),
            DailyEquipmentStatus::Degraded => Some(1),
            DailyEquipmentStatus::Critical => Some(2),
            DailyEquipmentStatus::NoData => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusComparison {
    Improved,
    Same,
    Worsened,
    Unknown,
}

/// Latest snapshot of one domain at/before a reference date, with its staleness.
/// `stale_days` is `None` (serialized `null`) when nothing was ever captured.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotRef<T> {
    pub data: Option<Snapshot<T>>,
    pub captured_at: Option<DateTime<Utc>>,
    pub stale: bool,
    pub stale_days: Option<i64>,
}

impl<T> SnapshotRef<T> {
    pub fn is_available(&self) -> bool {
        self.data.is_some()
    }

    /// Payload regardless of staleness.
    pub fn payload(&self) -> Option<&T> {
        self.data.as_ref().map(|s| &s.payload)
    }

    /// Payload only when available and within its staleness threshold.
    pub fn fresh_payload(&self) -> Option<&T> {
        if self.stale { None } else { self.payload() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SoftwareSnapshotRef {
    #[serde(flatten)]
    pub snapshot: SnapshotRef<SoftwareInventory>,
    pub risky_count: usize,
    pub total_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecuritySnapshotRef {
    #[serde(flatten)]
    pub snapshot: SnapshotRef<SecuritySnapshot>,
    pub has_risk: bool,
}

/// GET /audit-analysis/equipment-detail payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentDailyDetail {
    pub equipment: EquipmentRef,
    pub status: DailyEquipmentStatus,
    pub status_compare_to_prev_day: StatusComparison,
    pub hardware: SnapshotRef<HardwareSnapshot>,
    pub software: SoftwareSnapshotRef,
    pub security: SecuritySnapshotRef,
    pub performance: SnapshotRef<PerformanceSnapshot>,
}

/// One heat map cell: status plus the flat warning flags, no payloads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentHeatMapItem {
    pub equipment: EquipmentRef,
    pub status: DailyEquipmentStatus,
    pub status_compare_to_prev_day: StatusComparison,
    pub is_obsolete: bool,
    pub has_security_risk: bool,
    pub risky_apps_count: usize,
    pub last_sync: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailySummary {
    pub total: usize,
    pub operative: usize,
    pub degraded: usize,
    pub critical: usize,
    pub no_data: usize,
    pub with_security_risk: usize,
    pub with_risky_software: usize,
    pub obsolete: usize,
}

impl DailySummary {
    /// Adds one cell: exactly one status bucket, plus any of the independent risk counters.
    pub fn record(&mut self, item: &EquipmentHeatMapItem) {
        self.total += 1;
        match item.status {
            DailyEquipmentStatus::Operative => self.operative += 1,
            DailyEquipmentStatus::Degraded => self.degraded += 1,
            DailyEquipmentStatus::Critical => self.critical += 1,
            DailyEquipmentStatus::NoData => self.no_data += 1,
        }
        if item.has_security_risk {
            self.with_security_risk += 1;
        }
        if item.risky_apps_count > 0 {
            self.with_risky_software += 1;
        }
        if item.is_obsolete {
            self.obsolete += 1;
        }
    }

    pub fn from_items(items: &[EquipmentHeatMapItem]) -> Self {
        let mut summary = Self::default();
        for item in items {
            summary.record(item);
        }
        summary
    }
}

/// GET /audit-analysis/daily payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyLaboratoryHeatMap {
    pub laboratory: LaboratoryRef,
    pub date: NaiveDate,
    pub summary: DailySummary,
    pub equipments: Vec<EquipmentHeatMapItem>,
}
