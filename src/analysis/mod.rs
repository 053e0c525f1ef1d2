// Daily audit analysis: staleness, status derivation, day-over-day comparison,
// lab heat map, per-equipment detail and finding lists. Every call is a pure read-then-compute.

pub mod averages;
pub mod calendar;
pub mod comparison;
mod detail;
mod findings;
mod heatmap;
mod history;
pub mod staleness;
pub mod status;

use chrono::NaiveDate;
use std::sync::Arc;
use tracing::warn;

use crate::config::StalenessConfig;
use crate::error::StoreError;
use crate::models::{DailyEquipmentStatus, Domain, Equipment, Snapshot, SnapshotRef};
use crate::snapshot_store::SnapshotStore;
use status::DomainRefs;

pub struct AuditAnalysis {
    store: Arc<dyn SnapshotStore>,
    thresholds: StalenessConfig,
    max_concurrent_equipment: usize,
}

impl AuditAnalysis {
    pub fn new(
        store: Arc<dyn SnapshotStore>,
        thresholds: StalenessConfig,
        max_concurrent_equipment: usize,
    ) -> Self {
        Self {
            store,
            thresholds,
            max_concurrent_equipment: max_concurrent_equipment.max(1),
        }
    }

    /// Latest snapshot per domain at/before the end of `date`, read concurrently.
    /// A failed read is logged and treated as absent for that domain only.
    pub async fn load_day(&self, equipment_id: i64, date: NaiveDate) -> DomainRefs {
        let at = calendar::end_of_day(date);
        let (hardware, software, security, performance) = tokio::join!(
            self.store.latest_hardware(equipment_id, at),
            self.store.latest_software(equipment_id, at),
            self.store.latest_security(equipment_id, at),
            self.store.latest_performance(equipment_id, at),
        );
        let t = &self.thresholds;
        DomainRefs {
            hardware: SnapshotRef::evaluate(
                recover(hardware, equipment_id, Domain::Hardware),
                date,
                t.threshold_days(Domain::Hardware),
            ),
            software: SnapshotRef::evaluate(
                recover(software, equipment_id, Domain::Software),
                date,
                t.threshold_days(Domain::Software),
            ),
            security: SnapshotRef::evaluate(
                recover(security, equipment_id, Domain::Security),
                date,
                t.threshold_days(Domain::Security),
            ),
            performance: SnapshotRef::evaluate(
                recover(performance, equipment_id, Domain::Performance),
                date,
                t.threshold_days(Domain::Performance),
            ),
        }
    }

    /// Status of the day before `date`, derived fresh from that day's snapshots.
    /// `None` when the equipment did not exist yet on that day.
    pub async fn previous_day_status(
        &self,
        equipment: &Equipment,
        date: NaiveDate,
    ) -> Option<DailyEquipmentStatus> {
        let previous = date.pred_opt()?;
        if equipment.created_at.date_naive() > previous {
            return None;
        }
        let refs = self.load_day(equipment.id, previous).await;
        Some(status::derive(&refs))
    }
}

fn recover<T>(
    result: Result<Option<Snapshot<T>>, StoreError>,
    equipment_id: i64,
    domain: Domain,
) -> Option<Snapshot<T>> {
    match result {
        Ok(snapshot) => snapshot,
        Err(e) => {
            warn!(
                equipment_id,
                domain = domain.as_str(),
                error = %e,
                "snapshot read failed; treating domain as absent"
            );
            None
        }
    }
}
