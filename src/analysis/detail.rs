// Per-equipment daily detail: full payloads of the four domains with staleness.

use chrono::NaiveDate;
use tracing::instrument;

use super::status::DomainRefs;
use super::{AuditAnalysis, comparison, status};
use crate::error::AuditError;
use crate::models::{
    EquipmentDailyDetail, EquipmentRef, SecuritySnapshot, SecuritySnapshotRef, SnapshotRef,
    SoftwareInventory, SoftwareSnapshotRef,
};

impl From<SnapshotRef<SoftwareInventory>> for SoftwareSnapshotRef {
    fn from(snapshot: SnapshotRef<SoftwareInventory>) -> Self {
        let (risky_count, total_count) = snapshot
            .payload()
            .map_or((0, 0), |s| (s.risky_count(), s.total_count()));
        Self {
            snapshot,
            risky_count,
            total_count,
        }
    }
}

impl From<SnapshotRef<SecuritySnapshot>> for SecuritySnapshotRef {
    fn from(snapshot: SnapshotRef<SecuritySnapshot>) -> Self {
        let has_risk = snapshot.payload().is_some_and(|s| s.has_security_risk);
        Self { snapshot, has_risk }
    }
}

impl AuditAnalysis {
    /// Missing domains come back as `data: null`; only an unknown equipment id is an error.
    #[instrument(skip(self), fields(operation = "build_detail"))]
    pub async fn build_detail(
        &self,
        equipment_id: i64,
        date: NaiveDate,
    ) -> Result<EquipmentDailyDetail, AuditError> {
        let equipment = self
            .store
            .get_equipment(equipment_id)
            .await?
            .ok_or_else(|| AuditError::NotFound(format!("equipment {equipment_id}")))?;

        let (today, yesterday) = tokio::join!(
            self.load_day(equipment.id, date),
            self.previous_day_status(&equipment, date),
        );
        let status = status::derive(&today);
        let DomainRefs {
            hardware,
            software,
            security,
            performance,
        } = today;

        Ok(EquipmentDailyDetail {
            equipment: EquipmentRef::from(&equipment),
            status,
            status_compare_to_prev_day: comparison::compare(status, yesterday),
            hardware,
            software: software.into(),
            security: security.into(),
            performance,
        })
    }
}
