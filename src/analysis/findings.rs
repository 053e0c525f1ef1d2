// Cross-equipment finding lists over the latest security and performance captures.

use chrono::Utc;
use futures_util::StreamExt;
use futures_util::stream;
use tracing::{debug, instrument};

use super::{AuditAnalysis, recover};
use crate::error::AuditError;
use crate::models::{Domain, FlaggedEquipment, PerformanceAlertEquipment, SecurityFinding};

impl AuditAnalysis {
    /// Equipment whose latest security capture shows `finding`, in inventory order.
    /// Equipment never captured, or whose read fails, is left out.
    #[instrument(skip(self), fields(operation = "security_findings"))]
    pub async fn security_findings(
        &self,
        finding: SecurityFinding,
    ) -> Result<Vec<FlaggedEquipment>, AuditError> {
        let equipments = self.store.list_equipment().await?;
        let now = Utc::now();

        let rows: Vec<Option<FlaggedEquipment>> = stream::iter(equipments)
            .map(|equipment| async move {
                let latest = self.store.latest_security(equipment.id, now).await;
                let snapshot = recover(latest, equipment.id, Domain::Security)?;
                finding
                    .matches(&snapshot.payload)
                    .then(|| FlaggedEquipment::new(&equipment, snapshot.captured_at))
            })
            .buffered(self.max_concurrent_equipment)
            .collect()
            .await;

        let flagged: Vec<FlaggedEquipment> = rows.into_iter().flatten().collect();
        debug!(finding = finding.as_str(), flagged = flagged.len(), "security findings listed");
        Ok(flagged)
    }

    /// Equipment whose latest performance capture raises any of the four alerts.
    #[instrument(skip(self), fields(operation = "performance_alerts"))]
    pub async fn performance_alerts(&self) -> Result<Vec<PerformanceAlertEquipment>, AuditError> {
        let equipments = self.store.list_equipment().await?;
        let now = Utc::now();

        let rows: Vec<Option<PerformanceAlertEquipment>> = stream::iter(equipments)
            .map(|equipment| async move {
                let latest = self.store.latest_performance(equipment.id, now).await;
                let snapshot = recover(latest, equipment.id, Domain::Performance)?;
                let p = &snapshot.payload;
                p.has_any_alert().then(|| PerformanceAlertEquipment {
                    equipment: FlaggedEquipment::new(&equipment, snapshot.captured_at),
                    has_cpu_alert: p.has_cpu_alert,
                    has_ram_alert: p.has_ram_alert,
                    has_disk_alert: p.has_disk_alert,
                    has_thermal_alert: p.has_thermal_alert,
                })
            })
            .buffered(self.max_concurrent_equipment)
            .collect()
            .await;

        let alerts: Vec<PerformanceAlertEquipment> = rows.into_iter().flatten().collect();
        debug!(flagged = alerts.len(), "performance alerts listed");
        Ok(alerts)
    }
}
