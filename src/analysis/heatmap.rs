// Laboratory heat map: one lightweight cell per equipment plus summary counters.

use chrono::NaiveDate;
use futures_util::StreamExt;
use futures_util::stream;
use tracing::{debug, instrument};

use super::{AuditAnalysis, comparison, status};
use crate::error::AuditError;
use crate::models::{
    DailyLaboratoryHeatMap, DailySummary, Equipment, EquipmentHeatMapItem, EquipmentRef,
    LaboratoryRef,
};

impl AuditAnalysis {
    /// Builds the heat map for `laboratory_id` on `date`. Cells keep the laboratory's listing
    /// order; equipment is evaluated concurrently up to `max_concurrent_equipment`.
    #[instrument(skip(self), fields(operation = "build_heatmap"))]
    pub async fn build_heatmap(
        &self,
        laboratory_id: i64,
        date: NaiveDate,
    ) -> Result<DailyLaboratoryHeatMap, AuditError> {
        let laboratory = self
            .store
            .get_laboratory(laboratory_id)
            .await?
            .ok_or_else(|| AuditError::NotFound(format!("laboratory {laboratory_id}")))?;
        let equipments = self.store.list_laboratory_equipment(laboratory_id).await?;

        let items: Vec<EquipmentHeatMapItem> = stream::iter(equipments)
            .map(|equipment| async move { self.heatmap_item(&equipment, date).await })
            .buffered(self.max_concurrent_equipment)
            .collect()
            .await;

        let summary = DailySummary::from_items(&items);
        debug!(
            laboratory_id,
            %date,
            total = summary.total,
            critical = summary.critical,
            degraded = summary.degraded,
            no_data = summary.no_data,
            "heat map built"
        );

        Ok(DailyLaboratoryHeatMap {
            laboratory: LaboratoryRef::from(&laboratory),
            date,
            summary,
            equipments: items,
        })
    }

    async fn heatmap_item(&self, equipment: &Equipment, date: NaiveDate) -> EquipmentHeatMapItem {
        let (today, yesterday) = tokio::join!(
            self.load_day(equipment.id, date),
            self.previous_day_status(equipment, date),
        );
        let status = status::derive(&today);
        EquipmentHeatMapItem {
            equipment: EquipmentRef::from(equipment),
            status,
            status_compare_to_prev_day: comparison::compare(status, yesterday),
            is_obsolete: today.is_obsolete(),
            has_security_risk: today.has_security_risk(),
            risky_apps_count: today.risky_apps_count(),
            last_sync: today.last_sync(),
        }
    }
}
