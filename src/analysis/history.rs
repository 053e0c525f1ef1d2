// Per-domain latest/history reads for the snapshot browsing endpoints.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{AuditAnalysis, averages};
use crate::error::AuditError;
use crate::models::{Domain, Equipment, PerformanceAverages};

fn to_json<T: Serialize>(value: &T) -> Result<serde_json::Value, AuditError> {
    serde_json::to_value(value).map_err(|e| AuditError::Internal(format!("serialize: {e}")))
}

fn check_range(from: DateTime<Utc>, to: DateTime<Utc>) -> Result<(), AuditError> {
    if from >= to {
        return Err(AuditError::InvalidRange(format!(
            "from ({from}) must be before to ({to})"
        )));
    }
    Ok(())
}

impl AuditAnalysis {
    async fn require_equipment(&self, equipment_id: i64) -> Result<Equipment, AuditError> {
        self.store
            .get_equipment(equipment_id)
            .await?
            .ok_or_else(|| AuditError::NotFound(format!("equipment {equipment_id}")))
    }

    /// Latest snapshot of `domain` as of now; JSON `null` when never captured.
    pub async fn latest_snapshot(
        &self,
        domain: Domain,
        equipment_id: i64,
    ) -> Result<serde_json::Value, AuditError> {
        self.require_equipment(equipment_id).await?;
        let now = Utc::now();
        let store = &self.store;
        match domain {
            Domain::Hardware => to_json(&store.latest_hardware(equipment_id, now).await?),
            Domain::Software => to_json(&store.latest_software(equipment_id, now).await?),
            Domain::Security => to_json(&store.latest_security(equipment_id, now).await?),
            Domain::Performance => to_json(&store.latest_performance(equipment_id, now).await?),
        }
    }

    /// Snapshots of `domain` with `from <= captured_at < to`, ascending.
    pub async fn snapshot_history(
        &self,
        domain: Domain,
        equipment_id: i64,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<serde_json::Value, AuditError> {
        check_range(from, to)?;
        self.require_equipment(equipment_id).await?;
        let store = &self.store;
        match domain {
            Domain::Hardware => to_json(&store.hardware_history(equipment_id, from, to).await?),
            Domain::Software => to_json(&store.software_history(equipment_id, from, to).await?),
            Domain::Security => to_json(&store.security_history(equipment_id, from, to).await?),
            Domain::Performance => {
                to_json(&store.performance_history(equipment_id, from, to).await?)
            }
        }
    }

    pub async fn performance_averages(
        &self,
        equipment_id: i64,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<PerformanceAverages, AuditError> {
        check_range(from, to)?;
        self.require_equipment(equipment_id).await?;
        let snapshots = self
            .store
            .performance_history(equipment_id, from, to)
            .await?;
        Ok(averages::performance_averages(&snapshots))
    }
}
