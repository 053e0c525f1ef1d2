// Cross-equipment finding lists: equipment flagged by its latest security or performance capture

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Equipment, EquipmentRef, SecuritySnapshot};

/// Inventory lifecycle state, from `Equipment::is_active`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EquipmentState {
    Active,
    Inactive,
}

impl From<bool> for EquipmentState {
    fn from(is_active: bool) -> Self {
        if is_active {
            EquipmentState::Active
        } else {
            EquipmentState::Inactive
        }
    }
}

/// One row of a finding list. `last_connection` is the capture instant of the snapshot
/// that raised the finding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlaggedEquipment {
    #[serde(flatten)]
    pub equipment: EquipmentRef,
    pub status: EquipmentState,
    pub last_connection: Option<DateTime<Utc>>,
}

impl FlaggedEquipment {
    pub fn new(equipment: &Equipment, last_connection: DateTime<Utc>) -> Self {
        Self {
            equipment: EquipmentRef::from(equipment),
            status: EquipmentState::from(equipment.is_active),
            last_connection: Some(last_connection),
        }
    }
}

/// GET /performance/alerts row: the flagged equipment plus the four alert flags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceAlertEquipment {
    #[serde(flatten)]
    pub equipment: FlaggedEquipment,
    pub has_cpu_alert: bool,
    pub has_ram_alert: bool,
    pub has_disk_alert: bool,
    pub has_thermal_alert: bool,
}

/// Selector for the security finding lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecurityFinding {
    /// GET /security/risks
    Risk,
    /// GET /security/no-antivirus: missing or disabled.
    NoAntivirus,
    /// GET /security/pending-updates: any pending update, critical or not.
    PendingUpdates,
}

impl SecurityFinding {
    pub fn as_str(self) -> &'static str {
        match self {
            SecurityFinding::Risk => "risk",
            SecurityFinding::NoAntivirus => "no-antivirus",
            SecurityFinding::PendingUpdates => "pending-updates",
        }
    }

    pub fn matches(self, snapshot: &SecuritySnapshot) -> bool {
        match self {
            SecurityFinding::Risk => snapshot.has_security_risk,
            SecurityFinding::NoAntivirus => {
                !snapshot.antivirus_installed || !snapshot.antivirus_enabled
            }
            SecurityFinding::PendingUpdates => {
                snapshot.is_critical_update_pending || snapshot.pending_updates_count > 0
            }
        }
    }
}
