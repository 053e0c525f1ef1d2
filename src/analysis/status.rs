// Daily status derivation from the four domain refs of one equipment.

use chrono::{DateTime, Utc};

use crate::models::{
    DailyEquipmentStatus, HardwareSnapshot, PerformanceSnapshot, SecuritySnapshot, SnapshotRef,
    SoftwareInventory,
};

/// The four domain refs of one equipment for one reference date.
#[derive(Debug, Clone, PartialEq)]
pub struct DomainRefs {
    pub hardware: SnapshotRef<HardwareSnapshot>,
    pub software: SnapshotRef<SoftwareInventory>,
    pub security: SnapshotRef<SecuritySnapshot>,
    pub performance: SnapshotRef<PerformanceSnapshot>,
}

impl DomainRefs {
    pub fn absent() -> Self {
        Self {
            hardware: SnapshotRef::absent(),
            software: SnapshotRef::absent(),
            security: SnapshotRef::absent(),
            performance: SnapshotRef::absent(),
        }
    }

    fn availability(&self) -> [(bool, bool); 4] {
        [
            (self.hardware.is_available(), self.hardware.stale),
            (self.software.is_available(), self.software.stale),
            (self.security.is_available(), self.security.stale),
            (self.performance.is_available(), self.performance.stale),
        ]
    }

    pub fn any_available(&self) -> bool {
        self.availability().iter().any(|(available, _)| *available)
    }

    /// Available but past its threshold.
    pub fn any_stale(&self) -> bool {
        self.availability()
            .iter()
            .any(|(available, stale)| *available && *stale)
    }

    /// Most recent capture instant across the four domains.
    pub fn last_sync(&self) -> Option<DateTime<Utc>> {
        [
            self.hardware.captured_at,
            self.software.captured_at,
            self.security.captured_at,
            self.performance.captured_at,
        ]
        .into_iter()
        .flatten()
        .max()
    }

    pub fn is_obsolete(&self) -> bool {
        self.hardware.payload().is_some_and(|h| h.is_obsolete)
    }

    pub fn has_security_risk(&self) -> bool {
        self.security.payload().is_some_and(|s| s.has_security_risk)
    }

    pub fn risky_apps_count(&self) -> usize {
        self.software
            .payload()
            .map_or(0, SoftwareInventory::risky_count)
    }

    fn has_critical_finding(&self) -> bool {
        self.security
            .fresh_payload()
            .is_some_and(|s| s.has_security_risk)
            || self
                .hardware
                .fresh_payload()
                .is_some_and(HardwareSnapshot::has_failed_disk)
            || self
                .performance
                .fresh_payload()
                .is_some_and(|p| p.has_thermal_alert)
    }

    fn has_soft_finding(&self) -> bool {
        self.security
            .fresh_payload()
            .is_some_and(|s| s.is_critical_update_pending)
            || self
                .performance
                .fresh_payload()
                .is_some_and(PerformanceSnapshot::has_resource_alert)
            || self
                .software
                .fresh_payload()
                .is_some_and(|s| s.risky_count() > 0)
            || self
                .hardware
                .fresh_payload()
                .is_some_and(|h| h.is_obsolete)
    }
}

/// Worst-case classification, first matching rule wins:
/// no data at all, then any fresh critical finding, then any fresh soft finding or an
/// available-but-stale domain, else operative. A domain that was never captured is neutral.
pub fn derive(refs: &DomainRefs) -> DailyEquipmentStatus {
    if !refs.any_available() {
        return DailyEquipmentStatus::NoData;
    }
    if refs.has_critical_finding() {
        return DailyEquipmentStatus::Critical;
    }
    if refs.has_soft_finding() || refs.any_stale() {
        return DailyEquipmentStatus::Degraded;
    }
    DailyEquipmentStatus::Operative
}
