// Domain models: inventory identities, the four snapshot payloads, derived daily views,
// cross-equipment finding lists

mod analysis;
mod findings;
mod hardware;
mod inventory;
mod performance;
mod security;
mod snapshot;
mod software;

pub use analysis::{
    DailyEquipmentStatus, DailyLaboratoryHeatMap, DailySummary, EquipmentDailyDetail,
    EquipmentHeatMapItem, SecuritySnapshotRef, SnapshotRef, SoftwareSnapshotRef, StatusComparison,
};
pub use findings::{
    EquipmentState, FlaggedEquipment, PerformanceAlertEquipment, SecurityFinding,
};
pub use hardware::{DiskSmartStatus, HardwareSnapshot};
pub use inventory::{Equipment, EquipmentRef, Laboratory, LaboratoryRef};
pub use performance::{PerformanceAverages, PerformanceSnapshot, ProcessInfo};
pub use security::{LocalUserInfo, SecuritySnapshot};
pub use snapshot::{Domain, DomainPayload, Snapshot};
pub use software::{LicenseStatus, SoftwareInventory, SoftwareItem};
