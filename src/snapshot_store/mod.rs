// Snapshot store: inventory lookups plus per-domain "latest at/before" and history reads.

mod sqlite;

pub use sqlite::SqliteSnapshotStore;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::error::StoreError;
use crate::models::{
    Equipment, HardwareSnapshot, Laboratory, PerformanceSnapshot, SecuritySnapshot, Snapshot,
    SoftwareInventory,
};

/// Read side of the snapshot store, as consumed by the analysis layer.
///
/// `latest_*` returns the most recent snapshot with `captured_at <= at`.
/// `*_history` returns snapshots with `from <= captured_at < to`, ascending.
#[async_trait]
pub trait SnapshotStore: Send + Sync {
    async fn get_laboratory(&self, laboratory_id: i64) -> Result<Option<Laboratory>, StoreError>;

    async fn get_equipment(&self, equipment_id: i64) -> Result<Option<Equipment>, StoreError>;

    /// Every equipment in the inventory, ordered by code then id.
    async fn list_equipment(&self) -> Result<Vec<Equipment>, StoreError>;

    /// Equipment of a laboratory in the laboratory's listing order.
    async fn list_laboratory_equipment(
        &self,
        laboratory_id: i64,
    ) -> Result<Vec<Equipment>, StoreError>;

    async fn latest_hardware(
        &self,
        equipment_id: i64,
        at: DateTime<Utc>,
    ) -> Result<Option<Snapshot<HardwareSnapshot>>, StoreError>;

    async fn latest_software(
        &self,
        equipment_id: i64,
        at: DateTime<Utc>,
    ) -> Result<Option<Snapshot<SoftwareInventory>>, StoreError>;

    async fn latest_security(
        &self,
        equipment_id: i64,
        at: DateTime<Utc>,
    ) -> Result<Option<Snapshot<SecuritySnapshot>>, StoreError>;

    async fn latest_performance(
        &self,
        equipment_id: i64,
        at: DateTime<Utc>,
    ) -> Result<Option<Snapshot<PerformanceSnapshot>>, StoreError>;

    async fn hardware_history(
        &self,
        equipment_id: i64,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<Snapshot<HardwareSnapshot>>, StoreError>;

    async fn software_history(
        &self,
        equipment_id: i64,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<Snapshot<SoftwareInventory>>, StoreError>;

    async fn security_history(
        &self,
        equipment_id: i64,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<Snapshot<SecuritySnapshot>>, StoreError>;

    async fn performance_history(
        &self,
        equipment_id: i64,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<Snapshot<PerformanceSnapshot>>, StoreError>;
}
