// Shared test helpers: builders and an in-memory snapshot store with injectable read failures

#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use labaudit::error::StoreError;
use labaudit::models::*;
use labaudit::snapshot_store::SnapshotStore;
use std::collections::HashSet;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// `date` at `hour`:00 UTC.
pub fn at(date: NaiveDate, hour: u32) -> DateTime<Utc> {
    date.and_hms_opt(hour, 0, 0).unwrap().and_utc()
}

pub fn snapshot<T>(id: i64, equipment_id: i64, captured_at: DateTime<Utc>, payload: T) -> Snapshot<T> {
    Snapshot {
        id,
        equipment_id,
        captured_at,
        payload,
    }
}

pub fn laboratory(id: i64, name: &str) -> Laboratory {
    Laboratory {
        id,
        name: name.into(),
        location: Some("Building B".into()),
    }
}

pub fn equipment(id: i64, code: &str, laboratory_id: i64, created_at: DateTime<Utc>) -> Equipment {
    Equipment {
        id,
        code: code.into(),
        name: format!("PC {code}"),
        location: Some("Row 1".into()),
        laboratory_id: Some(laboratory_id),
        is_active: true,
        created_at,
    }
}

pub fn healthy_hardware() -> HardwareSnapshot {
    HardwareSnapshot {
        cpu_model: Some("Intel Core i5-8400".into()),
        cpu_cores: Some(6),
        ram_total_gb: Some(16.0),
        disk_smart_status: DiskSmartStatus::Good,
        ..Default::default()
    }
}

pub fn healthy_software() -> SoftwareInventory {
    SoftwareInventory {
        items: vec![
            SoftwareItem {
                name: "LibreOffice".into(),
                license_status: LicenseStatus::Licensed,
                is_whitelisted: true,
                ..Default::default()
            },
            SoftwareItem {
                name: "Firefox".into(),
                license_status: LicenseStatus::Licensed,
                is_whitelisted: true,
                ..Default::default()
            },
        ],
    }
}

pub fn risky_software(risky: usize) -> SoftwareInventory {
    let mut inventory = healthy_software();
    for i in 0..risky {
        inventory.items.push(SoftwareItem {
            name: format!("torrent-client-{i}"),
            license_status: LicenseStatus::Unknown,
            is_risk: true,
            ..Default::default()
        });
    }
    inventory
}

pub fn healthy_security() -> SecuritySnapshot {
    SecuritySnapshot {
        os_name: Some("Windows 11 Pro".into()),
        antivirus_installed: true,
        antivirus_enabled: true,
        antivirus_definitions_updated: true,
        firewall_enabled: true,
        uac_enabled: true,
        ..Default::default()
    }
}

pub fn healthy_performance() -> PerformanceSnapshot {
    PerformanceSnapshot {
        mode: "scheduled".into(),
        cpu_usage_percent: Some(12.0),
        ram_usage_percent: Some(40.0),
        disk_usage_percent: Some(55.0),
        ..Default::default()
    }
}

/// Snapshot store backed by vectors. Reads for `(equipment_id, domain)` pairs listed in
/// `failing` return `StoreError::Unavailable`.
#[derive(Default)]
pub struct InMemoryStore {
    pub laboratories: Vec<Laboratory>,
    pub equipment: Vec<Equipment>,
    pub hardware: Vec<Snapshot<HardwareSnapshot>>,
    pub software: Vec<Snapshot<SoftwareInventory>>,
    pub security: Vec<Snapshot<SecuritySnapshot>>,
    pub performance: Vec<Snapshot<PerformanceSnapshot>>,
    pub failing: HashSet<(i64, Domain)>,
    pub fail_inventory: bool,
}

impl InMemoryStore {
    fn check(&self, equipment_id: i64, domain: Domain) -> Result<(), StoreError> {
        if self.failing.contains(&(equipment_id, domain)) {
            return Err(StoreError::Unavailable(format!(
                "{domain} store unreachable for equipment {equipment_id}"
            )));
        }
        Ok(())
    }

    fn check_inventory(&self) -> Result<(), StoreError> {
        if self.fail_inventory {
            return Err(StoreError::Unavailable("inventory unreachable".into()));
        }
        Ok(())
    }
}

fn latest_of<T: Clone>(
    items: &[Snapshot<T>],
    equipment_id: i64,
    at: DateTime<Utc>,
) -> Option<Snapshot<T>> {
    items
        .iter()
        .filter(|s| s.equipment_id == equipment_id && s.captured_at <= at)
        .max_by_key(|s| (s.captured_at, s.id))
        .cloned()
}

fn history_of<T: Clone>(
    items: &[Snapshot<T>],
    equipment_id: i64,
    from: DateTime<Utc>,
    to: DateTime<Utc>,
) -> Vec<Snapshot<T>> {
    let mut out: Vec<Snapshot<T>> = items
        .iter()
        .filter(|s| s.equipment_id == equipment_id && s.captured_at >= from && s.captured_at < to)
        .cloned()
        .collect();
    out.sort_by_key(|s| (s.captured_at, s.id));
    out
}

#[async_trait]
impl SnapshotStore for InMemoryStore {
    async fn get_laboratory(&self, laboratory_id: i64) -> Result<Option<Laboratory>, StoreError> {
        self.check_inventory()?;
        Ok(self.laboratories.iter().find(|l| l.id == laboratory_id).cloned())
    }

    async fn get_equipment(&self, equipment_id: i64) -> Result<Option<Equipment>, StoreError> {
        self.check_inventory()?;
        Ok(self.equipment.iter().find(|e| e.id == equipment_id).cloned())
    }

    async fn list_equipment(&self) -> Result<Vec<Equipment>, StoreError> {
        self.check_inventory()?;
        let mut out = self.equipment.clone();
        out.sort_by(|a, b| a.code.cmp(&b.code).then(a.id.cmp(&b.id)));
        Ok(out)
    }

    async fn list_laboratory_equipment(
        &self,
        laboratory_id: i64,
    ) -> Result<Vec<Equipment>, StoreError> {
        self.check_inventory()?;
        let mut out: Vec<Equipment> = self
            .equipment
            .iter()
            .filter(|e| e.laboratory_id == Some(laboratory_id))
            .cloned()
            .collect();
        out.sort_by(|a, b| a.code.cmp(&b.code).then(a.id.cmp(&b.id)));
        Ok(out)
    }

    async fn latest_hardware(
        &self,
        equipment_id: i64,
        at: DateTime<Utc>,
    ) -> Result<Option<Snapshot<HardwareSnapshot>>, StoreError> {
        self.check(equipment_id, Domain::Hardware)?;
        Ok(latest_of(&self.hardware, equipment_id, at))
    }

    async fn latest_software(
        &self,
        equipment_id: i64,
        at: DateTime<Utc>,
    ) -> Result<Option<Snapshot<SoftwareInventory>>, StoreError> {
        self.check(equipment_id, Domain::Software)?;
        Ok(latest_of(&self.software, equipment_id, at))
    }

    async fn latest_security(
        &self,
        equipment_id: i64,
        at: DateTime<Utc>,
    ) -> Result<Option<Snapshot<SecuritySnapshot>>, StoreError> {
        self.check(equipment_id, Domain::Security)?;
        Ok(latest_of(&self.security, equipment_id, at))
    }

    async fn latest_performance(
        &self,
        equipment_id: i64,
        at: DateTime<Utc>,
    ) -> Result<Option<Snapshot<PerformanceSnapshot>>, StoreError> {
        self.check(equipment_id, Domain::Performance)?;
        Ok(latest_of(&self.performance, equipment_id, at))
    }

    async fn hardware_history(
        &self,
        equipment_id: i64,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<Snapshot<HardwareSnapshot>>, StoreError> {
        self.check(equipment_id, Domain::Hardware)?;
        Ok(history_of(&self.hardware, equipment_id, from, to))
    }

    async fn software_history(
        &self,
        equipment_id: i64,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<Snapshot<SoftwareInventory>>, StoreError> {
        self.check(equipment_id, Domain::Software)?;
        Ok(history_of(&self.software, equipment_id, from, to))
    }

    async fn security_history(
        &self,
        equipment_id: i64,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<Snapshot<SecuritySnapshot>>, StoreError> {
        self.check(equipment_id, Domain::Security)?;
        Ok(history_of(&self.security, equipment_id, from, to))
    }

    async fn performance_history(
        &self,
        equipment_id: i64,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<Snapshot<PerformanceSnapshot>>, StoreError> {
        self.check(equipment_id, Domain::Performance)?;
        Ok(history_of(&self.performance, equipment_id, from, to))
    }
}
