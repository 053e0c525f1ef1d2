// Hardware domain payload

use serde::{Deserialize, Serialize};

use super::{Domain, DomainPayload};

/// Disk SMART health as reported by the agent; serializes lowercase (e.g. "failed").
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiskSmartStatus {
    Good,
    Warning,
    Failed,
    #[default]
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HardwareSnapshot {
    pub cpu_model: Option<String>,
    pub cpu_cores: Option<u32>,
    #[serde(rename = "cpuFrequencyGHz")]
    pub cpu_frequency_ghz: Option<f64>,
    pub cpu_usage_percent: Option<f64>,
    pub cpu_temperature_c: Option<f64>,

    #[serde(rename = "ramTotalGB")]
    pub ram_total_gb: Option<f64>,
    #[serde(rename = "ramUsedGB")]
    pub ram_used_gb: Option<f64>,
    pub ram_type: Option<String>,
    #[serde(rename = "ramFrequencyMHz")]
    pub ram_frequency_mhz: Option<u32>,

    #[serde(rename = "diskCapacityGB")]
    pub disk_capacity_gb: Option<f64>,
    #[serde(rename = "diskUsedGB")]
    pub disk_used_gb: Option<f64>,
    pub disk_type: Option<String>,
    pub disk_model: Option<String>,
    pub disk_smart_status: DiskSmartStatus,

    pub brand: Option<String>,
    pub model: Option<String>,
    pub serial_number: Option<String>,
    pub manufacture_year: Option<String>,
    pub architecture: Option<String>,

    /// Precomputed by the capture side: aged or underpowered equipment.
    pub is_obsolete: bool,
}

impl HardwareSnapshot {
    pub fn has_failed_disk(&self) -> bool {
        self.disk_smart_status == DiskSmartStatus::Failed
    }
}

impl DomainPayload for HardwareSnapshot {
    const DOMAIN: Domain = Domain::Hardware;
}
