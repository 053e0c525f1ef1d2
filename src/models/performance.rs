// Performance domain payload and range averages

use serde::{Deserialize, Serialize};

use super::{Domain, DomainPayload};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProcessInfo {
    pub pid: u32,
    pub name: String,
    pub cpu_percent: f64,
    #[serde(rename = "ramMB")]
    pub ram_mb: f64,
    pub status: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PerformanceSnapshot {
    pub mode: String,

    pub cpu_usage_percent: Option<f64>,
    pub cpu_temperature_c: Option<f64>,

    #[serde(rename = "ramTotalGB")]
    pub ram_total_gb: Option<f64>,
    #[serde(rename = "ramUsedGB")]
    pub ram_used_gb: Option<f64>,
    pub ram_usage_percent: Option<f64>,

    #[serde(rename = "diskTotalGB")]
    pub disk_total_gb: Option<f64>,
    #[serde(rename = "diskUsedGB")]
    pub disk_used_gb: Option<f64>,
    pub disk_usage_percent: Option<f64>,
    pub disk_temperature_c: Option<f64>,
    #[serde(rename = "diskReadSpeedMBs")]
    pub disk_read_speed_mbs: Option<f64>,
    #[serde(rename = "diskWriteSpeedMBs")]
    pub disk_write_speed_mbs: Option<f64>,

    #[serde(rename = "networkSentMBs")]
    pub network_sent_mbs: Option<f64>,
    #[serde(rename = "networkReceivedMBs")]
    pub network_received_mbs: Option<f64>,
    pub network_adapter_name: Option<String>,

    pub uptime_seconds: Option<u64>,
    pub last_boot_time: Option<String>,

    pub top_processes_by_cpu: Vec<ProcessInfo>,
    pub top_processes_by_ram: Vec<ProcessInfo>,

    pub has_cpu_alert: bool,
    pub has_ram_alert: bool,
    pub has_disk_alert: bool,
    pub has_thermal_alert: bool,
}

impl PerformanceSnapshot {
    /// CPU, RAM or disk saturation. Thermal alerts are tracked separately.
    pub fn has_resource_alert(&self) -> bool {
        self.has_cpu_alert || self.has_ram_alert || self.has_disk_alert
    }

    pub fn has_any_alert(&self) -> bool {
        self.has_resource_alert() || self.has_thermal_alert
    }
}

impl DomainPayload for PerformanceSnapshot {
    const DOMAIN: Domain = Domain::Performance;
}

/// Means over a range of performance snapshots (GET /performance/equipment/{id}/averages).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceAverages {
    pub avg_cpu_usage_percent: f64,
    pub avg_ram_usage_percent: f64,
    pub avg_disk_usage_percent: f64,
    pub avg_cpu_temperature_c: Option<f64>,
    pub total_snapshots: usize,
}
