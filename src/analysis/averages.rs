// Range averages over performance snapshots. Samples missing a metric are excluded from
// that metric's mean.

use crate::models::{PerformanceAverages, PerformanceSnapshot, Snapshot};

pub fn performance_averages(snapshots: &[Snapshot<PerformanceSnapshot>]) -> PerformanceAverages {
    let cpu: Vec<f64> = snapshots
        .iter()
        .filter_map(|s| s.payload.cpu_usage_percent)
        .collect();
    let ram: Vec<f64> = snapshots
        .iter()
        .filter_map(|s| s.payload.ram_usage_percent)
        .collect();
    let disk: Vec<f64> = snapshots
        .iter()
        .filter_map(|s| s.payload.disk_usage_percent)
        .collect();
    let temperature: Vec<f64> = snapshots
        .iter()
        .filter_map(|s| s.payload.cpu_temperature_c)
        .collect();

    PerformanceAverages {
        avg_cpu_usage_percent: mean_f64(&cpu),
        avg_ram_usage_percent: mean_f64(&ram),
        avg_disk_usage_percent: mean_f64(&disk),
        avg_cpu_temperature_c: (!temperature.is_empty()).then(|| mean_f64(&temperature)),
        total_snapshots: snapshots.len(),
    }
}

fn mean_f64(v: &[f64]) -> f64 {
    if v.is_empty() {
        return 0.0;
    }
    v.iter().sum::<f64>() / (v.len() as f64)
}
