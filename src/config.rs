use serde::Deserialize;

use crate::models::Domain;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    #[serde(default)]
    pub staleness: StalenessConfig,
    #[serde(default)]
    pub analysis: AnalysisConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub path: String,
    pub max_pool_size: u32,
    /// Snapshots older than this are pruned, except the newest one per equipment and domain.
    #[serde(default = "default_retention_days")]
    pub retention_days: u32,
    #[serde(default = "default_prune_interval_secs")]
    pub prune_interval_secs: u64,
    /// Optional cron expression for VACUUM (e.g. "0 0 3 * * *"). Uses local time.
    #[serde(default)]
    pub vacuum_schedule: Option<String>,
    /// Run VACUUM every N seconds when vacuum_schedule is not set.
    #[serde(default = "default_vacuum_interval_secs")]
    pub vacuum_interval_secs: u64,
}

fn default_retention_days() -> u32 {
    90
}

fn default_prune_interval_secs() -> u64 {
    3600
}

fn default_vacuum_interval_secs() -> u64 {
    86_400
}

/// Per-domain staleness thresholds in calendar days. A snapshot older than its threshold
/// is stale; each domain is captured at its own cadence so each is tuned independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StalenessConfig {
    pub hardware_days: u32,
    pub software_days: u32,
    pub security_days: u32,
    pub performance_days: u32,
}

impl Default for StalenessConfig {
    fn default() -> Self {
        Self {
            hardware_days: 7,
            software_days: 7,
            security_days: 3,
            performance_days: 1,
        }
    }
}

impl StalenessConfig {
    pub fn threshold_days(&self, domain: Domain) -> u32 {
        match domain {
            Domain::Hardware => self.hardware_days,
            Domain::Software => self.software_days,
            Domain::Security => self.security_days,
            Domain::Performance => self.performance_days,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Upper bound on equipment evaluated concurrently while building a heat map.
    pub max_concurrent_equipment: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            max_concurrent_equipment: 8,
        }
    }
}

impl AppConfig {
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("CONFIG_FILE").unwrap_or_else(|_| "config.toml".into());
        let s = std::fs::read_to_string(&path)?;
        Self::load_from_str(&s)
    }

    /// Parse and validate config from a string (e.g. for tests).
    pub fn load_from_str(s: &str) -> anyhow::Result<Self> {
        let config: AppConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.server.port > 0,
            "server.port must be between 1 and 65535, got {}",
            self.server.port
        );
        anyhow::ensure!(
            !self.database.path.is_empty(),
            "database.path must be non-empty"
        );
        anyhow::ensure!(
            self.database.max_pool_size > 0,
            "database.max_pool_size must be > 0, got {}",
            self.database.max_pool_size
        );
        anyhow::ensure!(
            self.database.retention_days > 0,
            "database.retention_days must be > 0, got {}",
            self.database.retention_days
        );
        anyhow::ensure!(
            self.database.prune_interval_secs > 0,
            "database.prune_interval_secs must be > 0, got {}",
            self.database.prune_interval_secs
        );
        anyhow::ensure!(
            self.database.vacuum_interval_secs > 0,
            "database.vacuum_interval_secs must be > 0, got {}",
            self.database.vacuum_interval_secs
        );
        if let Some(expr) = &self.database.vacuum_schedule {
            anyhow::ensure!(
                expr.parse::<cron::Schedule>().is_ok(),
                "database.vacuum_schedule is not a valid cron expression: {}",
                expr
            );
        }
        anyhow::ensure!(
            self.analysis.max_concurrent_equipment > 0,
            "analysis.max_concurrent_equipment must be > 0, got {}",
            self.analysis.max_concurrent_equipment
        );
        Ok(())
    }
}
