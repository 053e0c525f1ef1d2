// Software domain payload: the installed-software list captured in one pass

use serde::{Deserialize, Serialize};

use super::{Domain, DomainPayload};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LicenseStatus {
    Licensed,
    Unlicensed,
    #[default]
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SoftwareItem {
    pub name: String,
    pub version: Option<String>,
    pub publisher: Option<String>,
    pub installed_at: Option<String>,
    pub license_status: LicenseStatus,
    pub is_whitelisted: bool,
    pub is_risk: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SoftwareInventory {
    pub items: Vec<SoftwareItem>,
}

impl SoftwareInventory {
    pub fn risky_count(&self) -> usize {
        self.items.iter().filter(|i| i.is_risk).count()
    }

    pub fn total_count(&self) -> usize {
        self.items.len()
    }
}

impl DomainPayload for SoftwareInventory {
    const DOMAIN: Domain = Domain::Software;
}
