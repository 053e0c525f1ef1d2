// Security domain payload: OS patch level, antivirus, firewall, password policy, local accounts

use serde::{Deserialize, Serialize};

use super::{Domain, DomainPayload};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LocalUserInfo {
    pub username: String,
    pub is_admin: bool,
    pub is_enabled: bool,
    pub last_login: Option<String>,
    pub password_never_expires: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SecuritySnapshot {
    pub os_name: Option<String>,
    pub os_version: Option<String>,
    pub os_build: Option<String>,
    pub os_architecture: Option<String>,

    pub last_update_date: Option<String>,
    pub days_since_last_update: Option<u32>,
    pub pending_updates_count: u32,
    pub is_critical_update_pending: bool,

    pub antivirus_installed: bool,
    pub antivirus_enabled: bool,
    pub antivirus_name: Option<String>,
    pub antivirus_version: Option<String>,
    pub antivirus_definitions_updated: bool,
    pub antivirus_last_scan_date: Option<String>,

    pub firewall_enabled: bool,
    pub firewall_domain_enabled: bool,
    pub firewall_private_enabled: bool,
    pub firewall_public_enabled: bool,

    pub password_min_length: Option<u32>,
    pub password_max_age_days: Option<u32>,
    pub password_min_age_days: Option<u32>,
    pub password_complexity_enabled: bool,
    pub account_lockout_threshold: Option<u32>,

    pub local_users: Vec<LocalUserInfo>,

    pub last_logged_user: Option<String>,
    pub last_login_date: Option<String>,
    pub current_logged_user: Option<String>,

    pub uac_enabled: bool,
    pub rdp_enabled: bool,
    pub remote_registry_enabled: bool,
    /// Set by the capture side when the posture as a whole is considered an active risk.
    pub has_security_risk: bool,
}

impl DomainPayload for SecuritySnapshot {
    const DOMAIN: Domain = Domain::Security;
}
