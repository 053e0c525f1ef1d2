// Snapshot envelope shared by the four capture domains

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the independently captured data streams per equipment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Domain {
    Hardware,
    Software,
    Security,
    Performance,
}

impl Domain {
    pub const ALL: [Domain; 4] = [
        Domain::Hardware,
        Domain::Software,
        Domain::Security,
        Domain::Performance,
    ];

    /// Lowercase name; also the value stored in the `domain` column.
    pub fn as_str(self) -> &'static str {
        match self {
            Domain::Hardware => "hardware",
            Domain::Software => "software",
            Domain::Security => "security",
            Domain::Performance => "performance",
        }
    }
}

impl FromStr for Domain {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Domain::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| format!("unknown domain '{s}'"))
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ties a payload type to the domain it is captured under.
pub trait DomainPayload {
    const DOMAIN: Domain;
}

/// Immutable capture of one domain for one equipment. The payload is flattened on the wire,
/// so a hardware snapshot serializes as `{ id, equipmentId, capturedAt, cpuModel, ... }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot<T> {
    pub id: i64,
    pub equipment_id: i64,
    pub captured_at: DateTime<Utc>,
    #[serde(flatten)]
    pub payload: T,
}
