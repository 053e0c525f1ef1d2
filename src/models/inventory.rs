// Inventory identities (owned by the inventory service; read-only here)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Laboratory {
    pub id: i64,
    pub name: String,
    pub location: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Equipment {
    pub id: i64,
    pub code: String,
    pub name: String,
    pub location: Option<String>,
    pub laboratory_id: Option<i64>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// Equipment identity as embedded in heat map cells and detail payloads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentRef {
    pub id: i64,
    pub code: String,
    pub name: String,
    pub location: String,
}

impl From<&Equipment> for EquipmentRef {
    fn from(e: &Equipment) -> Self {
        Self {
            id: e.id,
            code: e.code.clone(),
            name: e.name.clone(),
            location: e.location.clone().unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaboratoryRef {
    pub id: i64,
    pub name: String,
    pub location: String,
}

impl From<&Laboratory> for LaboratoryRef {
    fn from(l: &Laboratory) -> Self {
        Self {
            id: l.id,
            name: l.name.clone(),
            location: l.location.clone().unwrap_or_default(),
        }
    }
}
