// SQLite snapshot store. Payloads are stored as JSON text, one table for all four domains.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde::de::DeserializeOwned;
use sqlx::Row;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions, SqliteRow};
use std::path::Path;
use std::str::FromStr;
use tracing::instrument;

use super::SnapshotStore;
use crate::error::StoreError;
use crate::models::{
    DomainPayload, Equipment, HardwareSnapshot, Laboratory, PerformanceSnapshot,
    SecuritySnapshot, Snapshot, SoftwareInventory,
};

pub struct SqliteSnapshotStore {
    pool: SqlitePool,
}

impl SqliteSnapshotStore {
    pub async fn connect(path: &str, max_pool_size: u32) -> anyhow::Result<Self> {
        if let Some(parent) = Path::new(path).parent() {
            std::fs::create_dir_all(parent)?;
        }
        let opts = SqliteConnectOptions::from_str(&format!("sqlite:{}", path))?
            .create_if_missing(true)
            .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
            .busy_timeout(std::time::Duration::from_secs(5))
            .synchronous(sqlx::sqlite::SqliteSynchronous::Normal);
        let pool = SqlitePoolOptions::new()
            .max_connections(max_pool_size)
            .connect_with(opts)
            .await?;
        Ok(Self { pool })
    }

    pub async fn init(&self) -> anyhow::Result<()> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS laboratories (id INTEGER PRIMARY KEY, name TEXT NOT NULL, location TEXT)",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS equipment (
                id INTEGER PRIMARY KEY,
                code TEXT NOT NULL UNIQUE,
                name TEXT NOT NULL,
                location TEXT,
                laboratory_id INTEGER,
                is_active INTEGER NOT NULL DEFAULT 1,
                created_at INTEGER NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_equipment_laboratory ON equipment(laboratory_id, code)",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS snapshots (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                equipment_id INTEGER NOT NULL,
                domain TEXT NOT NULL,
                captured_at INTEGER NOT NULL,
                data TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_snapshots_lookup ON snapshots(equipment_id, domain, captured_at)",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    #[instrument(skip(self, lab), fields(repo = "snapshots", operation = "upsert_laboratory", laboratory_id = lab.id))]
    pub async fn upsert_laboratory(&self, lab: &Laboratory) -> Result<(), StoreError> {
        sqlx::query("INSERT OR REPLACE INTO laboratories (id, name, location) VALUES ($1, $2, $3)")
            .bind(lab.id)
            .bind(&lab.name)
            .bind(&lab.location)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    #[instrument(skip(self, equipment), fields(repo = "snapshots", operation = "upsert_equipment", equipment_id = equipment.id))]
    pub async fn upsert_equipment(&self, equipment: &Equipment) -> Result<(), StoreError> {
        sqlx::query(
            "INSERT OR REPLACE INTO equipment (id, code, name, location, laboratory_id, is_active, created_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7)",
        )
        .bind(equipment.id)
        .bind(&equipment.code)
        .bind(&equipment.name)
        .bind(&equipment.location)
        .bind(equipment.laboratory_id)
        .bind(equipment.is_active)
        .bind(equipment.created_at.timestamp_millis())
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Appends a snapshot; existing captures are never modified. Returns the new snapshot id.
    #[instrument(skip(self, payload), fields(repo = "snapshots", operation = "save_snapshot", domain = %T::DOMAIN))]
    pub async fn save_snapshot<T>(
        &self,
        equipment_id: i64,
        captured_at: DateTime<Utc>,
        payload: &T,
    ) -> Result<i64, StoreError>
    where
        T: DomainPayload + Serialize + Sync,
    {
        let data = serde_json::to_string(payload).map_err(StoreError::Encode)?;
        let r = sqlx::query(
            "INSERT INTO snapshots (equipment_id, domain, captured_at, data) VALUES ($1, $2, $3, $4)",
        )
        .bind(equipment_id)
        .bind(T::DOMAIN.as_str())
        .bind(captured_at.timestamp_millis())
        .bind(&data)
        .execute(&self.pool)
        .await?;
        Ok(r.last_insert_rowid())
    }

    /// Delete snapshots captured before `cutoff` that are superseded by another capture also
    /// before `cutoff`, for the same equipment and domain. The newest pre-cutoff capture
    /// survives, so "latest at/before" answers for any date from `cutoff` on are unchanged.
    #[instrument(skip(self), fields(repo = "snapshots", operation = "prune_superseded_before"))]
    pub async fn prune_superseded_before(&self, cutoff: DateTime<Utc>) -> Result<u64, StoreError> {
        let r = sqlx::query(
            r#"
            DELETE FROM snapshots
            WHERE captured_at < $1
              AND EXISTS (
                SELECT 1 FROM snapshots newer
                WHERE newer.equipment_id = snapshots.equipment_id
                  AND newer.domain = snapshots.domain
                  AND newer.captured_at < $1
                  AND (newer.captured_at > snapshots.captured_at
                       OR (newer.captured_at = snapshots.captured_at AND newer.id > snapshots.id))
              )
            "#,
        )
        .bind(cutoff.timestamp_millis())
        .execute(&self.pool)
        .await?;
        Ok(r.rows_affected())
    }

    pub async fn count_snapshots(&self) -> Result<i64, StoreError> {
        let n = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM snapshots")
            .fetch_one(&self.pool)
            .await?;
        Ok(n)
    }

    /// Reclaim space after deletes (run periodically after pruning).
    #[instrument(skip(self), fields(repo = "snapshots", operation = "vacuum"))]
    pub async fn vacuum(&self) -> Result<(), StoreError> {
        sqlx::query("VACUUM").execute(&self.pool).await?;
        Ok(())
    }

    async fn latest<T>(
        &self,
        equipment_id: i64,
        at: DateTime<Utc>,
    ) -> Result<Option<Snapshot<T>>, StoreError>
    where
        T: DomainPayload + DeserializeOwned,
    {
        let row = sqlx::query(
            "SELECT id, equipment_id, captured_at, data FROM snapshots
             WHERE equipment_id = $1 AND domain = $2 AND captured_at <= $3
             ORDER BY captured_at DESC, id DESC LIMIT 1",
        )
        .bind(equipment_id)
        .bind(T::DOMAIN.as_str())
        .bind(at.timestamp_millis())
        .fetch_optional(&self.pool)
        .await?;
        row.as_ref().map(parse_snapshot_row::<T>).transpose()
    }

    async fn history<T>(
        &self,
        equipment_id: i64,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<Snapshot<T>>, StoreError>
    where
        T: DomainPayload + DeserializeOwned,
    {
        let rows = sqlx::query(
            "SELECT id, equipment_id, captured_at, data FROM snapshots
             WHERE equipment_id = $1 AND domain = $2 AND captured_at >= $3 AND captured_at < $4
             ORDER BY captured_at ASC, id ASC",
        )
        .bind(equipment_id)
        .bind(T::DOMAIN.as_str())
        .bind(from.timestamp_millis())
        .bind(to.timestamp_millis())
        .fetch_all(&self.pool)
        .await?;

        let mut out = Vec::with_capacity(rows.len());
        for row in &rows {
            out.push(parse_snapshot_row(row)?);
        }
        Ok(out)
    }
}

#[async_trait]
impl SnapshotStore for SqliteSnapshotStore {
    #[instrument(skip(self), fields(repo = "snapshots", operation = "get_laboratory"))]
    async fn get_laboratory(&self, laboratory_id: i64) -> Result<Option<Laboratory>, StoreError> {
        let row = sqlx::query("SELECT id, name, location FROM laboratories WHERE id = $1")
            .bind(laboratory_id)
            .fetch_optional(&self.pool)
            .await?;
        let Some(row) = row else {
            return Ok(None);
        };
        Ok(Some(Laboratory {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            location: row.try_get("location")?,
        }))
    }

    #[instrument(skip(self), fields(repo = "snapshots", operation = "get_equipment"))]
    async fn get_equipment(&self, equipment_id: i64) -> Result<Option<Equipment>, StoreError> {
        let row = sqlx::query(
            "SELECT id, code, name, location, laboratory_id, is_active, created_at FROM equipment WHERE id = $1",
        )
        .bind(equipment_id)
        .fetch_optional(&self.pool)
        .await?;
        row.as_ref().map(parse_equipment_row).transpose()
    }

    #[instrument(skip(self), fields(repo = "snapshots", operation = "list_equipment"))]
    async fn list_equipment(&self) -> Result<Vec<Equipment>, StoreError> {
        let rows = sqlx::query(
            "SELECT id, code, name, location, laboratory_id, is_active, created_at FROM equipment
             ORDER BY code ASC, id ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(parse_equipment_row).collect()
    }

    #[instrument(skip(self), fields(repo = "snapshots", operation = "list_laboratory_equipment"))]
    async fn list_laboratory_equipment(
        &self,
        laboratory_id: i64,
    ) -> Result<Vec<Equipment>, StoreError> {
        let rows = sqlx::query(
            "SELECT id, code, name, location, laboratory_id, is_active, created_at FROM equipment
             WHERE laboratory_id = $1 ORDER BY code ASC, id ASC",
        )
        .bind(laboratory_id)
        .fetch_all(&self.pool)
        .await?;

        let mut out = Vec::with_capacity(rows.len());
        for row in &rows {
            out.push(parse_equipment_row(row)?);
        }
        Ok(out)
    }

    async fn latest_hardware(
        &self,
        equipment_id: i64,
        at: DateTime<Utc>,
    ) -> Result<Option<Snapshot<HardwareSnapshot>>, StoreError> {
        self.latest(equipment_id, at).await
    }

    async fn latest_software(
        &self,
        equipment_id: i64,
        at: DateTime<Utc>,
    ) -> Result<Option<Snapshot<SoftwareInventory>>, StoreError> {
        self.latest(equipment_id, at).await
    }

    async fn latest_security(
        &self,
        equipment_id: i64,
        at: DateTime<Utc>,
    ) -> Result<Option<Snapshot<SecuritySnapshot>>, StoreError> {
        self.latest(equipment_id, at).await
    }

    async fn latest_performance(
        &self,
        equipment_id: i64,
        at: DateTime<Utc>,
    ) -> Result<Option<Snapshot<PerformanceSnapshot>>, StoreError> {
        self.latest(equipment_id, at).await
    }

    async fn hardware_history(
        &self,
        equipment_id: i64,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<Snapshot<HardwareSnapshot>>, StoreError> {
        self.history(equipment_id, from, to).await
    }

    async fn software_history(
        &self,
        equipment_id: i64,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<Snapshot<SoftwareInventory>>, StoreError> {
        self.history(equipment_id, from, to).await
    }

    async fn security_history(
        &self,
        equipment_id: i64,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<Snapshot<SecuritySnapshot>>, StoreError> {
        self.history(equipment_id, from, to).await
    }

    async fn performance_history(
        &self,
        equipment_id: i64,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<Snapshot<PerformanceSnapshot>>, StoreError> {
        self.history(equipment_id, from, to).await
    }
}

fn millis_to_utc(ms: i64) -> Result<DateTime<Utc>, StoreError> {
    DateTime::from_timestamp_millis(ms).ok_or(StoreError::InvalidTimestamp(ms))
}

fn parse_equipment_row(row: &SqliteRow) -> Result<Equipment, StoreError> {
    let created_at: i64 = row.try_get("created_at")?;
    Ok(Equipment {
        id: row.try_get("id")?,
        code: row.try_get("code")?,
        name: row.try_get("name")?,
        location: row.try_get("location")?,
        laboratory_id: row.try_get("laboratory_id")?,
        is_active: row.try_get("is_active")?,
        created_at: millis_to_utc(created_at)?,
    })
}

fn parse_snapshot_row<T>(row: &SqliteRow) -> Result<Snapshot<T>, StoreError>
where
    T: DomainPayload + DeserializeOwned,
{
    let captured_at: i64 = row.try_get("captured_at")?;
    let data: String = row.try_get("data")?;
    let payload = serde_json::from_str(&data).map_err(|source| StoreError::Decode {
        domain: T::DOMAIN.as_str(),
        source,
    })?;
    Ok(Snapshot {
        id: row.try_get("id")?,
        equipment_id: row.try_get("equipment_id")?,
        captured_at: millis_to_utc(captured_at)?,
        payload,
    })
}
