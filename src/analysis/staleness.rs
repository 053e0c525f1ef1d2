// Staleness of a capture relative to a reference calendar date.

use chrono::{DateTime, NaiveDate, Utc};

use crate::models::{Snapshot, SnapshotRef};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Staleness {
    pub stale: bool,
    /// Whole days between the capture date and the reference date; `None` when never captured.
    pub stale_days: Option<i64>,
}

impl Staleness {
    pub const ABSENT: Staleness = Staleness {
        stale: true,
        stale_days: None,
    };
}

/// Total over its inputs. Time of day is ignored: only calendar dates are compared.
pub fn evaluate(
    captured_at: Option<DateTime<Utc>>,
    reference_date: NaiveDate,
    threshold_days: u32,
) -> Staleness {
    let Some(captured_at) = captured_at else {
        return Staleness::ABSENT;
    };
    let days = reference_date
        .signed_duration_since(captured_at.date_naive())
        .num_days()
        .max(0);
    Staleness {
        stale: days > i64::from(threshold_days),
        stale_days: Some(days),
    }
}

impl<T> SnapshotRef<T> {
    /// Wraps the latest snapshot at/before `reference_date` with its staleness.
    pub fn evaluate(
        snapshot: Option<Snapshot<T>>,
        reference_date: NaiveDate,
        threshold_days: u32,
    ) -> Self {
        let captured_at = snapshot.as_ref().map(|s| s.captured_at);
        let Staleness { stale, stale_days } = evaluate(captured_at, reference_date, threshold_days);
        SnapshotRef {
            data: snapshot,
            captured_at,
            stale,
            stale_days,
        }
    }

    pub fn absent() -> Self {
        SnapshotRef {
            data: None,
            captured_at: None,
            stale: true,
            stale_days: None,
        }
    }
}
