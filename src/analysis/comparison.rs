// Day-over-day status comparison.

use std::cmp::Ordering;

use crate::models::{DailyEquipmentStatus, StatusComparison};

/// `yesterday` is `None` when the previous day cannot be evaluated (first tracked day,
/// equipment created later). `NoData` on either side is unranked and yields `Unknown`.
pub fn compare(
    today: DailyEquipmentStatus,
    yesterday: Option<DailyEquipmentStatus>,
) -> StatusComparison {
    let Some(yesterday) = yesterday else {
        return StatusComparison::Unknown;
    };
    match (today.severity_rank(), yesterday.severity_rank()) {
        (Some(t), Some(y)) => match t.cmp(&y) {
            Ordering::Less => StatusComparison::Improved,
            Ordering::Equal => StatusComparison::Same,
            Ordering::Greater => StatusComparison::Worsened,
        },
        _ => StatusComparison::Unknown,
    }
}
