// Staleness and calendar helpers

mod common;

use common::{at, date, healthy_hardware, snapshot};
use labaudit::analysis::calendar::{end_of_day, parse_reference_date};
use labaudit::analysis::staleness::{Staleness, evaluate};
use labaudit::error::AuditError;
use labaudit::models::SnapshotRef;

#[test]
fn test_end_of_day_is_last_millisecond_utc() {
    let eod = end_of_day(date(2024, 3, 10));
    assert_eq!(eod.to_rfc3339(), "2024-03-10T23:59:59.999+00:00");
    assert!(eod < at(date(2024, 3, 11), 0));
}

#[test]
fn test_parse_reference_date_accepts_today_and_past() {
    let today = date(2024, 3, 10);
    assert_eq!(parse_reference_date("2024-03-10", today).unwrap(), today);
    assert_eq!(
        parse_reference_date("2023-12-31", today).unwrap(),
        date(2023, 12, 31)
    );
}

#[test]
fn test_parse_reference_date_rejects_future() {
    let err = parse_reference_date("2024-03-11", date(2024, 3, 10)).unwrap_err();
    assert!(matches!(err, AuditError::InvalidDate(_)));
}

#[test]
fn test_parse_reference_date_rejects_malformed() {
    let today = date(2024, 3, 10);
    for raw in ["10/03/2024", "2024-03-10T08:00:00Z", "", "2024-02-30"] {
        let err = parse_reference_date(raw, today).unwrap_err();
        assert!(matches!(err, AuditError::InvalidDate(_)), "{raw:?}");
    }
}

#[test]
fn test_evaluate_ten_days_old_against_thresholds() {
    let reference = date(2024, 3, 10);
    let captured = Some(at(date(2024, 2, 29), 9));

    let week = evaluate(captured, reference, 7);
    assert_eq!(
        week,
        Staleness {
            stale: true,
            stale_days: Some(10)
        }
    );

    let fortnight = evaluate(captured, reference, 14);
    assert!(!fortnight.stale);
    assert_eq!(fortnight.stale_days, Some(10));
}

#[test]
fn test_evaluate_threshold_is_inclusive() {
    let reference = date(2024, 3, 10);
    let s = evaluate(Some(at(date(2024, 3, 3), 12)), reference, 7);
    assert_eq!(s.stale_days, Some(7));
    assert!(!s.stale);
}

#[test]
fn test_evaluate_ignores_time_of_day() {
    let reference = date(2024, 3, 10);
    let early = evaluate(Some(at(date(2024, 3, 10), 0)), reference, 0);
    let late = evaluate(Some(at(date(2024, 3, 10), 23)), reference, 0);
    assert_eq!(early.stale_days, Some(0));
    assert_eq!(late.stale_days, Some(0));
    assert!(!early.stale && !late.stale);

    let yesterday_night = evaluate(Some(at(date(2024, 3, 9), 23)), reference, 0);
    assert_eq!(yesterday_night.stale_days, Some(1));
    assert!(yesterday_night.stale);
}

#[test]
fn test_evaluate_absent_is_stale_without_days() {
    let s = evaluate(None, date(2024, 3, 10), 7);
    assert_eq!(s, Staleness::ABSENT);
    assert!(s.stale);
    assert!(s.stale_days.is_none());
}

#[test]
fn test_evaluate_capture_after_reference_clamps_to_zero() {
    let s = evaluate(Some(at(date(2024, 3, 12), 8)), date(2024, 3, 10), 1);
    assert_eq!(s.stale_days, Some(0));
    assert!(!s.stale);
}

#[test]
fn test_snapshot_ref_evaluate_carries_capture() {
    let captured = at(date(2024, 3, 1), 10);
    let r = SnapshotRef::evaluate(
        Some(snapshot(1, 7, captured, healthy_hardware())),
        date(2024, 3, 10),
        7,
    );
    assert!(r.is_available());
    assert_eq!(r.captured_at, Some(captured));
    assert_eq!(r.stale_days, Some(9));
    assert!(r.stale);
    assert!(r.payload().is_some());
    assert!(r.fresh_payload().is_none());
}

#[test]
fn test_snapshot_ref_absent_serializes_null_fields() {
    let r = SnapshotRef::<labaudit::models::HardwareSnapshot>::absent();
    let json = serde_json::to_value(&r).unwrap();
    assert_eq!(json["data"], serde_json::Value::Null);
    assert_eq!(json["capturedAt"], serde_json::Value::Null);
    assert_eq!(json["stale"], true);
    assert_eq!(json["staleDays"], serde_json::Value::Null);
}

#[test]
fn test_parse_instant_accepts_rfc3339() {
    use labaudit::analysis::calendar::parse_instant;
    assert_eq!(
        parse_instant("from", "2024-03-10T09:00:00Z").unwrap(),
        at(date(2024, 3, 10), 9)
    );
    assert_eq!(
        parse_instant("from", "2024-03-10T11:00:00+02:00").unwrap(),
        at(date(2024, 3, 10), 9)
    );
    let err = parse_instant("to", "2024-03-10").unwrap_err();
    assert!(matches!(err, AuditError::InvalidRange(_)));
    assert!(err.to_string().contains("to"));
}
