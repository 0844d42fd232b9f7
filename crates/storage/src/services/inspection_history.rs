//! Cross-event inspection history aggregation.
//!
//! History rows are matched by chassis number or license plate across all
//! events and clubs; the summary reports the latest record, rolling
//! per-status counts and whether the vehicle carries a recent rejection.

use chrono::{DateTime, Duration, Utc};

use crate::models::{InspectionStatus, TechnicalInspection};

/// A rejection inside this window flags the vehicle as critical.
const CRITICAL_WINDOW_DAYS: i64 = 365;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub pending: i64,
    pub approved: i64,
    pub conditional: i64,
    pub rejected: i64,
}

#[derive(Debug, Clone)]
pub struct InspectionHistory {
    pub latest: Option<TechnicalInspection>,
    pub counts: StatusCounts,
    pub critical: bool,
}

/// Summarizes inspection rows for one vehicle identity. Rows with an
/// unknown status string are counted nowhere but never fail the summary.
#[must_use]
pub fn summarize(records: &[TechnicalInspection], now: DateTime<Utc>) -> InspectionHistory {
    let mut counts = StatusCounts::default();
    let mut critical = false;
    let cutoff = now - Duration::days(CRITICAL_WINDOW_DAYS);

    for record in records {
        match record.inspection_status() {
            Ok(InspectionStatus::Pending) => counts.pending += 1,
            Ok(InspectionStatus::Approved) => counts.approved += 1,
            Ok(InspectionStatus::Conditional) => counts.conditional += 1,
            Ok(InspectionStatus::Rejected) => {
                counts.rejected += 1;
                if record.inspected_at >= cutoff {
                    critical = true;
                }
            }
            Err(_) => {}
        }
    }

    let latest = records
        .iter()
        .max_by_key(|r| r.inspected_at)
        .cloned();

    InspectionHistory {
        latest,
        counts,
        critical,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use uuid::Uuid;

    fn inspection(status: &str, inspected_at: DateTime<Utc>) -> TechnicalInspection {
        TechnicalInspection {
            inspection_id: Uuid::new_v4(),
            event_id: Uuid::new_v4(),
            club_id: Uuid::new_v4(),
            start_number: 7,
            chassis_number: Some(String::from("CH-123")),
            license_plate: None,
            make: Some(String::from("Kart")),
            model: None,
            year: None,
            status: status.to_string(),
            notes: None,
            inspector_id: Uuid::new_v4(),
            inspected_at,
        }
    }

    fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_empty_history() {
        let history = summarize(&[], at(2026, 8, 1));
        assert!(history.latest.is_none());
        assert_eq!(history.counts, StatusCounts::default());
        assert!(!history.critical);
    }

    #[test]
    fn test_counts_and_latest() {
        let records = vec![
            inspection("APPROVED", at(2025, 3, 1)),
            inspection("CONDITIONAL", at(2025, 9, 1)),
            inspection("APPROVED", at(2026, 4, 1)),
        ];

        let history = summarize(&records, at(2026, 8, 1));
        assert_eq!(history.counts.approved, 2);
        assert_eq!(history.counts.conditional, 1);
        assert_eq!(history.counts.rejected, 0);
        assert_eq!(history.latest.unwrap().inspected_at, at(2026, 4, 1));
        assert!(!history.critical);
    }

    #[test]
    fn test_recent_rejection_is_critical() {
        let records = vec![
            inspection("REJECTED", at(2026, 2, 1)),
            inspection("APPROVED", at(2026, 4, 1)),
        ];

        let history = summarize(&records, at(2026, 8, 1));
        assert_eq!(history.counts.rejected, 1);
        assert!(history.critical);
    }

    #[test]
    fn test_old_rejection_is_not_critical() {
        let records = vec![inspection("REJECTED", at(2024, 1, 1))];

        let history = summarize(&records, at(2026, 8, 1));
        assert_eq!(history.counts.rejected, 1);
        assert!(!history.critical);
    }

    #[test]
    fn test_rejection_on_window_boundary_is_critical() {
        let now = at(2026, 8, 1);
        let boundary = now - Duration::days(CRITICAL_WINDOW_DAYS);
        let history = summarize(&[inspection("REJECTED", boundary)], now);
        assert!(history.critical);
    }
}
