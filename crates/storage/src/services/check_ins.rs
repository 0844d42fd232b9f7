//! Check-in dashboard aggregation.

use crate::models::CheckInOutcome;

/// Bucketed check-in progress for an event. `pending` is whatever part of
/// the field has not been processed yet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CheckInSummary {
    pub total: i64,
    pub checked_in: i64,
    pub issues: i64,
    pub dns: i64,
    pub pending: i64,
}

/// `total` is the number of active registrations; `outcomes` the recorded
/// check-ins for them.
#[must_use]
pub fn summarize(total: i64, outcomes: &[CheckInOutcome]) -> CheckInSummary {
    let mut summary = CheckInSummary {
        total,
        ..CheckInSummary::default()
    };

    for outcome in outcomes {
        match outcome {
            CheckInOutcome::Ok => summary.checked_in += 1,
            CheckInOutcome::NotOk => summary.issues += 1,
            CheckInOutcome::Dns => summary.dns += 1,
        }
    }

    summary.pending = (total - outcomes.len() as i64).max(0);
    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_field() {
        let summary = summarize(0, &[]);
        assert_eq!(summary, CheckInSummary::default());
    }

    #[test]
    fn test_buckets_and_pending() {
        let outcomes = [
            CheckInOutcome::Ok,
            CheckInOutcome::Ok,
            CheckInOutcome::NotOk,
            CheckInOutcome::Dns,
        ];

        let summary = summarize(10, &outcomes);
        assert_eq!(summary.total, 10);
        assert_eq!(summary.checked_in, 2);
        assert_eq!(summary.issues, 1);
        assert_eq!(summary.dns, 1);
        assert_eq!(summary.pending, 6);
    }

    #[test]
    fn test_fully_processed() {
        let outcomes = [CheckInOutcome::Ok, CheckInOutcome::Dns];
        let summary = summarize(2, &outcomes);
        assert_eq!(summary.pending, 0);
    }
}
