//! Start-list readiness classification.
//!
//! Readiness is computed, never stored: it is a pure function of the
//! participant's check-in outcome and latest inspection status and is
//! recomputed on every request.

use crate::models::{CheckInOutcome, InspectionStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Readiness {
    /// Checked in and inspection approved.
    Ready,
    /// Checked in, inspection missing or not approved.
    PendingTechnical,
    /// Inspection approved, not checked in.
    PendingCheckin,
    /// Neither condition met.
    NotReady,
}

impl Readiness {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ready => "READY",
            Self::PendingTechnical => "PENDING_TECHNICAL",
            Self::PendingCheckin => "PENDING_CHECKIN",
            Self::NotReady => "NOT_READY",
        }
    }
}

/// Classifies one participant. Only an `OK` check-in counts as present;
/// `NOT_OK` and `DNS` leave the participant outside the checked-in set.
#[must_use]
pub fn classify(
    check_in: Option<CheckInOutcome>,
    inspection: Option<InspectionStatus>,
) -> Readiness {
    let checked_in = matches!(check_in, Some(CheckInOutcome::Ok));
    let approved = matches!(inspection, Some(InspectionStatus::Approved));

    match (checked_in, approved) {
        (true, true) => Readiness::Ready,
        (true, false) => Readiness::PendingTechnical,
        (false, true) => Readiness::PendingCheckin,
        (false, false) => Readiness::NotReady,
    }
}

/// Readiness counts over a whole start list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReadinessCounts {
    pub ready: i64,
    pub pending_technical: i64,
    pub pending_checkin: i64,
    pub not_ready: i64,
}

#[must_use]
pub fn count_readiness(entries: &[Readiness]) -> ReadinessCounts {
    let mut counts = ReadinessCounts::default();

    for entry in entries {
        match entry {
            Readiness::Ready => counts.ready += 1,
            Readiness::PendingTechnical => counts.pending_technical += 1,
            Readiness::PendingCheckin => counts.pending_checkin += 1,
            Readiness::NotReady => counts.not_ready += 1,
        }
    }

    counts
}

/// Participant counts per class name, ordered by class name.
#[must_use]
pub fn count_per_class(class_names: &[String]) -> Vec<(String, i64)> {
    let mut counts: Vec<(String, i64)> = Vec::new();

    for name in class_names {
        match counts.iter_mut().find(|(n, _)| n == name) {
            Some((_, count)) => *count += 1,
            None => counts.push((name.clone(), 1)),
        }
    }

    counts.sort_by(|a, b| a.0.cmp(&b.0));
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ready_requires_ok_and_approved() {
        assert_eq!(
            classify(Some(CheckInOutcome::Ok), Some(InspectionStatus::Approved)),
            Readiness::Ready
        );
    }

    #[test]
    fn test_checked_in_pending_inspection() {
        assert_eq!(
            classify(Some(CheckInOutcome::Ok), Some(InspectionStatus::Pending)),
            Readiness::PendingTechnical
        );
        assert_eq!(
            classify(Some(CheckInOutcome::Ok), None),
            Readiness::PendingTechnical
        );
        assert_eq!(
            classify(Some(CheckInOutcome::Ok), Some(InspectionStatus::Conditional)),
            Readiness::PendingTechnical
        );
    }

    #[test]
    fn test_approved_but_not_checked_in() {
        assert_eq!(
            classify(None, Some(InspectionStatus::Approved)),
            Readiness::PendingCheckin
        );
        // NOT_OK and DNS are processed but not present.
        assert_eq!(
            classify(Some(CheckInOutcome::Dns), Some(InspectionStatus::Approved)),
            Readiness::PendingCheckin
        );
    }

    #[test]
    fn test_neither_condition() {
        assert_eq!(classify(None, None), Readiness::NotReady);
        assert_eq!(
            classify(Some(CheckInOutcome::NotOk), Some(InspectionStatus::Rejected)),
            Readiness::NotReady
        );
    }

    #[test]
    fn test_count_readiness() {
        let entries = [
            Readiness::Ready,
            Readiness::Ready,
            Readiness::PendingTechnical,
            Readiness::PendingCheckin,
            Readiness::NotReady,
        ];

        let counts = count_readiness(&entries);
        assert_eq!(counts.ready, 2);
        assert_eq!(counts.pending_technical, 1);
        assert_eq!(counts.pending_checkin, 1);
        assert_eq!(counts.not_ready, 1);
    }

    #[test]
    fn test_count_per_class() {
        let names = [
            String::from("Junior 125"),
            String::from("Open"),
            String::from("Junior 125"),
        ];

        let counts = count_per_class(&names);
        assert_eq!(
            counts,
            vec![(String::from("Junior 125"), 2), (String::from("Open"), 1)]
        );
    }
}
