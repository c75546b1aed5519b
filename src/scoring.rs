use std::collections::HashSet;

use serde::Serialize;

use crate::catalog::{self, RoadClass, DEFAULT_RESPONSE_DAYS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreBreakdown {
    pub rts: u32,
    pub rds: u32,
    pub rfs: u32,
    pub severity: u32,
}

/// Computes RTS, RDS and RFS for a road and combines them as
/// `round(RTS * 0.40 + RDS * 0.50 + RFS * 0.10)`.
///
/// The weighted sum is kept in integer tenths and rounded half-up, so equal
/// inputs always produce the same score. Defects are deduplicated here as well,
/// so callers may pass a raw list.
pub fn breakdown<S: AsRef<str>>(
    road_type: Option<&str>,
    defects: &[S],
    report_count: u32,
) -> ScoreBreakdown {
    let rts = RoadClass::from_label(road_type).weight();

    let mut seen = HashSet::new();
    let rds: u32 = defects
        .iter()
        .map(|label| label.as_ref().trim())
        .filter(|label| seen.insert(*label))
        .filter_map(catalog::response_days)
        .map(catalog::defect_score)
        .sum();

    let rfs = catalog::frequency_score(report_count);

    let tenths = rts * 4 + rds * 5 + rfs;
    ScoreBreakdown {
        rts,
        rds,
        rfs,
        severity: (tenths + 5) / 10,
    }
}

pub fn severity_score<S: AsRef<str>>(
    road_type: Option<&str>,
    unique_defects: &[S],
    report_count: u32,
) -> u32 {
    breakdown(road_type, unique_defects, report_count).severity
}

/// Total response time for a set of defects; unrecognized labels add nothing
/// and a list with no recognized label costs the default seven days.
pub fn response_days_for<S: AsRef<str>>(defects: &[S]) -> u32 {
    let mut seen = HashSet::new();
    let total: u32 = defects
        .iter()
        .map(|label| label.as_ref().trim())
        .filter(|label| seen.insert(*label))
        .filter_map(catalog::response_days)
        .sum();

    if total == 0 {
        DEFAULT_RESPONSE_DAYS
    } else {
        total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scores_follow_weighted_formula() {
        let main_st = breakdown(Some("municipal"), &["Potholes", "Cracks"], 2);
        assert_eq!(main_st.rts, 75);
        assert_eq!(main_st.rds, 40);
        assert_eq!(main_st.rfs, 10);
        assert_eq!(main_st.severity, 51);

        let highway = breakdown(Some("national road"), &["Open Manhole"], 1);
        assert_eq!(highway.rds, 60);
        assert_eq!(highway.severity, 71);
    }

    #[test]
    fn zero_defects_still_scored() {
        // 50 * 0.4 + 0 + 10 * 0.1 = 21
        assert_eq!(severity_score::<&str>(None, &[], 1), 21);
        // 25 * 0.4 + 0 + 10 * 0.1 = 11
        assert_eq!(severity_score::<&str>(Some("bypass road"), &[], 3), 11);
    }

    #[test]
    fn combines_components_for_other_road_classes() {
        // 25 * 0.4 + 20 * 0.5 + 20 * 0.1
        assert_eq!(severity_score(Some("bypass road"), &["Potholes"], 15), 22);
        // 60 * 0.4 + 20 * 0.5 + 10 * 0.1
        assert_eq!(severity_score(Some("provincial"), &["Cracks"], 1), 35);
        // 50 * 0.4 + 40 * 0.5 + 50 * 0.1
        assert_eq!(severity_score(Some("barangay road"), &["Raveling"], 45), 45);
        // 100 * 0.4 + (100 + 100) * 0.5 + 100 * 0.1
        assert_eq!(
            severity_score(
                Some("national road"),
                &["Major Scaling", "Pumping and Depression"],
                200
            ),
            150
        );
    }

    #[test]
    fn unknown_defects_contribute_nothing() {
        let with_unknown = severity_score(Some("municipal"), &["Potholes", "Sinkhole"], 1);
        let without = severity_score(Some("municipal"), &["Potholes"], 1);
        assert_eq!(with_unknown, without);
    }

    #[test]
    fn duplicate_defects_counted_once() {
        let once = breakdown(Some("municipal"), &["Potholes"], 3);
        let thrice = breakdown(Some("municipal"), &["Potholes", "Potholes", "Potholes"], 3);
        assert_eq!(once, thrice);
    }

    #[test]
    fn monotonic_in_report_count_and_defects() {
        let defects = ["Potholes", "Major Scaling"];
        let mut previous = 0;
        for count in 1..=120 {
            let score = severity_score(Some("barangay road"), &defects, count);
            assert!(score >= previous);
            previous = score;
        }

        let fewer = severity_score(Some("barangay road"), &["Potholes"], 5);
        let more = severity_score(Some("barangay road"), &["Potholes", "Raveling"], 5);
        assert!(more >= fewer);
    }

    #[test]
    fn response_days_default_to_a_week() {
        assert_eq!(response_days_for::<&str>(&[]), 7);
        assert_eq!(response_days_for(&["Sinkhole"]), 7);
        assert_eq!(response_days_for(&["Potholes", "Open Manhole"]), 13);
        assert_eq!(response_days_for(&["Potholes", "Potholes"]), 3);
    }
}
