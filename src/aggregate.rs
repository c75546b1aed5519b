use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::models::{AggregatedRoad, Report};
use crate::scoring;

/// Groups reports by exact road identity and scores each group.
///
/// The first report seen for a road decides its road type. Defects are merged
/// without duplicates and report counts are summed. Roads come out in the order
/// their first report appears.
pub fn aggregate(reports: &[Report]) -> Vec<AggregatedRoad> {
    struct Acc {
        road_identity: String,
        road_type: Option<String>,
        defects: Vec<String>,
        seen: HashSet<String>,
        report_count: u32,
    }

    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<Acc> = Vec::new();

    for report in reports {
        let slot = *index.entry(report.road_identity.as_str()).or_insert_with(|| {
            groups.push(Acc {
                road_identity: report.road_identity.clone(),
                road_type: report.road_type.clone(),
                defects: Vec::new(),
                seen: HashSet::new(),
                report_count: 0,
            });
            groups.len() - 1
        });

        let acc = &mut groups[slot];
        acc.report_count = acc.report_count.saturating_add(report.report_count.max(1));
        for defect in &report.defects {
            if acc.seen.insert(defect.clone()) {
                acc.defects.push(defect.clone());
            }
        }
    }

    debug!(
        reports = reports.len(),
        roads = groups.len(),
        "aggregated reports by road"
    );

    groups
        .into_iter()
        .map(|acc| {
            let severity_score =
                scoring::severity_score(acc.road_type.as_deref(), &acc.defects, acc.report_count);
            let response_days = scoring::response_days_for(&acc.defects);
            AggregatedRoad {
                road_identity: acc.road_identity,
                road_type: acc.road_type,
                unique_defects: acc.defects,
                report_count: acc.report_count,
                severity_score,
                response_days,
            }
        })
        .collect()
}
