use std::collections::HashMap;

use chrono::{Duration, NaiveDate};
use tracing::debug;

use crate::aggregate::aggregate;
use crate::budget;
use crate::catalog;
use crate::models::{AggregatedRoad, Analysis, DefectCount, Report, ReportStats};
use crate::prioritize::sort_descending_by_severity;
use crate::scoring;

/// Runs one analysis pass over a report snapshot: aggregate, score, sort and,
/// when a budget is given, select a maintenance plan from the ranked roads.
pub fn analyze(reports: &[Report], day_budget: Option<i64>) -> Analysis {
    analyze_capped(reports, day_budget, budget::MAX_DAY_BUDGET)
}

pub fn analyze_capped(reports: &[Report], day_budget: Option<i64>, max_budget: i64) -> Analysis {
    let ranked = sort_descending_by_severity(aggregate(reports));

    let plan = day_budget.map(|days| {
        let mut plan = budget::select_capped(&ranked, days, max_budget);
        plan.selected = sort_descending_by_severity(plan.selected);
        plan
    });

    debug!(
        roads = ranked.len(),
        planned = plan.as_ref().map(|p| p.selected.len()),
        "analysis complete"
    );

    Analysis { ranked, plan }
}

pub fn report_stats(reports: &[Report], roads: &[AggregatedRoad]) -> ReportStats {
    let average_response_days = if reports.is_empty() {
        0
    } else {
        let total: u64 = reports
            .iter()
            .map(|report| u64::from(scoring::response_days_for(&report.defects)))
            .sum();
        (total as f64 / reports.len() as f64).round() as u32
    };

    ReportStats {
        total_reports: reports.len(),
        total_roads: roads.len(),
        average_response_days,
    }
}

/// Counts how often each defect label is reported, most frequent first.
pub fn defect_mix(reports: &[Report]) -> Vec<DefectCount> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for defect in reports.iter().flat_map(|report| report.defects.iter()) {
        *counts.entry(defect.as_str()).or_insert(0) += 1;
    }

    let mut mix: Vec<DefectCount> = counts
        .into_iter()
        .map(|(label, count)| DefectCount {
            label: label.to_string(),
            count,
            response_days: catalog::response_days(label),
        })
        .collect();

    mix.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.label.cmp(&b.label)));
    mix
}

/// Leaderboard of roads by number of reports.
pub fn most_reported(roads: &[AggregatedRoad], limit: usize) -> Vec<AggregatedRoad> {
    let mut leaders = roads.to_vec();
    leaders.sort_by(|a, b| {
        b.report_count
            .cmp(&a.report_count)
            .then_with(|| a.road_identity.cmp(&b.road_identity))
    });
    leaders.truncate(limit);
    leaders
}

/// Keeps reports created during the last `since_days` days before `today`
/// (at least one). Undated reports are kept.
pub fn within_window(reports: &[Report], since_days: i64, today: NaiveDate) -> Vec<Report> {
    let cutoff = today - Duration::days(since_days.max(1));
    reports
        .iter()
        .filter(|report| {
            report
                .created_at
                .map_or(true, |created| created.date_naive() >= cutoff)
        })
        .cloned()
        .collect()
}
