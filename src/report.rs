use std::fmt::Write;

use chrono::NaiveDate;

use crate::analysis;
use crate::catalog::RoadClass;
use crate::models::{Analysis, Report};
use crate::schedule;
use crate::scoring;

pub fn build_report(
    scope: Option<&str>,
    analysis: &Analysis,
    reports: &[Report],
    start: NaiveDate,
) -> String {
    let stats = analysis::report_stats(reports, &analysis.ranked);
    let mix = analysis::defect_mix(reports);

    let mut output = String::new();
    let scope_label = scope.unwrap_or("all reports");

    let _ = writeln!(output, "# Road Maintenance Priority Report");
    let _ = writeln!(output, "Generated for {} (plan starting {})", scope_label, start);
    let _ = writeln!(output);
    let _ = writeln!(output, "## Summary");
    let _ = writeln!(output, "- Reports: {}", stats.total_reports);
    let _ = writeln!(output, "- Roads: {}", stats.total_roads);
    let _ = writeln!(
        output,
        "- Average response time: {} days",
        stats.average_response_days
    );

    let _ = writeln!(output);
    let _ = writeln!(output, "## Defect Mix");

    if mix.is_empty() {
        let _ = writeln!(output, "No defects reported.");
    } else {
        for defect in mix.iter() {
            let days = defect
                .response_days
                .map_or_else(|| "not in catalog".to_string(), |d| format!("{d} days"));
            let _ = writeln!(output, "- {}: {} reports ({})", defect.label, defect.count, days);
        }
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## Most Reported Roads");

    let leaders = analysis::most_reported(&analysis.ranked, 5);
    if leaders.is_empty() {
        let _ = writeln!(output, "No roads reported.");
    } else {
        for (rank, road) in leaders.iter().enumerate() {
            let _ = writeln!(
                output,
                "{}. {}: {} reports",
                rank + 1,
                road.road_identity,
                road.report_count
            );
        }
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## Maintenance Queue");

    if analysis.ranked.is_empty() {
        let _ = writeln!(output, "No roads to prioritize.");
    } else {
        let _ = writeln!(
            output,
            "| Rank | Road | Type | RTS | RDS | RFS | Score | Days | Reports |"
        );
        let _ = writeln!(output, "|---|---|---|---|---|---|---|---|---|");
        for (rank, road) in analysis.ranked.iter().enumerate() {
            let parts = scoring::breakdown(
                road.road_type.as_deref(),
                &road.unique_defects,
                road.report_count,
            );
            let _ = writeln!(
                output,
                "| {} | {} | {} | {} | {} | {} | {} | {} | {} |",
                rank + 1,
                road.road_identity,
                RoadClass::from_label(road.road_type.as_deref()).as_str(),
                parts.rts,
                parts.rds,
                parts.rfs,
                road.severity_score,
                road.response_days,
                road.report_count
            );
        }
    }

    if let Some(plan) = &analysis.plan {
        let _ = writeln!(output);
        let _ = writeln!(output, "## Budget Plan");
        let _ = writeln!(
            output,
            "Total severity {} using {} of {} days ({:.1}% of budget)",
            plan.total_score,
            plan.total_days,
            plan.day_budget,
            plan.utilization()
        );

        if plan.selected.is_empty() {
            let _ = writeln!(output, "No roads fit within the budget.");
        } else {
            for road in plan.selected.iter() {
                let _ = writeln!(
                    output,
                    "- {} (score {}, {} days): {}",
                    road.road_identity,
                    road.severity_score,
                    road.response_days,
                    road.unique_defects.join(", ")
                );
            }

            let _ = writeln!(output);
            let _ = writeln!(output, "## Schedule");
            for entry in schedule::build_schedule(&plan.selected, start) {
                let _ = writeln!(
                    output,
                    "- {}: {} to {} ({} days)",
                    entry.road_identity, entry.start, entry.end, entry.duration_days
                );
            }
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario() -> Vec<Report> {
        vec![
            Report::new("Main St", Some("municipal"), &["Potholes"]),
            Report::new("Main St", Some("municipal"), &["Potholes", "Cracks"]),
            Report::new("Highway 1", Some("national road"), &["Open Manhole"]),
        ]
    }

    #[test]
    fn report_lists_queue_plan_and_schedule() {
        let reports = scenario();
        let analysis = analysis::analyze(&reports, Some(180));
        let start = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        let report = build_report(Some("District 1"), &analysis, &reports, start);

        assert!(report.contains("Generated for District 1 (plan starting 2026-03-01)"));
        assert!(report.contains("- Potholes: 2 reports (3 days)"));
        assert!(report.contains("## Most Reported Roads\n1. Main St: 2 reports\n2. Highway 1: 1 reports\n"));
        assert!(report.contains("| 1 | Highway 1 | national road | 100 | 60 | 10 | 71 | 10 | 1 |"));
        assert!(report.contains("| 2 | Main St | municipal | 75 | 40 | 10 | 51 | 6 | 2 |"));
        assert!(report.contains("Total severity 122 using 16 of 180 days"));
        assert!(report.contains("- Highway 1: 2026-03-01 to 2026-03-11 (10 days)"));
        assert!(report.contains("- Main St: 2026-03-12 to 2026-03-18 (6 days)"));
    }

    #[test]
    fn empty_report_has_placeholders() {
        let analysis = analysis::analyze(&[], None);
        let start = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        let report = build_report(None, &analysis, &[], start);

        assert!(report.contains("Generated for all reports"));
        assert!(report.contains("No defects reported."));
        assert!(report.contains("No roads reported."));
        assert!(report.contains("No roads to prioritize."));
        assert!(!report.contains("## Budget Plan"));
    }
}
