use chrono::{Duration, NaiveDate};

use crate::models::{AggregatedRoad, ScheduleEntry};

/// Lays roads out back to back starting on `start`. Each job ends
/// `response_days` after it starts and the next one begins the following day.
pub fn build_schedule(roads: &[AggregatedRoad], start: NaiveDate) -> Vec<ScheduleEntry> {
    let mut current = start;
    let mut entries = Vec::with_capacity(roads.len());

    for road in roads {
        let end = current + Duration::days(i64::from(road.response_days));
        entries.push(ScheduleEntry {
            road_identity: road.road_identity.clone(),
            start: current,
            end,
            duration_days: road.response_days,
        });
        current = end + Duration::days(1);
    }

    entries
}
