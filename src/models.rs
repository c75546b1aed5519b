use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

/// One citizen submission, with `defects` already normalized to a list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub id: String,
    pub road_identity: String,
    pub road_type: Option<String>,
    pub defects: Vec<String>,
    /// Submissions already merged into this record; at least 1.
    pub report_count: u32,
    pub created_at: Option<DateTime<Utc>>,
}

impl Report {
    pub fn new(road_identity: &str, road_type: Option<&str>, defects: &[&str]) -> Self {
        Self {
            id: String::new(),
            road_identity: road_identity.to_string(),
            road_type: road_type.map(str::to_string),
            defects: defects.iter().map(|d| d.to_string()).collect(),
            report_count: 1,
            created_at: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregatedRoad {
    pub road_identity: String,
    pub road_type: Option<String>,
    pub unique_defects: Vec<String>,
    pub report_count: u32,
    pub severity_score: u32,
    pub response_days: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetSelection {
    pub selected: Vec<AggregatedRoad>,
    pub total_score: u32,
    pub total_days: u32,
    pub day_budget: i64,
}

impl BudgetSelection {
    pub fn empty(day_budget: i64) -> Self {
        Self {
            selected: Vec::new(),
            total_score: 0,
            total_days: 0,
            day_budget,
        }
    }

    /// Share of the budget consumed, in percent.
    pub fn utilization(&self) -> f64 {
        if self.day_budget <= 0 {
            return 0.0;
        }
        self.total_days as f64 / self.day_budget as f64 * 100.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleEntry {
    pub road_identity: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub duration_days: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DefectCount {
    pub label: String,
    pub count: usize,
    pub response_days: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportStats {
    pub total_reports: usize,
    pub total_roads: usize,
    pub average_response_days: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    pub ranked: Vec<AggregatedRoad>,
    pub plan: Option<BudgetSelection>,
}
