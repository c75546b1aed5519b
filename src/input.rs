//! Turns loosely shaped report records (JSON exports, CSV files, database rows)
//! into [`Report`] values with a normalized defect list.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::error::{PriorityError, Result};
use crate::models::Report;

/// Accepts `defects` as an array of labels or a comma-joined string. Anything
/// else yields an empty list.
pub fn normalize_defects(value: &Value) -> Vec<String> {
    match value {
        Value::String(joined) => split_labels(joined),
        Value::Array(items) => items
            .iter()
            .filter_map(Value::as_str)
            .map(str::trim)
            .filter(|label| !label.is_empty())
            .map(str::to_string)
            .collect(),
        Value::Null => Vec::new(),
        other => {
            warn!(value = %other, "unrecognized defects value, treating as empty");
            Vec::new()
        }
    }
}

fn split_labels(joined: &str) -> Vec<String> {
    joined
        .split(',')
        .map(str::trim)
        .filter(|label| !label.is_empty())
        .map(str::to_string)
        .collect()
}

fn new_import_id() -> String {
    format!("import-{}", Uuid::new_v4())
}

/// Non-string road types are dropped, which later scores them as unclassified.
pub fn normalize_road_type(value: &Value) -> Option<String> {
    match value {
        Value::String(label) if !label.trim().is_empty() => Some(label.clone()),
        Value::String(_) | Value::Null => None,
        other => {
            warn!(value = %other, "unrecognized road type, treating as unclassified");
            None
        }
    }
}

/// Positive integer counts are kept; anything else counts as one report.
pub fn normalize_report_count(value: &Value) -> u32 {
    let count = match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse::<u64>().ok(),
        _ => None,
    };
    match count {
        Some(n) => clamp_count(n),
        None => {
            if !value.is_null() {
                warn!(value = %value, "unrecognized report count, counting as 1");
            }
            1
        }
    }
}

fn clamp_count(count: u64) -> u32 {
    u32::try_from(count).unwrap_or(u32::MAX).max(1)
}

fn parse_created_at(raw: &str) -> Option<DateTime<Utc>> {
    match DateTime::parse_from_rfc3339(raw.trim()) {
        Ok(parsed) => Some(parsed.with_timezone(&Utc)),
        Err(e) => {
            warn!(value = %raw, "unparsable created_at ({e}), treating as undated");
            None
        }
    }
}

/// Accepts RFC 3339 timestamps only; anything else is treated as undated.
pub fn normalize_created_at(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::Null => None,
        Value::String(raw) => parse_created_at(raw),
        other => {
            warn!(value = %other, "unrecognized created_at, treating as undated");
            None
        }
    }
}

#[derive(Debug, Deserialize)]
struct JsonReport {
    #[serde(default)]
    id: Option<Value>,
    #[serde(alias = "roadName", alias = "road_name", alias = "roadIdentity", alias = "road")]
    road_identity: String,
    #[serde(default, alias = "roadType", alias = "road_type")]
    road_type: Value,
    #[serde(default)]
    defects: Value,
    #[serde(default, alias = "reportCount")]
    report_count: Value,
    #[serde(default, alias = "createdAt")]
    created_at: Value,
}

impl From<JsonReport> for Report {
    fn from(raw: JsonReport) -> Self {
        let id = match raw.id {
            Some(Value::String(id)) => id,
            Some(Value::Number(id)) => id.to_string(),
            _ => new_import_id(),
        };
        Report {
            id,
            road_identity: raw.road_identity,
            road_type: normalize_road_type(&raw.road_type),
            defects: normalize_defects(&raw.defects),
            report_count: normalize_report_count(&raw.report_count),
            created_at: normalize_created_at(&raw.created_at),
        }
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

pub fn parse_json(text: &str) -> Result<Vec<Report>> {
    let value: Value = serde_json::from_str(text)?;
    let Value::Array(items) = value else {
        return Err(PriorityError::NotASequence {
            found: kind_of(&value),
        });
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            serde_json::from_value::<JsonReport>(item)
                .map(Report::from)
                .map_err(|source| PriorityError::MalformedReport { index, source })
        })
        .collect()
}

pub fn load_json(path: &Path) -> Result<Vec<Report>> {
    let text = std::fs::read_to_string(path)?;
    parse_json(&text)
}

#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(default)]
    id: Option<String>,
    road_name: String,
    #[serde(default)]
    road_type: Option<String>,
    #[serde(default)]
    defects: Option<String>,
    #[serde(default)]
    report_count: Option<String>,
    #[serde(default)]
    created_at: Option<String>,
}

pub fn read_csv<R: std::io::Read>(reader: R) -> Result<Vec<Report>> {
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut reports = Vec::new();

    for result in reader.deserialize::<CsvRow>() {
        let row = result?;
        reports.push(Report {
            id: row
                .id
                .filter(|id| !id.is_empty())
                .unwrap_or_else(new_import_id),
            road_identity: row.road_name,
            road_type: row.road_type.filter(|t| !t.is_empty()),
            defects: row.defects.as_deref().map(split_labels).unwrap_or_default(),
            report_count: row
                .report_count
                .and_then(|count| count.parse::<u64>().ok())
                .map_or(1, clamp_count),
            created_at: row.created_at.as_deref().and_then(parse_created_at),
        });
    }

    Ok(reports)
}

pub fn load_csv(path: &Path) -> Result<Vec<Report>> {
    let file = std::fs::File::open(path)?;
    read_csv(file)
}

/// Loads a report snapshot, choosing the format from the file extension.
pub fn load_reports(path: &Path) -> Result<Vec<Report>> {
    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let reports = if is_json {
        load_json(path)?
    } else {
        load_csv(path)?
    };
    debug!(count = reports.len(), path = %path.display(), "loaded reports");
    Ok(reports)
}
