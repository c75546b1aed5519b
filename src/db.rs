use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row};

use road_maintenance_priority::input::normalize_defects;
use road_maintenance_priority::models::Report;

/// Reads the full report snapshot from the `reports` table.
pub async fn fetch_reports(pool: &PgPool) -> anyhow::Result<Vec<Report>> {
    let records = sqlx::query(
        "SELECT id::text AS id, road_name, road_type, \
         to_jsonb(defects) AS defects, created_at \
         FROM reports \
         WHERE road_name IS NOT NULL \
         ORDER BY created_at, id",
    )
    .fetch_all(pool)
    .await?;
    let mut reports = Vec::with_capacity(records.len());

    for row in records {
        let defects: Option<serde_json::Value> = row.try_get("defects")?;
        let road_type: Option<String> = row.try_get("road_type")?;
        reports.push(Report {
            id: row.try_get("id")?,
            road_identity: row.try_get("road_name")?,
            road_type: road_type.filter(|t| !t.trim().is_empty()),
            defects: defects.as_ref().map(normalize_defects).unwrap_or_default(),
            report_count: 1,
            created_at: row.try_get::<Option<DateTime<Utc>>, _>("created_at")?,
        });
    }

    Ok(reports)
}
