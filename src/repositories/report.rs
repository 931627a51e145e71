use chrono::{DateTime, Utc};
use deadpool_postgres::Pool;
use tokio_postgres::Row;
use crate::{
    error::Result,
    models::report::{ContentReport, ReportType},
};

/// A helper function to map a `tokio_postgres::Row` to a `ContentReport`.
fn row_to_report(row: &Row) -> Result<ContentReport> {
    Ok(ContentReport {
        id: row.try_get("id")?,
        post_id: row.try_get("post_id")?,
        reported_at: row.try_get("reported_at")?,
        reported_by: row.try_get("reported_by")?,
        report_type_id: row.try_get("report_type_id")?,
        description: row.try_get("description")?,
        reviewed: row.try_get("reviewed")?,
    })
}

/// Inserts a new content report. Reports start unreviewed.
pub async fn insert_report(
    pool: &Pool,
    post_id: i64,
    reported_at: DateTime<Utc>,
    reported_by: i64,
    report_type_id: i64,
    description: &str,
) -> Result<ContentReport> {
    let client = pool.get().await?;
    let row = client
        .query_one(
            r#"
            INSERT INTO content_reports (post_id, reported_at, reported_by, report_type_id, description, reviewed)
            VALUES ($1, $2, $3, $4, $5, false)
            RETURNING id, post_id, reported_at, reported_by, report_type_id, description, reviewed
            "#,
            &[&post_id, &reported_at, &reported_by, &report_type_id, &description],
        )
        .await?;
    row_to_report(&row)
}

/// Returns whether a report type with the given id exists.
pub async fn report_type_exists(pool: &Pool, report_type_id: i64) -> Result<bool> {
    let client = pool.get().await?;
    let row = client
        .query_opt(
            r#"
            SELECT id
            FROM report_types
            WHERE id = $1
            "#,
            &[&report_type_id],
        )
        .await?;
    Ok(row.is_some())
}

/// Lists every report type, ordered by name ascending.
pub async fn list_report_types(pool: &Pool) -> Result<Vec<ReportType>> {
    let client = pool.get().await?;
    let rows = client
        .query(
            r#"
            SELECT id, name
            FROM report_types
            ORDER BY name ASC
            "#,
            &[],
        )
        .await?;
    rows.iter()
        .map(|row| {
            Ok(ReportType {
                id: row.try_get("id")?,
                name: row.try_get("name")?,
            })
        })
        .collect()
}
