use chrono::Utc;
use crate::error::Result;
use crate::models::report::{ContentReport, ReportType};
use crate::repositories::report as report_repo;
use crate::state::AppState;

/// Files a content report against a post on behalf of a user.
pub async fn submit_report(
    state: &AppState,
    post_id: i64,
    reported_by: i64,
    report_type_id: i64,
    description: &str,
) -> Result<ContentReport> {
    let report = report_repo::insert_report(
        &state.db,
        post_id,
        Utc::now(),
        reported_by,
        report_type_id,
        description,
    )
    .await?;

    tracing::info!(
        "✅ Report {} filed against post {} by user {}",
        report.id,
        post_id,
        reported_by
    );
    Ok(report)
}

/// Lists the selectable report types, ordered by name.
pub async fn list_report_types(state: &AppState) -> Result<Vec<ReportType>> {
    report_repo::list_report_types(&state.db).await
}
