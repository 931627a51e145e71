use chrono::{DateTime, Utc};

/// A content report filed against a post.
///
/// Immutable once inserted; review happens elsewhere.
#[derive(Debug, Clone)]
pub struct ContentReport {
    /// The unique identifier for the report.
    pub id: i64,
    /// The reported post.
    pub post_id: i64,
    /// The timestamp when the report was filed.
    pub reported_at: DateTime<Utc>,
    /// The user who filed the report.
    pub reported_by: i64,
    /// The report category.
    pub report_type_id: i64,
    /// The reporter's description.
    pub description: String,
    /// Whether a moderator has reviewed the report.
    pub reviewed: bool,
}

/// A selectable report category.
#[derive(Debug, Clone)]
pub struct ReportType {
    /// The unique identifier for the report type.
    pub id: i64,
    /// The display name.
    pub name: String,
}
