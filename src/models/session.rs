use chrono::{DateTime, Utc};

/// Represents a user session.
///
/// A session is valid only while a row with this exact (id, token) pair
/// exists in the store. Rows live until explicit logout; there is no expiry.
#[derive(Debug, Clone)]
pub struct Session {
    /// The store-assigned session identifier.
    pub id: i64,
    /// The ID of the user this session belongs to.
    pub user_id: i64,
    /// The timestamp when the session was created.
    pub start_time: DateTime<Utc>,
    /// The timestamp of the last activity, stamped at creation.
    pub last_active: DateTime<Utc>,
    /// The opaque bearer token paired with the session id.
    pub token: String,
    /// The IP address the session was opened from.
    pub origin_ip: String,
}
