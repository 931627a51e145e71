use chrono::Utc;
use deadpool_postgres::Pool;
use tokio_postgres::Row;
use crate::{error::Result, models::session::Session};

/// A helper function to map a `tokio_postgres::Row` to a `Session`.
fn row_to_session(row: &Row) -> Result<Session> {
    Ok(Session {
        id: row.try_get("id")?,
        user_id: row.try_get("user_id")?,
        start_time: row.try_get("start_time")?,
        last_active: row.try_get("last_active")?,
        token: row.try_get("token")?,
        origin_ip: row.try_get("origin_ip")?,
    })
}

/// Creates a new session row and returns it, id and token included.
pub async fn create(pool: &Pool, user_id: i64, token: &str, origin_ip: &str) -> Result<Session> {
    let client = pool.get().await?;
    let now = Utc::now();
    let row = client
        .query_one(
            r#"
            INSERT INTO sessions (user_id, start_time, last_active, token, origin_ip)
            VALUES ($1, $2, $2, $3, $4)
            RETURNING id, user_id, start_time, last_active, token, origin_ip
            "#,
            &[&user_id, &now, &token, &origin_ip],
        )
        .await?;
    row_to_session(&row)
}

/// Looks up a session by id and token.
///
/// Succeeds only when both match exactly. Read-only; a miss is not an error.
pub async fn validate(pool: &Pool, session_id: i64, token: &str) -> Result<Option<Session>> {
    let client = pool.get().await?;
    let row = client
        .query_opt(
            r#"
            SELECT id, user_id, start_time, last_active, token, origin_ip
            FROM sessions
            WHERE id = $1 AND token = $2
            "#,
            &[&session_id, &token],
        )
        .await?;
    row.map(|r| row_to_session(&r)).transpose()
}

/// Deletes the session, but only if both id and token match.
///
/// A single statement, so two racing logouts cannot both succeed; the row
/// count tells the winner apart.
pub async fn destroy(pool: &Pool, session_id: i64, token: &str) -> Result<bool> {
    let client = pool.get().await?;
    let deleted = client
        .execute(
            r#"
            DELETE FROM sessions
            WHERE id = $1 AND token = $2
            "#,
            &[&session_id, &token],
        )
        .await?;
    Ok(deleted == 1)
}
