use deadpool_postgres::Pool;
use crate::error::Result;

/// Returns whether a post with the given id exists.
///
/// Posts are owned by another service; this backend only checks for them.
pub async fn post_exists(pool: &Pool, post_id: i64) -> Result<bool> {
    let client = pool.get().await?;
    let row = client
        .query_opt(
            r#"
            SELECT id
            FROM posts
            WHERE id = $1
            "#,
            &[&post_id],
        )
        .await?;
    Ok(row.is_some())
}
