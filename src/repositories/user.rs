use deadpool_postgres::Pool;
use tokio_postgres::Row;
use crate::{error::Result, models::user::User};

/// A helper function to map a `tokio_postgres::Row` to a `User`.
fn row_to_user(row: &Row) -> Result<User> {
    Ok(User {
        id: row.try_get("id")?,
        username: row.try_get("username")?,
        password: row.try_get("password")?,
    })
}

/// Finds a user by their username.
pub async fn find_by_username(pool: &Pool, username: &str) -> Result<Option<User>> {
    let client = pool.get().await?;
    let row = client
        .query_opt(
            r#"
            SELECT id, username, password
            FROM users
            WHERE username = $1
            "#,
            &[&username],
        )
        .await?;
    row.map(|r| row_to_user(&r)).transpose()
}
