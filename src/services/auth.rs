use crate::crypto::token;
use crate::error::Result;
use crate::models::session::Session;
use crate::repositories::session as session_repo;
use crate::repositories::user as user_repo;
use crate::state::AppState;

/// Authenticates a user and opens a session for them.
///
/// Returns `None` when the username is unknown or the password does not
/// match; callers cannot tell the two apart.
///
/// # Arguments
///
/// * `state` - The application state.
/// * `username` - The claimed username.
/// * `password` - The plaintext password, verified against the stored
///   derived secret and never persisted.
/// * `origin_ip` - The address the request arrived from.
///
/// # Returns
///
/// A `Result` containing the new `Session` on success.
pub async fn login(
    state: &AppState,
    username: &str,
    password: &str,
    origin_ip: &str,
) -> Result<Option<Session>> {
    tracing::debug!("🔐 Login attempt for username: {}", username);

    let Some(user) = user_repo::find_by_username(&state.db, username).await? else {
        tracing::debug!("Login failed: unknown username");
        return Ok(None);
    };

    if !state.secrets.verify(password, &user.password)? {
        tracing::debug!("Login failed: wrong password for user {}", user.id);
        return Ok(None);
    }

    let token = token::mint_session_token();
    let session = session_repo::create(&state.db, user.id, &token, origin_ip).await?;

    tracing::info!("✅ User {} logged in, session {}", user.id, session.id);
    Ok(Some(session))
}

/// Closes a session.
///
/// Both the id and the token must match; returns whether a session was
/// actually destroyed.
pub async fn logout(state: &AppState, session_id: i64, token: &str) -> Result<bool> {
    let destroyed = session_repo::destroy(&state.db, session_id, token).await?;

    if destroyed {
        tracing::info!("✅ Session {} destroyed", session_id);
    } else {
        tracing::debug!("Logout matched no session for id {}", session_id);
    }

    Ok(destroyed)
}
