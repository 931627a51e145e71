use axum::{
    extract::{ConnectInfo, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use std::net::SocketAddr;

use crate::{
    error::Result,
    services::auth as auth_service,
    state::AppState,
};

/// The query parameters for login.
#[derive(Deserialize, Debug)]
pub struct LoginQuery {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// The query parameters for logout.
#[derive(Deserialize, Debug)]
pub struct LogoutQuery {
    pub session_id: Option<String>,
    pub token: Option<String>,
}

/// Handles `GET /session/login`.
///
/// The (session_id, token) pair in the success body is the bearer credential
/// for every protected call that follows.
#[axum::debug_handler]
pub async fn login(
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    Query(query): Query<LoginQuery>,
) -> Result<Response> {
    let (Some(username), Some(password)) = (query.username, query.password) else {
        let body = sonic_rs::to_string(&sonic_rs::json!({
            "success": 0,
            "error": "username and password are required"
        }))
        .unwrap();
        return Ok((StatusCode::OK, body).into_response());
    };

    let origin_ip = addr.ip().to_string();

    let body = match auth_service::login(&state, &username, &password, &origin_ip).await? {
        Some(session) => sonic_rs::to_string(&sonic_rs::json!({
            "success": 1,
            "session_id": session.id,
            "token": session.token
        }))
        .unwrap(),
        // Bad credentials stay a 200 "false success" for compatibility with
        // existing clients.
        None => r#"{"success":0}"#.to_string(),
    };

    Ok((StatusCode::OK, body).into_response())
}

/// Handles `GET /session/logout`.
#[axum::debug_handler]
pub async fn logout(
    State(state): State<AppState>,
    Query(query): Query<LogoutQuery>,
) -> Result<Response> {
    let (Some(session_id), Some(token)) = (query.session_id, query.token) else {
        let body = sonic_rs::to_string(&sonic_rs::json!({
            "success": 0,
            "error": "session_id and token are required"
        }))
        .unwrap();
        return Ok((StatusCode::OK, body).into_response());
    };

    let destroyed = match session_id.parse::<i64>() {
        Ok(id) => auth_service::logout(&state, id, &token).await?,
        Err(_) => false,
    };

    let body = if destroyed {
        r#"{"success":1}"#
    } else {
        r#"{"success":0}"#
    };

    Ok((StatusCode::OK, body).into_response())
}
