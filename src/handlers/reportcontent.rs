use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::{
    error::Result,
    pipeline::report::{REPORT_PIPELINE, ReportContext, ReportRequest},
    pipeline::stage,
    services::reports as report_service,
    state::AppState,
};

/// Handles `POST /reportcontent/`.
///
/// The whole request runs through [`REPORT_PIPELINE`]; any guard abort
/// surfaces as the pipeline's error response and nothing is written.
#[axum::debug_handler]
pub async fn report_post(
    State(state): State<AppState>,
    Json(request): Json<ReportRequest>,
) -> Result<Response> {
    let ctx = ReportContext::new(state, request);
    stage::run(REPORT_PIPELINE, ctx).await?;

    Ok((StatusCode::OK, r#"{"success":true}"#).into_response())
}

/// Handles `GET /reportcontent/types`. No authentication required.
#[axum::debug_handler]
pub async fn list_types(State(state): State<AppState>) -> Result<Response> {
    let types = report_service::list_report_types(&state).await?;

    let report_types: Vec<_> = types
        .into_iter()
        .map(|t| sonic_rs::json!({ "id": t.id, "type": t.name }))
        .collect();

    let body = sonic_rs::to_string(&sonic_rs::json!({
        "success": true,
        "report_types": report_types
    }))
    .unwrap();

    Ok((StatusCode::OK, body).into_response())
}
