use futures::future::BoxFuture;
use serde::Deserialize;

use crate::{
    error::AppError,
    pipeline::stage::{Stage, StageOutcome},
    repositories::post as post_repo,
    repositories::report as report_repo,
    repositories::session as session_repo,
    services::reports as report_service,
    state::AppState,
    validation::params::{ParamValue, numeric_param, text_param},
};

/// The maximum accepted length of a report description.
const REPORT_DESCRIPTION_MAX: usize = 255;

/// The body of a report submission.
#[derive(Deserialize, Debug)]
pub struct ReportRequest {
    pub session_id: Option<ParamValue>,
    pub session_token: Option<String>,
    pub post_id: Option<ParamValue>,
    pub report_type: Option<ParamValue>,
    pub report_description: Option<String>,
}

/// The request context threaded through the report pipeline.
pub struct ReportContext {
    pub state: AppState,
    pub request: ReportRequest,
    /// The authenticated user, set by `require_session`.
    pub user_id: Option<i64>,
    /// Parsed parameters, set by `check_parameters`.
    pub post_id: Option<i64>,
    pub report_type_id: Option<i64>,
    pub description: Option<String>,
}

impl ReportContext {
    pub fn new(state: AppState, request: ReportRequest) -> Self {
        Self {
            state,
            request,
            user_id: None,
            post_id: None,
            report_type_id: None,
            description: None,
        }
    }
}

/// The guard stages for `POST /reportcontent/`, in required order.
///
/// The post check runs before the report-type check so the error is
/// deterministic when both references are invalid.
pub const REPORT_PIPELINE: &[Stage<ReportContext>] = &[
    Stage { name: "session", run: require_session },
    Stage { name: "parameters", run: check_parameters },
    Stage { name: "post-exists", run: check_post_exists },
    Stage { name: "report-type-exists", run: check_report_type_exists },
    Stage { name: "insert-report", run: insert_report },
];

/// Validates the claimed (session id, token) pair and attaches the resolved
/// user to the context.
fn require_session(mut ctx: ReportContext) -> BoxFuture<'static, StageOutcome<ReportContext>> {
    Box::pin(async move {
        let session_id = numeric_param(ctx.request.session_id.as_ref());
        let token = ctx.request.session_token.clone();

        let (Some(session_id), Some(token)) = (session_id, token) else {
            return StageOutcome::Abort(AppError::Unauthorized);
        };

        match session_repo::validate(&ctx.state.db, session_id, &token).await {
            Ok(Some(session)) => {
                ctx.user_id = Some(session.user_id);
                StageOutcome::Continue(ctx)
            }
            Ok(None) => StageOutcome::Abort(AppError::Unauthorized),
            Err(e) => StageOutcome::Abort(e),
        }
    })
}

/// Checks the report fields, failing with every offending field named at
/// once.
fn check_parameters(mut ctx: ReportContext) -> BoxFuture<'static, StageOutcome<ReportContext>> {
    Box::pin(async move {
        match collect_report_params(&ctx.request) {
            Ok((post_id, report_type_id, description)) => {
                ctx.post_id = Some(post_id);
                ctx.report_type_id = Some(report_type_id);
                ctx.description = Some(description);
                StageOutcome::Continue(ctx)
            }
            Err(offending) => StageOutcome::Abort(AppError::Validation(format!(
                "Required parameters ({}) are missing or invalid.",
                offending.join(", ")
            ))),
        }
    })
}

fn check_post_exists(ctx: ReportContext) -> BoxFuture<'static, StageOutcome<ReportContext>> {
    Box::pin(async move {
        let Some(post_id) = ctx.post_id else {
            return StageOutcome::Abort(AppError::Internal(
                "post existence checked before the parameter stage".to_string(),
            ));
        };

        match post_repo::post_exists(&ctx.state.db, post_id).await {
            Ok(true) => StageOutcome::Continue(ctx),
            Ok(false) => StageOutcome::Abort(AppError::NotFound("Post does not exist.".to_string())),
            Err(e) => StageOutcome::Abort(e),
        }
    })
}

fn check_report_type_exists(ctx: ReportContext) -> BoxFuture<'static, StageOutcome<ReportContext>> {
    Box::pin(async move {
        let Some(report_type_id) = ctx.report_type_id else {
            return StageOutcome::Abort(AppError::Internal(
                "report type checked before the parameter stage".to_string(),
            ));
        };

        match report_repo::report_type_exists(&ctx.state.db, report_type_id).await {
            Ok(true) => StageOutcome::Continue(ctx),
            Ok(false) => StageOutcome::Abort(AppError::NotFound(
                "Report type does not exist.".to_string(),
            )),
            Err(e) => StageOutcome::Abort(e),
        }
    })
}

/// The mutation itself: every guard has passed, insert the report.
fn insert_report(ctx: ReportContext) -> BoxFuture<'static, StageOutcome<ReportContext>> {
    Box::pin(async move {
        let (Some(user_id), Some(post_id), Some(report_type_id), Some(description)) = (
            ctx.user_id,
            ctx.post_id,
            ctx.report_type_id,
            ctx.description.clone(),
        ) else {
            return StageOutcome::Abort(AppError::Internal(
                "mutation reached with incomplete context".to_string(),
            ));
        };

        match report_service::submit_report(&ctx.state, post_id, user_id, report_type_id, &description)
            .await
        {
            Ok(_) => StageOutcome::Continue(ctx),
            Err(e) => StageOutcome::Abort(e),
        }
    })
}

/// Parses and bounds-checks the report fields, collecting the names of every
/// offending field.
fn collect_report_params(
    request: &ReportRequest,
) -> std::result::Result<(i64, i64, String), Vec<&'static str>> {
    let post_id = numeric_param(request.post_id.as_ref());
    let report_type = numeric_param(request.report_type.as_ref());
    let description = text_param(request.report_description.as_deref(), REPORT_DESCRIPTION_MAX);

    let mut offending = Vec::new();
    if post_id.is_none() {
        offending.push("post_id");
    }
    if report_type.is_none() {
        offending.push("report_type");
    }
    if description.is_none() {
        offending.push("report_description");
    }

    match (post_id, report_type, description) {
        (Some(p), Some(t), Some(d)) => Ok((p, t, d.to_string())),
        _ => Err(offending),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(
        post_id: Option<ParamValue>,
        report_type: Option<ParamValue>,
        description: Option<&str>,
    ) -> ReportRequest {
        ReportRequest {
            session_id: Some(ParamValue::Int(1)),
            session_token: Some("token".to_string()),
            post_id,
            report_type,
            report_description: description.map(str::to_string),
        }
    }

    #[test]
    fn accepts_well_formed_parameters() {
        let req = request(
            Some(ParamValue::Int(42)),
            Some(ParamValue::Text("2".to_string())),
            Some("bad"),
        );
        assert_eq!(
            collect_report_params(&req).unwrap(),
            (42, 2, "bad".to_string())
        );
    }

    #[test]
    fn names_every_offending_field_together() {
        let req = request(None, Some(ParamValue::Text("nope".to_string())), Some(""));
        assert_eq!(
            collect_report_params(&req).unwrap_err(),
            vec!["post_id", "report_type", "report_description"]
        );
    }

    #[test]
    fn names_only_the_missing_field() {
        let req = request(None, Some(ParamValue::Int(2)), Some("bad"));
        assert_eq!(collect_report_params(&req).unwrap_err(), vec!["post_id"]);
    }

    #[test]
    fn rejects_oversized_descriptions() {
        let long = "x".repeat(256);
        let req = request(Some(ParamValue::Int(42)), Some(ParamValue::Int(2)), Some(&long));
        assert_eq!(
            collect_report_params(&req).unwrap_err(),
            vec!["report_description"]
        );
    }
}
