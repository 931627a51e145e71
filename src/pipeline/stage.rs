use futures::future::BoxFuture;
use crate::error::{AppError, Result};

/// The decision a guard stage makes about a request.
pub enum StageOutcome<C> {
    /// Admit the request; the next stage receives the (possibly updated)
    /// context.
    Continue(C),
    /// Terminate the request with this error. No later stage runs.
    Abort(AppError),
}

/// One link in a validation pipeline.
///
/// Stages are plain data: an ordered slice of them fully determines a
/// request's path through its guards, with no reliance on framework
/// call-chaining or registration order.
pub struct Stage<C: Send + 'static> {
    /// The stage name, for operator logs.
    pub name: &'static str,
    /// The decision function.
    pub run: fn(C) -> BoxFuture<'static, StageOutcome<C>>,
}

/// Runs the stages strictly in order, stopping at the first abort.
pub async fn run<C: Send + 'static>(pipeline: &[Stage<C>], mut ctx: C) -> Result<C> {
    for stage in pipeline {
        tracing::debug!("Running guard stage: {}", stage.name);

        match (stage.run)(ctx).await {
            StageOutcome::Continue(next) => ctx = next,
            StageOutcome::Abort(err) => {
                tracing::debug!("Guard stage {} aborted the request", stage.name);
                return Err(err);
            }
        }
    }
    Ok(ctx)
}
