//! `resultats`: classification of the latest race.

use super::{Context, Reply};
use crate::embed::error_embed;
use crate::embed::render::render_results;
use crate::normalize::last_results;

pub async fn handle(ctx: &Context<'_>) -> Reply {
    match last_results(ctx.fetcher).await {
        Ok(results) => Reply::ok(render_results(&results)),
        Err(e) => Reply::degraded(error_embed(e.to_string()), e.error_code()),
    }
}
