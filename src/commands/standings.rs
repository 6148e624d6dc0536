//! `classement`: live session drivers, or the roster when upstream is empty.

use super::{Context, Reply};
use crate::embed::render::render_standings;
use crate::normalize::driver_standings;

pub async fn handle(ctx: &Context<'_>) -> Reply {
    let standings = driver_standings(ctx.fetcher).await;
    let embed = render_standings(&standings);
    if standings.is_live() {
        Reply::ok(embed)
    } else {
        Reply::degraded(embed, "fallback")
    }
}
