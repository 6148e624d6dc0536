//! `calendrier`: every round with its status.

use super::{Context, Reply};
use crate::embed::render::render_calendar;
use crate::normalize::calendar_overview;
use f1_season::CALENDAR;

pub fn handle(ctx: &Context<'_>) -> Reply {
    Reply::ok(render_calendar(&calendar_overview(CALENDAR, ctx.now)))
}
