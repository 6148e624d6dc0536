//! `prochaine`: the next race on the calendar.

use super::{Context, Reply};
use crate::embed::render::render_next_race;
use crate::normalize::next_race;
use f1_season::CALENDAR;

pub fn handle(ctx: &Context<'_>) -> Reply {
    Reply::ok(render_next_race(&next_race(CALENDAR, ctx.now)))
}
