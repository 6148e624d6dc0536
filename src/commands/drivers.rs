//! `pilotes`: the roster grouped by team.

use super::{Context, Reply};
use crate::embed::render::render_drivers;
use crate::normalize::group_by_team;
use f1_season::ROSTER;

pub fn handle(_ctx: &Context<'_>) -> Reply {
    Reply::ok(render_drivers(&group_by_team(ROSTER), ROSTER.len()))
}
