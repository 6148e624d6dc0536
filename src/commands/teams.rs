//! `equipes`: constructors and their drivers.

use super::{Context, Reply};
use crate::embed::render::render_teams;
use crate::normalize::group_by_team;
use f1_season::ROSTER;

pub fn handle(_ctx: &Context<'_>) -> Reply {
    Reply::ok(render_teams(&group_by_team(ROSTER)))
}
