//! `help`: the command overview.

use super::{Command, Reply};
use crate::embed::render::render_help;

pub fn handle() -> Reply {
    let commands: Vec<_> = Command::ALL
        .into_iter()
        .filter(|c| *c != Command::Help)
        .map(|c| (c.label(), c.summary()))
        .collect();
    Reply::ok(render_help(&commands))
}
