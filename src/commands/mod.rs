//! Slash-command handling.
//!
//! The `/f1` command carries one choice, parsed into the closed [`Command`]
//! enum. [`Dispatcher`] maps each variant to its handler with an exhaustive
//! match; every handler returns a [`Reply`] and never fails.

mod calendar;
mod command;
mod context;
mod dispatcher;
mod drivers;
mod help;
mod next_race;
mod results;
mod standings;
mod teams;

pub use command::Command;
pub use context::{Context, Reply};
pub use dispatcher::Dispatcher;
