//! Command name to handler routing.

use super::{Command, Context, Reply};
use super::{calendar, drivers, help, next_race, results, standings, teams};
use crate::embed::{Embed, error_embed};
use crate::openf1::Fetcher;
use crate::telemetry::{CommandTimer, spans};
use chrono::{Local, NaiveDateTime};
use std::sync::Arc;
use tracing::{Instrument, debug, warn};

/// Label used for metrics when the name did not parse.
const UNKNOWN_LABEL: &str = "unknown";

/// Routes `/f1` choices to their handlers.
///
/// Cheap to clone; every clone shares the same upstream client.
#[derive(Clone)]
pub struct Dispatcher {
    fetcher: Arc<dyn Fetcher>,
}

impl Dispatcher {
    pub fn new(fetcher: Arc<dyn Fetcher>) -> Self {
        Self { fetcher }
    }

    /// Run the command named `name` against the local wall clock.
    ///
    /// Always returns a sendable embed.
    pub async fn dispatch(&self, name: &str) -> Embed {
        self.dispatch_at(name, Local::now().naive_local()).await
    }

    /// Run the command named `name` as if the local time were `now`.
    pub async fn dispatch_at(&self, name: &str, now: NaiveDateTime) -> Embed {
        let Some(command) = Command::parse(name) else {
            warn!(command = name, "Unknown command");
            crate::metrics::record_command_error(UNKNOWN_LABEL, "unknown_command");
            return error_embed("Commande inconnue");
        };

        let _timer = CommandTimer::new(command.name());
        let ctx = Context {
            fetcher: self.fetcher.as_ref(),
            now,
        };
        let reply = run(command, &ctx).instrument(spans::command(command.name())).await;

        if let Some(kind) = reply.degraded {
            debug!(command = command.name(), kind, "Command answered in degraded mode");
            crate::metrics::record_command_error(command.name(), kind);
        }
        reply.embed
    }
}

async fn run(command: Command, ctx: &Context<'_>) -> Reply {
    match command {
        Command::Pilotes => drivers::handle(ctx),
        Command::Calendrier => calendar::handle(ctx),
        Command::Classement => standings::handle(ctx).await,
        Command::Equipes => teams::handle(ctx),
        Command::Prochaine => next_race::handle(ctx),
        Command::Resultats => results::handle(ctx).await,
        Command::Help => help::handle(),
    }
}
