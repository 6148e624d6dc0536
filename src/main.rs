//! f1bot - Formula 1 season bot for Discord
//!
//! Answers the `/f1` slash command over Discord's HTTP interactions with
//! season reference data and live OpenF1 results.

mod commands;
mod config;
mod discord;
mod embed;
mod error;
mod http;
mod metrics;
mod normalize;
mod openf1;
mod telemetry;
#[cfg(test)]
mod test_support;

use crate::commands::Dispatcher;
use crate::config::Config;
use crate::discord::{AppState, DiscordClient, SignatureVerifier, f1_command};
use crate::openf1::OpenF1Client;
use std::sync::Arc;
use tracing::{error, info};

/// Environment variable holding the bot token.
const TOKEN_VAR: &str = "DISCORD_TOKEN";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config_path = std::env::args().nth(1);
    let config = Config::resolve(config_path.as_deref())?;

    telemetry::init_tracing(config.log.format);

    let token = match std::env::var(TOKEN_VAR) {
        Ok(token) if !token.trim().is_empty() => token,
        _ => {
            error!("{TOKEN_VAR} is not set, nothing to do");
            return Ok(());
        }
    };

    info!(listen = %config.listen.address, "Starting f1bot");

    if config.metrics.enabled() {
        metrics::init();
        let port = config.metrics.port;
        tokio::spawn(async move {
            http::run_metrics_server(port).await;
        });
    }

    let discord = DiscordClient::new(&config.discord.api_base, token)?;
    let application = discord.application().await.map_err(|e| {
        error!(error = %e, "Failed to fetch Discord application");
        e
    })?;
    info!(app_id = %application.id, name = %application.name, "Connected to Discord");

    if config.discord.register_commands {
        discord
            .register_commands(&application.id, &[f1_command()])
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to register slash commands");
                e
            })?;
        info!("Slash command /f1 registered");
    }

    let state = AppState {
        verifier: Arc::new(SignatureVerifier::from_hex(&application.verify_key)?),
        dispatcher: Dispatcher::new(Arc::new(OpenF1Client::new()?)),
        discord: Arc::new(discord),
        app_id: Arc::from(application.id.as_str()),
    };

    let listener = tokio::net::TcpListener::bind(config.listen.address).await?;
    info!(addr = %config.listen.address, "Interactions endpoint listening");

    discord::serve(listener, state, async {
        let _ = tokio::signal::ctrl_c().await;
        info!("Bot stopped manually");
    })
    .await?;

    Ok(())
}
