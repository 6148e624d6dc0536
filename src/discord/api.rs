//! Discord REST client.

use super::interaction::ApplicationCommand;
use crate::embed::Embed;
use crate::error::DiscordError;
use reqwest::{RequestBuilder, Response};
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;
use tracing::debug;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// The subset of `GET /applications/@me` the bot needs.
#[derive(Debug, Clone, Deserialize)]
pub struct Application {
    pub id: String,
    /// Hex-encoded Ed25519 public key for interaction signatures.
    pub verify_key: String,
    #[serde(default)]
    pub name: String,
}

/// Bot-authenticated client, created once at startup.
pub struct DiscordClient {
    http: reqwest::Client,
    api_base: String,
    token: String,
}

impl DiscordClient {
    pub fn new(api_base: impl Into<String>, token: impl Into<String>) -> Result<Self, DiscordError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("DiscordBot (f1bot, ", env!("CARGO_PKG_VERSION"), ")"))
            .build()?;
        Ok(Self {
            http,
            api_base: api_base.into().trim_end_matches('/').to_string(),
            token: token.into(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.api_base)
    }

    fn authed(&self, builder: RequestBuilder) -> RequestBuilder {
        builder.header(reqwest::header::AUTHORIZATION, format!("Bot {}", self.token))
    }

    async fn check(response: Response) -> Result<Response, DiscordError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(DiscordError::Status { status, body })
    }

    /// The application owning the token.
    pub async fn application(&self) -> Result<Application, DiscordError> {
        let response = self
            .authed(self.http.get(self.url("/applications/@me")))
            .send()
            .await?;
        Ok(Self::check(response).await?.json().await?)
    }

    /// Replace every global command of the application with `commands`.
    pub async fn register_commands(
        &self,
        app_id: &str,
        commands: &[ApplicationCommand],
    ) -> Result<(), DiscordError> {
        let response = self
            .authed(self.http.put(self.url(&format!("/applications/{app_id}/commands"))))
            .json(commands)
            .send()
            .await?;
        Self::check(response).await?;
        debug!(app_id, count = commands.len(), "Slash commands registered");
        Ok(())
    }

    /// Deliver the answer to a deferred interaction.
    pub async fn send_followup(
        &self,
        app_id: &str,
        interaction_token: &str,
        embed: &Embed,
    ) -> Result<(), DiscordError> {
        let response = self
            .http
            .post(self.url(&format!("/webhooks/{app_id}/{interaction_token}")))
            .json(&json!({ "embeds": [embed] }))
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }
}
