//! The `/interactions` endpoint.

use super::interaction::{
    APPLICATION_COMMAND, COMMAND_NAME, Interaction, InteractionResponse, OPTION_NAME, PING,
};
use super::{DiscordClient, SignatureVerifier};
use crate::commands::Dispatcher;
use crate::telemetry::spans;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{Instrument, debug, error, warn};

const SIGNATURE_HEADER: &str = "x-signature-ed25519";
const TIMESTAMP_HEADER: &str = "x-signature-timestamp";

/// Everything an interaction needs, shared by all requests.
#[derive(Clone)]
pub struct AppState {
    pub verifier: Arc<SignatureVerifier>,
    pub dispatcher: Dispatcher,
    pub discord: Arc<DiscordClient>,
    pub app_id: Arc<str>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/interactions", post(interactions))
        .with_state(state)
}

/// Serve interactions on `listener` until `shutdown` resolves.
pub async fn serve(
    listener: TcpListener,
    state: AppState,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> std::io::Result<()> {
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await
}

fn header<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}

async fn interactions(State(state): State<AppState>, headers: HeaderMap, body: Bytes) -> Response {
    let (Some(signature), Some(timestamp)) = (header(&headers, SIGNATURE_HEADER), header(&headers, TIMESTAMP_HEADER))
    else {
        warn!("Interaction without signature headers");
        return StatusCode::UNAUTHORIZED.into_response();
    };
    if !state.verifier.verify(timestamp, &body, signature) {
        warn!("Interaction with invalid signature");
        return StatusCode::UNAUTHORIZED.into_response();
    }

    let interaction: Interaction = match serde_json::from_slice(&body) {
        Ok(interaction) => interaction,
        Err(e) => {
            warn!(error = %e, "Malformed interaction payload");
            return StatusCode::BAD_REQUEST.into_response();
        }
    };

    match interaction.kind {
        PING => Json(InteractionResponse::pong()).into_response(),
        APPLICATION_COMMAND if interaction.command_name() != Some(COMMAND_NAME) => {
            warn!(command = ?interaction.command_name(), "Interaction for an unknown slash command");
            StatusCode::BAD_REQUEST.into_response()
        }
        APPLICATION_COMMAND => {
            let choice = interaction.option(OPTION_NAME).unwrap_or_default().to_string();
            debug!(choice = %choice, "Interaction received");
            let span = spans::interaction(interaction.kind, &interaction.id);
            tokio::spawn(answer(state, interaction.token, choice).instrument(span));
            Json(InteractionResponse::deferred()).into_response()
        }
        other => {
            warn!(kind = other, "Unsupported interaction type");
            StatusCode::BAD_REQUEST.into_response()
        }
    }
}

async fn answer(state: AppState, token: String, choice: String) {
    let embed = state.dispatcher.dispatch(&choice).await;
    if let Err(e) = state.discord.send_followup(&state.app_id, &token, &embed).await {
        error!(error = %e, code = e.error_code(), choice = %choice, "Failed to send follow-up");
    }
}
