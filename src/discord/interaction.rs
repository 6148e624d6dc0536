//! Interaction wire types and the `/f1` command definition.

use crate::commands::Command;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Name of the registered slash command.
pub const COMMAND_NAME: &str = "f1";
/// Name of its single option.
pub const OPTION_NAME: &str = "commande";

pub const PING: u8 = 1;
pub const APPLICATION_COMMAND: u8 = 2;

const PONG: u8 = 1;
const DEFERRED_CHANNEL_MESSAGE: u8 = 5;
const STRING_OPTION: u8 = 3;
const CHAT_INPUT: u8 = 1;

/// Incoming interaction. Fields Discord omits for a kind default to empty.
#[derive(Debug, Clone, Deserialize)]
pub struct Interaction {
    #[serde(rename = "type")]
    pub kind: u8,
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub token: String,
    #[serde(default)]
    pub data: Option<InteractionData>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InteractionData {
    pub name: String,
    #[serde(default)]
    pub options: Vec<InteractionOption>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InteractionOption {
    pub name: String,
    #[serde(default)]
    pub value: Value,
}

impl Interaction {
    /// Name of the invoked slash command.
    pub fn command_name(&self) -> Option<&str> {
        self.data.as_ref().map(|d| d.name.as_str())
    }

    /// String value of option `name`, if present.
    pub fn option(&self, name: &str) -> Option<&str> {
        self.data
            .as_ref()?
            .options
            .iter()
            .find(|o| o.name == name)?
            .value
            .as_str()
    }
}

/// Immediate answer to an interaction POST.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InteractionResponse {
    #[serde(rename = "type")]
    pub kind: u8,
}

impl InteractionResponse {
    pub const fn pong() -> Self {
        Self { kind: PONG }
    }

    /// "Bot is thinking"; the content follows as a webhook message.
    pub const fn deferred() -> Self {
        Self {
            kind: DEFERRED_CHANNEL_MESSAGE,
        }
    }
}

/// Slash command definition sent to the registration endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ApplicationCommand {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub kind: u8,
    pub description: &'static str,
    pub options: Vec<CommandOptionDef>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CommandOptionDef {
    #[serde(rename = "type")]
    pub kind: u8,
    pub name: &'static str,
    pub description: &'static str,
    pub required: bool,
    pub choices: Vec<CommandChoice>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CommandChoice {
    pub name: &'static str,
    pub value: &'static str,
}

/// `/f1 commande:<choice>` with one choice per [`Command`].
pub fn f1_command() -> ApplicationCommand {
    ApplicationCommand {
        name: COMMAND_NAME,
        kind: CHAT_INPUT,
        description: "Commandes F1 2025",
        options: vec![CommandOptionDef {
            kind: STRING_OPTION,
            name: OPTION_NAME,
            description: "Choisis une commande",
            required: true,
            choices: Command::ALL
                .into_iter()
                .map(|c| CommandChoice {
                    name: c.label(),
                    value: c.name(),
                })
                .collect(),
        }],
    }
}
