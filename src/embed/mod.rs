//! Outgoing message model and rendering.
//!
//! [`Embed`] serializes to Discord's embed object. Rendering lives in
//! [`render`]; it only lays out data the normalizer already prepared.

pub mod render;

use serde::Serialize;

pub use render::error_embed;

/// Hard limit on fields per embed imposed by Discord.
#[cfg(test)]
pub const MAX_FIELDS: usize = 25;

/// Embed colours.
pub mod colors {
    pub const ERROR: u32 = 0xFF0000;
    pub const DRIVERS: u32 = 0x0600EF;
    pub const CALENDAR: u32 = 0xFF1801;
    pub const STANDINGS: u32 = 0xFFD700;
    pub const TEAMS: u32 = 0x00D2BE;
    pub const NEXT_RACE: u32 = 0x0090FF;
    pub const RESULTS: u32 = 0xFF1801;
    pub const HELP: u32 = 0xFF1801;
}

/// A rich message: title, optional description, colour, fields and footer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Embed {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub color: u32,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<EmbedField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<EmbedFooter>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmbedFooter {
    pub text: String,
}

impl Embed {
    pub fn new(title: impl Into<String>, color: u32) -> Self {
        Self {
            title: title.into(),
            description: None,
            color,
            fields: Vec::new(),
            footer: None,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Append a field. `inline` fields may be laid out side by side.
    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>, inline: bool) -> Self {
        self.fields.push(EmbedField {
            name: name.into(),
            value: value.into(),
            inline,
        });
        self
    }

    pub fn footer(mut self, text: impl Into<String>) -> Self {
        self.footer = Some(EmbedFooter { text: text.into() });
        self
    }

    /// Whether this is the generic error embed.
    #[cfg(test)]
    pub fn is_error(&self) -> bool {
        self.color == colors::ERROR
    }
}
