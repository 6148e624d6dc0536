//! Discord HTTP-interactions gateway.
//!
//! Discord POSTs every interaction to [`server`]; the bot answers with a
//! deferred response and delivers the embed later through a follow-up
//! webhook via [`DiscordClient`].

mod api;
mod interaction;
pub mod server;
mod verify;

pub use api::DiscordClient;
pub use interaction::f1_command;
pub use server::{AppState, serve};
pub use verify::SignatureVerifier;
