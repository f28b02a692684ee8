//! Slash command routing and response formatting.
//!
//! This module provides the command processing pipeline of the bot, turning an
//! inbound slash command into the content that resolves its deferred reply.
//!
//! # Overview
//!
//! Every invocation goes through two states:
//! 1. **Deferred** - the interaction is acknowledged, nothing is visible yet
//! 2. **Resolved** - the final content replaces the deferred placeholder
//!
//! # Architecture
//!
//! ```text
//! Interaction
//!      │
//!      ▼
//! ┌─────────────┐
//! │  Commander  │  ← Entry point: dispatch()
//! └─────────────┘
//!      │
//!      ├── Responder::defer()
//!      │
//!      ├── Command::parse() ──────────┐
//!      │                              ▼
//!      │                   ┌────────────────────┐
//!      │                   │ Action Handlers    │
//!      │                   │  - handle_stats    │
//!      │                   └────────────────────┘
//!      │                              │
//!      │                              ▼
//!      │                   ┌────────────────────┐
//!      │                   │ Reply              │
//!      │                   │  - Embed(document) │
//!      │                   │  - Text(message)   │
//!      │                   └────────────────────┘
//!      │                              │
//!      └── Responder::resolve() ◄─────┘
//! ```
//!
//! # Available Commands
//!
//! | Command | Options | Description |
//! |---------|---------|-------------|
//! | `halostats` | `player` (required string) | Display Halo Infinite statistics of a player |
//!
//! # Module Organization
//!
//! - [`commander`] - Dispatches invocations and drives the deferred reply
//! - [`command`] - Command parsing and registration definitions
//! - [`actions`] - Individual command handler implementations
//! - [`embed`] - Statistics embed formatting
//! - [`text_response`] - Plain-text response formatting

use async_trait::async_trait;
use mockall::automock;

mod actions;
pub mod command;
mod commander;
pub mod embed;
pub mod text_response;

pub use crate::commands::command::{Command, CommandDefinition, CommandInvocation, OptionKind};
pub use crate::commands::commander::Commander;
pub use crate::commands::embed::DisplayDocument;

/// Content resolving a deferred interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Rich embed, sent on success
    Embed(DisplayDocument),
    /// Plain text, sent on failure
    Text(String),
}

/// Responds to a single command interaction.
///
/// Implemented on top of the platform interaction so the [`Commander`] can be
/// tested without a Discord connection.
#[automock]
#[async_trait]
pub trait Responder: Send + Sync {
    /// Acknowledges the interaction without visible content.
    async fn defer(&self) -> Result<(), anyhow::Error>;
    /// Replaces the deferred placeholder with the final content.
    async fn resolve(&self, reply: Reply) -> Result<(), anyhow::Error>;
}
