//! Command orchestration and execution.
//!
//! This module provides the [`Commander`] struct, which serves as the main entry
//! point for processing slash commands. It defers the interaction, routes the
//! command to its handler and resolves the interaction with the result.
//!
//! # Flow
//!
//! ```text
//! Interaction → defer() → Command::parse() → execute() → resolve()
//! ```
//!
//! # Examples
//!
//! ```no_run
//! # use halostat::commands::{Commander, CommandInvocation};
//! # use halostat::halo::HaloRequester;
//! # async fn example(responder: &dyn halostat::commands::Responder) -> Result<(), anyhow::Error> {
//! let commander = Commander::new(HaloRequester::new("https://haloinfinite.benpetrillo.dev", None)?);
//! let invocation = CommandInvocation::new("halostats").with_option("player", "Ben");
//! commander.dispatch(&invocation, responder).await;
//! # Ok(())
//! # }
//! ```

use log::{debug, error, warn};

use crate::{
    commands::{
        Reply, Responder,
        actions::handle_stats,
        command::{Command, CommandInvocation, CommandParsingError},
        text_response::{format_missing_option, format_unknown_command},
    },
    halo::Requester,
};

/// Command orchestrator for slash commands.
///
/// The Commander is responsible for:
/// - Deferring every interaction as soon as it is received
/// - Parsing the invocation into a [`Command`]
/// - Routing the command to its handler
/// - Resolving the interaction with the handler result
///
/// It holds no per-request state: concurrent invocations only share the requester.
pub struct Commander<R: Requester> {
    /// Halo statistics requester
    requester: R,
}

impl<R: Requester> Commander<R> {
    /// Creates a new Commander fetching statistics with `requester`.
    pub fn new(requester: R) -> Self {
        Commander { requester }
    }

    /// Processes one command interaction from start to finish.
    ///
    /// The interaction is deferred first. When deferring fails the interaction
    /// is abandoned, since it can no longer be edited. Otherwise it is always
    /// resolved, including for unknown commands which get a fallback message.
    ///
    /// Failures to talk to the platform are logged and never propagated.
    pub async fn dispatch(&self, invocation: &CommandInvocation, responder: &dyn Responder) {
        if let Err(e) = responder.defer().await {
            error!("failed to defer /{}: {:?}", invocation.name, e);
            return;
        }

        let reply = self.execute(invocation).await;
        debug!("/{} reply {:?}", invocation.name, reply);

        if let Err(e) = responder.resolve(reply).await {
            error!("failed to resolve /{}: {:?}", invocation.name, e);
        }
    }

    /// Executes an invocation and returns the reply resolving it.
    ///
    /// # Command Handlers
    ///
    /// - [`Command::Stats`] → [`handle_stats`]
    pub async fn execute(&self, invocation: &CommandInvocation) -> Reply {
        match Command::parse(invocation) {
            Ok(Command::Stats(player)) => handle_stats(&self.requester, &player).await,
            Err(CommandParsingError::Unknown(name)) => {
                warn!("received unknown command /{}", name);
                Reply::Text(format_unknown_command(&name))
            }
            Err(CommandParsingError::MissingOption(option)) => {
                warn!("/{} invoked without {}", invocation.name, option);
                Reply::Text(format_missing_option(option))
            }
        }
    }
}
