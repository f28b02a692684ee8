//! Global slash command registration.
//!
//! When commands are deployed, the whole global command set of the application
//! is replaced by [`Command::definitions`]. Registration is a best-effort
//! startup task: its failure is logged and never prevents the bot from logging in.

use async_trait::async_trait;
use log::{error, info};
use mockall::automock;

use crate::commands::{Command, CommandDefinition};

/// Registry of the application global slash commands.
#[automock]
#[async_trait]
pub trait CommandRegistry: Send + Sync {
    /// Replaces every global command with `definitions`.
    ///
    /// Returns the number of commands now registered.
    async fn replace_global_commands(
        &self,
        definitions: Vec<CommandDefinition>,
    ) -> Result<usize, anyhow::Error>;
}

/// Outcome of the startup registration task.
#[derive(Debug, PartialEq, Eq)]
pub enum RegistrationOutcome {
    /// Deployment is disabled, no call was made
    Skipped,
    /// The global command set was replaced, holding this many commands
    Registered(usize),
    /// The registration call was rejected
    Failed(String),
}

/// Registers the bot commands if `deploy` is set.
///
/// Exactly one replace-all call is made when deploying, none otherwise.
///
/// # Examples
///
/// ```no_run
/// # use halostat::registrar::{register_commands, RegistrationOutcome};
/// # async fn example(registry: &dyn halostat::registrar::CommandRegistry) {
/// let outcome = register_commands(false, registry).await;
/// assert_eq!(outcome, RegistrationOutcome::Skipped);
/// # }
/// ```
pub async fn register_commands(deploy: bool, registry: &dyn CommandRegistry) -> RegistrationOutcome {
    if !deploy {
        info!("command deployment disabled, skip registration");
        return RegistrationOutcome::Skipped;
    }

    let definitions = Command::definitions();
    info!("deploying {} global command(s)", definitions.len());

    match registry.replace_global_commands(definitions).await {
        Ok(count) => {
            info!("{} global command(s) registered", count);
            RegistrationOutcome::Registered(count)
        }
        Err(e) => {
            error!("failed to deploy slash commands: {:?}", e);
            RegistrationOutcome::Failed(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::OptionKind;

    #[tokio::test]
    async fn test_register_commands_disabled() {
        let mut mock_registry = MockCommandRegistry::new();
        mock_registry.expect_replace_global_commands().never();

        let outcome = register_commands(false, &mock_registry).await;
        assert_eq!(outcome, RegistrationOutcome::Skipped);
    }

    #[tokio::test]
    async fn test_register_commands_enabled() {
        let mut mock_registry = MockCommandRegistry::new();
        mock_registry
            .expect_replace_global_commands()
            .withf(|definitions| {
                definitions.len() == 1
                    && definitions[0].name == "halostats"
                    && definitions[0].description
                        == "Obtain Halo Infinite statistics for a player."
                    && definitions[0].options.len() == 1
                    && definitions[0].options[0].name == "player"
                    && definitions[0].options[0].kind == OptionKind::String
                    && definitions[0].options[0].required
            })
            .times(1)
            .returning(|definitions| Ok(definitions.len()));

        let outcome = register_commands(true, &mock_registry).await;
        assert_eq!(outcome, RegistrationOutcome::Registered(1));
    }

    #[tokio::test]
    async fn test_register_commands_failure_is_not_fatal() {
        let mut mock_registry = MockCommandRegistry::new();
        mock_registry
            .expect_replace_global_commands()
            .times(1)
            .returning(|_| Err(anyhow::anyhow!("401 Unauthorized")));

        let outcome = register_commands(true, &mock_registry).await;
        assert_eq!(
            outcome,
            RegistrationOutcome::Failed("401 Unauthorized".to_string())
        );
    }
}
