//! Command parsing and definitions.
//!
//! This module converts inbound slash command invocations into structured
//! [`Command`] enums and describes the commands the bot registers with Discord.

use std::collections::HashMap;

use log::debug;

/// Name of the statistics slash command.
pub const STATS_COMMAND: &str = "halostats";
/// Name of the required player option of [`STATS_COMMAND`].
pub const PLAYER_OPTION: &str = "player";

/// A slash command invocation as received from the platform.
///
/// Only string options are kept, they are the only kind the bot declares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandInvocation {
    /// Name of the invoked command
    pub name: String,
    /// String options, indexed by option name
    pub options: HashMap<String, String>,
}

impl CommandInvocation {
    /// Create a new [CommandInvocation] without options.
    pub fn new(name: &str) -> Self {
        CommandInvocation {
            name: name.to_owned(),
            options: HashMap::new(),
        }
    }

    /// Adds a string option to the invocation.
    pub fn with_option(mut self, name: &str, value: &str) -> Self {
        self.options.insert(name.to_owned(), value.to_owned());
        self
    }
}

/// Represents a parsed bot command.
#[derive(Debug, Hash, PartialEq, Eq)]
pub enum Command {
    /// Display the statistics of a player
    ///
    /// # Fields
    ///
    /// * `String` - Player identifier, as typed by the invoker
    Stats(String),
}

/// Errors that can occur during command parsing.
#[derive(Debug, PartialEq, Eq)]
pub enum CommandParsingError {
    /// The command name is not recognized
    Unknown(String),
    /// A required option is absent
    MissingOption(&'static str),
}

/// Kind of value a command option accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKind {
    String,
}

/// Static description of a command option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionDefinition {
    pub name: &'static str,
    pub description: &'static str,
    pub kind: OptionKind,
    pub required: bool,
}

/// Static description of a slash command, as registered with the platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandDefinition {
    pub name: &'static str,
    pub description: &'static str,
    pub options: Vec<OptionDefinition>,
}

impl Command {
    /// Parses a slash command invocation into a Command.
    ///
    /// # Errors
    ///
    /// - The command is not recognized - [`CommandParsingError::Unknown`]
    /// - The player option is absent - [`CommandParsingError::MissingOption`]
    ///
    /// # Examples
    ///
    /// ```
    /// # use halostat::commands::command::{Command, CommandInvocation};
    /// let invocation = CommandInvocation::new("halostats").with_option("player", "Ben");
    /// assert_eq!(Command::parse(&invocation), Ok(Command::Stats("Ben".to_string())));
    /// ```
    pub fn parse(invocation: &CommandInvocation) -> Result<Self, CommandParsingError> {
        debug!("Parsing command: {:?}", invocation);

        match invocation.name.as_str() {
            STATS_COMMAND => invocation
                .options
                .get(PLAYER_OPTION)
                .map(|player| Command::Stats(player.clone()))
                .ok_or(CommandParsingError::MissingOption(PLAYER_OPTION)),
            name => Err(CommandParsingError::Unknown(name.to_owned())),
        }
    }

    /// Returns the definitions of every command handled by the bot.
    ///
    /// This list replaces the whole global command set when commands are deployed.
    pub fn definitions() -> Vec<CommandDefinition> {
        vec![CommandDefinition {
            name: STATS_COMMAND,
            description: "Obtain Halo Infinite statistics for a player.",
            options: vec![OptionDefinition {
                name: PLAYER_OPTION,
                description: "The player to search for.",
                kind: OptionKind::String,
                required: true,
            }],
        }]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_stats_command() {
        let invocation = CommandInvocation::new("halostats").with_option("player", "Ben Petrillo");
        assert_eq!(
            Command::parse(&invocation),
            Ok(Command::Stats("Ben Petrillo".to_string()))
        );
    }

    #[test]
    fn test_parse_stats_command_keeps_player_verbatim() {
        let invocation = CommandInvocation::new("halostats").with_option("player", "  xX Ben Xx ");
        assert_eq!(
            Command::parse(&invocation),
            Ok(Command::Stats("  xX Ben Xx ".to_string()))
        );
    }

    #[test]
    fn test_parse_stats_command_without_player() {
        let invocation = CommandInvocation::new("halostats").with_option("gamertag", "Ben");
        assert_eq!(
            Command::parse(&invocation),
            Err(CommandParsingError::MissingOption("player"))
        );
    }

    #[test]
    fn test_parse_unknown_command() {
        let invocation = CommandInvocation::new("ping");
        assert_eq!(
            Command::parse(&invocation),
            Err(CommandParsingError::Unknown("ping".to_string()))
        );
    }

    #[test]
    fn test_definitions() {
        let definitions = Command::definitions();
        assert_eq!(definitions.len(), 1);

        let stats = &definitions[0];
        assert_eq!(stats.name, "halostats");
        assert_eq!(
            stats.description,
            "Obtain Halo Infinite statistics for a player."
        );
        assert_eq!(
            stats.options,
            vec![OptionDefinition {
                name: "player",
                description: "The player to search for.",
                kind: OptionKind::String,
                required: true,
            }]
        );
    }
}
