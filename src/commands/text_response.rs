//! Plain-text response formatters for bot commands.
//!
//! These messages replace the deferred reply when no embed can be produced.

/// Formats the error shown when the statistics of a player cannot be fetched.
///
/// The cause is never shown to the user, only logged.
///
/// # Examples
///
/// ```
/// # use halostat::commands::text_response::format_fetch_error;
/// assert_eq!(format_fetch_error("Ben"), "Unable to fetch statistics for Ben.");
/// ```
pub fn format_fetch_error(player: &str) -> String {
    format!("Unable to fetch statistics for {}.", player)
}

/// Formats a response for an unknown command.
///
/// # Arguments
///
/// * `name` - The name of the invoked command
pub fn format_unknown_command(name: &str) -> String {
    format!("Unknown command: /{}.", name)
}

/// Formats a response for a command invoked without one of its required options.
pub fn format_missing_option(option: &str) -> String {
    format!("Missing required option: {}.", option)
}
