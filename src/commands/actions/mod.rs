//! Command action handlers.
//!
//! Individual handler functions for each bot command. Each handler receives the
//! parsed command arguments and returns the [`Reply`](crate::commands::Reply)
//! that resolves the deferred interaction.
//!
//! # Available Handlers
//!
//! - [`handle_stats`] - Fetch and format the statistics of a player

mod stats;

pub use crate::commands::actions::stats::handle_stats;
