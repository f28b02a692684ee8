//! halostat - A Discord bot for Halo Infinite player statistics.
//!
//! This is the main entry point of the halostat bot, which answers the
//! `/halostats` slash command with the statistics of a Halo Infinite player.
//!
//! # Overview
//!
//! When a user runs `/halostats player:<gamertag>`, the bot acknowledges the
//! command, fetches the player statistics from the Halo statistics server and
//! edits its reply with an embed of four sections: general statistics,
//! specifics, matches and shots.
//!
//! # Configuration
//!
//! Settings come from an optional YAML file and `HALOSTAT_` environment
//! variables (see the [`config`] module):
//!
//! ```bash
//! export HALOSTAT_DISCORD__TOKEN="your-bot-token"
//! export HALOSTAT_DISCORD__APPLICATION_ID="123456789012345678"
//! halostat --deploy-commands
//! ```
//!
//! # Architecture
//!
//! - [`bot`] - Startup sequence and Discord event handling
//! - [`commands`] - Command routing, embed and text formatting
//! - [`config`] - Configuration loading and validation
//! - [`discord`] - Serenity adapters, gateway intents and mention policy
//! - [`halo`] - Halo statistics API client
//! - [`presence`] - Periodic refresh of the bot activity
//! - [`registrar`] - Global slash command registration
//!
//! # Environment Variables
//!
//! - `RUST_LOG` - Controls logging level (default: `info`)

use std::process;

use clap::Parser;
use env_logger::Env;
use log::{error, info};

use crate::{bot::Bot, config::Config};

mod bot;
mod commands;
mod config;
mod discord;
mod halo;
mod presence;
mod registrar;

/// Command-line arguments for the halostat bot.
///
/// # Examples
///
/// ```bash
/// halostat --config config.yaml --deploy-commands
/// ```
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the YAML configuration file.
    ///
    /// Optional: every value can also be given with `HALOSTAT_` environment
    /// variables, which take precedence over the file.
    #[arg(short, long)]
    config: Option<String>,

    /// Replace the global slash commands at startup.
    ///
    /// Overrides `discord.deploy_commands`. Requires `discord.application_id`.
    #[arg(short, long)]
    deploy_commands: bool,
}

/// Main entry point for the halostat bot.
///
/// 1. **Logging Setup**: `info` level by default, overridable with `RUST_LOG`
/// 2. **Argument Parsing**: parses command-line arguments using `clap`
/// 3. **Configuration Loading**: reads, merges and validates the configuration
/// 4. **Bot Execution**: registers commands if requested, logs in and serves events
///
/// # Errors
///
/// Configuration errors are logged and exit the process with code 1 before
/// login. A login failure is returned, also ending the process with a non-zero code.
#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    // Put logger at info level by default
    let env = Env::default().filter_or("RUST_LOG", "info");
    env_logger::init_from_env(env);

    info!("Starting halostat {}...", env!("CARGO_PKG_VERSION"));

    // Parse command line arguments
    let args = Args::parse();

    let mut config = match Config::load(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Failed to load config: {}", e);
            process::exit(1);
        }
    };

    if args.deploy_commands {
        config.discord.deploy_commands = true;
        if let Err(e) = config.validate() {
            error!("Invalid config: {}", e);
            process::exit(1);
        }
    }

    let bot = match Bot::new(config) {
        Ok(b) => b,
        Err(e) => {
            error!("Failed to initialize bot: {}", e);
            process::exit(1);
        }
    };

    bot.start().await
}
