//! Configuration structures for the halostat bot.
//!
//! The configuration is split into three sections: Discord account settings,
//! Halo statistics server settings and presence settings. It is loaded once at
//! startup, validated, and passed down to the components that need it.
//!
//! # Configuration File Format
//!
//! The optional configuration file uses YAML:
//!
//! ```yaml
//! discord:
//!   # Bot token, required
//!   token: "your-bot-token"
//!   # Application id, required when deploy_commands is true
//!   application_id: 123456789012345678
//!   # Replace the global slash commands at startup
//!   deploy_commands: false
//!
//! stats:
//!   # Base URL of the Halo statistics server
//!   url: "https://haloinfinite.benpetrillo.dev"
//!   # Request timeout in seconds, the transport default applies when absent
//!   timeout: 10
//!
//! presence:
//!   # Label displayed as "Playing ..."
//!   activity: "Halo Infinite"
//!   # Refresh interval of the activity in seconds
//!   interval: 360
//! ```
//!
//! # Environment Variable Overrides
//!
//! Every value can be set or overridden with a `HALOSTAT_` environment variable,
//! nested keys being separated by `__`:
//!
//! ```bash
//! export HALOSTAT_DISCORD__TOKEN="your-bot-token"
//! export HALOSTAT_DISCORD__APPLICATION_ID="123456789012345678"
//! export HALOSTAT_DISCORD__DEPLOY_COMMANDS="true"
//! ```

use std::{path::Path, time::Duration};

use anyhow::{anyhow, bail};
use figment::{
    Figment,
    providers::{Env, Format, Yaml},
};
use reqwest::Url;
use serde::Deserialize;

/// Prefix of the environment variables overriding the configuration.
const ENV_PREFIX: &str = "HALOSTAT_";

/// Root configuration structure for the halostat bot.
///
/// # Structure
///
/// - [`Discord`] - Discord account credentials and command deployment
/// - [`Stats`] - Halo statistics server connection settings
/// - [`Presence`] - Bot activity settings
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Config {
    /// Discord account configuration
    pub discord: Discord,
    /// Halo statistics server configuration
    #[serde(default)]
    pub stats: Stats,
    /// Bot activity configuration
    #[serde(default)]
    pub presence: Presence,
}

/// Discord account configuration.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Discord {
    /// Bot token.
    ///
    /// Used to log in to the gateway and to authenticate command registration.
    pub token: String,

    /// Application (client) id.
    ///
    /// Identifies the application whose global commands are replaced. Only
    /// required when [`Discord::deploy_commands`] is set.
    #[serde(default)]
    pub application_id: Option<u64>,

    /// Whether the global slash commands are replaced at startup.
    #[serde(default)]
    pub deploy_commands: bool,
}

/// Halo statistics server configuration.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Stats {
    /// Base URL of the Halo statistics server.
    ///
    /// Statistics are requested at `{url}/v3/stats/{player}`.
    #[serde(default = "default_stats_url")]
    pub url: String,

    /// Request timeout in seconds.
    ///
    /// When absent, the HTTP client default applies.
    #[serde(default)]
    pub timeout: Option<u64>,
}

/// Bot activity configuration.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Presence {
    /// Label displayed as "Playing {activity}".
    #[serde(default = "default_activity")]
    pub activity: String,

    /// Refresh interval of the activity in seconds.
    #[serde(default = "default_presence_interval")]
    pub interval: u64,
}

fn default_stats_url() -> String {
    "https://haloinfinite.benpetrillo.dev".to_owned()
}

fn default_activity() -> String {
    "Halo Infinite".to_owned()
}

fn default_presence_interval() -> u64 {
    6 * 60
}

impl Default for Stats {
    fn default() -> Self {
        Stats {
            url: default_stats_url(),
            timeout: None,
        }
    }
}

impl Default for Presence {
    fn default() -> Self {
        Presence {
            activity: default_activity(),
            interval: default_presence_interval(),
        }
    }
}

impl Stats {
    /// Request timeout, if any.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout.map(Duration::from_secs)
    }
}

impl Presence {
    /// Refresh interval of the activity.
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval)
    }
}

impl Config {
    /// Loads the configuration from an optional YAML file and the environment.
    ///
    /// Environment variables prefixed with `HALOSTAT_` take precedence over the
    /// file. The result is validated with [`Config::validate`].
    ///
    /// # Errors
    ///
    /// Returns an error if the file does not exist, if a value cannot be parsed,
    /// if a required value is missing, or if validation fails.
    pub fn load(path: Option<&str>) -> Result<Self, anyhow::Error> {
        let mut figment = Figment::new();

        if let Some(path) = path {
            if !Path::new(path).is_file() {
                bail!("config file {} not found", path);
            }
            figment = figment.merge(Yaml::file(path));
        }

        let config: Config = figment
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()?;

        config.validate()?;
        Ok(config)
    }

    /// Checks the values that cannot be enforced by deserialization.
    ///
    /// # Errors
    ///
    /// - the token is empty
    /// - commands are deployed without an application id, or the id is 0
    /// - the stats url is not an absolute base url
    /// - the timeout or the presence interval is zero
    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.discord.token.trim().is_empty() {
            bail!("discord.token must not be empty");
        }

        match self.discord.application_id {
            Some(0) => bail!("discord.application_id must not be 0"),
            None if self.discord.deploy_commands => {
                bail!("discord.application_id is required to deploy commands")
            }
            _ => {}
        }

        let url = Url::parse(&self.stats.url)
            .map_err(|e| anyhow!("stats.url {} is invalid: {}", self.stats.url, e))?;
        if url.cannot_be_a_base() {
            bail!("stats.url {} cannot be used as a base url", self.stats.url);
        }

        if self.stats.timeout == Some(0) {
            bail!("stats.timeout must be greater than 0");
        }

        if self.presence.interval == 0 {
            bail!("presence.interval must be greater than 0");
        }

        Ok(())
    }
}
