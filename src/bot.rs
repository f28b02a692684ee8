//! Bot module wiring Discord events to the command pipeline.
//!
//! This module provides the main [`Bot`] implementation that connects a Discord
//! gateway session with the Halo statistics server. It orchestrates the bot
//! lifecycle: command registration, login, presence refresh and command handling.
//!
//! # Startup Sequence
//!
//! ```text
//! Config → Register commands (best effort) → Login → Ready → Presence task
//! ```
//!
//! # Command Processing Flow
//!
//! ```text
//! Interaction → Defer → Fetch stats → Format embed → Edit deferred reply
//! ```
//!
//! # Example
//!
//! ```no_run
//! # use halostat::bot::Bot;
//! # use halostat::config::Config;
//! # async fn run() -> Result<(), anyhow::Error> {
//! let config = Config::load(Some("config.yaml"))?;
//!
//! let bot = Bot::new(config)?;
//! bot.start().await?; // Runs until the gateway connection ends
//! # Ok(())
//! # }
//! ```

use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use log::{debug, info};
use serenity::{
    Client,
    all::{Context, EventHandler, Interaction, Ready},
    async_trait,
};

use crate::{
    commands::Commander,
    config::Config,
    discord::{DiscordRegistry, InteractionResponder, gateway_intents, to_invocation},
    halo::HaloRequester,
    presence::PresenceUpdater,
    registrar::{RegistrationOutcome, register_commands},
};

/// Main bot structure that integrates Discord with the Halo statistics server.
///
/// The `Bot` owns the validated configuration and the long-lived services shared
/// by every event handler. There is no global client: serenity hands a
/// [`Context`] to each event and the handlers wrap it in small adapters.
pub struct Bot {
    /// Validated configuration
    config: Config,

    /// Command router, shared by every interaction.
    ///
    /// Stateless apart from the HTTP client it holds, so no lock is needed.
    commander: Arc<Commander<HaloRequester>>,
}

/// Serenity event handler.
struct Handler {
    /// Command router
    commander: Arc<Commander<HaloRequester>>,
    /// Presence refresh task settings
    presence_updater: PresenceUpdater,
    /// Set once the presence task runs, ready is emitted again on reconnection
    presence_started: AtomicBool,
}

impl Bot {
    /// Creates a new Bot instance from the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the Halo requester cannot be built (invalid url).
    pub fn new(config: Config) -> Result<Self, anyhow::Error> {
        let requester = HaloRequester::new(&config.stats.url, config.stats.timeout())?;
        let commander = Arc::new(Commander::new(requester));

        Ok(Bot { config, commander })
    }

    /// Registers the commands if configured, then logs in and runs the session.
    ///
    /// Command registration is awaited before login but its failure is only
    /// logged. This method runs until the gateway connection ends.
    ///
    /// # Errors
    ///
    /// Returns an error if the client cannot be built or the login fails,
    /// for instance because the token is invalid.
    pub async fn start(self) -> Result<(), anyhow::Error> {
        let outcome = self.register_commands().await;
        debug!("command registration outcome {:?}", outcome);

        let handler = Handler {
            commander: Arc::clone(&self.commander),
            presence_updater: PresenceUpdater::new(
                &self.config.presence.activity,
                self.config.presence.interval(),
            ),
            presence_started: AtomicBool::new(false),
        };

        let mut client = Client::builder(&self.config.discord.token, gateway_intents())
            .event_handler(handler)
            .await?;

        info!("logging in to discord");
        client.start().await?;

        Ok(())
    }

    /// Runs the registration task with the Discord REST API.
    async fn register_commands(&self) -> RegistrationOutcome {
        match self.config.discord.application_id {
            Some(application_id) => {
                let registry = DiscordRegistry::new(&self.config.discord.token, application_id);
                register_commands(self.config.discord.deploy_commands, &registry).await
            }
            // Validation guarantees an id whenever commands are deployed
            None => RegistrationOutcome::Skipped,
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    async fn ready(&self, ctx: Context, ready: Ready) {
        info!(
            "{} logged in, present in {} guild(s)",
            ready.user.name,
            ready.guilds.len()
        );

        if !self.presence_started.swap(true, Ordering::SeqCst) {
            self.presence_updater.spawn(ctx);
        }
    }

    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        if let Interaction::Command(command) = interaction {
            let invocation = to_invocation(&command);
            debug!("received /{} from {}", invocation.name, command.user.name);

            let responder = InteractionResponder::new(&ctx, &command);
            self.commander.dispatch(&invocation, &responder).await;
        }
    }
}
