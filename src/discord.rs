//! Discord integration built on serenity.
//!
//! This module adapts serenity types to the seams used by the rest of the bot:
//! [`Responder`] for command interactions, [`PresenceSink`] for the bot activity
//! and [`CommandRegistry`] for the global slash commands. It also holds the
//! fixed session settings (gateway intents and mention policy).

use std::sync::Arc;

use async_trait::async_trait;
use serenity::all::{
    ActivityData, ApplicationId, Command as DiscordCommand, CommandInteraction, CommandOptionType,
    Context, CreateAllowedMentions, CreateCommand, CreateCommandOption, CreateEmbed,
    EditInteractionResponse, GatewayIntents, Http, ResolvedValue,
};

use crate::{
    commands::{
        CommandDefinition, CommandInvocation, DisplayDocument, OptionKind, Reply, Responder,
    },
    presence::PresenceSink,
    registrar::CommandRegistry,
};

/// Gateway intents of the session.
///
/// Subscribes to guild, ban, emoji, integration, webhook, invite, message,
/// reaction, voice state, typing and direct message events. Interactions are
/// delivered without any intent.
pub fn gateway_intents() -> GatewayIntents {
    GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MODERATION
        | GatewayIntents::GUILD_EMOJIS_AND_STICKERS
        | GatewayIntents::GUILD_INTEGRATIONS
        | GatewayIntents::GUILD_WEBHOOKS
        | GatewayIntents::GUILD_INVITES
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::GUILD_MESSAGE_REACTIONS
        | GatewayIntents::GUILD_VOICE_STATES
        | GatewayIntents::GUILD_MESSAGE_TYPING
        | GatewayIntents::DIRECT_MESSAGES
        | GatewayIntents::DIRECT_MESSAGE_TYPING
}

/// Mention policy of every message sent by the bot.
///
/// Users, roles and everyone mentions are parsed, the replied user is never pinged.
pub fn allowed_mentions() -> CreateAllowedMentions {
    CreateAllowedMentions::new()
        .all_users(true)
        .all_roles(true)
        .everyone(true)
        .replied_user(false)
}

/// Converts a [`DisplayDocument`] into a Discord embed.
///
/// Sections become non-inline fields, in order.
pub fn create_embed(document: &DisplayDocument) -> CreateEmbed {
    document.sections.iter().fold(
        CreateEmbed::new()
            .title(&document.title)
            .colour(document.color.rgb()),
        |embed, section| embed.field(&section.name, &section.body, false),
    )
}

/// Extracts the name and string options of a command interaction.
pub fn to_invocation(interaction: &CommandInteraction) -> CommandInvocation {
    interaction.data.options().into_iter().fold(
        CommandInvocation::new(&interaction.data.name),
        |invocation, option| match option.value {
            ResolvedValue::String(value) => invocation.with_option(option.name, value),
            _ => invocation,
        },
    )
}

/// [`Responder`] answering a single command interaction.
pub struct InteractionResponder<'a> {
    /// Serenity context of the event
    ctx: &'a Context,
    /// The interaction to answer
    interaction: &'a CommandInteraction,
}

impl<'a> InteractionResponder<'a> {
    pub fn new(ctx: &'a Context, interaction: &'a CommandInteraction) -> Self {
        InteractionResponder { ctx, interaction }
    }
}

#[async_trait]
impl Responder for InteractionResponder<'_> {
    async fn defer(&self) -> Result<(), anyhow::Error> {
        self.interaction.defer(&self.ctx.http).await?;
        Ok(())
    }

    async fn resolve(&self, reply: Reply) -> Result<(), anyhow::Error> {
        let builder = EditInteractionResponse::new().allowed_mentions(allowed_mentions());
        let builder = match reply {
            Reply::Embed(document) => builder.embed(create_embed(&document)),
            Reply::Text(text) => builder.content(text),
        };

        self.interaction
            .edit_response(&self.ctx.http, builder)
            .await?;
        Ok(())
    }
}

impl PresenceSink for Context {
    fn set_playing(&self, label: &str) {
        self.set_activity(Some(ActivityData::playing(label)));
    }
}

/// [`CommandRegistry`] backed by the Discord REST API.
pub struct DiscordRegistry {
    /// REST client authenticated with the bot token
    http: Arc<Http>,
}

impl DiscordRegistry {
    /// Create a new [DiscordRegistry].
    ///
    /// # Arguments
    ///
    /// * `token` - The bot token
    /// * `application_id` - The application whose global commands are managed
    pub fn new(token: &str, application_id: u64) -> Self {
        let http = Http::new(token);
        http.set_application_id(ApplicationId::new(application_id));

        DiscordRegistry {
            http: Arc::new(http),
        }
    }
}

#[async_trait]
impl CommandRegistry for DiscordRegistry {
    async fn replace_global_commands(
        &self,
        definitions: Vec<CommandDefinition>,
    ) -> Result<usize, anyhow::Error> {
        let commands = definitions.iter().map(create_command).collect();
        let registered = DiscordCommand::set_global_commands(&self.http, commands).await?;
        Ok(registered.len())
    }
}

/// Converts a [`CommandDefinition`] into a Discord command builder.
fn create_command(definition: &CommandDefinition) -> CreateCommand {
    definition.options.iter().fold(
        CreateCommand::new(definition.name).description(definition.description),
        |command, option| {
            let kind = match option.kind {
                OptionKind::String => CommandOptionType::String,
            };
            command.add_option(
                CreateCommandOption::new(kind, option.name, option.description)
                    .required(option.required),
            )
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{
        Command,
        embed::{EmbedColor, Section},
    };
    use serde_json::{Value, json};

    #[test]
    fn test_gateway_intents() {
        let intents = gateway_intents();
        assert!(intents.contains(GatewayIntents::GUILDS));
        assert!(intents.contains(GatewayIntents::GUILD_MESSAGES));
        assert!(intents.contains(GatewayIntents::GUILD_MESSAGE_REACTIONS));
        assert!(intents.contains(GatewayIntents::GUILD_VOICE_STATES));
        assert!(intents.contains(GatewayIntents::DIRECT_MESSAGES));
        assert!(!intents.contains(GatewayIntents::MESSAGE_CONTENT));
        assert!(!intents.contains(GatewayIntents::GUILD_MEMBERS));
    }

    #[test]
    fn test_allowed_mentions() {
        let mentions = serde_json::to_value(allowed_mentions()).unwrap();
        assert_eq!(mentions["replied_user"], json!(false));

        let parse = mentions["parse"].as_array().unwrap();
        assert_eq!(parse.len(), 3);
        for kind in ["users", "roles", "everyone"] {
            assert!(parse.contains(&json!(kind)));
        }
    }

    #[test]
    fn test_create_embed() {
        let document = DisplayDocument {
            title: "Statistics | Ben".to_string(),
            color: EmbedColor::Grey,
            sections: vec![
                Section {
                    name: "General Statistics".to_string(),
                    body: "• Username: **Ben**".to_string(),
                },
                Section {
                    name: "Shots".to_string(),
                    body: "• Shots Fired: **10**".to_string(),
                },
            ],
        };

        let embed = serde_json::to_value(create_embed(&document)).unwrap();
        assert_eq!(embed["title"], json!("Statistics | Ben"));
        assert_eq!(embed["color"], json!(0x95A5A6));
        assert_eq!(
            embed["fields"],
            json!([
                {"name": "General Statistics", "value": "• Username: **Ben**", "inline": false},
                {"name": "Shots", "value": "• Shots Fired: **10**", "inline": false}
            ])
        );
    }

    #[test]
    fn test_create_command() {
        let command = serde_json::to_value(create_command(&Command::definitions()[0])).unwrap();
        assert_eq!(command["name"], json!("halostats"));
        assert_eq!(
            command["description"],
            json!("Obtain Halo Infinite statistics for a player.")
        );

        let options = command["options"].as_array().unwrap();
        assert_eq!(options.len(), 1);
        assert_eq!(options[0]["name"], json!("player"));
        assert_eq!(options[0]["description"], json!("The player to search for."));
        // 3 is the string option type
        assert_eq!(options[0]["type"], json!(3));
        assert_eq!(options[0]["required"], Value::Bool(true));
    }
}
