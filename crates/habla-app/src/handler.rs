use std::sync::Arc;

use serenity::all::{
    CommandInteraction, Context, CreateAutocompleteResponse, CreateInteractionResponse,
    CreateInteractionResponseMessage, CreateMessage, EventHandler, Guild, GuildChannel,
    Interaction, Message, Ready,
};
use serenity::async_trait;

use crate::commands::{self, FROM_OPTION, TEXT_OPTION, TO_OPTION, TRANSLATE_COMMAND};
use crate::discord::{self, DiscordMessage};
use crate::guild;
use crate::help;
use crate::state::AppState;

pub struct Handler {
    state: Arc<AppState>,
}

impl Handler {
    pub fn new(state: Arc<AppState>) -> Self {
        Self { state }
    }

    async fn on_command(&self, ctx: &Context, command: &CommandInteraction) {
        if let Some(guild_id) = command.guild_id {
            if !guild::ensure_authorized(ctx, &self.state.config.bot, guild_id).await {
                return;
            }
        }

        tracing::info!(
            "Received slash command \"{}\" from \"{}\"",
            command.data.name,
            command.user.name
        );

        if command.data.name != TRANSLATE_COMMAND {
            tracing::info!("Unknown command. Sending default message");
            let hint = help::usage_hint(self.state.orchestrator.grammar());
            let response = CreateInteractionResponse::Message(
                CreateInteractionResponseMessage::new().content(hint),
            );
            if let Err(e) = command.create_response(&ctx.http, response).await {
                tracing::error!("Failed to answer unknown command: {e}");
            }
            return;
        }

        // Provider round trips can outlast the three second response window
        if let Err(e) = command.defer(&ctx.http).await {
            tracing::error!("Failed to defer interaction: {e}");
            return;
        }

        let text = commands::string_option(command, TEXT_OPTION).unwrap_or_default();
        let reply = self
            .state
            .orchestrator
            .handle_interaction(
                text,
                commands::string_option(command, FROM_OPTION),
                commands::string_option(command, TO_OPTION),
            )
            .await;

        discord::edit_interaction_reply(ctx, command, reply).await;
    }

    async fn on_autocomplete(&self, ctx: &Context, autocomplete: &CommandInteraction) {
        if let Some(guild_id) = autocomplete.guild_id {
            if !guild::ensure_authorized(ctx, &self.state.config.bot, guild_id).await {
                return;
            }
        }

        let Some(focused) = autocomplete.data.autocomplete() else {
            return;
        };
        if autocomplete.data.name != TRANSLATE_COMMAND
            || !matches!(focused.name, FROM_OPTION | TO_OPTION)
        {
            tracing::warn!(
                "No autocomplete for option \"{}\" of command \"{}\"",
                focused.name,
                autocomplete.data.name
            );
            return;
        }

        let response = self
            .state
            .languages
            .autocomplete(focused.value)
            .into_iter()
            .fold(CreateAutocompleteResponse::new(), |response, choice| {
                response.add_string_choice(choice.label, choice.value)
            });

        if let Err(e) = autocomplete
            .create_response(&ctx.http, CreateInteractionResponse::Autocomplete(response))
            .await
        {
            tracing::error!("Failed to answer autocomplete: {e}");
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    async fn ready(&self, _ctx: Context, ready: Ready) {
        tracing::info!("{} is online", ready.user.name);
    }

    async fn guild_create(&self, ctx: Context, guild: Guild, _is_new: Option<bool>) {
        if self.state.config.bot.is_whitelisted(guild.id.get()) {
            tracing::info!("Active in server \"{}\" ({})", guild.name, guild.id);
            return;
        }

        tracing::warn!("Added to server \"{}\" ({})", guild.name, guild.id);
        guild::leave_unauthorized(&ctx, guild.id, &guild.name, Some(guild.owner_id)).await;
    }

    async fn thread_create(&self, ctx: Context, thread: GuildChannel) {
        tracing::info!("New thread created: {} ({})", thread.name, thread.id);
        match thread.id.join_thread(&ctx.http).await {
            Ok(()) => tracing::info!("Joined thread {}", thread.name),
            Err(e) => tracing::error!("Failed to join thread {}: {e}", thread.name),
        }
    }

    async fn message(&self, ctx: Context, msg: Message) {
        if msg.author.bot {
            return;
        }

        let grammar = self.state.orchestrator.grammar();
        let own_id = ctx.cache.current_user().id;
        if !grammar.is_bot_command(&msg.content) && !msg.mentions_user_id(own_id) {
            return;
        }

        if let Some(guild_id) = msg.guild_id {
            if !guild::ensure_authorized(&ctx, &self.state.config.bot, guild_id).await {
                return;
            }
        }

        tracing::info!(
            "Received command from \"{}\" in channel {}",
            msg.author.name,
            msg.channel_id
        );

        if grammar.is_help(&msg.content) {
            let help = CreateMessage::new()
                .embed(help::help_embed(grammar))
                .reference_message(&msg);
            if let Err(e) = msg.channel_id.send_message(&ctx, help).await {
                tracing::error!("Failed to send help: {e}");
            }
            return;
        }

        let message = DiscordMessage::new(&ctx, &msg);
        match self.state.orchestrator.handle_message(&message).await {
            Some(reply) => discord::send_reply(&ctx, &msg, reply).await,
            None => {
                tracing::info!("Unknown command. Sending default message");
                if let Err(e) = msg.reply(&ctx, help::usage_hint(grammar)).await {
                    tracing::error!("Failed to send usage hint: {e}");
                }
            }
        }
    }

    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        match interaction {
            Interaction::Command(command) => self.on_command(&ctx, &command).await,
            Interaction::Autocomplete(autocomplete) => {
                self.on_autocomplete(&ctx, &autocomplete).await
            }
            _ => {}
        }
    }
}
