use async_trait::async_trait;
use habla_core::ChatMessage;
use habla_core::error::FetchError;
use habla_core::types::{ReferencedMessage, Reply};
use serenity::all::{
    CommandInteraction, Context, CreateEmbed, CreateMessage, EditInteractionResponse, Message,
};

const EMBED_TITLE_LIMIT: usize = 256;
const EMBED_FIELD_LIMIT: usize = 1024;
const MESSAGE_LIMIT: usize = 2000;

/// A gateway message as the orchestrator sees it
pub struct DiscordMessage<'a> {
    ctx: &'a Context,
    msg: &'a Message,
}

impl<'a> DiscordMessage<'a> {
    pub fn new(ctx: &'a Context, msg: &'a Message) -> Self {
        Self { ctx, msg }
    }
}

#[async_trait]
impl ChatMessage for DiscordMessage<'_> {
    fn content(&self) -> &str {
        &self.msg.content
    }

    fn is_reply(&self) -> bool {
        self.msg.message_reference.is_some()
    }

    async fn fetch_referenced(&self) -> Result<ReferencedMessage, FetchError> {
        let reference = self
            .msg
            .message_reference
            .as_ref()
            .ok_or_else(|| FetchError::new("message is not a reply"))?;
        let message_id = reference
            .message_id
            .ok_or_else(|| FetchError::new("reply does not point at a message"))?;

        let referenced = reference
            .channel_id
            .message(self.ctx, message_id)
            .await
            .map_err(|e| FetchError::new(e.to_string()))?;

        let own_id = self.ctx.cache.current_user().id;
        Ok(ReferencedMessage {
            author_is_self: referenced.author.id == own_id,
            content: referenced.content,
        })
    }
}

pub fn error_embed(title: &str, details: Option<&str>) -> CreateEmbed {
    let embed = CreateEmbed::new().title(truncate(title, EMBED_TITLE_LIMIT));
    match details {
        Some(details) => embed.field("Details", truncate(details, EMBED_FIELD_LIMIT), false),
        None => embed,
    }
}

/// Cuts `text` to at most `limit` characters, marking the cut with an ellipsis
pub fn truncate(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        return text.to_string();
    }

    let mut cut: String = text.chars().take(limit.saturating_sub(1)).collect();
    cut.push('…');
    cut
}

/// Plain message content, cut to fit in a single Discord message
pub fn message_content(text: &str) -> String {
    truncate(text, MESSAGE_LIMIT)
}

/// Translations and notices answer the command; errors go to the channel as an embed
pub async fn send_reply(ctx: &Context, msg: &Message, reply: Reply) {
    let result = match reply {
        Reply::Translation(text) | Reply::Notice(text) => {
            msg.reply(ctx, message_content(&text)).await
        }
        Reply::Error { title, details } => {
            let embed = error_embed(&title, details.as_deref());
            msg.channel_id
                .send_message(ctx, CreateMessage::new().embed(embed))
                .await
        }
    };

    if let Err(e) = result {
        tracing::error!("Failed to send reply in channel {}: {e}", msg.channel_id);
    }
}

/// Fills in a deferred slash command response
pub async fn edit_interaction_reply(ctx: &Context, command: &CommandInteraction, reply: Reply) {
    let response = match reply {
        Reply::Translation(text) | Reply::Notice(text) => {
            EditInteractionResponse::new().content(message_content(&text))
        }
        Reply::Error { title, details } => {
            EditInteractionResponse::new().embed(error_embed(&title, details.as_deref()))
        }
    };

    if let Err(e) = command.edit_response(&ctx.http, response).await {
        tracing::error!("Failed to edit interaction response: {e}");
    }
}
