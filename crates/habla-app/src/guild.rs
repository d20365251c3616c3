use habla_config::bot::BotConfig;
use serenity::all::{Context, CreateMessage, GuildId, UserId};

pub const UNAUTHORIZED_INVITE_WARNING: &str = "Hi there! I'm a bot!
I was recently added to your server \"{guild_name}\" by one of your members.
Unfortunately, I am a private bot developed for private use by my owner and I am not authorized to be added to your server so I will be leaving your server.
Sorry about that. Have a nice day!";

pub fn unauthorized_invite_warning(guild_name: &str) -> String {
    UNAUTHORIZED_INVITE_WARNING.replace("{guild_name}", guild_name)
}

/// `true` when the bot may work in `guild_id`. Otherwise the owner is told
/// why and the bot leaves before returning `false`.
pub async fn ensure_authorized(ctx: &Context, config: &BotConfig, guild_id: GuildId) -> bool {
    if config.is_whitelisted(guild_id.get()) {
        return true;
    }

    match guild_id.to_partial_guild(ctx).await {
        Ok(guild) => leave_unauthorized(ctx, guild_id, &guild.name, Some(guild.owner_id)).await,
        Err(e) => {
            tracing::error!("Could not look up server {guild_id}: {e}");
            leave_unauthorized(ctx, guild_id, &guild_id.to_string(), None).await;
        }
    }

    false
}

pub async fn leave_unauthorized(
    ctx: &Context,
    guild_id: GuildId,
    guild_name: &str,
    owner_id: Option<UserId>,
) {
    tracing::warn!(
        "Server \"{guild_name}\" ({guild_id}) is not whitelisted! Informing owner about this event..."
    );

    if let Some(owner_id) = owner_id {
        let warning = CreateMessage::new().content(unauthorized_invite_warning(guild_name));
        match owner_id.direct_message(ctx, warning).await {
            Ok(_) => tracing::warn!("Informed owner of \"{guild_name}\" ({guild_id}) about this event"),
            Err(e) => tracing::error!(
                "Error while trying to inform owner of \"{guild_name}\" ({guild_id}) about unauthorized invite: {e}"
            ),
        }
    }

    tracing::warn!("Leaving server \"{guild_name}\" ({guild_id})...");
    if let Err(e) = guild_id.leave(&ctx.http).await {
        tracing::error!("Failed to leave server {guild_id}: {e}");
    }
}
