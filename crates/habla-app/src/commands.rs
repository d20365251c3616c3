use anyhow::Context as _;
use habla_config::Config;
use serenity::all::{
    ApplicationId, Command, CommandDataOptionValue, CommandInteraction, CommandOptionType,
    CreateCommand, CreateCommandOption, GuildId, Http,
};

pub const TRANSLATE_COMMAND: &str = "translate";
pub const TEXT_OPTION: &str = "text";
pub const FROM_OPTION: &str = "from";
pub const TO_OPTION: &str = "to";

pub fn translate_command() -> CreateCommand {
    CreateCommand::new(TRANSLATE_COMMAND)
        .description("Translate text")
        .add_option(
            CreateCommandOption::new(CommandOptionType::String, TEXT_OPTION, "Text to translate")
                .required(true),
        )
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::String,
                FROM_OPTION,
                "Language to translate from, detected when left out",
            )
            .set_autocomplete(true),
        )
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::String,
                TO_OPTION,
                "Language to translate to",
            )
            .set_autocomplete(true),
        )
}

/// String value of a top level option
pub fn string_option<'a>(command: &'a CommandInteraction, name: &str) -> Option<&'a str> {
    command
        .data
        .options
        .iter()
        .find(|option| option.name == name)
        .and_then(|option| match &option.value {
            CommandDataOptionValue::String(value) => Some(value.as_str()),
            _ => None,
        })
}

pub async fn register(config: &Config, guild: Option<u64>) -> anyhow::Result<()> {
    let token = config
        .discord
        .bot_token
        .as_deref()
        .context("BOT_TOKEN is not set")?;
    let client_id = config
        .discord
        .client_id
        .filter(|id| *id != 0)
        .context("CLIENT_ID is not set")?;

    let http = Http::new(token);
    http.set_application_id(ApplicationId::new(client_id));

    let commands = vec![translate_command()];
    let count = commands.len();
    let scope = match guild {
        Some(id) => format!("in guild {id}"),
        None => "globally".to_string(),
    };
    tracing::info!("Registering application commands {scope}");

    match guild {
        Some(id) => {
            GuildId::new(id)
                .set_commands(&http, commands)
                .await
                .with_context(|| format!("Failed to register commands {scope}"))?;
        }
        None => {
            Command::set_global_commands(&http, commands)
                .await
                .with_context(|| format!("Failed to register commands {scope}"))?;
        }
    }

    tracing::info!("Successfully registered {count} application commands {scope}");
    Ok(())
}
