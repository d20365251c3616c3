use std::sync::Arc;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use habla_config::Config;
use serenity::all::{Client, GatewayIntents};
use tokio::signal;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

pub mod commands;
pub mod discord;
pub mod guild;
pub mod handler;
pub mod help;
pub mod refresh;
pub mod state;

use self::handler::Handler;
use self::state::AppState;

#[derive(Parser)]
#[command(name = "habla", version, about = "Discord bot that translates messages")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Connect to Discord and start answering commands (default)
    Run,
    /// Register the /translate slash command
    Register {
        /// Register in a single guild instead of globally
        #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
        guild: Option<u64>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::new();
    init_tracing(&config);

    let cli = Cli::parse();
    match cli.command.unwrap_or(Command::Run) {
        Command::Run => run(config).await,
        Command::Register { guild } => commands::register(&config, guild).await,
    }
}

fn init_tracing(config: &Config) {
    let level = if config.is_development() { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{level},serenity=warn")));

    let registry = tracing_subscriber::registry().with(filter);
    if config.log_json {
        registry.with(fmt::layer().json()).init();
    } else {
        registry.with(fmt::layer()).init();
    }
}

async fn run(config: Config) -> anyhow::Result<()> {
    let token = config
        .discord
        .bot_token
        .clone()
        .context("BOT_TOKEN is not set")?;
    if config.translator.api_key.is_empty() {
        anyhow::bail!("GOOGLE_TRANSLATION_API_KEY is not set");
    }
    if config.bot.whitelisted_servers.is_empty() {
        tracing::warn!("WHITELISTED_SERVERS is empty, every server will be left");
    }

    let state = Arc::new(AppState::new(config));
    let shutdown = CancellationToken::new();

    let refresher = tokio::spawn(refresh::refresh_languages(
        Arc::clone(&state),
        shutdown.clone(),
    ));

    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::DIRECT_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT;

    let mut client = Client::builder(&token, intents)
        .event_handler(Handler::new(Arc::clone(&state)))
        .await
        .context("Failed to create Discord client")?;
    let shard_manager = Arc::clone(&client.shard_manager);

    let result = tokio::select! {
        result = client.start() => result.context("Discord client stopped"),
        _ = signal::ctrl_c() => {
            tracing::info!("Shutdown requested");
            shard_manager.shutdown_all().await;
            Ok(())
        }
    };

    shutdown.cancel();
    if let Err(e) = refresher.await {
        tracing::error!("language refresh task panicked: {e}");
    }

    result
}
