use std::env;

use serde::{Deserialize, Serialize};

use self::bot::BotConfig;
use self::discord::DiscordConfig;
use self::translator::TranslatorConfig;

pub mod bot;
pub mod discord;
pub mod translator;

#[derive(Clone, Serialize, Deserialize)]
pub struct Config {
    pub bot: BotConfig,
    pub discord: DiscordConfig,
    pub translator: TranslatorConfig,

    /// Deployment environment, `development` turns on debug logging
    pub env: String,
    /// Emit logs as JSON lines instead of the pretty formatter
    pub log_json: bool,
}

impl Config {
    pub fn new() -> Self {
        let env = env::var("APP_ENV")
            .or_else(|_| env::var("NODE_ENV"))
            .unwrap_or_else(|_| "production".to_string());

        let log_json = env::var("LOG_FORMAT")
            .map(|v| v.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        Config {
            bot: BotConfig::new(),
            discord: DiscordConfig::new(),
            translator: TranslatorConfig::new(),

            env,
            log_json,
        }
    }

    pub fn is_development(&self) -> bool {
        self.env == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bot: BotConfig::default(),
            discord: DiscordConfig::default(),
            translator: TranslatorConfig::default(),
            env: "production".to_string(),
            log_json: false,
        }
    }
}
