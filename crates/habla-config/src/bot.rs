use std::env;

use serde::{Deserialize, Serialize};

fn default_prefix() -> String {
    "!habla".to_string()
}

fn default_short_prefix() -> String {
    "!h".to_string()
}

fn default_language() -> String {
    "en".to_string()
}

fn default_char_limit() -> usize {
    500
}

/// Command surface of the bot
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct BotConfig {
    #[serde(default = "default_prefix")]
    pub prefix: String,
    #[serde(default = "default_short_prefix")]
    pub short_prefix: String,
    /// Target language when a command names none
    #[serde(default = "default_language")]
    pub default_language: String,
    /// Longest text accepted for translation, in characters
    #[serde(default = "default_char_limit")]
    pub char_limit: usize,
    /// Guild ids the bot is allowed to operate in
    #[serde(default)]
    pub whitelisted_servers: Vec<u64>,
}

impl BotConfig {
    pub fn new() -> Self {
        let prefix = env::var("BOT_PREFIX").unwrap_or_else(|_| default_prefix());
        let short_prefix = env::var("BOT_SHORT_PREFIX").unwrap_or_else(|_| default_short_prefix());
        let default_language =
            env::var("DEFAULT_LANGUAGE").unwrap_or_else(|_| default_language());

        let char_limit = env::var("CHAR_LIMIT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_char_limit);

        let whitelisted_servers = env::var("WHITELISTED_SERVERS")
            .map(|v| parse_server_list(&v))
            .unwrap_or_default();

        Self {
            prefix,
            short_prefix,
            default_language,
            char_limit,
            whitelisted_servers,
        }
    }

    pub fn is_whitelisted(&self, guild_id: u64) -> bool {
        self.whitelisted_servers.contains(&guild_id)
    }
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            prefix: default_prefix(),
            short_prefix: default_short_prefix(),
            default_language: default_language(),
            char_limit: default_char_limit(),
            whitelisted_servers: Vec::new(),
        }
    }
}

/// Comma or whitespace separated guild ids; unparsable entries are skipped
fn parse_server_list(raw: &str) -> Vec<u64> {
    raw.split(|c: char| c == ',' || c.is_whitespace())
        .filter_map(|id| id.trim().parse().ok())
        .collect()
}
