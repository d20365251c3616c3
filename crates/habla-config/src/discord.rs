use std::env;

use serde::{Deserialize, Serialize};

#[derive(Default, Serialize, Deserialize, Clone)]
pub struct DiscordConfig {
    /// Gateway bot token
    pub bot_token: Option<String>,
    /// Application id, only needed to register slash commands
    pub client_id: Option<u64>,
}

impl DiscordConfig {
    pub fn new() -> Self {
        let bot_token = env::var("BOT_TOKEN").ok().filter(|t| !t.is_empty());
        let client_id = env::var("CLIENT_ID").ok().and_then(|v| v.parse().ok());

        Self {
            bot_token,
            client_id,
        }
    }
}
