use std::env;
use std::time::Duration;

use serde::{Deserialize, Serialize};

fn default_api_url() -> String {
    "https://translation.googleapis.com/language/translate/v2".to_string()
}

fn default_refresh_hours() -> u64 {
    24
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct TranslatorConfig {
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// How often the supported languages list is fetched again
    #[serde(default = "default_refresh_hours")]
    pub languages_refresh_hours: u64,
}

impl TranslatorConfig {
    pub fn new() -> Self {
        let api_key = env::var("GOOGLE_TRANSLATION_API_KEY").unwrap_or_default();
        let api_url = env::var("GOOGLE_TRANSLATION_API_URL").unwrap_or_else(|_| default_api_url());
        let languages_refresh_hours = env::var("LANGUAGES_REFRESH_HOURS")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|hours| *hours > 0)
            .unwrap_or_else(default_refresh_hours);

        Self {
            api_key,
            api_url,
            languages_refresh_hours,
        }
    }

    pub fn languages_refresh_interval(&self) -> Duration {
        Duration::from_secs(self.languages_refresh_hours * 60 * 60)
    }
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_url: default_api_url(),
            languages_refresh_hours: default_refresh_hours(),
        }
    }
}
