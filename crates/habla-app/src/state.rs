use std::sync::Arc;

use habla_config::Config;
use habla_core::Orchestrator;
use habla_core::cache::LanguageCache;
use habla_google::GoogleTranslator;
use habla_translator::Translator;

pub struct AppState {
    pub config: Config,
    pub orchestrator: Orchestrator<dyn Translator>,
    pub languages: LanguageCache,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let translator: Arc<dyn Translator> = Arc::new(GoogleTranslator::new(
            config.translator.api_key.clone(),
            config.translator.api_url.clone(),
        ));

        Self::with_translator(config, translator)
    }

    pub fn with_translator(config: Config, translator: Arc<dyn Translator>) -> Self {
        let orchestrator = Orchestrator::new(translator, &config.bot);

        Self {
            config,
            orchestrator,
            languages: LanguageCache::new(),
        }
    }
}
