use std::sync::{Arc, RwLock};

use habla_translator::{SupportedLanguage, TranslateError, Translator};

/// Discord caps autocomplete responses at this many choices
pub const AUTOCOMPLETE_LIMIT: usize = 25;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutocompleteChoice {
    pub label: String,
    pub value: String,
}

/// Supported languages as last fetched from the provider.
///
/// Readers clone the current snapshot and never see a half-updated list;
/// `refresh` fetches before it swaps, so a slow provider doesn't hold
/// anyone up.
#[derive(Default)]
pub struct LanguageCache {
    entries: RwLock<Arc<Vec<SupportedLanguage>>>,
}

impl LanguageCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> Arc<Vec<SupportedLanguage>> {
        let guard = self.entries.read().unwrap_or_else(|e| e.into_inner());
        Arc::clone(&guard)
    }

    pub fn replace(&self, languages: Vec<SupportedLanguage>) {
        let mut guard = self.entries.write().unwrap_or_else(|e| e.into_inner());
        *guard = Arc::new(languages);
    }

    /// Fetches the list again; on failure the previous list stays in place
    pub async fn refresh<T>(&self, translator: &T) -> Result<usize, TranslateError>
    where
        T: Translator + ?Sized,
    {
        let languages = translator.supported_languages().await?;
        let count = languages.len();
        self.replace(languages);
        tracing::info!("Fetched {count} supported languages");
        Ok(count)
    }

    /// Up to 25 languages whose code, name or native name contains `query`
    pub fn autocomplete(&self, query: &str) -> Vec<AutocompleteChoice> {
        let languages = self.snapshot();
        let query = query.trim().to_lowercase();

        languages
            .iter()
            .filter(|language| query.is_empty() || matches_query(language, &query))
            .take(AUTOCOMPLETE_LIMIT)
            .map(|language| AutocompleteChoice {
                label: label(language),
                value: language.code.clone(),
            })
            .collect()
    }
}

fn matches_query(language: &SupportedLanguage, query: &str) -> bool {
    [&language.code, &language.name, &language.native_name]
        .iter()
        .any(|field| field.to_lowercase().contains(query))
}

fn label(language: &SupportedLanguage) -> String {
    let name = if language.name.is_empty() {
        &language.code
    } else {
        &language.name
    };

    if language.native_name.is_empty() || language.native_name == *name {
        format!("{name} [{}]", language.code)
    } else {
        format!("{name} ({}) [{}]", language.native_name, language.code)
    }
}
