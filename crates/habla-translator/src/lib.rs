use serde::{Deserialize, Serialize};

pub type LanguageCode = String;

/// Translation provider interface
#[async_trait::async_trait]
pub trait Translator: Send + Sync {
    /// Translate text into `target`; `source: None` lets the provider detect it
    async fn translate(
        &self,
        text: &str,
        source: Option<&str>,
        target: &str,
    ) -> Result<Translation, TranslateError>;

    /// Languages the provider can translate between
    async fn supported_languages(&self) -> Result<Vec<SupportedLanguage>, TranslateError>;

    /// Provider metadata
    fn metadata(&self) -> ProviderMetadata;
}

#[derive(Debug, Clone, PartialEq)]
pub struct Translation {
    pub text: String,
    /// Only filled in when the source was left for the provider to detect
    pub detected_source: Option<LanguageCode>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupportedLanguage {
    pub code: LanguageCode,
    pub name: String,
    pub native_name: String,
}

#[derive(Debug, Clone)]
pub struct ProviderMetadata {
    pub name: String,
}

#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    /// The provider answered and rejected the call
    #[error("{message}")]
    Provider {
        message: String,
        details: serde_json::Value,
    },

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Invalid provider response: {0}")]
    InvalidResponse(String),

    #[error("Authentication error: no API key configured")]
    AuthenticationError,
}

impl TranslateError {
    /// Structured payload from the provider, if it sent one
    pub fn details(&self) -> Option<&serde_json::Value> {
        match self {
            TranslateError::Provider { details, .. } => Some(details),
            _ => None,
        }
    }
}
