use habla_translator::LanguageCode;

use crate::header;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceLanguage {
    /// Left for the provider to detect
    Auto,
    Language(LanguageCode),
}

impl SourceLanguage {
    pub fn code(&self) -> Option<&str> {
        match self {
            SourceLanguage::Auto => None,
            SourceLanguage::Language(code) => Some(code),
        }
    }
}

/// A fully resolved request, ready for the provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
    /// Trimmed, normalized and never empty
    pub text: String,
    pub source: SourceLanguage,
    pub target: LanguageCode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationResult {
    pub translated_text: String,
    pub source_language_name: String,
    pub target_language_name: String,
}

impl TranslationResult {
    /// Header plus translation, as posted in the channel
    pub fn render(&self) -> String {
        let mut message = header::render(&self.source_language_name, &self.target_language_name);
        message.push_str(&self.translated_text);
        message
    }
}

/// The message a reply command points at
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferencedMessage {
    pub content: String,
    pub author_is_self: bool,
}

impl ReferencedMessage {
    /// Text to feed the provider; our own header is not part of it
    pub fn translatable_text(&self) -> &str {
        if self.author_is_self {
            header::strip(&self.content)
        } else {
            &self.content
        }
    }
}

/// Exactly one of these goes back to the channel per request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Translation(String),
    /// Plain text telling the user what was wrong with the request
    Notice(String),
    Error {
        title: String,
        details: Option<String>,
    },
}
