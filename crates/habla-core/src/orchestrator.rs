use std::sync::Arc;

use async_trait::async_trait;
use habla_config::bot::BotConfig;
use habla_translator::Translator;

use crate::error::{FetchError, RequestError};
use crate::grammar::{Command, CommandGrammar, LanguageHints};
use crate::language;
use crate::postprocess::repair_mentions;
use crate::preprocess::{DefaultPreprocessor, Preprocessor};
use crate::types::{
    ReferencedMessage, Reply, SourceLanguage, TranslationRequest, TranslationResult,
};

/// What the orchestrator needs from an inbound chat message
#[async_trait]
pub trait ChatMessage: Send + Sync {
    fn content(&self) -> &str;

    fn is_reply(&self) -> bool;

    /// Only called for replies, at most once per request
    async fn fetch_referenced(&self) -> Result<ReferencedMessage, FetchError>;
}

/// Drives one command from raw input to the single reply sent back
pub struct Orchestrator<T: ?Sized> {
    translator: Arc<T>,
    grammar: CommandGrammar,
    preprocessor: DefaultPreprocessor,
    default_language: String,
    char_limit: usize,
}

impl<T> Orchestrator<T>
where
    T: Translator + ?Sized,
{
    pub fn new(translator: Arc<T>, config: &BotConfig) -> Self {
        Self {
            translator,
            grammar: CommandGrammar::from_config(config),
            preprocessor: DefaultPreprocessor,
            default_language: config.default_language.clone(),
            char_limit: config.char_limit,
        }
    }

    pub fn grammar(&self) -> &CommandGrammar {
        &self.grammar
    }

    pub fn translator(&self) -> &Arc<T> {
        &self.translator
    }

    /// `None` when the message isn't a translation command
    pub async fn handle_message<M>(&self, message: &M) -> Option<Reply>
    where
        M: ChatMessage + ?Sized,
    {
        let result = match self.grammar.classify(message.content(), message.is_reply()) {
            Command::NoMatch => return None,
            Command::Fresh { hints, body, .. } => {
                tracing::debug!("Fresh translation request: {:?}", hints);
                self.translate_text(body, &hints).await
            }
            Command::Reply { hints, .. } => {
                tracing::debug!("Reply translation request: {:?}", hints);
                match message.fetch_referenced().await {
                    Ok(referenced) => {
                        if referenced.author_is_self {
                            tracing::debug!("Referenced message is ours, dropping its header");
                        }
                        self.translate_text(referenced.translatable_text(), &hints)
                            .await
                    }
                    Err(e) => {
                        tracing::error!("Failed to fetch referenced message: {e}");
                        Err(RequestError::from(e))
                    }
                }
            }
        };

        Some(into_reply(result))
    }

    /// Slash command options arrive already split, so the grammar is skipped
    pub async fn handle_interaction(
        &self,
        text: &str,
        from: Option<&str>,
        to: Option<&str>,
    ) -> Reply {
        let hints = LanguageHints::new(from, to);
        into_reply(self.translate_text(text, &hints).await)
    }

    pub async fn translate_text(
        &self,
        text: &str,
        hints: &LanguageHints,
    ) -> Result<TranslationResult, RequestError> {
        let request = self.build_request(text, hints)?;
        self.translate(&request).await
    }

    /// Normalizes, length checks and resolves; never touches the provider
    pub fn build_request(
        &self,
        text: &str,
        hints: &LanguageHints,
    ) -> Result<TranslationRequest, RequestError> {
        let text = self.preprocessor.process(text);
        if text.is_empty() {
            return Err(RequestError::EmptyText);
        }

        let length = self.preprocessor.measure(&text);
        if length > self.char_limit {
            tracing::info!(
                "Rejecting text of {length} characters (limit {})",
                self.char_limit
            );
            return Err(RequestError::TextTooLong {
                limit: self.char_limit,
            });
        }

        let source = match hints.source.as_deref() {
            Some(token) => SourceLanguage::Language(language::resolve(token)),
            None => SourceLanguage::Auto,
        };
        let target = hints
            .target
            .as_deref()
            .map(language::resolve)
            .unwrap_or_else(|| self.default_language.clone());

        Ok(TranslationRequest {
            text,
            source,
            target,
        })
    }

    /// One provider call, no retries
    pub async fn translate(
        &self,
        request: &TranslationRequest,
    ) -> Result<TranslationResult, RequestError> {
        let provider = self.translator.metadata().name;
        tracing::info!(
            "Translating {} characters from {:?} to {} via {provider}",
            request.text.chars().count(),
            request.source,
            request.target
        );

        let translation = self
            .translator
            .translate(&request.text, request.source.code(), &request.target)
            .await
            .map_err(|e| {
                match e.details() {
                    Some(details) => tracing::error!("{provider} Translation API Error: {e} {details}"),
                    None => tracing::error!("{provider} Translation API Error: {e}"),
                }
                RequestError::from_translate(&provider, e)
            })?;

        let source_code = match &request.source {
            SourceLanguage::Language(code) => Some(code.as_str()),
            SourceLanguage::Auto => translation.detected_source.as_deref(),
        };
        let source_language_name = source_code
            .map(language::display_name)
            .unwrap_or_else(|| "Unknown".to_string());

        Ok(TranslationResult {
            translated_text: repair_mentions(&translation.text),
            source_language_name,
            target_language_name: language::display_name(&request.target),
        })
    }
}

fn into_reply(result: Result<TranslationResult, RequestError>) -> Reply {
    match result {
        Ok(result) => Reply::Translation(result.render()),
        Err(e) => Reply::from(e),
    }
}
