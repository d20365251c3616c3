use async_trait::async_trait;
use habla_core::language;
use habla_translator::{
    ProviderMetadata, SupportedLanguage, TranslateError, Translation, Translator,
};
use serde::Deserialize;

const UNEXPECTED_ERROR: &str = "Unexpected Google Translation API Error";

/// Google Cloud Translation, basic edition (v2)
#[derive(Clone)]
pub struct GoogleTranslator {
    client: reqwest::Client,
    api_key: String,
    api_url: String,
}

#[derive(Deserialize)]
struct Envelope<T> {
    data: T,
}

#[derive(Deserialize)]
struct TranslationsData {
    translations: Vec<TranslationEntry>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TranslationEntry {
    translated_text: String,
    detected_source_language: Option<String>,
}

#[derive(Deserialize)]
struct LanguagesData {
    languages: Vec<LanguageEntry>,
}

#[derive(Deserialize)]
struct LanguageEntry {
    language: String,
}

impl GoogleTranslator {
    pub fn new(api_key: String, api_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            api_url: api_url.trim_end_matches('/').to_string(),
        }
    }

    async fn post<T>(&self, url: &str, params: &[(&str, &str)]) -> Result<T, TranslateError>
    where
        T: for<'de> Deserialize<'de>,
    {
        if self.api_key.is_empty() {
            return Err(TranslateError::AuthenticationError);
        }

        let response = self
            .client
            .post(url)
            .query(&[("key", self.api_key.as_str())])
            .query(params)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::debug!("Google answered HTTP {status}");
            return Err(provider_error(&body));
        }

        let envelope: Envelope<T> = serde_json::from_str(&body)
            .map_err(|e| TranslateError::InvalidResponse(format!("Failed to parse response: {e}")))?;
        Ok(envelope.data)
    }
}

/// Turns an error body into a provider error, keeping whatever Google sent
fn provider_error(body: &str) -> TranslateError {
    let parsed: serde_json::Value = match serde_json::from_str(body) {
        Ok(value) => value,
        Err(_) => {
            return TranslateError::Provider {
                message: UNEXPECTED_ERROR.to_string(),
                details: serde_json::Value::String(body.to_string()),
            };
        }
    };

    let details = parsed.get("error").cloned().unwrap_or(parsed);
    let message = details
        .get("message")
        .and_then(|m| m.as_str())
        .filter(|m| !m.is_empty())
        .unwrap_or(UNEXPECTED_ERROR)
        .to_string();

    TranslateError::Provider { message, details }
}

#[async_trait]
impl Translator for GoogleTranslator {
    async fn translate(
        &self,
        text: &str,
        source: Option<&str>,
        target: &str,
    ) -> Result<Translation, TranslateError> {
        let mut params = vec![("format", "text"), ("q", text), ("target", target)];
        if let Some(source) = source {
            params.push(("source", source));
        }

        let data: TranslationsData = self.post(&self.api_url, &params).await?;
        let entry = data
            .translations
            .into_iter()
            .next()
            .ok_or_else(|| TranslateError::InvalidResponse("No translation in response".to_string()))?;

        Ok(Translation {
            text: entry.translated_text,
            detected_source: match source {
                Some(_) => None,
                None => entry.detected_source_language,
            },
        })
    }

    async fn supported_languages(&self) -> Result<Vec<SupportedLanguage>, TranslateError> {
        let url = format!("{}/languages", self.api_url);
        let data: LanguagesData = self.post(&url, &[]).await?;

        Ok(data
            .languages
            .into_iter()
            .map(|entry| SupportedLanguage {
                name: language::display_name(&entry.language),
                native_name: language::native_name(&entry.language)
                    .unwrap_or_default()
                    .to_string(),
                code: entry.language,
            })
            .collect())
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "Google".to_string(),
        }
    }
}
