use habla_translator::TranslateError;

use crate::types::Reply;

/// Fetching the message a reply points at failed
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct FetchError(String);

impl FetchError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    #[error("That message is too long! Please limit your text to {limit} characters.")]
    TextTooLong { limit: usize },

    #[error("There is nothing to translate.")]
    EmptyText,

    #[error("{provider} Translation Error: {message}")]
    Provider {
        provider: String,
        message: String,
        details: serde_json::Value,
    },

    #[error("{0}")]
    Transport(String),

    #[error("Could not fetch the message to translate: {0}")]
    ReferenceFetch(#[from] FetchError),
}

impl RequestError {
    pub fn from_translate(provider: &str, err: TranslateError) -> Self {
        match err {
            TranslateError::Provider { message, details } => RequestError::Provider {
                provider: provider.to_string(),
                message,
                details,
            },
            other => RequestError::Transport(other.to_string()),
        }
    }
}

impl From<RequestError> for Reply {
    fn from(err: RequestError) -> Self {
        match err {
            RequestError::TextTooLong { .. } | RequestError::EmptyText => {
                Reply::Notice(err.to_string())
            }
            RequestError::Provider { ref details, .. } => {
                let details = serde_json::to_string_pretty(details)
                    .unwrap_or_else(|_| details.to_string());
                Reply::Error {
                    title: err.to_string(),
                    details: Some(format!("```json\n{details}\n```")),
                }
            }
            RequestError::Transport(_) | RequestError::ReferenceFetch(_) => Reply::Error {
                title: err.to_string(),
                details: None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_too_long_is_a_notice() {
        let reply = Reply::from(RequestError::TextTooLong { limit: 500 });
        assert_eq!(
            reply,
            Reply::Notice(
                "That message is too long! Please limit your text to 500 characters.".to_string()
            )
        );
    }

    #[test]
    fn test_provider_error_carries_json_details() {
        let details = serde_json::json!({ "code": 400, "message": "Invalid Value" });
        let err = RequestError::from_translate(
            "Google",
            TranslateError::Provider {
                message: "Invalid Value".to_string(),
                details: details.clone(),
            },
        );

        let reply = Reply::from(err);
        let expected = format!(
            "```json\n{}\n```",
            serde_json::to_string_pretty(&details).unwrap()
        );
        assert_eq!(
            reply,
            Reply::Error {
                title: "Google Translation Error: Invalid Value".to_string(),
                details: Some(expected),
            }
        );
    }

    #[test]
    fn test_transport_error_has_no_details() {
        let err = RequestError::from_translate("Google", TranslateError::AuthenticationError);
        assert!(matches!(err, RequestError::Transport(_)));
        assert_eq!(
            Reply::from(err),
            Reply::Error {
                title: "Authentication error: no API key configured".to_string(),
                details: None,
            }
        );
    }

    #[test]
    fn test_fetch_error_is_transport_shaped() {
        let reply = Reply::from(RequestError::from(FetchError::new("Unknown Message")));
        assert_eq!(
            reply,
            Reply::Error {
                title: "Could not fetch the message to translate: Unknown Message".to_string(),
                details: None,
            }
        );
    }
}
