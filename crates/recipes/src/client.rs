//! Completion service client.
//!
//! One endpoint: `POST` with JSON body `{"query": ...}`, answering
//! `{"answer": ...}` on 200 or `{"error": ...}` on failure. A non-2xx
//! status, undecodable JSON, or an `error` field all count as failure.

use reqwest::Client;
use serde::{Deserialize, Serialize};

use stockroom_core::CompletionError;

/// Async access to the hosted completion endpoint.
#[async_trait::async_trait]
pub trait CompletionClient: Send + Sync {
    /// Send one query and return the raw answer text.
    async fn ask(&self, query: &str) -> Result<String, CompletionError>;
}

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    query: &'a str,
}

#[derive(Debug, Deserialize)]
struct CompletionReply {
    answer: Option<String>,
    error: Option<String>,
}

/// Decide success or failure from a status code and response body.
fn parse_reply(status: u16, body: &str) -> Result<String, CompletionError> {
    if !(200..300).contains(&status) {
        return Err(CompletionError::Status(status));
    }

    let reply: CompletionReply =
        serde_json::from_str(body).map_err(|e| CompletionError::malformed(e.to_string()))?;

    if let Some(error) = reply.error {
        return Err(CompletionError::service(error));
    }

    // A 200 with no answer field is not a failure; the caller substitutes
    // its empty-answer fallback.
    Ok(reply.answer.unwrap_or_default())
}

/// HTTP client for the completion endpoint.
#[derive(Debug, Clone)]
pub struct HttpCompletionClient {
    client: Client,
    endpoint: String,
}

impl HttpCompletionClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Endpoint from `STOCKROOM_COMPLETION_URL`, or `None` when unset.
    pub fn from_env() -> Option<Self> {
        std::env::var("STOCKROOM_COMPLETION_URL")
            .ok()
            .map(Self::new)
    }
}

#[async_trait::async_trait]
impl CompletionClient for HttpCompletionClient {
    async fn ask(&self, query: &str) -> Result<String, CompletionError> {
        let res = self
            .client
            .post(&self.endpoint)
            .json(&CompletionRequest { query })
            .send()
            .await
            .map_err(|e| CompletionError::unreachable(e.to_string()))?;

        let status = res.status().as_u16();
        let body = res
            .text()
            .await
            .map_err(|e| CompletionError::unreachable(e.to_string()))?;

        parse_reply(status, &body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_answer_is_returned() {
        assert_eq!(
            parse_reply(200, r#"{"answer":"Frittata"}"#).unwrap(),
            "Frittata"
        );
    }

    #[test]
    fn missing_answer_field_is_empty_not_failure() {
        assert_eq!(parse_reply(200, "{}").unwrap(), "");
    }

    #[test]
    fn non_2xx_status_is_failure() {
        assert_eq!(
            parse_reply(500, r#"{"error":"boom"}"#).unwrap_err(),
            CompletionError::Status(500)
        );
    }

    #[test]
    fn error_field_is_failure_even_on_200() {
        assert_eq!(
            parse_reply(200, r#"{"error":"quota exceeded"}"#).unwrap_err(),
            CompletionError::service("quota exceeded")
        );
    }

    #[test]
    fn malformed_body_is_failure() {
        assert!(matches!(
            parse_reply(200, "not json"),
            Err(CompletionError::Malformed(_))
        ));
    }
}
