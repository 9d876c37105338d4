use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::env;

/// Errors from one `/pergunta` round trip.
///
/// All variants surface to the user as the same fallback reply; the
/// distinction only feeds the diagnostic log.
#[derive(Debug, thiserror::Error)]
pub enum AskError {
    #[error("pergunta endpoint returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("malformed resposta body: {0}")]
    MalformedReply(#[from] serde_json::Error),
}

#[derive(Serialize)]
struct PerguntaRequest<'a> {
    pergunta: &'a str,
}

#[derive(Deserialize)]
struct PerguntaResponse {
    resposta: String,
}

/// Client for the assistant server's question endpoint.
pub struct AskClient {
    client: reqwest::Client,
    base_url: String,
    auth_token: Option<String>,
}

impl AskClient {
    pub fn new(base_url: impl Into<String>, auth_token: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            auth_token,
        }
    }

    /// Configure from the environment.
    ///
    /// `DUVIDAS_SERVER_URL` points at the assistant server (defaults to the
    /// local dev address); `DUVIDAS_AUTH_TOKEN`, when set, is sent as a
    /// bearer token. A misconfigured URL is not rejected here — it shows up
    /// as a request failure on the first submission, like any other.
    pub fn from_env() -> Self {
        let base_url =
            env::var("DUVIDAS_SERVER_URL").unwrap_or_else(|_| "http://127.0.0.1:5000".to_string());
        let auth_token = env::var("DUVIDAS_AUTH_TOKEN").ok();
        Self::new(base_url, auth_token)
    }

    /// Sends one question and returns the reply text.
    ///
    /// No retry, no timeout, no cancellation: one POST, one answer.
    pub async fn ask(&self, pergunta: &str) -> Result<String, AskError> {
        let url = format!("{}/pergunta", self.base_url.trim_end_matches('/'));
        let mut request = self.client.post(url).json(&PerguntaRequest { pergunta });

        if let Some(token) = &self.auth_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(AskError::Status { status, body });
        }

        let parsed: PerguntaResponse = serde_json::from_str(&body)?;
        Ok(parsed.resposta)
    }
}

/// Sends one question through the process-wide client.
pub async fn ask(pergunta: &str) -> Result<String, AskError> {
    static CLIENT: Lazy<AskClient> = Lazy::new(AskClient::from_env);
    CLIENT.ask(pergunta).await
}
