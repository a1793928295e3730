//! Speech synthesis collaborator — text in, audio bytes out.
//!
//! The engine itself is external; this module only defines the contract and
//! an HTTP client for it. An unavailable service is a distinct, reportable
//! condition ([`SpeechError::Unavailable`]), never a crash and never folded
//! into the conversational flow.

use async_trait::async_trait;
use serde::Serialize;

use crate::error::SpeechError;

#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    async fn synthesize(&self, text: &str, voice_id: &str) -> Result<Vec<u8>, SpeechError>;
}

#[derive(Debug, Serialize)]
struct SynthesisRequest<'a> {
    text: &'a str,
    voice_id: &'a str,
}

/// Synthesizer backed by an HTTP text-to-speech service.
///
/// With no endpoint configured, every call reports `Unavailable` — the
/// service still answers turns, just without audio.
pub struct HttpSynthesizer {
    client: reqwest::Client,
    endpoint: Option<String>,
}

impl HttpSynthesizer {
    pub fn new(endpoint: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint,
        }
    }
}

#[async_trait]
impl SpeechSynthesizer for HttpSynthesizer {
    async fn synthesize(&self, text: &str, voice_id: &str) -> Result<Vec<u8>, SpeechError> {
        let endpoint = self.endpoint.as_deref().ok_or(SpeechError::Unavailable)?;

        let response = self
            .client
            .post(endpoint)
            .json(&SynthesisRequest { text, voice_id })
            .send()
            .await
            .map_err(|e| SpeechError::RequestFailed(e.to_string()))?;

        if response.status() == reqwest::StatusCode::SERVICE_UNAVAILABLE {
            return Err(SpeechError::Unavailable);
        }
        if !response.status().is_success() {
            return Err(SpeechError::RequestFailed(format!(
                "synthesis service returned {}",
                response.status()
            )));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| SpeechError::InvalidResponse(e.to_string()))?;
        Ok(bytes.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unconfigured_endpoint_reports_unavailable() {
        let synth = HttpSynthesizer::new(None);
        let err = synth.synthesize("hello", "Matthew").await.unwrap_err();
        assert!(matches!(err, SpeechError::Unavailable));
    }
}
