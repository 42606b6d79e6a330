//! Google translate web endpoints for translation and speech.
//!
//! Neither endpoint needs an API key. Translation uses the `gtx` client of
//! `translate_a/single`; speech uses `translate_tts`, which only accepts short
//! texts, so longer input is sent in chunks and the MP3 frames are concatenated.

use super::{SpeechSynthesizer, Translator, chunk_text};
use crate::error::NarrationError;
use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, instrument};

const TRANSLATE_URL: &str = "https://translate.googleapis.com/translate_a/single";
const TTS_URL: &str = "https://translate.google.com/translate_tts";

#[derive(Debug, Clone)]
pub struct GoogleTranslator {
    client: reqwest::Client,
    source: String,
    target: String,
}

impl GoogleTranslator {
    pub fn new(client: reqwest::Client, source: &str, target: &str) -> Self {
        Self {
            client,
            source: source.to_string(),
            target: target.to_string(),
        }
    }
}

#[async_trait]
impl Translator for GoogleTranslator {
    #[instrument(level = "debug", skip_all, fields(source = %self.source, target = %self.target))]
    async fn translate(&self, text: &str) -> Result<String, NarrationError> {
        if self.source == self.target {
            return Ok(text.to_string());
        }
        let response = self
            .client
            .get(TRANSLATE_URL)
            .query(&[
                ("client", "gtx"),
                ("sl", self.source.as_str()),
                ("tl", self.target.as_str()),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(NarrationError::Status {
                service: "translate",
                code: status.as_u16(),
            });
        }
        let body = response.text().await?;
        parse_translation(&body)
    }
}

/// Join the translated segments of a `translate_a/single` response.
///
/// The payload is a nested array whose first element lists
/// `[translated, original, ...]` segments.
pub fn parse_translation(body: &str) -> Result<String, NarrationError> {
    let value: Value =
        serde_json::from_str(body).map_err(|e| NarrationError::Translation(e.to_string()))?;
    let segments = value
        .get(0)
        .and_then(Value::as_array)
        .ok_or_else(|| NarrationError::Translation("missing segment list".to_string()))?;

    let translated: String = segments
        .iter()
        .filter_map(|segment| segment.get(0).and_then(Value::as_str))
        .collect();
    if translated.is_empty() {
        return Err(NarrationError::Translation("no translated text".to_string()));
    }
    Ok(translated)
}

#[derive(Debug, Clone)]
pub struct GoogleSpeech {
    client: reqwest::Client,
    language: String,
    chunk_chars: usize,
}

impl GoogleSpeech {
    pub fn new(client: reqwest::Client, language: &str, chunk_chars: usize) -> Self {
        Self {
            client,
            language: language.to_string(),
            chunk_chars,
        }
    }
}

#[async_trait]
impl SpeechSynthesizer for GoogleSpeech {
    #[instrument(level = "debug", skip_all, fields(language = %self.language))]
    async fn synthesize(&self, text: &str) -> Result<Vec<u8>, NarrationError> {
        let chunks = chunk_text(text, self.chunk_chars);
        if chunks.is_empty() {
            return Err(NarrationError::EmptyText);
        }

        let total = chunks.len().to_string();
        let mut audio = Vec::new();
        for (idx, chunk) in chunks.iter().enumerate() {
            let idx = idx.to_string();
            let textlen = chunk.chars().count().to_string();
            let response = self
                .client
                .get(TTS_URL)
                .query(&[
                    ("ie", "UTF-8"),
                    ("client", "tw-ob"),
                    ("tl", self.language.as_str()),
                    ("q", chunk.as_str()),
                    ("total", total.as_str()),
                    ("idx", idx.as_str()),
                    ("textlen", textlen.as_str()),
                ])
                .send()
                .await?;
            let status = response.status();
            if !status.is_success() {
                return Err(NarrationError::Status {
                    service: "tts",
                    code: status.as_u16(),
                });
            }
            let bytes = response.bytes().await?;
            debug!(chunk = %idx, bytes = bytes.len(), "Synthesised chunk");
            audio.extend_from_slice(&bytes);
        }
        Ok(audio)
    }
}
