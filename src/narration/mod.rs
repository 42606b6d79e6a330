//! Spoken-language renderings of summaries.
//!
//! Narration is a two-step chain: translate the English text into the target
//! language, then synthesise speech for the translation and save it as MP3.
//!
//! # Architecture
//!
//! - [`Translator`]: text -> text in another language ([`google::GoogleTranslator`])
//! - [`SpeechSynthesizer`]: text -> MP3 bytes ([`google::GoogleSpeech`])
//! - [`Narrator`]: what the pipeline calls; [`TranslatedNarrator`] composes the two above
//!
//! Failures are returned as [`NarrationError`] so one failed narration does not
//! take the whole request down.

pub mod google;

use crate::config::NarratorConfig;
use crate::error::NarrationError;
use crate::utils::truncate_for_log;
use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, instrument};

#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(&self, text: &str) -> Result<String, NarrationError>;
}

#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    /// MP3 audio for `text`.
    async fn synthesize(&self, text: &str) -> Result<Vec<u8>, NarrationError>;
}

#[async_trait]
pub trait Narrator: Send + Sync {
    /// Narrate `text` into `filename` and return the reference to the file.
    async fn narrate(&self, text: &str, filename: &str) -> Result<String, NarrationError>;
}

/// Translates, synthesises, and writes the audio under `audio_dir`.
pub struct TranslatedNarrator {
    translator: Arc<dyn Translator>,
    speech: Arc<dyn SpeechSynthesizer>,
    audio_dir: PathBuf,
}

impl TranslatedNarrator {
    pub fn new(
        translator: Arc<dyn Translator>,
        speech: Arc<dyn SpeechSynthesizer>,
        audio_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            translator,
            speech,
            audio_dir: audio_dir.into(),
        }
    }
}

#[async_trait]
impl Narrator for TranslatedNarrator {
    #[instrument(level = "info", skip(self, text))]
    async fn narrate(&self, text: &str, filename: &str) -> Result<String, NarrationError> {
        if text.trim().is_empty() {
            return Err(NarrationError::EmptyText);
        }
        let translated = self.translator.translate(text).await?;
        info!(translated = %truncate_for_log(&translated, 100), "Translated narration text");

        let audio = self.speech.synthesize(&translated).await?;
        let path = self.audio_dir.join(filename);
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&path, &audio).await?;
        info!(path = %path.display(), bytes = audio.len(), "Wrote narration audio");
        Ok(path.display().to_string())
    }
}

/// Narrator backed by the Google translate web endpoints.
pub fn build_narrator(config: &NarratorConfig) -> Result<Arc<dyn Narrator>, reqwest::Error> {
    let client = crate::scrapers::http_client(&config.user_agent, config.narration_timeout())?;
    let translator = google::GoogleTranslator::new(
        client.clone(),
        &config.source_language,
        &config.target_language,
    );
    let speech = google::GoogleSpeech::new(client, &config.target_language, config.tts_chunk_chars);
    Ok(Arc::new(TranslatedNarrator::new(
        Arc::new(translator),
        Arc::new(speech),
        config.audio_dir.clone(),
    )))
}

/// Split `text` into pieces of at most `max_chars` characters, breaking at
/// whitespace where possible.
pub fn chunk_text(text: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        if word_len > max_chars {
            if !current.is_empty() {
                chunks.push(std::mem::take(&mut current));
                current_len = 0;
            }
            let chars: Vec<char> = word.chars().collect();
            for piece in chars.chunks(max_chars) {
                chunks.push(piece.iter().collect());
            }
            continue;
        }

        let needed = if current.is_empty() { word_len } else { current_len + 1 + word_len };
        if needed > max_chars {
            chunks.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if !current.is_empty() {
            current.push(' ');
            current_len += 1;
        }
        current.push_str(word);
        current_len += word_len;
    }
    if !current.is_empty() {
        chunks.push(current);
    }
    chunks
}
