use std::path::Path;

use async_trait::async_trait;

/// Port for the speech-recognition engine.
///
/// The engine is constructed once at process startup and shared read-only
/// across concurrent requests; implementations must be safe to invoke
/// from multiple workers at once.
#[async_trait]
pub trait SpeechRecognizer: Send + Sync {
    /// Transcribe a mono 16kHz PCM waveform file to plain English text.
    async fn transcribe(&self, audio: &Path) -> Result<String, SpeechError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SpeechError {
    #[error("invalid audio file")]
    InvalidAudio,
    #[error("transcription engine not loaded")]
    ModelUnavailable,
    #[error("transcription failed: {0}")]
    TranscriptionFailed(String),
}
