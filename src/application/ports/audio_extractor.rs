use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use tempfile::NamedTempFile;

/// Port for decoding the audio track of a video container into a
/// normalized waveform suitable for the speech recognizer.
#[async_trait]
pub trait AudioExtractor: Send + Sync {
    /// Decode the audio track of `video` into a mono 16kHz 16-bit PCM
    /// waveform staged in a temporary file owned by the caller.
    ///
    /// Videos with no audio stream or a duration above `max_duration`
    /// are rejected before any encoding work happens. On failure no
    /// output file is left behind.
    async fn extract(
        &self,
        video: &Path,
        max_duration: Duration,
    ) -> Result<NamedTempFile, AudioError>;
}

#[derive(Debug, thiserror::Error)]
pub enum AudioError {
    #[error("no audio stream found in video")]
    NoAudioStream,
    #[error("video exceeds {limit_secs} second limit")]
    DurationExceeded { limit_secs: u64 },
    #[error("audio extraction failed: {0}")]
    ExtractionFailed(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
