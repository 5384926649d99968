use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use tempfile::NamedTempFile;

use crate::application::ports::{
    AudioError, AudioExtractor, SpeechError, SpeechRecognizer,
};
use crate::domain::{extract_info, TranscriptionReport, VideoFormat};

/// Sequences the transcription pipeline over a single upload: stage video,
/// extract waveform, transcribe, derive speaker info.
///
/// Every temporary file allocated during a request is removed before the
/// call returns, on success and on every failure path. The recognizer is
/// `None` when engine initialization failed at startup; requests then fail
/// with `ModelUnavailable` while the rest of the service keeps running.
pub struct TranscriptionService<A, S>
where
    A: AudioExtractor,
    S: SpeechRecognizer,
{
    audio_extractor: Arc<A>,
    recognizer: Option<Arc<S>>,
    max_duration: Duration,
}

impl<A, S> TranscriptionService<A, S>
where
    A: AudioExtractor,
    S: SpeechRecognizer,
{
    pub fn new(
        audio_extractor: Arc<A>,
        recognizer: Option<Arc<S>>,
        max_duration: Duration,
    ) -> Self {
        Self {
            audio_extractor,
            recognizer,
            max_duration,
        }
    }

    pub fn engine_loaded(&self) -> bool {
        self.recognizer.is_some()
    }

    pub fn max_duration(&self) -> Duration {
        self.max_duration
    }

    pub async fn process(
        &self,
        video_bytes: &[u8],
        filename: &str,
    ) -> Result<TranscriptionReport, PipelineError> {
        let format =
            VideoFormat::from_filename(filename).ok_or(PipelineError::InvalidFileType)?;

        let video_file = tempfile::Builder::new()
            .prefix("vidscribe-upload-")
            .suffix(format.suffix())
            .tempfile()?;
        tokio::fs::write(video_file.path(), video_bytes).await?;

        if tokio::fs::metadata(video_file.path()).await?.len() == 0 {
            discard_artifact(video_file, "video");
            return Err(PipelineError::EmptyUpload);
        }

        let result = self.run_pipeline(video_file.path()).await;
        discard_artifact(video_file, "video");
        result
    }

    async fn run_pipeline(
        &self,
        video_path: &Path,
    ) -> Result<TranscriptionReport, PipelineError> {
        let waveform = self
            .audio_extractor
            .extract(video_path, self.max_duration)
            .await?;

        let transcription = self.transcribe(waveform.path()).await;
        discard_artifact(waveform, "waveform");
        let transcription = transcription?;

        let extracted_info = extract_info(&transcription);
        tracing::info!(
            chars = transcription.len(),
            name_found = extracted_info.name.is_some(),
            location_found = extracted_info.location.is_some(),
            "Transcription pipeline completed"
        );

        Ok(TranscriptionReport::new(transcription, extracted_info))
    }

    async fn transcribe(&self, audio: &Path) -> Result<String, SpeechError> {
        // Not trusted to the engine: the waveform must exist and be
        // non-empty, checked before the engine gate.
        let len = tokio::fs::metadata(audio)
            .await
            .map_err(|_| SpeechError::InvalidAudio)?
            .len();
        if len == 0 {
            return Err(SpeechError::InvalidAudio);
        }

        let recognizer = self
            .recognizer
            .as_ref()
            .ok_or(SpeechError::ModelUnavailable)?;

        recognizer.transcribe(audio).await
    }
}

/// Remove a temporary artifact, swallowing deletion failures. Cleanup
/// errors are logged and must never mask the primary result.
fn discard_artifact(file: NamedTempFile, label: &str) {
    let path = file.path().to_path_buf();
    if let Err(e) = file.close() {
        tracing::warn!(
            error = %e,
            artifact = label,
            path = %path.display(),
            "Failed to remove temporary file"
        );
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("invalid file type, expected .mp4, .mov or .avi")]
    InvalidFileType,
    #[error("uploaded file is empty")]
    EmptyUpload,
    #[error("failed to stage upload: {0}")]
    Staging(#[from] std::io::Error),
    #[error(transparent)]
    Audio(#[from] AudioError),
    #[error(transparent)]
    Speech(#[from] SpeechError),
}
