use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use whisper_rs::{FullParams, SamplingStrategy, WhisperContext, WhisperContextParameters};

use crate::application::ports::{SpeechError, SpeechRecognizer};

/// Speech recognizer backed by whisper.cpp via whisper-rs.
///
/// The context is loaded once at process startup and shared read-only
/// across requests; each transcription creates its own decoding state, so
/// concurrent invocations are safe. Decoding runs on CPU at full
/// precision, English transcription task (no translation).
pub struct WhisperRecognizer {
    context: Arc<WhisperContext>,
    threads: i32,
}

impl WhisperRecognizer {
    pub fn new(model_path: &Path, threads: usize) -> Result<Self, SpeechError> {
        if !model_path.exists() {
            return Err(SpeechError::TranscriptionFailed(format!(
                "whisper model not found at {}",
                model_path.display()
            )));
        }

        tracing::info!(model = %model_path.display(), threads, "Loading whisper model");

        let path_str = model_path.to_str().ok_or_else(|| {
            SpeechError::TranscriptionFailed("model path is not valid UTF-8".to_string())
        })?;
        let context =
            WhisperContext::new_with_params(path_str, WhisperContextParameters::default())
                .map_err(|e| SpeechError::TranscriptionFailed(format!("model load: {e}")))?;

        tracing::info!("Whisper model loaded");

        Ok(Self {
            context: Arc::new(context),
            threads: threads as i32,
        })
    }
}

#[async_trait]
impl SpeechRecognizer for WhisperRecognizer {
    async fn transcribe(&self, audio: &Path) -> Result<String, SpeechError> {
        let context = Arc::clone(&self.context);
        let threads = self.threads;
        let path = audio.to_path_buf();

        // whisper.cpp inference is long-running and CPU-bound, keep it off
        // the async workers.
        tokio::task::spawn_blocking(move || {
            let samples = read_waveform(&path)?;
            run_inference(&context, threads, &samples)
        })
        .await
        .map_err(|e| SpeechError::TranscriptionFailed(format!("worker: {e}")))?
    }
}

fn read_waveform(path: &Path) -> Result<Vec<f32>, SpeechError> {
    let mut reader = hound::WavReader::open(path).map_err(|_| SpeechError::InvalidAudio)?;

    let samples: Result<Vec<i16>, _> = reader.samples::<i16>().collect();
    let samples = samples.map_err(|_| SpeechError::InvalidAudio)?;
    if samples.is_empty() {
        return Err(SpeechError::InvalidAudio);
    }

    Ok(samples
        .into_iter()
        .map(|s| s as f32 / i16::MAX as f32)
        .collect())
}

fn run_inference(
    context: &WhisperContext,
    threads: i32,
    samples: &[f32],
) -> Result<String, SpeechError> {
    let mut state = context
        .create_state()
        .map_err(|e| SpeechError::TranscriptionFailed(format!("state: {e}")))?;

    let mut params = FullParams::new(SamplingStrategy::Greedy { best_of: 1 });
    params.set_language(Some("en"));
    params.set_translate(false);
    params.set_n_threads(threads);
    params.set_print_special(false);
    params.set_print_progress(false);
    params.set_print_realtime(false);
    params.set_print_timestamps(false);

    state
        .full(params, samples)
        .map_err(|e| SpeechError::TranscriptionFailed(format!("inference: {e}")))?;

    let mut text = String::new();
    for seg_idx in 0..state.full_n_segments() {
        let segment = match state.get_segment(seg_idx) {
            Some(s) => s,
            None => continue,
        };

        for tok_idx in 0..segment.n_tokens() {
            let token = match segment.get_token(tok_idx) {
                Some(t) => t,
                None => continue,
            };

            let tok_text = match token.to_str() {
                Ok(t) => t,
                Err(_) => continue,
            };

            // Skip special tokens like [_BEG_] or <|endoftext|>.
            let trimmed = tok_text.trim();
            if trimmed.is_empty() || trimmed.starts_with('[') || trimmed.starts_with('<') {
                continue;
            }

            text.push_str(tok_text);
        }
    }

    Ok(text.trim().to_string())
}
