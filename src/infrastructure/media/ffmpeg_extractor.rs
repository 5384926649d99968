use std::path::Path;
use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tempfile::NamedTempFile;
use tokio::process::Command;

use crate::application::ports::{AudioError, AudioExtractor};

/// Returns true iff the ffmpeg binary is present and runnable.
///
/// Diagnostic only (health endpoint); extraction does not gate on this
/// check, tool absence surfaces through its own error path instead.
pub async fn check_ffmpeg_binary() -> bool {
    Command::new("ffmpeg")
        .arg("-version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .await
        .map(|status| status.success())
        .unwrap_or(false)
}

#[derive(Debug, Deserialize)]
struct ProbeOutput {
    #[serde(default)]
    streams: Vec<ProbeStream>,
    format: Option<ProbeFormat>,
}

#[derive(Debug, Deserialize)]
struct ProbeStream {
    codec_type: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ProbeFormat {
    duration: Option<String>,
}

/// ffmpeg/ffprobe subprocess adapter.
///
/// Probes the container first so videos with no audio stream or an
/// over-limit duration are rejected before the costly encode.
pub struct FfmpegAudioExtractor;

impl FfmpegAudioExtractor {
    async fn probe(&self, video: &Path) -> Result<ProbeOutput, AudioError> {
        let output = Command::new("ffprobe")
            .args([
                "-v",
                "error",
                "-show_entries",
                "stream=codec_type:format=duration",
                "-of",
                "json",
            ])
            .arg(video)
            .output()
            .await
            .map_err(|e| AudioError::ExtractionFailed(format!("ffprobe: {e}")))?;

        if !output.status.success() {
            return Err(AudioError::ExtractionFailed(format!(
                "ffprobe exited with {}: {}",
                output.status,
                stderr_tail(&output.stderr)
            )));
        }

        serde_json::from_slice(&output.stdout)
            .map_err(|e| AudioError::ExtractionFailed(format!("ffprobe output: {e}")))
    }
}

#[async_trait]
impl AudioExtractor for FfmpegAudioExtractor {
    async fn extract(
        &self,
        video: &Path,
        max_duration: Duration,
    ) -> Result<NamedTempFile, AudioError> {
        let probe = self.probe(video).await?;

        let has_audio = probe
            .streams
            .iter()
            .any(|s| s.codec_type.as_deref() == Some("audio"));
        if !has_audio {
            return Err(AudioError::NoAudioStream);
        }

        // Containers without a format-level duration are let through; the
        // limit is a resource bound, not a validation requirement.
        let duration_secs = probe
            .format
            .as_ref()
            .and_then(|f| f.duration.as_deref())
            .and_then(|d| d.parse::<f64>().ok());
        if let Some(secs) = duration_secs {
            if secs > max_duration.as_secs_f64() {
                return Err(AudioError::DurationExceeded {
                    limit_secs: max_duration.as_secs(),
                });
            }
        }

        let waveform = tempfile::Builder::new()
            .prefix("vidscribe-audio-")
            .suffix(".wav")
            .tempfile()?;

        let output = Command::new("ffmpeg")
            .arg("-y")
            .arg("-i")
            .arg(video)
            .args(["-vn", "-ac", "1", "-ar", "16000", "-c:a", "pcm_s16le"])
            .arg(waveform.path())
            .stdout(Stdio::null())
            .output()
            .await
            .map_err(|e| AudioError::ExtractionFailed(format!("ffmpeg: {e}")))?;

        if !output.status.success() {
            // `waveform` drops here, removing any partial output.
            return Err(AudioError::ExtractionFailed(format!(
                "ffmpeg exited with {}: {}",
                output.status,
                stderr_tail(&output.stderr)
            )));
        }

        tracing::debug!(
            video = %video.display(),
            waveform = %waveform.path().display(),
            "Audio track encoded to mono 16kHz PCM"
        );

        Ok(waveform)
    }
}

fn stderr_tail(stderr: &[u8]) -> String {
    String::from_utf8_lossy(stderr)
        .lines()
        .rev()
        .find(|line| !line.trim().is_empty())
        .unwrap_or("no stderr output")
        .trim()
        .to_string()
}
