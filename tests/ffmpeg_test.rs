use std::path::Path;
use std::process::Command;
use std::time::Duration;

use vidscribe::application::ports::{AudioError, AudioExtractor};
use vidscribe::infrastructure::media::{check_ffmpeg_binary, FfmpegAudioExtractor};

fn ffmpeg_available() -> bool {
    Command::new("ffmpeg")
        .arg("-version")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

/// Write `secs` seconds of a 440Hz tone as a 16kHz mono wav.
fn write_tone_wav(path: &Path, secs: u32) {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: 16_000,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut writer = hound::WavWriter::create(path, spec).unwrap();
    for t in 0..(16_000 * secs) {
        let sample = (t as f32 / 16_000.0 * 440.0 * 2.0 * std::f32::consts::PI).sin();
        writer.write_sample((sample * i16::MAX as f32 * 0.5) as i16).unwrap();
    }
    writer.finalize().unwrap();
}

/// Transcode a wav fixture into an mp4 with an aac audio track.
fn make_video_with_audio(wav: &Path, mp4: &Path) -> bool {
    Command::new("ffmpeg")
        .args(["-y", "-i"])
        .arg(wav)
        .args(["-c:a", "aac"])
        .arg(mp4)
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

/// Generate a one-second video with no audio stream at all.
fn make_video_without_audio(mp4: &Path) -> bool {
    Command::new("ffmpeg")
        .args([
            "-y", "-f", "lavfi", "-i", "color=c=black:s=64x64:d=1", "-c:v", "mpeg4", "-an",
        ])
        .arg(mp4)
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

#[tokio::test]
async fn given_installed_toolchain_when_checked_then_reports_available() {
    if !ffmpeg_available() {
        return;
    }
    assert!(check_ffmpeg_binary().await);
}

#[tokio::test]
async fn given_video_with_audio_when_extracting_then_produces_mono_16khz_wav() {
    if !ffmpeg_available() {
        return;
    }

    let dir = tempfile::tempdir().unwrap();
    let wav = dir.path().join("tone.wav");
    let mp4 = dir.path().join("tone.mp4");
    write_tone_wav(&wav, 2);
    assert!(make_video_with_audio(&wav, &mp4));

    let extractor = FfmpegAudioExtractor;
    let waveform = extractor
        .extract(&mp4, Duration::from_secs(120))
        .await
        .unwrap();

    let reader = hound::WavReader::open(waveform.path()).unwrap();
    let spec = reader.spec();
    assert_eq!(spec.channels, 1);
    assert_eq!(spec.sample_rate, 16_000);
    assert_eq!(spec.bits_per_sample, 16);
}

#[tokio::test]
async fn given_over_limit_video_when_extracting_then_duration_exceeded() {
    if !ffmpeg_available() {
        return;
    }

    let dir = tempfile::tempdir().unwrap();
    let wav = dir.path().join("tone.wav");
    let mp4 = dir.path().join("tone.mp4");
    write_tone_wav(&wav, 3);
    assert!(make_video_with_audio(&wav, &mp4));

    let extractor = FfmpegAudioExtractor;
    let err = extractor
        .extract(&mp4, Duration::from_secs(1))
        .await
        .unwrap_err();

    assert!(matches!(err, AudioError::DurationExceeded { limit_secs: 1 }));
}

#[tokio::test]
async fn given_video_without_audio_when_extracting_then_no_audio_stream() {
    if !ffmpeg_available() {
        return;
    }

    let dir = tempfile::tempdir().unwrap();
    let mp4 = dir.path().join("silent.mp4");
    assert!(make_video_without_audio(&mp4));

    let extractor = FfmpegAudioExtractor;
    let err = extractor
        .extract(&mp4, Duration::from_secs(120))
        .await
        .unwrap_err();

    assert!(matches!(err, AudioError::NoAudioStream));
}

#[tokio::test]
async fn given_garbage_input_when_extracting_then_extraction_failed() {
    if !ffmpeg_available() {
        return;
    }

    let dir = tempfile::tempdir().unwrap();
    let mp4 = dir.path().join("garbage.mp4");
    std::fs::write(&mp4, b"this is not a video container").unwrap();

    let extractor = FfmpegAudioExtractor;
    let err = extractor
        .extract(&mp4, Duration::from_secs(120))
        .await
        .unwrap_err();

    assert!(matches!(err, AudioError::ExtractionFailed(_)));
}
