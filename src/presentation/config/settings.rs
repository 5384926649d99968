use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    #[serde(default)]
    pub media: MediaSettings,
    pub whisper: WhisperSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MediaSettings {
    /// Ceiling on source video duration; longer uploads are rejected
    /// before transcription is attempted.
    #[serde(default = "default_max_duration_secs")]
    pub max_duration_secs: u64,
    #[serde(default = "default_max_upload_mb")]
    pub max_upload_mb: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WhisperSettings {
    /// Path to a ggml whisper model file.
    pub model_path: String,
    #[serde(default = "default_threads")]
    pub threads: usize,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoggingSettings {
    #[serde(default)]
    pub enable_json: bool,
}

impl Default for MediaSettings {
    fn default() -> Self {
        Self {
            max_duration_secs: default_max_duration_secs(),
            max_upload_mb: default_max_upload_mb(),
        }
    }
}

fn default_max_duration_secs() -> u64 {
    120
}

fn default_max_upload_mb() -> usize {
    50
}

fn default_threads() -> usize {
    4
}
