mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{LoggingSettings, MediaSettings, ServerSettings, Settings, WhisperSettings};
