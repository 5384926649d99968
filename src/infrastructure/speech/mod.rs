pub mod whisper_recognizer;

pub use whisper_recognizer::WhisperRecognizer;
