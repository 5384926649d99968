mod audio_extractor;
mod speech_recognizer;

pub use audio_extractor::{AudioError, AudioExtractor};
pub use speech_recognizer::{SpeechError, SpeechRecognizer};
