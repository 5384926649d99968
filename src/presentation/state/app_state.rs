use std::sync::Arc;

use crate::application::ports::{AudioExtractor, SpeechRecognizer};
use crate::application::services::{ReportService, TranscriptionService};
use crate::presentation::config::Settings;

pub struct AppState<A, S>
where
    A: AudioExtractor,
    S: SpeechRecognizer,
{
    pub transcription_service: Arc<TranscriptionService<A, S>>,
    pub report_service: Arc<ReportService>,
    pub settings: Settings,
}

impl<A, S> Clone for AppState<A, S>
where
    A: AudioExtractor,
    S: SpeechRecognizer,
{
    fn clone(&self) -> Self {
        Self {
            transcription_service: Arc::clone(&self.transcription_service),
            report_service: Arc::clone(&self.report_service),
            settings: self.settings.clone(),
        }
    }
}
