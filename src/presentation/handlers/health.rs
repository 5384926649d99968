use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use crate::application::ports::{AudioExtractor, SpeechRecognizer};
use crate::infrastructure::media::check_ffmpeg_binary;
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub engine_loaded: bool,
    pub ffmpeg_available: bool,
    pub max_duration_secs: u64,
    pub max_upload_mb: usize,
}

pub async fn health_handler<A, S>(State(state): State<AppState<A, S>>) -> impl IntoResponse
where
    A: AudioExtractor + 'static,
    S: SpeechRecognizer + 'static,
{
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            engine_loaded: state.transcription_service.engine_loaded(),
            ffmpeg_available: check_ffmpeg_binary().await,
            max_duration_secs: state.transcription_service.max_duration().as_secs(),
            max_upload_mb: state.settings.media.max_upload_mb,
        }),
    )
}
