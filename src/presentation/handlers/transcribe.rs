use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::application::ports::{AudioError, AudioExtractor, SpeechError, SpeechRecognizer};
use crate::application::services::PipelineError;
use crate::domain::ExtractedInfo;
use crate::presentation::state::AppState;

const VIDEO_FIELD: &str = "video";

#[derive(Serialize)]
pub struct TranscribeResponse {
    pub transcription: String,
    pub extracted_info: ExtractedInfo,
    pub success: bool,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub success: bool,
}

pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
            success: false,
        }),
    )
        .into_response()
}

#[tracing::instrument(skip(state, multipart))]
pub async fn transcribe_handler<A, S>(
    State(state): State<AppState<A, S>>,
    mut multipart: Multipart,
) -> Response
where
    A: AudioExtractor + 'static,
    S: SpeechRecognizer + 'static,
{
    let mut upload: Option<(String, axum::body::Bytes)> = None;

    loop {
        match multipart.next_field().await {
            Ok(Some(field)) => {
                if field.name() != Some(VIDEO_FIELD) {
                    continue;
                }
                let filename = field.file_name().unwrap_or("upload").to_string();
                match field.bytes().await {
                    Ok(data) => {
                        upload = Some((filename, data));
                        break;
                    }
                    Err(e) => {
                        tracing::error!(error = %e, "Failed to read upload bytes");
                        return error_response(
                            StatusCode::BAD_REQUEST,
                            format!("Failed to read upload: {}", e),
                        );
                    }
                }
            }
            Ok(None) => break,
            Err(e) => {
                tracing::error!(error = %e, "Failed to read multipart");
                return error_response(
                    StatusCode::BAD_REQUEST,
                    format!("Failed to read multipart: {}", e),
                );
            }
        }
    }

    let Some((filename, data)) = upload else {
        tracing::warn!("Transcribe request with no video field");
        return error_response(StatusCode::BAD_REQUEST, "No video file provided");
    };

    tracing::debug!(filename = %filename, bytes = data.len(), "Processing video upload");

    match state.transcription_service.process(&data, &filename).await {
        Ok(report) => (
            StatusCode::OK,
            Json(TranscribeResponse {
                transcription: report.transcription,
                extracted_info: report.extracted_info,
                success: true,
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::warn!(error = %e, filename = %filename, "Transcription pipeline failed");
            error_response(status_for(&e), e.to_string())
        }
    }
}

fn status_for(error: &PipelineError) -> StatusCode {
    match error {
        PipelineError::InvalidFileType | PipelineError::EmptyUpload => StatusCode::BAD_REQUEST,
        PipelineError::Audio(AudioError::NoAudioStream)
        | PipelineError::Audio(AudioError::DurationExceeded { .. }) => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        PipelineError::Speech(SpeechError::ModelUnavailable) => StatusCode::SERVICE_UNAVAILABLE,
        PipelineError::Speech(SpeechError::InvalidAudio) => StatusCode::UNPROCESSABLE_ENTITY,
        PipelineError::Audio(_) | PipelineError::Speech(_) | PipelineError::Staging(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}
