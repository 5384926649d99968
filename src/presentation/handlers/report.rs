use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::application::ports::{AudioExtractor, SpeechRecognizer};
use crate::domain::TranscriptionReport;
use crate::presentation::handlers::transcribe::error_response;
use crate::presentation::state::AppState;

const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

#[tracing::instrument(skip(state, report))]
pub async fn report_handler<A, S>(
    State(state): State<AppState<A, S>>,
    Json(report): Json<TranscriptionReport>,
) -> Response
where
    A: AudioExtractor + 'static,
    S: SpeechRecognizer + 'static,
{
    match state.report_service.serialize(&report) {
        Ok(download) => {
            tracing::info!(
                bytes = download.bytes.len(),
                filename = %download.filename,
                "Report generated"
            );
            (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, XLSX_MIME.to_string()),
                    (
                        header::CONTENT_DISPOSITION,
                        format!("attachment; filename=\"{}\"", download.filename),
                    ),
                ],
                download.bytes,
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Report generation failed");
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Report generation failed: {}", e),
            )
        }
    }
}
