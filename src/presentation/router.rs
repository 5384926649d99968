use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::{AudioExtractor, SpeechRecognizer};
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{health_handler, report_handler, transcribe_handler};
use crate::presentation::state::AppState;

pub fn create_router<A, S>(state: AppState<A, S>) -> Router
where
    A: AudioExtractor + 'static,
    S: SpeechRecognizer + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let body_limit = state.settings.media.max_upload_mb * 1024 * 1024;

    Router::new()
        .route("/health", get(health_handler::<A, S>))
        .route("/api/v1/transcribe", post(transcribe_handler::<A, S>))
        .route("/api/v1/report", post(report_handler::<A, S>))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
