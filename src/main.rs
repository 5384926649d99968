use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use config::Environment as EnvironmentSource;
use config::{Config, File};
use tokio::net::TcpListener;

use vidscribe::application::services::{ReportService, TranscriptionService};
use vidscribe::infrastructure::media::{check_ffmpeg_binary, FfmpegAudioExtractor};
use vidscribe::infrastructure::observability::{init_tracing, TracingConfig};
use vidscribe::infrastructure::speech::WhisperRecognizer;
use vidscribe::presentation::{create_router, AppState, Environment, Settings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(anyhow::Error::msg)?;

    let configuration = Config::builder()
        .add_source(
            File::with_name(&format!("appsettings.{}", environment.as_str())).required(false),
        )
        .add_source(EnvironmentSource::with_prefix("APP").separator("__"))
        .build()?;

    let settings: Settings = configuration.try_deserialize()?;

    init_tracing(
        TracingConfig::new(environment.as_str(), settings.logging.enable_json),
        settings.server.port,
    );

    if !check_ffmpeg_binary().await {
        tracing::warn!("ffmpeg binary not found, audio extraction will fail");
    }

    // Engine initialization failure is not fatal: the service keeps running
    // and reports the missing engine via /health, while transcription
    // requests fail with a structured error.
    let recognizer = match WhisperRecognizer::new(
        Path::new(&settings.whisper.model_path),
        settings.whisper.threads,
    ) {
        Ok(engine) => Some(Arc::new(engine)),
        Err(e) => {
            tracing::warn!(
                error = %e,
                "Whisper engine failed to initialize, transcription requests will be rejected"
            );
            None
        }
    };

    let transcription_service = Arc::new(TranscriptionService::new(
        Arc::new(FfmpegAudioExtractor),
        recognizer,
        Duration::from_secs(settings.media.max_duration_secs),
    ));

    let state = AppState {
        transcription_service,
        report_service: Arc::new(ReportService::new()),
        settings: settings.clone(),
    };

    let router = create_router(state);

    let addr = SocketAddr::new(settings.server.host.parse()?, settings.server.port);
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
