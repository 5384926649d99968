mod report_service;
mod transcription_service;

pub use report_service::{ReportDownload, ReportError, ReportService};
pub use transcription_service::{PipelineError, TranscriptionService};
