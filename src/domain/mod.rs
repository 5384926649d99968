mod entity_extractor;
mod extracted_info;
mod report;
mod video_format;

pub use entity_extractor::extract_info;
pub use extracted_info::ExtractedInfo;
pub use report::TranscriptionReport;
pub use video_format::VideoFormat;
