use serde::{Deserialize, Serialize};

use super::ExtractedInfo;

/// The unit returned by the transcription pipeline.
///
/// Round-trips through the client unchanged: the report download endpoint
/// accepts this same shape back as its request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptionReport {
    pub transcription: String,
    pub extracted_info: ExtractedInfo,
}

impl TranscriptionReport {
    pub fn new(transcription: String, extracted_info: ExtractedInfo) -> Self {
        Self {
            transcription,
            extracted_info,
        }
    }
}
