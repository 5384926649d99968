use chrono::Local;
use rust_xlsxwriter::{Workbook, XlsxError};

use crate::domain::{ExtractedInfo, TranscriptionReport};

const COLUMN_HEADERS: [&str; 4] = ["Name", "Location", "Full Transcription", "Timestamp"];
const ABSENT_FIELD: &str = "N/A";

/// One serialized report ready for download. The filename carries the
/// same timestamp written into the sheet's Timestamp cell.
pub struct ReportDownload {
    pub bytes: Vec<u8>,
    pub filename: String,
}

/// Serializes a transcription report into a one-row spreadsheet for
/// download. Stateless apart from the timestamp column.
#[derive(Debug, Default)]
pub struct ReportService;

impl ReportService {
    pub fn new() -> Self {
        Self
    }

    /// Name and location cell values for the data row, with absent
    /// fields rendered as "N/A".
    pub fn info_cells(info: &ExtractedInfo) -> [&str; 2] {
        [
            info.name.as_deref().unwrap_or(ABSENT_FIELD),
            info.location.as_deref().unwrap_or(ABSENT_FIELD),
        ]
    }

    pub fn serialize(&self, report: &TranscriptionReport) -> Result<ReportDownload, ReportError> {
        let now = Local::now();

        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();

        for (col, header) in COLUMN_HEADERS.iter().enumerate() {
            sheet.write_string(0, col as u16, *header)?;
        }

        let [name, location] = Self::info_cells(&report.extracted_info);
        sheet.write_string(1, 0, name)?;
        sheet.write_string(1, 1, location)?;
        sheet.write_string(1, 2, report.transcription.as_str())?;
        sheet.write_string(1, 3, now.format("%Y-%m-%d %H:%M:%S").to_string())?;

        Ok(ReportDownload {
            bytes: workbook.save_to_buffer()?,
            filename: format!("transcription_report_{}.xlsx", now.format("%Y%m%d_%H%M%S")),
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("report serialization failed: {0}")]
    SerializationFailed(String),
}

impl From<XlsxError> for ReportError {
    fn from(e: XlsxError) -> Self {
        Self::SerializationFailed(e.to_string())
    }
}
