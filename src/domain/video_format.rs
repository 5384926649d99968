/// Accepted upload container types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VideoFormat {
    Mp4,
    Mov,
    Avi,
}

impl VideoFormat {
    /// Resolve a format from the uploaded filename's extension,
    /// case-insensitively. Returns `None` for anything else.
    pub fn from_filename(filename: &str) -> Option<Self> {
        let ext = filename.rsplit_once('.')?.1.to_ascii_lowercase();
        match ext.as_str() {
            "mp4" => Some(Self::Mp4),
            "mov" => Some(Self::Mov),
            "avi" => Some(Self::Avi),
            _ => None,
        }
    }

    /// Suffix used when staging the upload to a temporary file.
    pub fn suffix(&self) -> &'static str {
        match self {
            Self::Mp4 => ".mp4",
            Self::Mov => ".mov",
            Self::Avi => ".avi",
        }
    }
}
