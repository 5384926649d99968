use serde::{Deserialize, Serialize};

/// Speaker details recovered from a transcript.
///
/// Either field is `None` when no pattern matched. Values are single
/// capitalized tokens as captured by the extraction cascades.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedInfo {
    pub name: Option<String>,
    pub location: Option<String>,
}
