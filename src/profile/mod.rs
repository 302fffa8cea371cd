//! Best-effort field extraction from resume text

pub mod extractor;
pub mod patterns;

pub use extractor::FieldExtractor;

use serde::{Deserialize, Serialize};

/// Fields pulled out of one resume. Every field is best-effort: `None` means
/// the ordered pattern list found nothing, which is distinct from a field
/// that was present but empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub experience_years: Option<String>,
    pub location: Option<String>,
    pub current_company: Option<String>,
    pub current_ctc: Option<String>,
    pub expected_ctc: Option<String>,
}

impl CandidateProfile {
    /// Field value for tabular output; absent fields serialize as "".
    pub fn cell(field: &Option<String>) -> &str {
        field.as_deref().unwrap_or("")
    }
}
