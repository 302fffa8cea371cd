//! Spreadsheet serialization of a ranked report

use crate::error::Result;
use crate::pipeline::CandidateRecord;
use crate::profile::CandidateProfile;
use rust_xlsxwriter::{Format, Workbook};

pub const COLUMNS: &[&str] = &[
    "Rank",
    "Candidate",
    "Email",
    "Phone",
    "Experience (years)",
    "Location",
    "Current company",
    "Current CTC",
    "Expected CTC",
    "Match %",
    "Remarks",
];

/// Serialize ranked records into an xlsx workbook buffer, one row per
/// candidate. An empty record set produces a valid header-only workbook.
pub fn build_workbook(records: &[CandidateRecord], sheet_name: &str) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(sheet_name)?;

    let header_format = Format::new().set_bold();
    let score_format = Format::new().set_num_format("0.0");

    for (col, header) in COLUMNS.iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, *header, &header_format)?;
    }

    for (row_index, record) in records.iter().enumerate() {
        let row = (row_index + 1) as u32;
        let profile = &record.profile;

        sheet.write_number(row, 0, (row_index + 1) as f64)?;
        sheet.write_string(row, 1, &candidate_label(record))?;
        sheet.write_string(row, 2, CandidateProfile::cell(&profile.email))?;
        sheet.write_string(row, 3, CandidateProfile::cell(&profile.phone))?;
        sheet.write_string(row, 4, CandidateProfile::cell(&profile.experience_years))?;
        sheet.write_string(row, 5, CandidateProfile::cell(&profile.location))?;
        sheet.write_string(row, 6, CandidateProfile::cell(&profile.current_company))?;
        sheet.write_string(row, 7, CandidateProfile::cell(&profile.current_ctc))?;
        sheet.write_string(row, 8, CandidateProfile::cell(&profile.expected_ctc))?;
        sheet.write_number_with_format(row, 9, f64::from(record.score()), &score_format)?;
        sheet.write_string(row, 10, &remark_cell(record))?;
    }

    // Widen the contact and remark columns; cosmetic only.
    sheet.set_column_width(1, 24)?;
    sheet.set_column_width(2, 28)?;
    sheet.set_column_width(10, 40)?;

    Ok(workbook.save_to_buffer()?)
}

/// Candidate display label: extracted name, else the source filename.
pub fn candidate_label(record: &CandidateRecord) -> String {
    match &record.profile.name {
        Some(name) => name.clone(),
        None => record
            .source
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| record.source.to_string_lossy().into_owned()),
    }
}

fn remark_cell(record: &CandidateRecord) -> String {
    let mut parts = Vec::new();
    if let Some(remark) = &record.outcome.remark {
        parts.push(remark.clone());
    }
    if !record.outcome.missing_skills.is_empty() {
        parts.push(format!(
            "missing: {}",
            record.outcome.missing_skills.join(", ")
        ));
    }
    parts.join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::ScoreOutcome;
    use std::path::PathBuf;

    fn record(name: Option<&str>, score: f32) -> CandidateRecord {
        CandidateRecord {
            source: PathBuf::from("resumes/candidate.txt"),
            position: 0,
            profile: CandidateProfile {
                name: name.map(|n| n.to_string()),
                email: Some("a@b.com".to_string()),
                ..Default::default()
            },
            outcome: ScoreOutcome::plain(score),
        }
    }

    #[test]
    fn test_empty_record_set_is_valid_workbook() {
        let buffer = build_workbook(&[], "Candidates").unwrap();

        // xlsx is a zip container; a header-only workbook is still a valid one
        assert!(!buffer.is_empty());
        assert_eq!(&buffer[..2], b"PK");
    }

    #[test]
    fn test_workbook_with_records() {
        let records = vec![record(Some("John Doe"), 91.2), record(None, 12.0)];
        let buffer = build_workbook(&records, "Candidates").unwrap();

        assert!(!buffer.is_empty());
        assert_eq!(&buffer[..2], b"PK");
    }

    #[test]
    fn test_candidate_label_falls_back_to_filename() {
        assert_eq!(candidate_label(&record(Some("John Doe"), 1.0)), "John Doe");
        assert_eq!(candidate_label(&record(None, 1.0)), "candidate.txt");
    }

    #[test]
    fn test_remark_cell_includes_missing_skills() {
        let mut rec = record(None, 40.0);
        rec.outcome.remark = Some("partial fit".to_string());
        rec.outcome.missing_skills = vec!["aws".to_string(), "sql".to_string()];

        assert_eq!(remark_cell(&rec), "partial fit; missing: aws, sql");
    }
}
