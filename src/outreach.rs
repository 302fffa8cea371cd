//! Outreach helpers: job-description sanitizing and email drafts

use crate::error::Result;
use crate::pipeline::{CandidateRecord, JobDescription};
use crate::report::spreadsheet::candidate_label;
use log::info;
use std::path::Path;

/// Strip lines that name the client or company so the JD can be shared with
/// candidates directly.
pub fn sanitize_job_description(text: &str) -> String {
    text.lines()
        .filter(|line| {
            let lower = line.to_lowercase();
            !lower.contains("client") && !lower.contains("company")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Write one outreach email draft per record into `output_dir`, returning
/// how many drafts were written. Files are named `<candidate>_email.txt`.
pub fn write_email_drafts(
    records: &[CandidateRecord],
    job: &JobDescription,
    output_dir: &Path,
) -> Result<usize> {
    std::fs::create_dir_all(output_dir)?;

    let sanitized_jd = sanitize_job_description(&job.text);
    let mut written = 0;

    for record in records {
        let candidate_name = candidate_label(record);
        let draft = render_email(&candidate_name, &sanitized_jd);

        let filename = format!("{}_email.txt", slugify(&candidate_name));
        let path = output_dir.join(filename);
        std::fs::write(&path, draft)?;
        info!("Email draft saved for {}", candidate_name);
        written += 1;
    }

    Ok(written)
}

fn render_email(candidate_name: &str, jd_text: &str) -> String {
    format!(
        "Hi {},\n\n\
         We found your profile suitable for the following position:\n\n\
         {}\n\n\
         Please let us know if you're interested.\n\n\
         Regards,\n\
         Hiring Team\n",
        candidate_name, jd_text
    )
}

fn slugify(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::CandidateProfile;
    use crate::scoring::ScoreOutcome;
    use std::path::PathBuf;

    #[test]
    fn test_sanitize_drops_client_lines() {
        let jd = "Senior Engineer\nWe are hiring for our client, ABC Corp.\nResponsibilities include Rust.";
        let sanitized = sanitize_job_description(jd);

        assert!(sanitized.contains("Senior Engineer"));
        assert!(sanitized.contains("Responsibilities"));
        assert!(!sanitized.contains("ABC Corp"));
    }

    #[test]
    fn test_email_drafts_written() {
        let dir = tempfile::tempdir().unwrap();
        let job = JobDescription::new("Rust Engineer\nBuild services.".to_string());

        let record = CandidateRecord {
            source: PathBuf::from("john_doe.txt"),
            position: 0,
            profile: CandidateProfile {
                name: Some("John Doe".to_string()),
                ..Default::default()
            },
            outcome: ScoreOutcome::plain(80.0),
        };

        let written = write_email_drafts(&[record], &job, dir.path()).unwrap();
        assert_eq!(written, 1);

        let draft = std::fs::read_to_string(dir.path().join("john_doe_email.txt")).unwrap();
        assert!(draft.starts_with("Hi John Doe,"));
        assert!(draft.contains("Rust Engineer"));
    }
}
