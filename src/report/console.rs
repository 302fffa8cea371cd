//! Console rendering of a ranked report

use crate::pipeline::{CandidateRecord, JobDescription};
use crate::report::spreadsheet::candidate_label;
use colored::Colorize;

/// Print the ranked table to stdout, coloring scores by band.
pub fn print_ranked_table(
    records: &[CandidateRecord],
    job: &JobDescription,
    shortlist_threshold: f32,
    detailed: bool,
) {
    if let Some(title) = &job.title {
        println!("\n{} {}", "Job:".bold(), title);
    }
    println!(
        "{:<5} {:<26} {:<28} {:>8}  {}",
        "Rank".bold(),
        "Candidate".bold(),
        "Email".bold(),
        "Match".bold(),
        "Remarks".bold()
    );

    for (index, record) in records.iter().enumerate() {
        let score = record.score();
        let score_text = format!("{:>7.1}%", score);
        let colored_score = if score >= shortlist_threshold {
            score_text.green()
        } else if score >= shortlist_threshold / 2.0 {
            score_text.yellow()
        } else {
            score_text.red()
        };

        println!(
            "{:<5} {:<26} {:<28} {}  {}",
            index + 1,
            truncate(&candidate_label(record), 25),
            truncate(record.profile.email.as_deref().unwrap_or(""), 27),
            colored_score,
            record.outcome.remark.as_deref().unwrap_or(""),
        );

        if detailed {
            print_detail(record);
        }
    }

    let shortlisted = records
        .iter()
        .filter(|r| r.score() >= shortlist_threshold)
        .count();
    println!(
        "\n{} candidates screened, {} above the {:.0}% shortlist threshold",
        records.len(),
        shortlisted,
        shortlist_threshold
    );
}

fn print_detail(record: &CandidateRecord) {
    let profile = &record.profile;
    let fields = [
        ("Phone", &profile.phone),
        ("Experience", &profile.experience_years),
        ("Location", &profile.location),
        ("Company", &profile.current_company),
        ("Current CTC", &profile.current_ctc),
        ("Expected CTC", &profile.expected_ctc),
    ];

    for (label, value) in fields {
        if let Some(value) = value {
            println!("      {}: {}", label.dimmed(), value);
        }
    }
    if !record.outcome.matching_skills.is_empty() {
        println!(
            "      {}: {}",
            "Matching skills".dimmed(),
            record.outcome.matching_skills.join(", ")
        );
    }
    if !record.outcome.missing_skills.is_empty() {
        println!(
            "      {}: {}",
            "Missing skills".dimmed(),
            record.outcome.missing_skills.join(", ")
        );
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max_chars.saturating_sub(1)).collect();
        format!("{}…", cut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_text_unchanged() {
        assert_eq!(truncate("John Doe", 25), "John Doe");
    }

    #[test]
    fn test_truncate_long_text() {
        let long = "A very long candidate display name indeed";
        let cut = truncate(long, 10);

        assert_eq!(cut.chars().count(), 10);
        assert!(cut.ends_with('…'));
    }
}
