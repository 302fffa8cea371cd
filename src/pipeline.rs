//! Screening pipeline: extract, profile and score one batch of resumes

use crate::input::InputManager;
use crate::profile::{CandidateProfile, FieldExtractor};
use crate::scoring::{ScoreOutcome, Scorer};
use indicatif::{ProgressBar, ProgressStyle};
use log::warn;
use std::path::{Path, PathBuf};

/// The comparison baseline for one screening run.
#[derive(Debug, Clone)]
pub struct JobDescription {
    pub text: String,
    pub title: Option<String>,
}

impl JobDescription {
    pub fn new(text: String) -> Self {
        let title = extract_title(&text);
        Self { text, title }
    }
}

/// Title heuristic: first short, plausible-looking line.
fn extract_title(text: &str) -> Option<String> {
    text.lines()
        .map(str::trim)
        .find(|line| {
            !line.is_empty() && line.len() > 5 && line.len() < 100 && !line.contains('@')
        })
        .map(|line| line.to_string())
}

/// One scored candidate. Immutable once built; `position` preserves upload
/// order and is the ranking tie-break.
#[derive(Debug, Clone)]
pub struct CandidateRecord {
    pub source: PathBuf,
    pub position: usize,
    pub profile: CandidateProfile,
    pub outcome: ScoreOutcome,
}

impl CandidateRecord {
    pub fn score(&self) -> f32 {
        self.outcome.score
    }

    fn skipped(source: &Path, position: usize, remark: String) -> Self {
        Self {
            source: source.to_path_buf(),
            position,
            profile: CandidateProfile::default(),
            outcome: ScoreOutcome::zero_with_remark(remark),
        }
    }
}

/// Screen a batch of resumes against one job description.
///
/// Each candidate is processed independently; extraction or scoring trouble
/// for one resume is recorded as a zero-score record with a diagnostic
/// remark and never aborts the rest of the batch. Records come back in
/// upload order.
pub async fn screen(
    job: &JobDescription,
    resume_paths: &[PathBuf],
    scorer: &mut Scorer,
    input_manager: &mut InputManager,
    show_progress: bool,
) -> Vec<CandidateRecord> {
    let extractor = FieldExtractor::new();
    let mut records = Vec::with_capacity(resume_paths.len());

    let progress = if show_progress {
        let bar = ProgressBar::new(resume_paths.len() as u64);
        bar.set_style(
            ProgressStyle::with_template("{bar:40.cyan/blue} {pos}/{len} {msg}")
                .expect("Invalid progress template"),
        );
        Some(bar)
    } else {
        None
    };

    for (position, path) in resume_paths.iter().enumerate() {
        if let Some(bar) = &progress {
            bar.set_message(
                path.file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default(),
            );
        }

        let record = screen_one(job, path, position, scorer, input_manager, &extractor).await;
        records.push(record);

        if let Some(bar) = &progress {
            bar.inc(1);
        }
    }

    if let Some(bar) = progress {
        bar.finish_and_clear();
    }

    records
}

async fn screen_one(
    job: &JobDescription,
    path: &Path,
    position: usize,
    scorer: &mut Scorer,
    input_manager: &mut InputManager,
    extractor: &FieldExtractor,
) -> CandidateRecord {
    let text = match input_manager.extract_text(path).await {
        Ok(text) => text,
        Err(e) => {
            warn!("Skipping {}: {}", path.display(), e);
            return CandidateRecord::skipped(path, position, format!("unreadable document: {}", e));
        }
    };

    if text.trim().is_empty() {
        return CandidateRecord::skipped(path, position, "no usable content".to_string());
    }

    let filename_hint = path.to_string_lossy();
    let profile = extractor.extract(&text, &filename_hint);

    let outcome = match scorer.score(&job.text, &text).await {
        Ok(outcome) => outcome,
        Err(e) => {
            warn!("Scoring failed for {}: {}", path.display(), e);
            ScoreOutcome::zero_with_remark(format!("scoring failed: {}", e))
        }
    };

    CandidateRecord {
        source: path.to_path_buf(),
        position,
        profile,
        outcome,
    }
}
