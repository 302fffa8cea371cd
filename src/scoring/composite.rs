//! Weighted composite of lexical, overlap and keyword-coverage signals

use crate::error::{Result, ScreenerError};
use crate::scoring::lexical::LexicalScorer;
use crate::scoring::overlap::OverlapScorer;
use crate::scoring::tokens::Tokenizer;
use aho_corasick::AhoCorasick;
use strsim::jaro_winkler;

/// Jaro-Winkler threshold for counting a near-miss keyword as covered.
const FUZZY_THRESHOLD: f64 = 0.92;

/// Keywords sampled from the job description for the coverage ratio.
const MAX_JOB_KEYWORDS: usize = 20;

#[derive(Debug, Clone, Copy)]
pub struct CompositeWeights {
    pub lexical: f32,
    pub overlap: f32,
    pub coverage: f32,
}

impl Default for CompositeWeights {
    fn default() -> Self {
        // Fixed blend carried over from the tool this replaces.
        Self {
            lexical: 0.5,
            overlap: 0.3,
            coverage: 0.2,
        }
    }
}

pub struct CompositeScorer {
    lexical: LexicalScorer,
    overlap: OverlapScorer,
    tokenizer: Tokenizer,
    weights: CompositeWeights,
}

impl CompositeScorer {
    pub fn new(weights: CompositeWeights) -> Self {
        Self {
            lexical: LexicalScorer::new(),
            overlap: OverlapScorer::new(),
            tokenizer: Tokenizer::new(),
            weights,
        }
    }

    pub fn score(&self, job_text: &str, resume_text: &str) -> Result<f32> {
        if job_text.trim().is_empty() || resume_text.trim().is_empty() {
            return Ok(0.0);
        }

        let lexical = self.lexical.score(job_text, resume_text);
        let overlap = self.overlap.score(job_text, resume_text);
        let coverage = self.keyword_coverage(job_text, resume_text)? * 100.0;

        let score = self.weights.lexical * lexical
            + self.weights.overlap * overlap
            + self.weights.coverage * coverage;

        Ok(score.clamp(0.0, 100.0))
    }

    /// Fraction of job-description keywords present in the resume, with
    /// exact matches found via Aho-Corasick and near-misses via Jaro-Winkler
    /// over resume tokens.
    fn keyword_coverage(&self, job_text: &str, resume_text: &str) -> Result<f32> {
        let keywords = self.tokenizer.top_keywords(job_text, MAX_JOB_KEYWORDS);
        if keywords.is_empty() {
            return Ok(0.0);
        }

        let matcher = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(&keywords)
            .map_err(|e| ScreenerError::Scoring(format!("Failed to build keyword matcher: {}", e)))?;

        let mut covered = vec![false; keywords.len()];
        for mat in matcher.find_iter(resume_text) {
            covered[mat.pattern().as_usize()] = true;
        }

        let resume_tokens = self.tokenizer.token_set(resume_text);
        for (idx, keyword) in keywords.iter().enumerate() {
            if covered[idx] {
                continue;
            }
            if resume_tokens
                .iter()
                .any(|token| jaro_winkler(token, keyword) >= FUZZY_THRESHOLD)
            {
                covered[idx] = true;
            }
        }

        let matched = covered.iter().filter(|c| **c).count();
        Ok(matched as f32 / keywords.len() as f32)
    }
}

impl Default for CompositeScorer {
    fn default() -> Self {
        Self::new(CompositeWeights::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_inputs_score_zero() {
        let scorer = CompositeScorer::default();
        assert_eq!(scorer.score("", "resume text").unwrap(), 0.0);
        assert_eq!(scorer.score("job text", "").unwrap(), 0.0);
    }

    #[test]
    fn test_identical_text_scores_high() {
        let scorer = CompositeScorer::default();
        let text = "Python developer experienced in SQL and AWS infrastructure";
        let score = scorer.score(text, text).unwrap();

        // Every component saturates when the texts are identical
        assert!(score > 99.0);
    }

    #[test]
    fn test_relevant_resume_outscores_irrelevant() {
        let scorer = CompositeScorer::default();
        let job = "Seeking Python developer with SQL and AWS experience";
        let relevant = "Python engineer, SQL and AWS, data pipelines";
        let irrelevant = "Graphic designer, Photoshop, Illustrator, branding";

        let high = scorer.score(job, relevant).unwrap();
        let low = scorer.score(job, irrelevant).unwrap();
        assert!(high > low);
    }

    #[test]
    fn test_fuzzy_coverage_counts_near_misses() {
        let scorer = CompositeScorer::default();
        // "kubernetes" misspelled in the resume still counts toward coverage
        let coverage = scorer
            .keyword_coverage("kubernetes deployment", "kubernets deployment work")
            .unwrap();

        assert!(coverage > 0.9);
    }
}
