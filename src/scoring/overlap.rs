//! Jaccard set-overlap similarity

use crate::scoring::tokens::Tokenizer;

pub struct OverlapScorer {
    tokenizer: Tokenizer,
}

impl Default for OverlapScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl OverlapScorer {
    pub fn new() -> Self {
        Self {
            tokenizer: Tokenizer::new(),
        }
    }

    /// Intersection-over-union of the token sets, scaled to [0,100].
    /// Either side empty scores 0.
    pub fn score(&self, job_text: &str, resume_text: &str) -> f32 {
        let job_set = self.tokenizer.token_set(job_text);
        let resume_set = self.tokenizer.token_set(resume_text);

        if job_set.is_empty() || resume_set.is_empty() {
            return 0.0;
        }

        let intersection = job_set.intersection(&resume_set).count();
        let union = job_set.union(&resume_set).count();

        if union == 0 {
            0.0
        } else {
            (intersection as f32 / union as f32) * 100.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_sets_score_full() {
        let scorer = OverlapScorer::new();
        let text = "Rust systems programming and async services";

        assert!((scorer.score(text, text) - 100.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_symmetry() {
        let scorer = OverlapScorer::new();
        let a = "Python SQL AWS";
        let b = "Python Java Docker";

        assert_eq!(scorer.score(a, b), scorer.score(b, a));
    }

    #[test]
    fn test_empty_inputs_score_zero() {
        let scorer = OverlapScorer::new();
        assert_eq!(scorer.score("", "resume"), 0.0);
        assert_eq!(scorer.score("job", ""), 0.0);
    }

    #[test]
    fn test_half_overlap() {
        let scorer = OverlapScorer::new();
        // Sets {python, sql} and {python, photoshop}: 1 of 3
        let score = scorer.score("Python SQL", "Python Photoshop");

        assert!((score - 100.0 / 3.0).abs() < 0.01);
    }
}
