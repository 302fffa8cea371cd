//! TF-IDF cosine similarity over the two documents

use crate::scoring::tokens::Tokenizer;
use std::collections::HashMap;

pub struct LexicalScorer {
    tokenizer: Tokenizer,
}

impl Default for LexicalScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl LexicalScorer {
    pub fn new() -> Self {
        Self {
            tokenizer: Tokenizer::new(),
        }
    }

    /// Cosine similarity between smoothed TF-IDF vectors of the two texts,
    /// scaled to [0,100]. Empty or stop-word-only input scores 0.
    ///
    /// IDF is smoothed as `1 + ln((1 + n) / (1 + df))` so that terms shared
    /// by both documents keep nonzero weight and self-similarity is exactly
    /// 100.
    pub fn score(&self, job_text: &str, resume_text: &str) -> f32 {
        let job_tokens = self.tokenizer.tokenize(job_text);
        let resume_tokens = self.tokenizer.tokenize(resume_text);

        if job_tokens.is_empty() || resume_tokens.is_empty() {
            return 0.0;
        }

        let job_tf = term_frequencies(&job_tokens);
        let resume_tf = term_frequencies(&resume_tokens);

        let mut vocabulary: Vec<&String> = job_tf.keys().chain(resume_tf.keys()).collect();
        vocabulary.sort();
        vocabulary.dedup();

        let n_docs = 2.0_f32;
        let mut dot = 0.0_f32;
        let mut norm_job = 0.0_f32;
        let mut norm_resume = 0.0_f32;

        for term in vocabulary {
            let tf_job = job_tf.get(term).copied().unwrap_or(0.0);
            let tf_resume = resume_tf.get(term).copied().unwrap_or(0.0);

            let df = (tf_job > 0.0) as u32 + (tf_resume > 0.0) as u32;
            let idf = 1.0 + ((1.0 + n_docs) / (1.0 + df as f32)).ln();

            let w_job = tf_job * idf;
            let w_resume = tf_resume * idf;

            dot += w_job * w_resume;
            norm_job += w_job * w_job;
            norm_resume += w_resume * w_resume;
        }

        if norm_job == 0.0 || norm_resume == 0.0 {
            return 0.0;
        }

        let cosine = dot / (norm_job.sqrt() * norm_resume.sqrt());
        (cosine * 100.0).clamp(0.0, 100.0)
    }
}

fn term_frequencies(tokens: &[String]) -> HashMap<String, f32> {
    let mut counts: HashMap<String, f32> = HashMap::new();
    for token in tokens {
        *counts.entry(token.clone()).or_insert(0.0) += 1.0;
    }
    let total = tokens.len() as f32;
    for value in counts.values_mut() {
        *value /= total;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_self_similarity_is_maximal() {
        let scorer = LexicalScorer::new();
        let text = "Python developer with SQL and AWS experience building data pipelines";
        let score = scorer.score(text, text);

        assert!((score - 100.0).abs() < 0.5);
    }

    #[test]
    fn test_symmetry() {
        let scorer = LexicalScorer::new();
        let a = "Rust engineer building network services";
        let b = "Frontend developer working in React and CSS";

        assert_eq!(scorer.score(a, b), scorer.score(b, a));
    }

    #[test]
    fn test_empty_inputs_score_zero() {
        let scorer = LexicalScorer::new();
        assert_eq!(scorer.score("", "some resume text"), 0.0);
        assert_eq!(scorer.score("some job text", ""), 0.0);
        assert_eq!(scorer.score("", ""), 0.0);
    }

    #[test]
    fn test_disjoint_texts_score_low() {
        let scorer = LexicalScorer::new();
        let job = "Python SQL AWS backend";
        let resume = "Photoshop Illustrator typography branding";

        assert_eq!(scorer.score(job, resume), 0.0);
    }

    #[test]
    fn test_partial_overlap_between_bounds() {
        let scorer = LexicalScorer::new();
        let job = "Python SQL AWS";
        let resume = "Python Java Photoshop";
        let score = scorer.score(job, resume);

        assert!(score > 0.0);
        assert!(score < 100.0);
    }
}
