//! Semantic similarity via Model2Vec static embeddings
//!
//! The model handle is loaded lazily on first use and never mutated after
//! that, so a batch pays the load cost once.

use crate::error::{Result, ScreenerError};
use log::info;
use model2vec_rs::model::StaticModel;
use std::path::{Path, PathBuf};
use std::time::Instant;

pub struct EmbeddingScorer {
    model_path: PathBuf,
    model: Option<StaticModel>,
}

impl EmbeddingScorer {
    pub fn new(model_path: &Path) -> Self {
        Self {
            model_path: model_path.to_path_buf(),
            model: None,
        }
    }

    fn ensure_model(&mut self) -> Result<&StaticModel> {
        if self.model.is_none() {
            let start = Instant::now();
            info!(
                "Loading Model2Vec embedding model from: {}",
                self.model_path.display()
            );

            let model = StaticModel::from_pretrained(
                &self.model_path,
                None, // token
                None, // normalize
                None, // subfolder
            )
            .map_err(|e| {
                ScreenerError::Embedding(format!(
                    "Failed to load embedding model '{}': {}",
                    self.model_path.display(),
                    e
                ))
            })?;

            info!("Embedding model loaded in {:.2?}", start.elapsed());
            self.model = Some(model);
        }

        Ok(self.model.as_ref().expect("model loaded above"))
    }

    /// Cosine similarity between the two document embeddings, scaled and
    /// clamped to [0,100]. Empty input scores 0 without touching the model.
    pub fn score(&mut self, job_text: &str, resume_text: &str) -> Result<f32> {
        if job_text.trim().is_empty() || resume_text.trim().is_empty() {
            return Ok(0.0);
        }

        let model = self.ensure_model()?;
        let embeddings = model.encode(&[job_text.to_string(), resume_text.to_string()]);
        if embeddings.len() != 2 {
            return Err(ScreenerError::Embedding(format!(
                "Expected 2 embeddings, got {}",
                embeddings.len()
            )));
        }

        let cosine = cosine_similarity(&embeddings[0], &embeddings[1])?;
        Ok((cosine * 100.0).clamp(0.0, 100.0))
    }

    pub fn is_loaded(&self) -> bool {
        self.model.is_some()
    }
}

/// Cosine similarity between two equal-length vectors; degenerate vectors
/// score 0.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> Result<f32> {
    if a.len() != b.len() {
        return Err(ScreenerError::Embedding(format!(
            "Embedding dimensions don't match: {} vs {}",
            a.len(),
            b.len()
        )));
    }

    if a.is_empty() {
        return Ok(0.0);
    }

    let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        Ok(0.0)
    } else {
        Ok(dot / (norm_a * norm_b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cosine_identical_vectors() {
        let v = vec![0.5, -0.25, 0.75];
        let score = cosine_similarity(&v, &v).unwrap();

        assert!((score - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_cosine_orthogonal_vectors() {
        let a = vec![1.0, 0.0];
        let b = vec![0.0, 1.0];

        assert!(cosine_similarity(&a, &b).unwrap().abs() < 1e-6);
    }

    #[test]
    fn test_cosine_zero_vector() {
        let a = vec![0.0, 0.0];
        let b = vec![1.0, 2.0];

        assert_eq!(cosine_similarity(&a, &b).unwrap(), 0.0);
    }

    #[test]
    fn test_cosine_dimension_mismatch() {
        let a = vec![1.0];
        let b = vec![1.0, 2.0];

        assert!(cosine_similarity(&a, &b).is_err());
    }

    #[test]
    fn test_empty_text_skips_model_load() {
        let mut scorer = EmbeddingScorer::new(Path::new("/nonexistent/model"));
        // Returns zero without attempting to load the missing model
        assert_eq!(scorer.score("", "resume").unwrap(), 0.0);
        assert!(!scorer.is_loaded());
    }

    #[test]
    fn test_missing_model_is_embedding_error() {
        let mut scorer = EmbeddingScorer::new(Path::new("/nonexistent/model"));
        let err = scorer.score("job text", "resume text").unwrap_err();

        assert!(matches!(err, ScreenerError::Embedding(_)));
        assert!(err.to_string().contains("/nonexistent/model"));
    }
}
