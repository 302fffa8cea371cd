//! Similarity scoring strategies
//!
//! Five interchangeable strategies sit behind one interface. They are not
//! numerically compatible with each other, so a ranking pass uses exactly
//! one of them for every candidate.

pub mod composite;
pub mod embedding;
pub mod lexical;
pub mod overlap;
pub mod remote;
pub mod tokens;

use crate::config::Config;
use crate::error::Result;
use clap::ValueEnum;
use composite::{CompositeScorer, CompositeWeights};
use embedding::EmbeddingScorer;
use lexical::LexicalScorer;
use overlap::OverlapScorer;
use remote::RemoteScorer;
use serde::{Deserialize, Serialize};

/// Which scoring strategy a ranking pass uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyKind {
    /// TF-IDF cosine similarity
    Lexical,
    /// Jaccard token-set overlap
    Overlap,
    /// Weighted blend of lexical, overlap and keyword coverage
    Composite,
    /// Model2Vec embedding cosine similarity
    Embedding,
    /// Remote LLM judgment
    Remote,
}

impl std::fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            StrategyKind::Lexical => "lexical",
            StrategyKind::Overlap => "overlap",
            StrategyKind::Composite => "composite",
            StrategyKind::Embedding => "embedding",
            StrategyKind::Remote => "remote",
        };
        write!(f, "{}", name)
    }
}

/// Score in [0,100] plus whatever structured explanation the strategy
/// produced. Only the remote strategy fills the skill lists.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoreOutcome {
    pub score: f32,
    pub matching_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub remark: Option<String>,
}

impl ScoreOutcome {
    pub fn plain(score: f32) -> Self {
        Self {
            score,
            ..Default::default()
        }
    }

    pub fn zero_with_remark(remark: String) -> Self {
        Self {
            score: 0.0,
            remark: Some(remark),
            ..Default::default()
        }
    }
}

pub enum Scorer {
    Lexical(LexicalScorer),
    Overlap(OverlapScorer),
    Composite(CompositeScorer),
    Embedding(EmbeddingScorer),
    Remote(RemoteScorer),
}

impl Scorer {
    pub fn from_config(kind: StrategyKind, config: &Config) -> Result<Self> {
        Ok(match kind {
            StrategyKind::Lexical => Scorer::Lexical(LexicalScorer::new()),
            StrategyKind::Overlap => Scorer::Overlap(OverlapScorer::new()),
            StrategyKind::Composite => Scorer::Composite(CompositeScorer::new(CompositeWeights {
                lexical: config.scoring.lexical_weight,
                overlap: config.scoring.overlap_weight,
                coverage: config.scoring.coverage_weight,
            })),
            StrategyKind::Embedding => {
                Scorer::Embedding(EmbeddingScorer::new(&config.embedding.model_path))
            }
            StrategyKind::Remote => Scorer::Remote(RemoteScorer::new(&config.remote)?),
        })
    }

    pub fn kind(&self) -> StrategyKind {
        match self {
            Scorer::Lexical(_) => StrategyKind::Lexical,
            Scorer::Overlap(_) => StrategyKind::Overlap,
            Scorer::Composite(_) => StrategyKind::Composite,
            Scorer::Embedding(_) => StrategyKind::Embedding,
            Scorer::Remote(_) => StrategyKind::Remote,
        }
    }

    /// Score one resume against the job description.
    ///
    /// The remote strategy never surfaces its failures here: network or
    /// parse errors become a zero score with the error text as the remark,
    /// so one flaky call cannot abort the batch.
    pub async fn score(&mut self, job_text: &str, resume_text: &str) -> Result<ScoreOutcome> {
        match self {
            Scorer::Lexical(scorer) => Ok(ScoreOutcome::plain(scorer.score(job_text, resume_text))),
            Scorer::Overlap(scorer) => Ok(ScoreOutcome::plain(scorer.score(job_text, resume_text))),
            Scorer::Composite(scorer) => {
                Ok(ScoreOutcome::plain(scorer.score(job_text, resume_text)?))
            }
            Scorer::Embedding(scorer) => {
                Ok(ScoreOutcome::plain(scorer.score(job_text, resume_text)?))
            }
            Scorer::Remote(scorer) => match scorer.judge(job_text, resume_text).await {
                Ok(judgment) => Ok(ScoreOutcome {
                    score: judgment.score,
                    matching_skills: judgment.matching_skills,
                    missing_skills: judgment.missing_skills,
                    remark: judgment.remark,
                }),
                Err(e) => Ok(ScoreOutcome::zero_with_remark(format!(
                    "remote judgment failed: {}",
                    e
                ))),
            },
        }
    }
}
