//! Candidate ranking

use crate::pipeline::CandidateRecord;
use std::cmp::Ordering;

/// Sort records descending by score. The sort is stable and records carry
/// their upload position, so ties keep upload order and repeated calls over
/// the same input produce identical orderings.
pub fn rank(mut records: Vec<CandidateRecord>) -> Vec<CandidateRecord> {
    records.sort_by(|a, b| {
        b.score()
            .partial_cmp(&a.score())
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.position.cmp(&b.position))
    });
    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::CandidateProfile;
    use crate::scoring::ScoreOutcome;
    use std::path::PathBuf;

    fn record(position: usize, score: f32) -> CandidateRecord {
        CandidateRecord {
            source: PathBuf::from(format!("resume_{}.txt", position)),
            position,
            profile: CandidateProfile::default(),
            outcome: ScoreOutcome::plain(score),
        }
    }

    #[test]
    fn test_descending_order() {
        let ranked = rank(vec![record(0, 12.0), record(1, 87.5), record(2, 45.0)]);

        let scores: Vec<f32> = ranked.iter().map(|r| r.score()).collect();
        assert_eq!(scores, vec![87.5, 45.0, 12.0]);
    }

    #[test]
    fn test_ties_keep_upload_order() {
        let ranked = rank(vec![record(0, 50.0), record(1, 50.0), record(2, 50.0)]);

        let positions: Vec<usize> = ranked.iter().map(|r| r.position).collect();
        assert_eq!(positions, vec![0, 1, 2]);
    }

    #[test]
    fn test_ranking_is_deterministic() {
        let input = vec![record(0, 30.0), record(1, 90.0), record(2, 30.0), record(3, 60.0)];

        let first: Vec<usize> = rank(input.clone()).iter().map(|r| r.position).collect();
        let second: Vec<usize> = rank(input).iter().map(|r| r.position).collect();

        assert_eq!(first, second);
        assert_eq!(first, vec![1, 3, 0, 2]);
    }

    #[test]
    fn test_empty_input() {
        assert!(rank(Vec::new()).is_empty());
    }
}
