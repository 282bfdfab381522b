use serde::Serialize;
use tracing::debug;

use crate::core::case::TestCase;
use crate::core::sequence::{Alignment, BuildError};
use crate::scoring::blocks::{segment_into, trailing_block, FreeBlock, SegmentationMode};
use crate::scoring::correlation::{backward_correlation, forward_correlation};
use crate::scoring::prefix::PrefixScores;

/// Configuration for the scorer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoringConfig {
    /// How unknown positions are grouped into free blocks
    pub segmentation: SegmentationMode,
}

impl ScoringConfig {
    #[must_use]
    pub fn with_segmentation(mut self, segmentation: SegmentationMode) -> Self {
        self.segmentation = segmentation;
        self
    }
}

/// Which candidate produced the final score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Scenario {
    /// Known agreements only
    Base,
    /// Shift correlation anchored at the trailing free run
    Trailing,
    /// Shift correlation extending forward past a free block
    Extension,
}

/// Result of scoring one test case
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Evaluation {
    /// Sequence length `n`
    pub length: usize,

    /// Agreements between the known target and the reference
    pub base: usize,

    /// Best trailing-run candidate, if the target ends unknown and has a known position
    pub trailing: Option<usize>,

    /// Best per-block extension candidate, if any block qualified
    pub extension: Option<usize>,

    /// Free blocks found in the target
    pub blocks: Vec<FreeBlock>,

    /// Maximum over the base score and both scenarios
    pub best: usize,

    /// Scenario that produced `best`; the base wins ties
    pub scenario: Scenario,
}

/// Scores test cases, reusing its prefix and block buffers between calls
#[derive(Debug, Clone, Default)]
pub struct ShiftScorer {
    config: ScoringConfig,
    prefix: PrefixScores,
    blocks: Vec<FreeBlock>,
}

impl ShiftScorer {
    #[must_use]
    pub fn new(config: ScoringConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Build the alignment for `case` and score it
    ///
    /// # Errors
    ///
    /// Returns `BuildError::OutOfRange` if an override position is outside `[1, n]`.
    pub fn evaluate_case(&mut self, case: &TestCase) -> Result<Evaluation, BuildError> {
        let alignment = Alignment::from_case(case)?;
        Ok(self.evaluate(&alignment))
    }

    /// Score an alignment
    pub fn evaluate(&mut self, alignment: &Alignment) -> Evaluation {
        let len = alignment.len();
        self.prefix.recompute(alignment);
        segment_into(alignment.target(), self.config.segmentation, &mut self.blocks);

        let base = self.prefix.total();
        let trailing = self.best_trailing(alignment);
        let extension = self.best_extension(alignment);

        let mut best = base;
        let mut scenario = Scenario::Base;
        for (candidate, which) in [
            (trailing, Scenario::Trailing),
            (extension, Scenario::Extension),
        ] {
            if let Some(value) = candidate.filter(|&v| v > best) {
                best = value;
                scenario = which;
            }
        }

        debug!(
            length = len,
            blocks = self.blocks.len(),
            base,
            ?trailing,
            ?extension,
            best,
            "Scored test case"
        );

        Evaluation {
            length: len,
            base,
            trailing,
            extension,
            blocks: self.blocks.clone(),
            best,
            scenario,
        }
    }

    /// Every known position `i` is tried as the anchor of a forward shift
    /// bounded by the trailing block's length.
    fn best_trailing(&self, alignment: &Alignment) -> Option<usize> {
        let block = trailing_block(&self.blocks, alignment.len())?;
        let target = alignment.target();

        (0..alignment.len())
            .filter(|&i| !target.is_unknown(i))
            .map(|i| self.prefix.before(i) + forward_correlation(alignment, block.length, i))
            .max()
    }

    /// Each block followed by at least two positions is tried as a backward
    /// shift bounded by its own length, starting just past the block.
    fn best_extension(&self, alignment: &Alignment) -> Option<usize> {
        let len = alignment.len();

        self.blocks
            .iter()
            .filter(|b| b.end() + 1 < len)
            .map(|b| {
                self.prefix.before(b.start) + backward_correlation(alignment, b.length, b.end())
            })
            .max()
    }
}

/// Score a single test case with the default configuration
///
/// # Errors
///
/// Returns `BuildError::OutOfRange` if an override position is outside `[1, n]`.
pub fn max_agreement(case: &TestCase) -> Result<usize, BuildError> {
    ShiftScorer::default()
        .evaluate_case(case)
        .map(|evaluation| evaluation.best)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::case::Override;

    fn case(reference: &str, overrides: &[(usize, u8)]) -> TestCase {
        TestCase::new(
            reference.as_bytes().to_vec(),
            overrides
                .iter()
                .map(|&(p, s)| Override::new(p, s))
                .collect(),
        )
    }

    #[test]
    fn test_single_known_middle_position() {
        let mut scorer = ShiftScorer::default();
        let eval = scorer.evaluate_case(&case("abcde", &[(3, b'c')])).unwrap();

        assert_eq!(eval.base, 1);
        assert_eq!(eval.blocks, vec![FreeBlock::new(0, 2), FreeBlock::new(3, 2)]);
        assert_eq!(eval.trailing, Some(0));
        assert_eq!(eval.extension, Some(0));
        assert_eq!(eval.best, 1);
        assert_eq!(eval.scenario, Scenario::Base);
    }

    #[test]
    fn test_extension_recovers_right_shift() {
        let overrides = [(2, b'a'), (3, b'b'), (4, b'c'), (5, b'd')];
        let eval = ShiftScorer::default()
            .evaluate_case(&case("abcde", &overrides))
            .unwrap();

        assert_eq!(eval.base, 0);
        assert_eq!(eval.trailing, None);
        assert_eq!(eval.extension, Some(4));
        assert_eq!(eval.best, 4);
        assert_eq!(eval.scenario, Scenario::Extension);
    }

    #[test]
    fn test_trailing_recovers_left_shift() {
        let overrides = [(1, b'b'), (2, b'c'), (3, b'd')];
        let eval = ShiftScorer::default()
            .evaluate_case(&case("abcde", &overrides))
            .unwrap();

        assert_eq!(eval.base, 0);
        assert_eq!(eval.trailing, Some(3));
        assert_eq!(eval.extension, None);
        assert_eq!(eval.best, 3);
        assert_eq!(eval.scenario, Scenario::Trailing);
    }

    #[test]
    fn test_fully_known_is_exact_agreement() {
        let overrides = [(1, b'a'), (2, b'x'), (3, b'c')];
        let eval = ShiftScorer::default()
            .evaluate_case(&case("abc", &overrides))
            .unwrap();

        assert!(eval.blocks.is_empty());
        assert_eq!(eval.trailing, None);
        assert_eq!(eval.extension, None);
        assert_eq!(eval.best, 2);
    }

    #[test]
    fn test_single_unknown_position() {
        assert_eq!(max_agreement(&case("a", &[])).unwrap(), 0);
    }

    #[test]
    fn test_empty_sequence() {
        let eval = ShiftScorer::default().evaluate_case(&case("", &[])).unwrap();
        assert_eq!(eval.best, 0);
        assert!(eval.blocks.is_empty());
    }

    #[test]
    fn test_no_overrides() {
        let eval = ShiftScorer::default()
            .evaluate_case(&case("abc", &[]))
            .unwrap();
        assert_eq!(eval.blocks, vec![FreeBlock::new(0, 3)]);
        assert_eq!(eval.trailing, None);
        assert_eq!(eval.best, 0);
    }

    #[test]
    fn test_out_of_range_is_reported() {
        let err = max_agreement(&case("abc", &[(4, b'a')])).unwrap_err();
        assert!(matches!(err, BuildError::OutOfRange { position: 4, length: 3 }));
    }

    #[test]
    fn test_per_position_bounds_shift_by_one() {
        // With merged blocks the leading run allows a shift of 2
        let overrides = [(3, b'a'), (4, b'b'), (5, b'c'), (6, b'd')];
        let merged = ShiftScorer::default()
            .evaluate_case(&case("abcdef", &overrides))
            .unwrap();
        assert_eq!(merged.best, 4);

        let config = ScoringConfig::default().with_segmentation(SegmentationMode::PerPosition);
        let per_position = ShiftScorer::new(config)
            .evaluate_case(&case("abcdef", &overrides))
            .unwrap();
        assert_eq!(per_position.blocks.len(), 2);
        assert_eq!(per_position.best, 0);
    }

    #[test]
    fn test_scorer_is_reusable() {
        let mut scorer = ShiftScorer::default();
        let first = scorer.evaluate_case(&case("abcde", &[(3, b'c')])).unwrap();
        scorer.evaluate_case(&case("zz", &[(1, b'z')])).unwrap();
        let again = scorer.evaluate_case(&case("abcde", &[(3, b'c')])).unwrap();
        assert_eq!(first, again);
    }

    #[test]
    fn test_evaluation_json_shape() {
        let eval = max_evaluation("abcde", &[(2, b'a'), (3, b'b'), (4, b'c'), (5, b'd')]);
        let json = serde_json::to_value(&eval).unwrap();

        assert_eq!(json["scenario"], "extension");
        assert_eq!(json["trailing"], serde_json::Value::Null);
        assert_eq!(json["blocks"], serde_json::json!([{ "start": 0, "length": 1 }]));
        assert_eq!(json["best"], 4);
    }

    fn max_evaluation(reference: &str, overrides: &[(usize, u8)]) -> Evaluation {
        ShiftScorer::default()
            .evaluate_case(&case(reference, overrides))
            .unwrap()
    }
}
