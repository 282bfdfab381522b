//! Shift-based agreement scoring.
//!
//! This module provides the scoring pipeline for one test case:
//!
//! - [`PrefixScores`]: Cumulative agreement between the known target and the reference
//! - [`segment_free_blocks`]: Runs of unknown target positions ([`FreeBlock`])
//! - [`best_shift`]: Shift correlation search in either [`ShiftDirection`]
//! - [`ShiftScorer`]: Combines the above into an [`Evaluation`]
//!
//! ## Algorithm
//!
//! The final score is the maximum of three candidates:
//!
//! 1. **Base**: positions where the known target already equals the reference
//! 2. **Trailing run**: if the target ends unknown, each known position `i` is
//!    scored as `score[i - 1]` plus the best forward correlation from `i`,
//!    with shifts bounded by the trailing block's length
//! 3. **Extension**: each free block followed by at least two positions is
//!    scored as `score[start - 1]` plus the best backward correlation from the
//!    block's end, with shifts bounded by the block's length
//!
//! ## Example
//!
//! ```rust
//! use shift_scorer::core::case::{Override, TestCase};
//! use shift_scorer::scoring::ShiftScorer;
//!
//! let case = TestCase::new(b"abcde".to_vec(), vec![Override::new(3, b'c')]);
//! let evaluation = ShiftScorer::default().evaluate_case(&case).unwrap();
//! assert_eq!(evaluation.best, 1);
//! ```

pub mod aggregate;
pub mod blocks;
pub mod correlation;
pub mod prefix;

pub use aggregate::{max_agreement, Evaluation, Scenario, ScoringConfig, ShiftScorer};
pub use blocks::{segment_free_blocks, FreeBlock, SegmentationMode};
pub use correlation::{best_shift, correlation_at, ShiftDirection, ShiftMatch};
pub use prefix::PrefixScores;
