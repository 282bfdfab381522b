//! # shift-scorer
//!
//! A library for scoring how well a partially known sequence can be made to
//! agree with a fully known reference of the same length.
//!
//! The target sequence is known only at a sparse set of positions. Runs of
//! unknown positions ("free blocks") may be explained as a shifted copy of
//! the reference, with the shift bounded by the length of the run. The score
//! is the largest number of agreeing positions reachable this way.
//!
//! ## Features
//!
//! - **Prefix scoring**: Known agreements accumulated left to right
//! - **Block segmentation**: Merged runs, or one block per unknown position
//! - **Shift correlation**: One search routine for forward and backward shifts
//! - **Multi-case driver**: Per-case lifecycle hooks with isolated failures
//!
//! ## Example
//!
//! ```rust
//! use shift_scorer::{max_agreement, Override, TestCase};
//!
//! // Reference "abcde"; the target is known only at position 3 (1-based)
//! let case = TestCase::new(b"abcde".to_vec(), vec![Override::new(3, b'c')]);
//! assert_eq!(max_agreement(&case).unwrap(), 1);
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Test cases, overrides and the target sequence
//! - [`scoring`]: Prefix scores, free blocks, shift correlation and aggregation
//! - [`parsing`]: Parser for the multi-test-case input
//! - [`harness`]: Multi-case driver and lifecycle hooks
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod core;
pub mod harness;
pub mod parsing;
pub mod scoring;
pub mod utils;

// Re-export commonly used types for convenience
pub use core::case::{Override, TestCase};
pub use core::sequence::{Alignment, BuildError, Target};
pub use harness::{run_cases, CaseHooks, CaseOutcome};
pub use scoring::{max_agreement, Evaluation, ScoringConfig, SegmentationMode, ShiftScorer};
