//! Core data types for a single test case.
//!
//! - [`TestCase`]: The reference and sparse overrides as read from input
//! - [`Override`]: One 1-based (position, symbol) assignment
//! - [`Target`]: The partially known target sequence
//! - [`Alignment`]: Reference and target together, ready for scoring
//!
//! ## Positions
//!
//! | Where | Indexing |
//! |-------|----------|
//! | Input overrides | 1-based |
//! | Everything else | 0-based |

pub mod case;
pub mod sequence;
