//! Reference and target sequences for a single test case.
//!
//! The target starts out entirely unknown and is filled in from the case's
//! overrides. Positions in overrides are 1-based; everything here is 0-based.

use std::fmt;

use thiserror::Error;

use crate::core::case::{Override, TestCase};

/// Character used when rendering an unknown target position
pub const UNKNOWN_DISPLAY: char = '?';

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    #[error("Override position {position} is out of range [1, {length}]")]
    OutOfRange { position: usize, length: usize },
}

/// Partially known target sequence; `None` marks an unknown position
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Target {
    symbols: Vec<Option<u8>>,
}

impl Target {
    /// Create an all-unknown target of length `len`
    #[must_use]
    pub fn unknown(len: usize) -> Self {
        Self {
            symbols: vec![None; len],
        }
    }

    /// Apply overrides in order. A repeated position keeps the last symbol.
    ///
    /// # Errors
    ///
    /// Returns `BuildError::OutOfRange` if a position is 0 or larger than the
    /// target length. The target is left unchanged in that case.
    pub fn apply(&mut self, overrides: &[Override]) -> Result<(), BuildError> {
        let length = self.symbols.len();
        if let Some(bad) = overrides
            .iter()
            .find(|o| o.index().map_or(true, |i| i >= length))
        {
            return Err(BuildError::OutOfRange {
                position: bad.position,
                length,
            });
        }

        for o in overrides {
            if let Some(slot) = o.index().and_then(|i| self.symbols.get_mut(i)) {
                *slot = Some(o.symbol);
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Symbol at `index`, `None` if unknown or out of bounds
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<u8> {
        self.symbols.get(index).copied().flatten()
    }

    #[inline]
    #[must_use]
    pub fn is_unknown(&self, index: usize) -> bool {
        matches!(self.symbols.get(index), Some(None))
    }

    #[must_use]
    pub fn symbols(&self) -> &[Option<u8>] {
        &self.symbols
    }

    /// Number of concrete positions
    #[must_use]
    pub fn known_count(&self) -> usize {
        self.symbols.iter().filter(|s| s.is_some()).count()
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in &self.symbols {
            let c = symbol.map_or(UNKNOWN_DISPLAY, char::from);
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

/// A reference sequence paired with the target built from its overrides
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alignment {
    reference: Vec<u8>,
    target: Target,
}

impl Alignment {
    /// Build the target for `reference` by applying `overrides`
    ///
    /// # Errors
    ///
    /// Returns `BuildError::OutOfRange` if any override position is outside
    /// `[1, reference.len()]`.
    pub fn build(reference: &[u8], overrides: &[Override]) -> Result<Self, BuildError> {
        let mut target = Target::unknown(reference.len());
        target.apply(overrides)?;

        Ok(Self {
            reference: reference.to_vec(),
            target,
        })
    }

    /// Build from a parsed test case
    ///
    /// # Errors
    ///
    /// Same as [`Alignment::build`].
    pub fn from_case(case: &TestCase) -> Result<Self, BuildError> {
        Self::build(&case.reference, &case.overrides)
    }

    #[must_use]
    pub fn reference(&self) -> &[u8] {
        &self.reference
    }

    #[must_use]
    pub fn target(&self) -> &Target {
        &self.target
    }

    /// Sequence length `n`
    #[must_use]
    pub fn len(&self) -> usize {
        self.reference.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.reference.is_empty()
    }

    /// True when the target at `index` is known and equals the reference
    #[inline]
    #[must_use]
    pub fn agrees_at(&self, index: usize) -> bool {
        self.target
            .get(index)
            .is_some_and(|s| self.reference.get(index) == Some(&s))
    }
}
