/// A single assignment of a concrete symbol to a target position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Override {
    /// 1-based position in the target sequence
    pub position: usize,

    /// Symbol written at `position`
    pub symbol: u8,
}

impl Override {
    pub fn new(position: usize, symbol: u8) -> Self {
        Self { position, symbol }
    }

    /// 0-based index of this override, or `None` for position 0
    #[must_use]
    pub fn index(&self) -> Option<usize> {
        self.position.checked_sub(1)
    }
}

/// One test case as read from the input: a reference and sparse target overrides
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TestCase {
    /// Fully known reference sequence
    pub reference: Vec<u8>,

    /// Overrides applied, in order, to an all-unknown target
    pub overrides: Vec<Override>,
}

impl TestCase {
    pub fn new(reference: impl Into<Vec<u8>>, overrides: Vec<Override>) -> Self {
        Self {
            reference: reference.into(),
            overrides,
        }
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
}
