use crate::core::sequence::Alignment;

/// Cumulative agreement counts: `at(i)` is the number of positions `j <= i`
/// where the target is known and equals the reference.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrefixScores {
    scores: Vec<usize>,
}

impl PrefixScores {
    #[must_use]
    pub fn compute(alignment: &Alignment) -> Self {
        let mut scores = Self::default();
        scores.recompute(alignment);
        scores
    }

    /// Recompute in place, reusing the existing allocation
    pub fn recompute(&mut self, alignment: &Alignment) {
        self.scores.clear();
        self.scores.reserve(alignment.len());

        let mut running = 0usize;
        for i in 0..alignment.len() {
            if alignment.agrees_at(i) {
                running += 1;
            }
            self.scores.push(running);
        }
    }

    /// Score up to and including `index`, `None` past the end
    #[must_use]
    pub fn at(&self, index: usize) -> Option<usize> {
        self.scores.get(index).copied()
    }

    /// Score strictly before `index`, i.e. `score[index - 1]` with `score[-1] = 0`
    #[must_use]
    pub fn before(&self, index: usize) -> usize {
        index.checked_sub(1).and_then(|i| self.at(i)).unwrap_or(0)
    }

    /// Agreement count over the whole sequence
    #[must_use]
    pub fn total(&self) -> usize {
        self.scores.last().copied().unwrap_or(0)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[usize] {
        &self.scores
    }
}
