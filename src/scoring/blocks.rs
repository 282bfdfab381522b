use serde::Serialize;

use crate::core::sequence::Target;

/// A run of unknown target positions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FreeBlock {
    /// 0-based index of the first unknown position
    pub start: usize,

    /// Number of unknown positions in the run
    pub length: usize,
}

impl FreeBlock {
    pub fn new(start: usize, length: usize) -> Self {
        Self { start, length }
    }

    /// Exclusive end index
    #[must_use]
    pub fn end(&self) -> usize {
        self.start + self.length
    }
}

/// How consecutive unknown positions are grouped into blocks
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum SegmentationMode {
    /// Maximal runs of unknown positions form a single block
    #[default]
    Merged,
    /// Every unknown position is its own block of length 1
    PerPosition,
}

/// Segment `target` into free blocks, left to right
#[must_use]
pub fn segment_free_blocks(target: &Target, mode: SegmentationMode) -> Vec<FreeBlock> {
    let mut blocks = Vec::new();
    segment_into(target, mode, &mut blocks);
    blocks
}

/// Segment `target` into `blocks`, clearing whatever was there
pub fn segment_into(target: &Target, mode: SegmentationMode, blocks: &mut Vec<FreeBlock>) {
    blocks.clear();

    let mut open: Option<FreeBlock> = None;
    for (i, symbol) in target.symbols().iter().enumerate() {
        if symbol.is_some() {
            blocks.extend(open.take());
            continue;
        }

        match open.as_mut() {
            Some(block) if mode == SegmentationMode::Merged => block.length += 1,
            _ => blocks.extend(open.replace(FreeBlock::new(i, 1))),
        }
    }

    blocks.extend(open);
}

/// The block ending at the last position, if the target ends unknown
#[must_use]
pub fn trailing_block(blocks: &[FreeBlock], len: usize) -> Option<FreeBlock> {
    blocks.last().copied().filter(|b| len > 0 && b.end() == len)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::case::Override;

    fn target(len: usize, known: &[usize]) -> Target {
        let overrides: Vec<Override> = known.iter().map(|&p| Override::new(p, b'x')).collect();
        let mut target = Target::unknown(len);
        target.apply(&overrides).unwrap();
        target
    }

    #[test]
    fn test_merged_runs() {
        let t = target(5, &[3]);
        let blocks = segment_free_blocks(&t, SegmentationMode::Merged);
        assert_eq!(blocks, vec![FreeBlock::new(0, 2), FreeBlock::new(3, 2)]);
        assert_eq!(trailing_block(&blocks, 5), Some(FreeBlock::new(3, 2)));
    }

    #[test]
    fn test_per_position_blocks() {
        let t = target(5, &[3]);
        let blocks = segment_free_blocks(&t, SegmentationMode::PerPosition);
        assert_eq!(
            blocks,
            vec![
                FreeBlock::new(0, 1),
                FreeBlock::new(1, 1),
                FreeBlock::new(3, 1),
                FreeBlock::new(4, 1),
            ]
        );
        assert_eq!(trailing_block(&blocks, 5), Some(FreeBlock::new(4, 1)));
    }

    #[test]
    fn test_fully_known_has_no_blocks() {
        let t = target(3, &[1, 2, 3]);
        assert!(segment_free_blocks(&t, SegmentationMode::Merged).is_empty());
        assert_eq!(trailing_block(&[], 3), None);
    }

    #[test]
    fn test_fully_unknown_is_one_block() {
        let t = target(4, &[]);
        let blocks = segment_free_blocks(&t, SegmentationMode::Merged);
        assert_eq!(blocks, vec![FreeBlock::new(0, 4)]);
    }

    #[test]
    fn test_no_trailing_block_when_last_known() {
        let t = target(4, &[4]);
        let blocks = segment_free_blocks(&t, SegmentationMode::Merged);
        assert_eq!(blocks, vec![FreeBlock::new(0, 3)]);
        assert_eq!(trailing_block(&blocks, 4), None);
    }

    #[test]
    fn test_segment_into_clears_previous() {
        let mut blocks = vec![FreeBlock::new(7, 7)];
        segment_into(&target(2, &[1]), SegmentationMode::Merged, &mut blocks);
        assert_eq!(blocks, vec![FreeBlock::new(1, 1)]);
    }
}
