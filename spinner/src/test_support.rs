//! Deterministic randomness for unit tests.

use std::collections::VecDeque;

use crate::selection::SpinRng;

/// Replays scripted draws. Falls back to index 0 and the minimum turn count
/// once the script runs dry.
#[derive(Debug, Default)]
pub(crate) struct FixedDraw {
    indices: VecDeque<usize>,
    turns: VecDeque<u32>,
}

impl FixedDraw {
    pub(crate) fn new(indices: &[usize], turns: &[u32]) -> Self {
        Self { indices: indices.iter().copied().collect(), turns: turns.iter().copied().collect() }
    }
}

impl SpinRng for FixedDraw {
    fn pick_index(&mut self, _len: usize) -> usize {
        self.indices.pop_front().unwrap_or(0)
    }

    fn extra_turns(&mut self) -> u32 {
        self.turns.pop_front().unwrap_or(crate::consts::EXTRA_TURNS_MIN)
    }
}
