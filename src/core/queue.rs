//! Shared piece queue - one generation stream, two consumption cursors
//!
//! Both sides of the match draw from the same randomly generated sequence of
//! pieces so neither gets a luckier bag. Each side has its own FIFO cursor
//! and consumes at its own pace; whenever a side runs dry, one new piece is
//! generated and appended to *both* cursors, so position k in each side's
//! consumption order is always the same piece.
//!
//! Randomization is uniform independent draws over the 7 kinds (replacement
//! allowed): no 7-bag, so droughts and repeats are possible for both sides
//! alike.

use std::collections::VecDeque;

use crate::types::{PieceKind, Side, QUEUE_PRESEED};

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }
}

/// Shared piece stream with one pending FIFO per side.
#[derive(Debug, Clone)]
pub struct SharedQueue {
    rng: SimpleRng,
    pending: [VecDeque<PieceKind>; 2],
}

impl SharedQueue {
    /// Create a queue with the given seed, preseeded for both sides.
    pub fn new(seed: u32) -> Self {
        let mut queue = Self {
            rng: SimpleRng::new(seed),
            pending: [VecDeque::new(), VecDeque::new()],
        };
        queue.preseed(QUEUE_PRESEED);
        queue
    }

    /// Generate `n` pieces and append each to both sides' pending sets.
    pub fn preseed(&mut self, n: usize) {
        for _ in 0..n {
            self.generate();
        }
    }

    /// Draw one kind uniformly and buffer it for both sides.
    fn generate(&mut self) -> PieceKind {
        let kind = PieceKind::ALL[self.rng.next_range(PieceKind::ALL.len() as u32) as usize];
        self.pending[0].push_back(kind);
        self.pending[1].push_back(kind);
        kind
    }

    /// Pop the oldest unconsumed piece for `side`, generating a fresh one
    /// for both sides first if this side's buffer is empty.
    pub fn consume(&mut self, side: Side) -> PieceKind {
        if self.pending[side.index()].is_empty() {
            self.generate();
        }
        self.pending[side.index()]
            .pop_front()
            .expect("pending buffer refilled above")
    }

    /// Number of generated-but-unconsumed pieces buffered for `side`.
    pub fn pending_len(&self, side: Side) -> usize {
        self.pending[side.index()].len()
    }
}
