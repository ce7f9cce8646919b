//! RNG module - 7-bag random piece generation
//!
//! Implements the "7-bag" randomization algorithm: each bag holds one of each
//! piece (I, O, T, S, Z, J, L), shuffled. Pieces are drawn from the bag into a
//! lookahead queue, and a fresh bag is shuffled whenever the current one runs out.
//!
//! The randomness source is injected through [`PieceRng`] so tests and replays can
//! seed it. [`SimpleRng`] is the default, a small deterministic LCG.

use arrayvec::ArrayVec;

use crate::types::PieceKind;

/// Source of randomness for bag shuffling.
pub trait PieceRng {
    /// Generate next random u32
    fn next_u32(&mut self) -> u32;

    /// Uniform value in `[0, max)`. `max` must be non-zero.
    ///
    /// Rejection sampling keeps the result unbiased for any `max`.
    fn next_range(&mut self, max: u32) -> u32 {
        debug_assert!(max > 0);
        let zone = u32::MAX - (u32::MAX % max);
        loop {
            let v = self.next_u32();
            if v < zone {
                return v % max;
            }
        }
    }
}

impl<R: PieceRng + ?Sized> PieceRng for &mut R {
    fn next_u32(&mut self) -> u32 {
        (**self).next_u32()
    }
}

impl<R: PieceRng + ?Sized> PieceRng for Box<R> {
    fn next_u32(&mut self) -> u32 {
        (**self).next_u32()
    }
}

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

    /// Current internal state; feeding it to `new` resumes the sequence.
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl PieceRng for SimpleRng {
    fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod 2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        // The low bits of a power-of-two LCG have short periods; mix the high bits down.
        self.state ^ (self.state >> 16)
    }
}

/// Shuffle a slice using Fisher-Yates
pub fn shuffle<T>(rng: &mut impl PieceRng, slice: &mut [T]) {
    for i in (1..slice.len()).rev() {
        let j = rng.next_range((i + 1) as u32) as usize;
        slice.swap(i, j);
    }
}

/// A uniformly random permutation of the 7 piece kinds.
pub fn new_bag(rng: &mut impl PieceRng) -> [PieceKind; 7] {
    let mut bag = PieceKind::ALL;
    shuffle(rng, &mut bag);
    bag
}

/// Maximum entries the lookahead queue can hold.
pub const QUEUE_CAPACITY: usize = 8;

/// 7-bag piece generator with a lookahead queue.
#[derive(Debug, Clone)]
pub struct PieceQueue<R = SimpleRng> {
    /// Remaining pieces of the current bag; drawn from the back.
    bag: ArrayVec<PieceKind, 7>,
    /// Upcoming pieces, head first.
    queue: ArrayVec<PieceKind, QUEUE_CAPACITY>,
    rng: R,
}

impl PieceQueue<SimpleRng> {
    /// Create a new piece queue with the given seed
    pub fn new(seed: u32) -> Self {
        Self::with_rng(SimpleRng::new(seed))
    }
}

impl<R: PieceRng> PieceQueue<R> {
    /// Create an empty queue drawing from `rng`.
    pub fn with_rng(rng: R) -> Self {
        Self {
            bag: ArrayVec::new(),
            queue: ArrayVec::new(),
            rng,
        }
    }

    /// Top the queue up to `min_depth` entries (capped at [`QUEUE_CAPACITY`]),
    /// shuffling a fresh bag whenever the current one is empty.
    pub fn ensure(&mut self, min_depth: usize) {
        let target = min_depth.min(QUEUE_CAPACITY);
        while self.queue.len() < target {
            if self.bag.is_empty() {
                self.bag.extend(new_bag(&mut self.rng));
            }
            if let Some(kind) = self.bag.pop() {
                self.queue.push(kind);
            }
        }
    }

    /// Remove and return the head of the queue.
    ///
    /// The caller restores lookahead depth with [`PieceQueue::ensure`].
    pub fn dequeue_next(&mut self) -> Option<PieceKind> {
        if self.queue.is_empty() {
            return None;
        }
        Some(self.queue.remove(0))
    }

    /// Upcoming pieces, head first.
    pub fn preview(&self) -> &[PieceKind] {
        &self.queue
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Drop the queue and the current bag. The RNG keeps its state.
    pub fn reset(&mut self) {
        self.bag.clear();
        self.queue.clear();
    }

    /// Pieces left in the current bag.
    pub fn bag_remaining(&self) -> usize {
        self.bag.len()
    }

    pub fn rng(&self) -> &R {
        &self.rng
    }
}

impl Default for PieceQueue {
    fn default() -> Self {
        Self::new(1)
    }
}
