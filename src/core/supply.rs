//! Tile supply - batched dealing of base tiles
//!
//! Tiles are dealt from shuffled batches holding the same number of 1s, 2s
//! and 3s, so any window spanning one full batch is exactly balanced among
//! the three base values. That bounded fairness is the point of batching;
//! naive uniform sampling over {1,2,3} gives no such guarantee.

use crate::core::rng::SimpleRng;
use crate::types::Tile;

/// Batch sizing for the tile supply. A factor of `k` yields batches of
/// `3 * k` tiles: `k` copies each of 1, 2 and 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SupplyConfig {
    /// Factor for the very first batch, which also seeds the opening board
    pub first_batch_factor: usize,
    /// Factor for every refill after the first batch runs out
    pub refill_batch_factor: usize,
}

impl Default for SupplyConfig {
    fn default() -> Self {
        Self {
            first_batch_factor: 4,
            refill_batch_factor: 4,
        }
    }
}

/// Dealer of base tiles
#[derive(Debug, Clone)]
pub struct TileSupply {
    config: SupplyConfig,
    /// Current shuffled batch
    batch: Vec<Tile>,
    /// Index of the next tile to deal
    front: usize,
    /// False until the first refill has happened
    primed: bool,
}

impl TileSupply {
    /// Create a supply with an empty batch; the first peek fills it
    pub fn new(config: SupplyConfig) -> Self {
        Self {
            config,
            batch: Vec::new(),
            front: 0,
            primed: false,
        }
    }

    /// Tiles left in the current batch
    pub fn remaining(&self) -> usize {
        self.batch.len() - self.front
    }

    fn refill(&mut self, rng: &mut SimpleRng) {
        let factor = if self.primed {
            self.config.refill_batch_factor
        } else {
            self.config.first_batch_factor
        };
        self.primed = true;

        self.batch.clear();
        for _ in 0..factor {
            self.batch.extend_from_slice(&[1, 2, 3]);
        }
        rng.shuffle(&mut self.batch);
        self.front = 0;
    }

    /// Next tile to be dealt, without consuming it.
    ///
    /// Refills the batch first when it is exhausted; that regeneration is an
    /// observable side effect, but repeated peeks return the same tile until
    /// a draw happens.
    pub fn peek(&mut self, rng: &mut SimpleRng) -> Tile {
        if self.front >= self.batch.len() {
            self.refill(rng);
        }
        self.batch[self.front]
    }

    /// Deal the next tile. Peeking first guarantees the batch is non-empty.
    pub fn draw(&mut self, rng: &mut SimpleRng) -> Tile {
        let tile = self.peek(rng);
        self.front += 1;
        tile
    }
}
