//! Proof-of-work search over block nonce candidates.

use microledger_core::{Block, Hash, Transaction};
use tracing::{debug, info};

/// Nonce search loop driven by the leading-zero-byte difficulty metric.
///
/// The ledger core freezes a block's timestamp and hash at construction, so
/// the search rebuilds a fresh candidate block per `tries` value and reads
/// its [`Block::leading_zero_bytes`]. Difficulty counts whole zero bytes:
/// each unit is worth about 8 bits, so expect ~256x more work per step.
///
/// Every candidate is an independent fully-owned value; parallel searches
/// over disjoint nonce ranges need no coordination, and cancellation is the
/// caller stopping the loop (use [`Miner::mine_with_limit`]).
#[derive(Debug, Clone, Copy)]
pub struct Miner {
    difficulty: usize,
}

impl Miner {
    /// Create a miner targeting the given number of leading zero bytes.
    pub fn new(difficulty: usize) -> Self {
        Self { difficulty }
    }

    /// Required leading zero bytes.
    pub fn difficulty(&self) -> usize {
        self.difficulty
    }

    /// Search nonce candidates from 0 until one satisfies the difficulty.
    ///
    /// # Panics
    ///
    /// Panics in the (practically unreachable) case that the entire 64-bit
    /// nonce space is exhausted without a hit.
    pub fn mine(&self, previous_hash: Hash, transactions: Vec<Transaction>) -> Block {
        self.mine_with_limit(previous_hash, transactions, u64::MAX)
            .expect("nonce search space exhausted")
    }

    /// Bounded search: give up after `max_tries` candidates.
    pub fn mine_with_limit(
        &self,
        previous_hash: Hash,
        transactions: Vec<Transaction>,
        max_tries: u64,
    ) -> Option<Block> {
        debug!(difficulty = self.difficulty, "starting nonce search");

        for tries in 0..max_tries {
            let candidate = Block::new(previous_hash.clone(), transactions.clone(), tries);
            if candidate.leading_zero_bytes() >= self.difficulty {
                info!(tries, hash = %candidate.hash(), "nonce satisfies difficulty target");
                return Some(candidate);
            }
        }

        debug!(max_tries, "nonce search limit reached");
        None
    }
}
