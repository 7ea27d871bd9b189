//! Chain maintenance: an externally-held ordered sequence of blocks.

use crate::validator::{ChainValidator, ValidationError};
use microledger_core::Block;
use thiserror::Error;

/// Errors that can occur during chain operations.
#[derive(Debug, Error)]
pub enum ChainError {
    #[error("block does not link to the current tip")]
    BrokenLink,

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

pub type Result<T> = std::result::Result<T, ChainError>;

/// An ordered sequence of blocks with linkage enforced on append.
///
/// The core's `Block` knows nothing about its neighbors; this container
/// owns the linkage rule instead: every appended block's `previous_hash`
/// must equal the current tip's hash. The first block is accepted as-is
/// (typically carrying the empty genesis sentinel).
#[derive(Debug, Clone, Default)]
pub struct Chain {
    blocks: Vec<Block>,
}

impl Chain {
    /// Create an empty chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a block, enforcing linkage against the current tip.
    pub fn push(&mut self, block: Block) -> Result<()> {
        if let Some(tip) = self.blocks.last() {
            if block.previous_hash() != tip.hash() {
                return Err(ChainError::BrokenLink);
            }
        }
        self.blocks.push(block);
        Ok(())
    }

    /// The most recently appended block.
    pub fn tip(&self) -> Option<&Block> {
        self.blocks.last()
    }

    /// Number of blocks.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Whether the chain holds no blocks.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Block at the given height (0 = first).
    pub fn get(&self, height: usize) -> Option<&Block> {
        self.blocks.get(height)
    }

    /// All blocks in order.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Full tamper sweep over the stored blocks: linkage, merkle roots,
    /// transaction hashes, block hashes.
    pub fn validate(&self) -> Result<()> {
        ChainValidator::verify_chain(&self.blocks)?;
        Ok(())
    }
}
