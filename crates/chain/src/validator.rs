//! Tamper-evidence validation.
//!
//! The core derives every hash once at construction and never re-checks it;
//! these validators are the collaborator side of that contract. Each check
//! recomputes a derived value from the stored fields and compares it to the
//! stored result, so any mutation that skipped rederivation is detected.

use crate::keypair;
use microledger_core::{merkle, Block, DigestAlgorithm, Hash, Transaction};
use thiserror::Error;

/// Errors that can occur during validation.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("transaction hash mismatch")]
    TransactionHashMismatch,

    #[error("transaction signature verification failed")]
    InvalidSignature,

    #[error("block merkle root mismatch")]
    MerkleRootMismatch,

    #[error("block hash mismatch")]
    BlockHashMismatch,

    #[error("block {height} does not link to its predecessor")]
    BrokenLink { height: usize },
}

pub type Result<T> = std::result::Result<T, ValidationError>;

/// Transaction validator.
pub struct TransactionValidator;

impl TransactionValidator {
    /// Recompute the content hash from the stored fields and compare.
    pub fn verify_hash(tx: &Transaction) -> Result<()> {
        let recomputed = Transaction::compute_hash(
            tx.text(),
            tx.sender_hash(),
            tx.signature(),
            tx.timestamp_millis(),
        );
        if &recomputed != tx.hash() {
            return Err(ValidationError::TransactionHashMismatch);
        }
        Ok(())
    }

    /// Verify the stored signature over the transaction's signable data
    /// against the sender's raw public key bytes.
    ///
    /// The sender's key is looked up externally (a transaction references
    /// its sender only by identity hash).
    pub fn verify_signature(tx: &Transaction, public_key: &[u8]) -> Result<()> {
        keypair::verify_with_public_key(public_key, tx.signable_data(), tx.signature())
            .map_err(|_| ValidationError::InvalidSignature)
    }
}

/// Block validator.
pub struct BlockValidator;

impl BlockValidator {
    /// Refold the stored transaction hashes and compare to the stored root.
    pub fn verify_merkle_root(block: &Block) -> Result<()> {
        let leaves: Vec<Hash> = block
            .transactions()
            .iter()
            .map(|tx| tx.hash().clone())
            .collect();
        let recomputed = merkle::fold(&leaves, DigestAlgorithm::Sha256);
        if &recomputed != block.merkle_root() {
            return Err(ValidationError::MerkleRootMismatch);
        }
        Ok(())
    }

    /// Recompute the block hash from the stored header fields and compare.
    pub fn verify_hash(block: &Block) -> Result<()> {
        let recomputed = Block::compute_hash(
            block.previous_hash(),
            block.merkle_root(),
            block.tries(),
            block.timestamp_millis(),
        );
        if &recomputed != block.hash() {
            return Err(ValidationError::BlockHashMismatch);
        }
        Ok(())
    }

    /// Check every transaction's content hash.
    pub fn verify_transactions(block: &Block) -> Result<()> {
        for tx in block.transactions() {
            TransactionValidator::verify_hash(tx)?;
        }
        Ok(())
    }

    /// Full block check: transactions, merkle root, block hash.
    pub fn verify_block(block: &Block) -> Result<()> {
        Self::verify_transactions(block)?;
        Self::verify_merkle_root(block)?;
        Self::verify_hash(block)?;
        Ok(())
    }
}

/// Chain validator.
pub struct ChainValidator;

impl ChainValidator {
    /// Check that every non-initial block links to its predecessor's hash.
    pub fn verify_linkage(blocks: &[Block]) -> Result<()> {
        for (height, pair) in blocks.windows(2).enumerate() {
            if pair[1].previous_hash() != pair[0].hash() {
                return Err(ValidationError::BrokenLink { height: height + 1 });
            }
        }
        Ok(())
    }

    /// Full sweep: linkage plus a complete per-block check.
    pub fn verify_chain(blocks: &[Block]) -> Result<()> {
        Self::verify_linkage(blocks)?;
        for block in blocks {
            BlockValidator::verify_block(block)?;
        }
        Ok(())
    }
}
