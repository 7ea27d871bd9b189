//! Blocks: ordered transaction batches linked by hash.

use crate::digest::{DigestAlgorithm, Hash};
use crate::merkle;
use crate::transaction::Transaction;
use chrono::Utc;
use serde::{Deserialize, Serialize};

/// An ordered batch of transactions linked to its predecessor by hash.
///
/// Construction derives, in order: the timestamp, the merkle root of the
/// transaction hashes, and finally the block hash over
/// `previous hash ++ merkle root ++ tries ++ timestamp`. All three are
/// frozen afterwards; a different `tries` value means constructing a new
/// block. Chain linkage (each block's `previous_hash` matching the prior
/// block's `hash`) is enforced by collaborators, not here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    previous_hash: Hash,
    transactions: Vec<Transaction>,
    tries: u64,
    timestamp_millis: i64,
    merkle_root: Hash,
    hash: Hash,
}

impl Block {
    /// Create a block, capturing the current wall clock.
    ///
    /// # Panics
    ///
    /// Panics when `transactions` is empty; the merkle fold has no defined
    /// result for zero leaves.
    pub fn new(previous_hash: Hash, transactions: Vec<Transaction>, tries: u64) -> Self {
        Self::new_at(
            previous_hash,
            transactions,
            tries,
            Utc::now().timestamp_millis(),
        )
    }

    /// Create a block with an explicit timestamp.
    ///
    /// [`Block::new`] delegates here; tests and replay paths inject a fixed
    /// clock through this constructor to get reproducible hashes.
    ///
    /// # Panics
    ///
    /// Panics when `transactions` is empty.
    pub fn new_at(
        previous_hash: Hash,
        transactions: Vec<Transaction>,
        tries: u64,
        timestamp_millis: i64,
    ) -> Self {
        assert!(
            !transactions.is_empty(),
            "a block requires at least one transaction"
        );

        let leaf_hashes: Vec<Hash> = transactions.iter().map(|tx| tx.hash().clone()).collect();
        let merkle_root = merkle::fold(&leaf_hashes, DigestAlgorithm::Sha256);
        let hash = Self::compute_hash(&previous_hash, &merkle_root, tries, timestamp_millis);

        Self {
            previous_hash,
            transactions,
            tries,
            timestamp_millis,
            merkle_root,
            hash,
        }
    }

    /// Rebuild a block from parts carrying externally computed derived
    /// fields.
    ///
    /// Deserialization escape hatch; merkle root and hash are taken on
    /// trust. Validators recompute via [`merkle::fold`] and
    /// [`Block::compute_hash`] to detect tampering.
    pub fn from_trusted_parts(
        previous_hash: Hash,
        transactions: Vec<Transaction>,
        tries: u64,
        timestamp_millis: i64,
        merkle_root: Hash,
        hash: Hash,
    ) -> Self {
        Self {
            previous_hash,
            transactions,
            tries,
            timestamp_millis,
            merkle_root,
            hash,
        }
    }

    /// Derive the block hash from header fields.
    ///
    /// The preimage is `previous hash ++ merkle root ++ tries ++ timestamp`
    /// with both integers encoded as 8 big-endian bytes, digested under
    /// SHA-256. Field order is part of the contract.
    pub fn compute_hash(
        previous_hash: &Hash,
        merkle_root: &Hash,
        tries: u64,
        timestamp_millis: i64,
    ) -> Hash {
        let mut preimage = Vec::with_capacity(previous_hash.len() + merkle_root.len() + 16);
        preimage.extend_from_slice(previous_hash.as_bytes());
        preimage.extend_from_slice(merkle_root.as_bytes());
        preimage.extend_from_slice(&tries.to_be_bytes());
        preimage.extend_from_slice(&timestamp_millis.to_be_bytes());
        DigestAlgorithm::Sha256.digest(&preimage)
    }

    /// Number of leading zero bytes of the block hash.
    ///
    /// Read by an external miner to decide whether this block's `tries`
    /// value satisfies a difficulty target; the search loop itself lives
    /// with the miner.
    pub fn leading_zero_bytes(&self) -> usize {
        self.hash.leading_zero_bytes()
    }

    /// Hash of the predecessor block, or the empty sentinel for genesis.
    pub fn previous_hash(&self) -> &Hash {
        &self.previous_hash
    }

    /// The transactions in this block, in hashing order.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Number of transactions.
    pub fn tx_count(&self) -> usize {
        self.transactions.len()
    }

    /// Nonce candidate supplied by the caller.
    pub fn tries(&self) -> u64 {
        self.tries
    }

    /// Milliseconds since the Unix epoch, captured at construction.
    pub fn timestamp_millis(&self) -> i64 {
        self.timestamp_millis
    }

    /// Merkle root over the transaction hashes.
    pub fn merkle_root(&self) -> &Hash {
        &self.merkle_root
    }

    /// Block hash.
    pub fn hash(&self) -> &Hash {
        &self.hash
    }

    /// Whether this block carries the empty genesis sentinel.
    pub fn is_genesis(&self) -> bool {
        self.previous_hash.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tx(text: &str, timestamp: i64) -> Transaction {
        let sender = DigestAlgorithm::Sha256.digest(b"sender");
        Transaction::new_at(text, sender, vec![0x5a], timestamp)
    }

    #[test]
    fn test_single_transaction_root_is_its_hash() {
        let tx = tx("pay bob 10", 1);
        let block = Block::new_at(Hash::empty(), vec![tx.clone()], 0, 2);
        assert_eq!(block.merkle_root(), tx.hash());
    }

    #[test]
    fn test_merkle_root_matches_fold_of_tx_hashes() {
        let txs = vec![tx("a", 1), tx("b", 2), tx("c", 3)];
        let block = Block::new_at(Hash::empty(), txs.clone(), 0, 4);

        let leaves: Vec<Hash> = txs.iter().map(|t| t.hash().clone()).collect();
        assert_eq!(
            block.merkle_root(),
            &merkle::fold(&leaves, DigestAlgorithm::Sha256)
        );
    }

    #[test]
    fn test_hash_matches_manual_derivation() {
        let block = Block::new_at(Hash::empty(), vec![tx("a", 1)], 7, 99);
        let expected =
            Block::compute_hash(block.previous_hash(), block.merkle_root(), 7, 99);
        assert_eq!(block.hash(), &expected);
    }

    #[test]
    fn test_fixed_timestamp_is_deterministic() {
        let a = Block::new_at(Hash::empty(), vec![tx("a", 1)], 3, 50);
        let b = Block::new_at(Hash::empty(), vec![tx("a", 1)], 3, 50);
        assert_eq!(a.hash(), b.hash());
        assert_eq!(a, b);
    }

    #[test]
    fn test_tries_is_part_of_the_hash() {
        let a = Block::new_at(Hash::empty(), vec![tx("a", 1)], 0, 50);
        let b = Block::new_at(Hash::empty(), vec![tx("a", 1)], 1, 50);
        assert_ne!(a.hash(), b.hash());
    }

    #[test]
    fn test_transaction_order_changes_the_hash() {
        let (first, second) = (tx("a", 1), tx("b", 2));
        let forward = Block::new_at(Hash::empty(), vec![first.clone(), second.clone()], 0, 9);
        let reversed = Block::new_at(Hash::empty(), vec![second, first], 0, 9);
        assert_ne!(forward.hash(), reversed.hash());
    }

    #[test]
    fn test_leading_zero_bytes_reads_the_hash() {
        let crafted = Hash::from_bytes(vec![0x00, 0x00, 0x01, 0xff]);
        let block = Block::from_trusted_parts(
            Hash::empty(),
            vec![tx("a", 1)],
            0,
            1,
            DigestAlgorithm::Sha256.digest(b"root"),
            crafted,
        );
        assert_eq!(block.leading_zero_bytes(), 2);
    }

    #[test]
    fn test_genesis_sentinel() {
        let genesis = Block::new_at(Hash::empty(), vec![tx("a", 1)], 0, 1);
        assert!(genesis.is_genesis());

        let child = Block::new_at(genesis.hash().clone(), vec![tx("b", 2)], 0, 2);
        assert!(!child.is_genesis());
        assert_eq!(child.previous_hash(), genesis.hash());
    }

    #[test]
    #[should_panic(expected = "at least one transaction")]
    fn test_empty_transactions_panics() {
        Block::new_at(Hash::empty(), vec![], 0, 1);
    }
}
