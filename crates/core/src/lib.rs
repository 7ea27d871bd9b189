//! Hash-chained ledger primitives for microledger.
//!
//! This crate provides the fundamental types of the ledger:
//! - SHA-family digest engine and the hash value type
//! - Queue-based merkle fold for transaction roots
//! - Addresses (identity hash over name and public key)
//! - Transactions (signed payloads with construction-time content hashes)
//! - Blocks (hash-linked transaction batches with a nonce and a
//!   leading-zero difficulty proxy)
//!
//! Every derived field is computed exactly once inside a constructor and
//! frozen; the digest engine and the merkle fold are pure functions, safe
//! to call concurrently without coordination. Signing, chain maintenance,
//! and mining live in `microledger-chain`.

pub mod address;
pub mod block;
pub mod digest;
pub mod merkle;
pub mod transaction;

// Re-export commonly used types at the crate root
pub use address::Address;
pub use block::Block;
pub use digest::{DigestAlgorithm, Hash};
pub use transaction::Transaction;
