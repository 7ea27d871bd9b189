//! Collaborator layer around the microledger core.
//!
//! The core entities derive their hashes once at construction and stay
//! pure; everything stateful or policy-shaped lives here:
//! - Chain maintenance (linkage-enforced block sequence)
//! - Tamper-evidence validation (recompute-and-compare)
//! - Mining (the `tries` search against a leading-zero target)
//! - The Ed25519 signing primitive consumed by transactions

pub mod chain;
pub mod keypair;
pub mod miner;
pub mod validator;

// Re-export commonly used types
pub use chain::{Chain, ChainError};
pub use keypair::{verify_with_public_key, CryptoError, Keypair};
pub use miner::Miner;
pub use validator::{BlockValidator, ChainValidator, TransactionValidator, ValidationError};
