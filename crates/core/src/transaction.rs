//! Signed ledger payloads.

use crate::digest::{DigestAlgorithm, Hash};
use chrono::Utc;
use serde::{Deserialize, Serialize};

/// A signed unit of ledger data.
///
/// The content hash is derived once at construction over
/// `text ++ sender hash ++ signature ++ timestamp` and never recomputed.
/// Signatures are produced and verified by collaborators over
/// [`Transaction::signable_data`], the raw payload bytes, not the content
/// hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    text: String,
    sender_hash: Hash,
    signature: Vec<u8>,
    timestamp_millis: i64,
    hash: Hash,
}

impl Transaction {
    /// Create a transaction, capturing the current wall clock.
    pub fn new(text: impl Into<String>, sender_hash: Hash, signature: Vec<u8>) -> Self {
        Self::new_at(text, sender_hash, signature, Utc::now().timestamp_millis())
    }

    /// Create a transaction with an explicit timestamp.
    ///
    /// [`Transaction::new`] delegates here; tests and replay paths inject a
    /// fixed clock through this constructor to get reproducible hashes.
    pub fn new_at(
        text: impl Into<String>,
        sender_hash: Hash,
        signature: Vec<u8>,
        timestamp_millis: i64,
    ) -> Self {
        let text = text.into();
        let hash = Self::compute_hash(&text, &sender_hash, &signature, timestamp_millis);
        Self {
            text,
            sender_hash,
            signature,
            timestamp_millis,
            hash,
        }
    }

    /// Rebuild a transaction from parts carrying an externally computed hash.
    ///
    /// Deserialization escape hatch; the hash is taken on trust. Validators
    /// recompute via [`Transaction::compute_hash`] to detect tampering.
    pub fn from_trusted_parts(
        text: String,
        sender_hash: Hash,
        signature: Vec<u8>,
        timestamp_millis: i64,
        hash: Hash,
    ) -> Self {
        Self {
            text,
            sender_hash,
            signature,
            timestamp_millis,
            hash,
        }
    }

    /// Derive the content hash from transaction fields.
    ///
    /// The preimage is `text bytes ++ sender hash ++ signature ++ timestamp`
    /// with the timestamp encoded as 8 big-endian bytes, digested under
    /// SHA-256. Field order is part of the contract: external verifiers must
    /// reproduce it byte for byte.
    pub fn compute_hash(
        text: &str,
        sender_hash: &Hash,
        signature: &[u8],
        timestamp_millis: i64,
    ) -> Hash {
        let mut preimage =
            Vec::with_capacity(text.len() + sender_hash.len() + signature.len() + 8);
        preimage.extend_from_slice(text.as_bytes());
        preimage.extend_from_slice(sender_hash.as_bytes());
        preimage.extend_from_slice(signature);
        preimage.extend_from_slice(&timestamp_millis.to_be_bytes());
        DigestAlgorithm::Sha256.digest(&preimage)
    }

    /// The exact bytes collaborators sign and verify: the payload text.
    pub fn signable_data(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Payload text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Identity hash of the sender's address.
    pub fn sender_hash(&self) -> &Hash {
        &self.sender_hash
    }

    /// Signature bytes produced externally over [`Transaction::signable_data`].
    pub fn signature(&self) -> &[u8] {
        &self.signature
    }

    /// Milliseconds since the Unix epoch, captured at construction.
    pub fn timestamp_millis(&self) -> i64 {
        self.timestamp_millis
    }

    /// Content hash.
    pub fn hash(&self) -> &Hash {
        &self.hash
    }
}
