//! Ledger identities.

use crate::digest::{DigestAlgorithm, Hash};
use serde::{Deserialize, Serialize};

/// An identity on the ledger: a display name bound to a public key.
///
/// The identity hash is derived at construction over
/// `name bytes ++ public key` under SHA-256 and never recomputed. Other
/// entities refer to an address only by this hash; nothing holds a live
/// reference back to the `Address` itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    name: String,
    public_key: Vec<u8>,
    hash: Hash,
}

impl Address {
    /// Create an address, deriving its identity hash from the name and
    /// public key.
    pub fn new(name: impl Into<String>, public_key: Vec<u8>) -> Self {
        let name = name.into();
        let mut preimage = Vec::with_capacity(name.len() + public_key.len());
        preimage.extend_from_slice(name.as_bytes());
        preimage.extend_from_slice(&public_key);
        let hash = DigestAlgorithm::Sha256.digest(&preimage);
        Self {
            name,
            public_key,
            hash,
        }
    }

    /// Rebuild an address from parts carrying an externally computed hash.
    ///
    /// Deserialization escape hatch: the hash is taken on trust and NOT
    /// rederived here. Use [`Address::new`] everywhere else; validators can
    /// always recompute and compare.
    pub fn from_trusted_parts(name: String, public_key: Vec<u8>, hash: Hash) -> Self {
        Self {
            name,
            public_key,
            hash,
        }
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Raw public key bytes.
    pub fn public_key(&self) -> &[u8] {
        &self.public_key
    }

    /// Identity hash.
    pub fn hash(&self) -> &Hash {
        &self.hash
    }
}
