//! Ed25519 signing primitive for ledger collaborators.
//!
//! The ledger core never signs or verifies anything; it stores opaque
//! signature bytes produced here over a transaction's signable data (the
//! raw payload text). Addresses take the raw public key bytes.

use ed25519_dalek::{Signature, Signer, SigningKey, Verifier, VerifyingKey};
use microledger_core::Address;
use rand::rngs::OsRng;
use std::fmt;
use thiserror::Error;

/// Errors that can occur during cryptographic operations.
#[derive(Debug, Error)]
pub enum CryptoError {
    #[error("invalid public key")]
    InvalidPublicKey,
    #[error("invalid signature encoding")]
    InvalidSignature,
    #[error("signature verification failed")]
    VerificationFailed,
}

/// A keypair for signing transaction payloads.
pub struct Keypair {
    signing_key: SigningKey,
    verifying_key: VerifyingKey,
}

impl Keypair {
    /// Generate a new random keypair.
    pub fn generate() -> Self {
        let signing_key = SigningKey::generate(&mut OsRng);
        let verifying_key = signing_key.verifying_key();
        Self {
            signing_key,
            verifying_key,
        }
    }

    /// Create a keypair from secret key bytes.
    pub fn from_secret_bytes(bytes: &[u8; 32]) -> Self {
        let signing_key = SigningKey::from_bytes(bytes);
        let verifying_key = signing_key.verifying_key();
        Self {
            signing_key,
            verifying_key,
        }
    }

    /// Get the secret key bytes.
    pub fn secret_bytes(&self) -> [u8; 32] {
        self.signing_key.to_bytes()
    }

    /// Raw public key bytes, as fed to [`Address::new`].
    pub fn public_key_bytes(&self) -> Vec<u8> {
        self.verifying_key.to_bytes().to_vec()
    }

    /// Build an address binding the given name to this keypair's public key.
    pub fn address(&self, name: impl Into<String>) -> Address {
        Address::new(name, self.public_key_bytes())
    }

    /// Sign arbitrary data, returning the 64 signature bytes.
    pub fn sign(&self, data: &[u8]) -> Vec<u8> {
        self.signing_key.sign(data).to_bytes().to_vec()
    }

    /// Verify a signature against our public key.
    pub fn verify(&self, data: &[u8], signature: &[u8]) -> Result<(), CryptoError> {
        verify_with_public_key(&self.public_key_bytes(), data, signature)
    }
}

impl fmt::Debug for Keypair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Keypair")
            .field(
                "public_key",
                &hex::encode(&self.verifying_key.to_bytes()[..8]),
            )
            .finish()
    }
}

/// Verify a signature against raw Ed25519 public key bytes.
///
/// This is the verification half consumed by validators: `public_key` is
/// what an [`Address`] carries, `data` is the transaction's signable data.
pub fn verify_with_public_key(
    public_key: &[u8],
    data: &[u8],
    signature: &[u8],
) -> Result<(), CryptoError> {
    let key_bytes: [u8; 32] = public_key
        .try_into()
        .map_err(|_| CryptoError::InvalidPublicKey)?;
    let key = VerifyingKey::from_bytes(&key_bytes).map_err(|_| CryptoError::InvalidPublicKey)?;

    let sig_bytes: [u8; 64] = signature
        .try_into()
        .map_err(|_| CryptoError::InvalidSignature)?;
    let sig = Signature::from_bytes(&sig_bytes);

    key.verify(data, &sig)
        .map_err(|_| CryptoError::VerificationFailed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_and_verify() {
        let keypair = Keypair::generate();
        let signature = keypair.sign(b"hello world");
        assert!(keypair.verify(b"hello world", &signature).is_ok());
    }

    #[test]
    fn test_wrong_message_fails() {
        let keypair = Keypair::generate();
        let signature = keypair.sign(b"hello");
        assert!(keypair.verify(b"world", &signature).is_err());
    }

    #[test]
    fn test_wrong_key_fails() {
        let keypair1 = Keypair::generate();
        let keypair2 = Keypair::generate();
        let signature = keypair1.sign(b"hello");
        assert!(keypair2.verify(b"hello", &signature).is_err());
    }

    #[test]
    fn test_verify_with_raw_public_key_bytes() {
        let keypair = Keypair::generate();
        let signature = keypair.sign(b"payload");
        assert!(verify_with_public_key(&keypair.public_key_bytes(), b"payload", &signature).is_ok());
    }

    #[test]
    fn test_malformed_key_and_signature_rejected() {
        let keypair = Keypair::generate();
        let signature = keypair.sign(b"payload");

        assert!(matches!(
            verify_with_public_key(&[1, 2, 3], b"payload", &signature),
            Err(CryptoError::InvalidPublicKey)
        ));
        assert!(matches!(
            verify_with_public_key(&keypair.public_key_bytes(), b"payload", &[0; 7]),
            Err(CryptoError::InvalidSignature)
        ));
    }

    #[test]
    fn test_keypair_from_secret_bytes() {
        let keypair1 = Keypair::generate();
        let keypair2 = Keypair::from_secret_bytes(&keypair1.secret_bytes());
        assert_eq!(keypair1.public_key_bytes(), keypair2.public_key_bytes());
    }

    #[test]
    fn test_address_binds_name_to_key() {
        let keypair = Keypair::generate();
        let address = keypair.address("alice");
        assert_eq!(address.name(), "alice");
        assert_eq!(address.public_key(), keypair.public_key_bytes());
    }
}
