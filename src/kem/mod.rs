/*!
 * Key encapsulation capability set
 *
 * A KEM exposes three operations: generate a key pair, encapsulate a fresh
 * shared secret against a public key, and decapsulate it with the matching
 * secret key. This contract is distinct from the signature contract.
 */

use oqs::kem::Algorithm;

use crate::error::AdapterResult;
use crate::keys::{Ciphertext, KeyPair, PublicKey, SecretKey, SharedSecret};
use crate::scheme::{SchemeDescriptor, SchemeId};

/// Key generation, encapsulation and decapsulation for one KEM parameter set
///
/// # Examples
///
/// ```no_run
/// use pqadapter::kem::KemScheme;
/// use pqadapter::kyber::{Kyber, KyberVariant};
///
/// let kyber = Kyber::new(KyberVariant::Kyber512)?;
/// let key_pair = kyber.generate_keypair()?;
///
/// let (ciphertext, sender_secret) = kyber.encapsulate(key_pair.public_key())?;
/// let receiver_secret = kyber.decapsulate(&ciphertext, key_pair.secret_key())?;
/// assert_eq!(sender_secret, receiver_secret);
/// # Ok::<(), pqadapter::AdapterError>(())
/// ```
pub trait KemScheme: Send + Sync {
    /// Static metadata of this parameter set
    fn descriptor(&self) -> &SchemeDescriptor;

    /// Generate a fresh key pair
    fn generate_keypair(&self) -> AdapterResult<KeyPair>;

    /// Encapsulate a fresh shared secret against `public_key`
    ///
    /// Every call draws new randomness, so two calls with the same key yield
    /// independent ciphertexts and secrets.
    fn encapsulate(&self, public_key: &PublicKey) -> AdapterResult<(Ciphertext, SharedSecret)>;

    /// Recover the shared secret carried by `ciphertext`
    ///
    /// Fails only on structural problems. A tampered ciphertext of the right
    /// length yields the primitive's implicit-rejection secret, which is
    /// indistinguishable from success at this layer.
    fn decapsulate(
        &self,
        ciphertext: &Ciphertext,
        secret_key: &SecretKey,
    ) -> AdapterResult<SharedSecret>;

    /// The identifier of this parameter set
    fn id(&self) -> SchemeId {
        self.descriptor().id
    }

    /// Build a ciphertext of this scheme from raw bytes
    fn ciphertext_from_bytes(&self, bytes: &[u8]) -> AdapterResult<Ciphertext> {
        Ciphertext::from_bytes(self.descriptor(), bytes)
    }

    /// Build a public key of this scheme from raw bytes
    fn public_key_from_bytes(&self, bytes: &[u8]) -> AdapterResult<PublicKey> {
        PublicKey::from_bytes(self.descriptor(), bytes)
    }

    /// Build a secret key of this scheme from raw bytes
    fn secret_key_from_bytes(&self, bytes: &[u8]) -> AdapterResult<SecretKey> {
        SecretKey::from_bytes(self.descriptor(), bytes)
    }
}

/// Map a KEM parameter set to the primitive library's algorithm
pub(crate) fn oqs_algorithm(id: SchemeId) -> Option<Algorithm> {
    match id {
        SchemeId::Kyber512 => Some(Algorithm::Kyber512),
        SchemeId::Kyber768 => Some(Algorithm::Kyber768),
        SchemeId::Kyber1024 => Some(Algorithm::Kyber1024),
        _ => None,
    }
}
