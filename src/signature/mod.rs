/*!
 * Signature capability set
 *
 * Every signature family (lattice, compact lattice, hash-based) implements
 * [`SignatureScheme`]: generate a key pair, sign, verify. The families share
 * one backend over the primitive library and differ only in their parameter
 * sets and signature-length policy.
 */

mod backend;

pub(crate) use backend::SigBackend;

use oqs::sig::Algorithm;

use crate::error::{AdapterError, AdapterResult};
use crate::keys::{KeyPair, PublicKey, SecretKey, Signature};
use crate::scheme::{SchemeDescriptor, SchemeId};


/// Outcome of a verification
///
/// A signature that does not verify is an ordinary outcome, not an error.
/// Callers that prefer `?` can turn it into the recoverable
/// [`AdapterError::InvalidSignature`] with [`VerifyResult::into_result`].
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerifyResult {
    Valid,
    InvalidSignature,
}

impl VerifyResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, VerifyResult::Valid)
    }

    /// Convert a negative outcome into `AdapterError::InvalidSignature`
    pub fn into_result(self, scheme: SchemeId) -> AdapterResult<()> {
        match self {
            VerifyResult::Valid => Ok(()),
            VerifyResult::InvalidSignature => Err(AdapterError::InvalidSignature { scheme }),
        }
    }
}

/// Key generation, signing and verification for one signature parameter set
///
/// Implementations are stateless and safe to share between threads.
///
/// # Examples
///
/// ```no_run
/// use pqadapter::dilithium::{Dilithium, DilithiumVariant};
/// use pqadapter::signature::{SignatureScheme, VerifyResult};
///
/// let scheme = Dilithium::new(DilithiumVariant::Dilithium2)?;
/// let key_pair = scheme.generate_keypair()?;
/// let signature = scheme.sign(b"Hello, Dilithium!", key_pair.secret_key())?;
///
/// let outcome = scheme.verify(&signature, b"Hello, Dilithium!", key_pair.public_key())?;
/// assert_eq!(outcome, VerifyResult::Valid);
/// # Ok::<(), pqadapter::AdapterError>(())
/// ```
pub trait SignatureScheme: Send + Sync {
    /// Static metadata of this parameter set
    fn descriptor(&self) -> &SchemeDescriptor;

    /// Generate a fresh key pair
    ///
    /// Fails with `EntropyUnavailable` if the randomness source cannot be read.
    fn generate_keypair(&self) -> AdapterResult<KeyPair>;

    /// Sign `message` with `secret_key`
    ///
    /// Fails with `SigningFailure` if the key belongs to another scheme or the
    /// primitive reports an error.
    fn sign(&self, message: &[u8], secret_key: &SecretKey) -> AdapterResult<Signature>;

    /// Verify `signature` over `message` under `public_key`
    ///
    /// Signatures or keys of another scheme yield `InvalidSignature`, never an
    /// error. `Err` is reserved for a malfunctioning primitive library.
    fn verify(
        &self,
        signature: &Signature,
        message: &[u8],
        public_key: &PublicKey,
    ) -> AdapterResult<VerifyResult>;

    /// The identifier of this parameter set
    fn id(&self) -> SchemeId {
        self.descriptor().id
    }

    /// Verify, reporting a negative outcome as `AdapterError::InvalidSignature`
    fn verify_strict(
        &self,
        signature: &Signature,
        message: &[u8],
        public_key: &PublicKey,
    ) -> AdapterResult<()> {
        self.verify(signature, message, public_key)?
            .into_result(self.id())
    }

    /// Build a signature of this scheme from raw bytes
    fn signature_from_bytes(&self, bytes: &[u8]) -> AdapterResult<Signature> {
        Signature::from_bytes(self.descriptor(), bytes)
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

/// Map a signature parameter set to the primitive library's algorithm
pub(crate) fn oqs_algorithm(id: SchemeId) -> Option<Algorithm> {
    match id {
        SchemeId::Dilithium2 => Some(Algorithm::Dilithium2),
        SchemeId::Dilithium3 => Some(Algorithm::Dilithium3),
        SchemeId::Dilithium5 => Some(Algorithm::Dilithium5),
        SchemeId::Falcon512 => Some(Algorithm::Falcon512),
        SchemeId::Falcon1024 => Some(Algorithm::Falcon1024),
        SchemeId::Sphincs128f => Some(Algorithm::SphincsShake128fSimple),
        SchemeId::Sphincs128s => Some(Algorithm::SphincsShake128sSimple),
        SchemeId::Sphincs192f => Some(Algorithm::SphincsShake192fSimple),
        SchemeId::Sphincs192s => Some(Algorithm::SphincsShake192sSimple),
        SchemeId::Sphincs256f => Some(Algorithm::SphincsShake256fSimple),
        SchemeId::Sphincs256s => Some(Algorithm::SphincsShake256sSimple),
        SchemeId::Kyber512 | SchemeId::Kyber768 | SchemeId::Kyber1024 => None,
    }
}
