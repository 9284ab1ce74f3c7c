//! SPHINCS+ adapter
//!
//! SPHINCS+ shares the signature contract with the lattice families, but its
//! signatures are an order of magnitude larger and signing is far slower, so it
//! is registered as a family of its own and tuned through
//! [`HashSignatureConfig`].

use std::fmt;

use crate::config::HashSignatureConfig;
use crate::entropy::EntropyPolicy;
use crate::error::{AdapterError, AdapterResult};
use crate::keys::{KeyPair, PublicKey, SecretKey, Signature};
use crate::scheme::{SchemeDescriptor, SchemeId};
use crate::signature::{SigBackend, SignatureScheme, VerifyResult};
use crate::sphincsplus::parameters::{SphincsParameters, SphincsProfile};

/// SPHINCS+ variants with different security levels and performance characteristics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SphincsVariant {
    /// SPHINCS+-SHAKE-128f-simple (fast variant, NIST security level 1)
    Sphincs128f,
    /// SPHINCS+-SHAKE-128s-simple (small variant, NIST security level 1)
    Sphincs128s,
    /// SPHINCS+-SHAKE-192f-simple (fast variant, NIST security level 3)
    Sphincs192f,
    /// SPHINCS+-SHAKE-192s-simple (small variant, NIST security level 3)
    Sphincs192s,
    /// SPHINCS+-SHAKE-256f-simple (fast variant, NIST security level 5)
    Sphincs256f,
    /// SPHINCS+-SHAKE-256s-simple (small variant, NIST security level 5)
    Sphincs256s,
}

impl SphincsVariant {
    /// The registry identifier of this variant
    pub fn scheme_id(&self) -> SchemeId {
        match self {
            SphincsVariant::Sphincs128f => SchemeId::Sphincs128f,
            SphincsVariant::Sphincs128s => SchemeId::Sphincs128s,
            SphincsVariant::Sphincs192f => SchemeId::Sphincs192f,
            SphincsVariant::Sphincs192s => SchemeId::Sphincs192s,
            SphincsVariant::Sphincs256f => SchemeId::Sphincs256f,
            SphincsVariant::Sphincs256s => SchemeId::Sphincs256s,
        }
    }

    /// The variant for a registry identifier, if it names a SPHINCS+ parameter set
    pub fn from_scheme_id(id: SchemeId) -> Option<Self> {
        match id {
            SchemeId::Sphincs128f => Some(SphincsVariant::Sphincs128f),
            SchemeId::Sphincs128s => Some(SphincsVariant::Sphincs128s),
            SchemeId::Sphincs192f => Some(SphincsVariant::Sphincs192f),
            SchemeId::Sphincs192s => Some(SphincsVariant::Sphincs192s),
            SchemeId::Sphincs256f => Some(SphincsVariant::Sphincs256f),
            SchemeId::Sphincs256s => Some(SphincsVariant::Sphincs256s),
            _ => None,
        }
    }

    pub fn profile(&self) -> SphincsProfile {
        SphincsParameters::for_variant(*self).profile
    }
}

impl fmt::Display for SphincsVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.scheme_id())
    }
}

/// A stateless hash-based signature scheme
///
/// Same contract as [`SignatureScheme`], plus the knobs that only matter for
/// hash-based parameter sets.
pub trait HashSignatureScheme: SignatureScheme {
    /// Whether this parameter set favours signing speed or signature size
    fn profile(&self) -> SphincsProfile;

    /// Structural parameters of this parameter set
    fn parameters(&self) -> SphincsParameters;

    /// Largest message accepted for signing, if bounded
    fn max_message_len(&self) -> Option<usize>;
}

/// Hash-based signature adapter for one SPHINCS+ parameter set
#[derive(Debug, Clone)]
pub struct Sphincs {
    variant: SphincsVariant,
    backend: SigBackend,
    max_message_len: Option<usize>,
}

impl Sphincs {
    pub fn new(variant: SphincsVariant) -> AdapterResult<Self> {
        Self::with_config(variant, &HashSignatureConfig::default(), EntropyPolicy::default())
    }

    pub fn with_config(
        variant: SphincsVariant,
        config: &HashSignatureConfig,
        entropy: EntropyPolicy,
    ) -> AdapterResult<Self> {
        Ok(Self {
            variant,
            backend: SigBackend::new(variant.scheme_id(), entropy)?,
            max_message_len: config.max_message_len,
        })
    }

    pub fn variant(&self) -> SphincsVariant {
        self.variant
    }
}

impl SignatureScheme for Sphincs {
    fn descriptor(&self) -> &SchemeDescriptor {
        self.backend.descriptor()
    }

    fn generate_keypair(&self) -> AdapterResult<KeyPair> {
        self.backend.generate_keypair()
    }

    fn sign(&self, message: &[u8], secret_key: &SecretKey) -> AdapterResult<Signature> {
        if let Some(max) = self.max_message_len {
            if message.len() > max {
                return Err(AdapterError::signing(
                    self.id(),
                    format!(
                        "message of {} bytes exceeds the configured {} byte limit",
                        message.len(),
                        max
                    ),
                ));
            }
        }
        self.backend.sign(message, secret_key)
    }

    fn verify(
        &self,
        signature: &Signature,
        message: &[u8],
        public_key: &PublicKey,
    ) -> AdapterResult<VerifyResult> {
        self.backend.verify(signature, message, public_key)
    }
}

impl HashSignatureScheme for Sphincs {
    fn profile(&self) -> SphincsProfile {
        self.variant.profile()
    }

    fn parameters(&self) -> SphincsParameters {
        SphincsParameters::for_variant(self.variant)
    }

    fn max_message_len(&self) -> Option<usize> {
        self.max_message_len
    }
}
