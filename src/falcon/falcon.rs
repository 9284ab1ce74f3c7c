use std::fmt;

use crate::entropy::EntropyPolicy;
use crate::error::AdapterResult;
use crate::keys::{KeyPair, PublicKey, SecretKey, Signature};
use crate::scheme::{SchemeDescriptor, SchemeId};
use crate::signature::{SigBackend, SignatureScheme, VerifyResult};

/// Falcon parameter sets
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FalconVariant {
    /// Falcon-512 (NIST security level 1)
    Falcon512,
    /// Falcon-1024 (NIST security level 5)
    Falcon1024,
}

impl FalconVariant {
    /// The registry identifier of this variant
    pub fn scheme_id(&self) -> SchemeId {
        match self {
            FalconVariant::Falcon512 => SchemeId::Falcon512,
            FalconVariant::Falcon1024 => SchemeId::Falcon1024,
        }
    }

    /// The variant for a registry identifier, if it names a Falcon parameter set
    pub fn from_scheme_id(id: SchemeId) -> Option<Self> {
        match id {
            SchemeId::Falcon512 => Some(FalconVariant::Falcon512),
            SchemeId::Falcon1024 => Some(FalconVariant::Falcon1024),
            _ => None,
        }
    }
}

impl fmt::Display for FalconVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.scheme_id())
    }
}

/// Compact signature scheme adapter for one Falcon parameter set
///
/// The descriptor's signature policy is
/// [`SignatureLength::Bounded`](crate::scheme::SignatureLength::Bounded): every
/// signature this adapter returns is non-empty and no longer than the maximum.
///
/// The primitive only exposes the variable-length Falcon encoding and reports
/// the length it actually wrote, so signatures are not padded to a fixed size.
/// Callers must not assume `signature.len() == max_signature_len()`.
#[derive(Debug, Clone)]
pub struct Falcon {
    variant: FalconVariant,
    backend: SigBackend,
}

impl Falcon {
    pub fn new(variant: FalconVariant) -> AdapterResult<Self> {
        Self::with_entropy_policy(variant, EntropyPolicy::default())
    }

    pub fn with_entropy_policy(
        variant: FalconVariant,
        entropy: EntropyPolicy,
    ) -> AdapterResult<Self> {
        Ok(Self {
            variant,
            backend: SigBackend::new(variant.scheme_id(), entropy)?,
        })
    }

    pub fn variant(&self) -> FalconVariant {
        self.variant
    }

    /// The largest signature this parameter set can produce
    pub fn max_signature_len(&self) -> usize {
        self.descriptor()
            .signature
            .map(|policy| policy.max_len())
            .unwrap_or_default()
    }
}

impl SignatureScheme for Falcon {
    fn descriptor(&self) -> &SchemeDescriptor {
        self.backend.descriptor()
    }

    fn generate_keypair(&self) -> AdapterResult<KeyPair> {
        self.backend.generate_keypair()
    }

    fn sign(&self, message: &[u8], secret_key: &SecretKey) -> AdapterResult<Signature> {
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
