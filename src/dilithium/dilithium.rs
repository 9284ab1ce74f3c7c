/*!
 * CRYSTALS-Dilithium adapter
 *
 * Dilithium signatures always fill the whole signature buffer, so the
 * descriptor declares a fixed signature length.
 */

use std::fmt;

use crate::entropy::EntropyPolicy;
use crate::error::AdapterResult;
use crate::keys::{KeyPair, PublicKey, SecretKey, Signature};
use crate::scheme::{SchemeDescriptor, SchemeId};
use crate::signature::{SigBackend, SignatureScheme, VerifyResult};

/// CRYSTALS-Dilithium algorithm variants with different security levels
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DilithiumVariant {
    /// Dilithium2 (NIST security level 2)
    Dilithium2,
    /// Dilithium3 (NIST security level 3, recommended)
    Dilithium3,
    /// Dilithium5 (NIST security level 5)
    Dilithium5,
}

impl DilithiumVariant {
    /// The registry identifier of this variant
    pub fn scheme_id(&self) -> SchemeId {
        match self {
            DilithiumVariant::Dilithium2 => SchemeId::Dilithium2,
            DilithiumVariant::Dilithium3 => SchemeId::Dilithium3,
            DilithiumVariant::Dilithium5 => SchemeId::Dilithium5,
        }
    }

    /// The variant for a registry identifier, if it names a Dilithium parameter set
    pub fn from_scheme_id(id: SchemeId) -> Option<Self> {
        match id {
            SchemeId::Dilithium2 => Some(DilithiumVariant::Dilithium2),
            SchemeId::Dilithium3 => Some(DilithiumVariant::Dilithium3),
            SchemeId::Dilithium5 => Some(DilithiumVariant::Dilithium5),
            _ => None,
        }
    }
}

impl fmt::Display for DilithiumVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.scheme_id())
    }
}

/// Signature scheme adapter for one Dilithium parameter set
///
/// # Examples
///
/// ```no_run
/// use pqadapter::dilithium::{Dilithium, DilithiumVariant};
/// use pqadapter::signature::SignatureScheme;
///
/// let dilithium = Dilithium::new(DilithiumVariant::Dilithium3)?;
/// let key_pair = dilithium.generate_keypair()?;
/// assert_eq!(key_pair.public_key().len(), dilithium.descriptor().public_key_len);
/// # Ok::<(), pqadapter::AdapterError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Dilithium {
    variant: DilithiumVariant,
    backend: SigBackend,
}

impl Dilithium {
    /// Create an adapter that probes the randomness source before key generation
    pub fn new(variant: DilithiumVariant) -> AdapterResult<Self> {
        Self::with_entropy_policy(variant, EntropyPolicy::default())
    }

    pub fn with_entropy_policy(
        variant: DilithiumVariant,
        entropy: EntropyPolicy,
    ) -> AdapterResult<Self> {
        Ok(Self {
            variant,
            backend: SigBackend::new(variant.scheme_id(), entropy)?,
        })
    }

    pub fn variant(&self) -> DilithiumVariant {
        self.variant
    }
}

impl SignatureScheme for Dilithium {
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
