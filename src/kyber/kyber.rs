use oqs::kem::{Algorithm, Kem};
use std::fmt;

use crate::entropy::{self, EntropyPolicy};
use crate::error::{AdapterError, AdapterResult, Operation};
use crate::kem::{self, KemScheme};
use crate::keys::{Ciphertext, KeyPair, PublicKey, SecretKey, SharedSecret};
use crate::scheme::{SchemeDescriptor, SchemeFamily, SchemeId};
use crate::secure_memory::SecureBytes;

/// CRYSTALS-Kyber algorithm variants with different security levels
///
/// # Security Levels
///
/// * Kyber512: NIST Level 1 (equivalent to AES-128)
/// * Kyber768: NIST Level 3 (equivalent to AES-192)
/// * Kyber1024: NIST Level 5 (equivalent to AES-256)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KyberVariant {
    /// Kyber512 (NIST security level 1)
    Kyber512,
    /// Kyber768 (NIST security level 3, recommended)
    Kyber768,
    /// Kyber1024 (NIST security level 5)
    Kyber1024,
}

impl KyberVariant {
    /// The registry identifier of this variant
    pub fn scheme_id(&self) -> SchemeId {
        match self {
            KyberVariant::Kyber512 => SchemeId::Kyber512,
            KyberVariant::Kyber768 => SchemeId::Kyber768,
            KyberVariant::Kyber1024 => SchemeId::Kyber1024,
        }
    }

    /// The variant for a registry identifier, if it names a Kyber parameter set
    pub fn from_scheme_id(id: SchemeId) -> Option<Self> {
        match id {
            SchemeId::Kyber512 => Some(KyberVariant::Kyber512),
            SchemeId::Kyber768 => Some(KyberVariant::Kyber768),
            SchemeId::Kyber1024 => Some(KyberVariant::Kyber1024),
            _ => None,
        }
    }
}

impl fmt::Display for KyberVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.scheme_id())
    }
}

/// KEM adapter for one CRYSTALS-Kyber parameter set
///
/// # Security Properties
///
/// 1. Secret keys and shared secrets are zeroed when dropped
/// 2. Shared secrets are compared in constant time
/// 3. Decapsulation of a tampered ciphertext follows the primitive's implicit
///    rejection and is not reported as an error
#[derive(Debug, Clone)]
pub struct Kyber {
    variant: KyberVariant,
    descriptor: SchemeDescriptor,
    algorithm: Algorithm,
    entropy: EntropyPolicy,
}

impl Kyber {
    pub fn new(variant: KyberVariant) -> AdapterResult<Self> {
        Self::with_entropy_policy(variant, EntropyPolicy::default())
    }

    /// Create the adapter and build the descriptor from the sizes the
    /// primitive library reports for this parameter set
    pub fn with_entropy_policy(
        variant: KyberVariant,
        entropy: EntropyPolicy,
    ) -> AdapterResult<Self> {
        let id = variant.scheme_id();
        let algorithm = kem::oqs_algorithm(id).ok_or(AdapterError::FamilyMismatch {
            scheme: id,
            expected: SchemeFamily::Kem,
            actual: id.family(),
        })?;
        let kyber = instance(id, algorithm)?;

        let descriptor = SchemeDescriptor::for_kem(
            id,
            kyber.length_public_key(),
            kyber.length_secret_key(),
            kyber.length_ciphertext(),
            kyber.length_shared_secret(),
        );

        Ok(Self {
            variant,
            descriptor,
            algorithm,
            entropy,
        })
    }

    pub fn variant(&self) -> KyberVariant {
        self.variant
    }
}

impl KemScheme for Kyber {
    fn descriptor(&self) -> &SchemeDescriptor {
        &self.descriptor
    }

    fn generate_keypair(&self) -> AdapterResult<KeyPair> {
        let id = self.id();
        entropy::ensure_available(self.entropy, id, Operation::KeyGeneration)?;

        let kyber = instance(id, self.algorithm)?;
        let (public_key, secret_key) = kyber
            .keypair()
            .map_err(|e| AdapterError::entropy(id, Operation::KeyGeneration, e))?;

        let secret_key =
            SecretKey::from_secure(&self.descriptor, SecureBytes::from(secret_key.into_vec()))?;
        let public_key = PublicKey::from_vec(&self.descriptor, public_key.into_vec())?;

        log::debug!("{}: generated key pair {}", id, public_key.fingerprint());
        Ok(KeyPair::new(public_key, secret_key))
    }

    fn encapsulate(&self, public_key: &PublicKey) -> AdapterResult<(Ciphertext, SharedSecret)> {
        let id = self.id();
        if public_key.scheme() != id {
            return Err(AdapterError::encapsulation(
                id,
                format!("public key belongs to {}", public_key.scheme()),
            ));
        }
        entropy::ensure_available(self.entropy, id, Operation::Encapsulate)?;

        let kyber = instance(id, self.algorithm)?;
        let pk = kyber
            .public_key_from_bytes(public_key.as_bytes())
            .ok_or_else(|| {
                AdapterError::encapsulation(id, "failed to create public key from bytes")
            })?;

        let (ciphertext, shared_secret) = kyber
            .encapsulate(&pk)
            .map_err(|e| AdapterError::encapsulation(id, e))?;

        let shared_secret =
            SharedSecret::from_secure(&self.descriptor, SecureBytes::from(shared_secret.into_vec()))
                .map_err(|e| AdapterError::encapsulation(id, e))?;
        let ciphertext = Ciphertext::from_vec(&self.descriptor, ciphertext.into_vec())
            .map_err(|e| AdapterError::encapsulation(id, e))?;

        log::debug!("{}: encapsulated against {}", id, public_key.fingerprint());
        Ok((ciphertext, shared_secret))
    }

    fn decapsulate(
        &self,
        ciphertext: &Ciphertext,
        secret_key: &SecretKey,
    ) -> AdapterResult<SharedSecret> {
        let id = self.id();
        if ciphertext.scheme() != id {
            return Err(AdapterError::decapsulation(
                id,
                format!("ciphertext belongs to {}", ciphertext.scheme()),
            ));
        }
        if secret_key.scheme() != id {
            return Err(AdapterError::decapsulation(
                id,
                format!("secret key belongs to {}", secret_key.scheme()),
            ));
        }

        let kyber = instance(id, self.algorithm)?;
        let sk = kyber
            .secret_key_from_bytes(secret_key.as_bytes())
            .ok_or_else(|| {
                AdapterError::decapsulation(id, "failed to create secret key from bytes")
            })?;
        let ct = kyber
            .ciphertext_from_bytes(ciphertext.as_bytes())
            .ok_or_else(|| {
                AdapterError::decapsulation(id, "failed to create ciphertext from bytes")
            })?;

        let shared_secret = kyber
            .decapsulate(&sk, &ct)
            .map_err(|e| AdapterError::decapsulation(id, e))?;

        SharedSecret::from_secure(&self.descriptor, SecureBytes::from(shared_secret.into_vec()))
            .map_err(|e| AdapterError::decapsulation(id, e))
    }
}

fn instance(id: SchemeId, algorithm: Algorithm) -> AdapterResult<Kem> {
    crate::init();
    Kem::new(algorithm).map_err(|e| AdapterError::unavailable(id, e))
}
