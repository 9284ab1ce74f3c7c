/*!
 * Primitive registry
 *
 * Composition root of the adapter layer. Maps each scheme identifier to a
 * constructed adapter and its descriptor. Built once, read-only afterwards, and
 * shareable across threads without locking.
 */

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, OnceLock};

use crate::config::{FamilyDefaults, RegistryConfig};
use crate::dilithium::{Dilithium, DilithiumVariant};
use crate::entropy::EntropyPolicy;
use crate::error::{AdapterError, AdapterResult};
use crate::falcon::{Falcon, FalconVariant};
use crate::kem::KemScheme;
use crate::kyber::{Kyber, KyberVariant};
use crate::scheme::{SchemeDescriptor, SchemeFamily, SchemeId};
use crate::signature::SignatureScheme;
use crate::sphincsplus::{HashSignatureScheme, Sphincs, SphincsVariant};

/// One registered parameter set
///
/// Exactly one capability set is present for KEMs. Hash-based schemes expose
/// both the plain signature contract and the hash-signature contract.
#[derive(Clone)]
pub struct RegisteredScheme {
    descriptor: SchemeDescriptor,
    signature: Option<Arc<dyn SignatureScheme>>,
    hash_signature: Option<Arc<dyn HashSignatureScheme>>,
    kem: Option<Arc<dyn KemScheme>>,
}

impl RegisteredScheme {
    fn signature_scheme(scheme: Arc<dyn SignatureScheme>) -> Self {
        Self {
            descriptor: scheme.descriptor().clone(),
            signature: Some(scheme),
            hash_signature: None,
            kem: None,
        }
    }

    fn hash_signature_scheme(scheme: Arc<Sphincs>) -> Self {
        Self {
            descriptor: scheme.descriptor().clone(),
            signature: Some(scheme.clone() as Arc<dyn SignatureScheme>),
            hash_signature: Some(scheme as Arc<dyn HashSignatureScheme>),
            kem: None,
        }
    }

    fn kem_scheme(scheme: Arc<dyn KemScheme>) -> Self {
        Self {
            descriptor: scheme.descriptor().clone(),
            signature: None,
            hash_signature: None,
            kem: Some(scheme),
        }
    }

    pub fn id(&self) -> SchemeId {
        self.descriptor.id
    }

    pub fn descriptor(&self) -> &SchemeDescriptor {
        &self.descriptor
    }

    /// The sign/verify capability set, for every signature family
    pub fn signature(&self) -> Option<Arc<dyn SignatureScheme>> {
        self.signature.clone()
    }

    /// The hash-signature capability set, for the hash-based family only
    pub fn hash_signature(&self) -> Option<Arc<dyn HashSignatureScheme>> {
        self.hash_signature.clone()
    }

    /// The KEM capability set, for the KEM family only
    pub fn kem(&self) -> Option<Arc<dyn KemScheme>> {
        self.kem.clone()
    }
}

impl fmt::Debug for RegisteredScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisteredScheme")
            .field("descriptor", &self.descriptor)
            .finish()
    }
}

/// Registry of every constructed adapter, keyed by scheme identifier
///
/// # Example
///
/// ```no_run
/// use pqadapter::registry::PrimitiveRegistry;
///
/// let registry = PrimitiveRegistry::new();
/// let dilithium = registry.signature("Dilithium2")?;
/// let kyber = registry.kem("kyber512")?;
///
/// let key_pair = dilithium.generate_keypair()?;
/// let signature = dilithium.sign(b"message", key_pair.secret_key())?;
/// assert!(dilithium.verify(&signature, b"message", key_pair.public_key())?.is_valid());
///
/// let key_pair = kyber.generate_keypair()?;
/// let (ciphertext, secret) = kyber.encapsulate(key_pair.public_key())?;
/// assert_eq!(kyber.decapsulate(&ciphertext, key_pair.secret_key())?, secret);
/// # Ok::<(), pqadapter::AdapterError>(())
/// ```
#[derive(Debug)]
pub struct PrimitiveRegistry {
    schemes: HashMap<SchemeId, RegisteredScheme>,
    defaults: FamilyDefaults,
}

impl PrimitiveRegistry {
    /// Register every available scheme with the default configuration
    pub fn new() -> Self {
        Self::build(&RegistryConfig::default())
    }

    /// Register the configured subset of schemes
    ///
    /// Schemes the linked primitive library does not provide are skipped with
    /// a warning. Only an invalid configuration is an error.
    pub fn from_config(config: &RegistryConfig) -> AdapterResult<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    /// The process-wide registry, built on first use with the default configuration
    pub fn global() -> &'static PrimitiveRegistry {
        static GLOBAL: OnceLock<PrimitiveRegistry> = OnceLock::new();
        GLOBAL.get_or_init(PrimitiveRegistry::new)
    }

    fn build(config: &RegistryConfig) -> Self {
        let entropy = EntropyPolicy::from(config.entropy_probe);
        let mut schemes = HashMap::with_capacity(config.schemes.len());

        for &id in &config.schemes {
            if schemes.contains_key(&id) {
                continue;
            }
            if !id.is_available() {
                log::warn!("{}: not enabled in the primitive library, skipping", id);
                continue;
            }
            match construct(id, config, entropy) {
                Ok(registered) => {
                    schemes.insert(id, registered);
                }
                Err(e) => log::warn!("{}: skipping registration: {}", id, e),
            }
        }

        log::info!(
            "Primitive registry ready with {} of {} configured schemes",
            schemes.len(),
            config.schemes.len()
        );

        Self {
            schemes,
            defaults: config.defaults.clone(),
        }
    }

    /// Look up a registered scheme by name
    pub fn get(&self, name: &str) -> AdapterResult<&RegisteredScheme> {
        let id: SchemeId = name.parse()?;
        self.get_by_id(id)
    }

    /// Look up a registered scheme by identifier
    pub fn get_by_id(&self, id: SchemeId) -> AdapterResult<&RegisteredScheme> {
        self.schemes
            .get(&id)
            .ok_or_else(|| AdapterError::UnknownScheme(id.name().to_string()))
    }

    /// The sign/verify contract of a signature scheme of any family
    pub fn signature(&self, name: &str) -> AdapterResult<Arc<dyn SignatureScheme>> {
        let registered = self.get(name)?;
        registered
            .signature()
            .ok_or_else(|| mismatch(registered, SchemeFamily::Signature))
    }

    /// The hash-signature contract of a hash-based scheme
    pub fn hash_signature(&self, name: &str) -> AdapterResult<Arc<dyn HashSignatureScheme>> {
        let registered = self.get(name)?;
        registered
            .hash_signature()
            .ok_or_else(|| mismatch(registered, SchemeFamily::HashSignature))
    }

    /// The KEM contract of a key encapsulation scheme
    pub fn kem(&self, name: &str) -> AdapterResult<Arc<dyn KemScheme>> {
        let registered = self.get(name)?;
        registered
            .kem()
            .ok_or_else(|| mismatch(registered, SchemeFamily::Kem))
    }

    pub fn descriptor(&self, name: &str) -> AdapterResult<&SchemeDescriptor> {
        self.get(name).map(RegisteredScheme::descriptor)
    }

    /// Descriptors of every registered scheme, in canonical order
    pub fn descriptors(&self) -> Vec<&SchemeDescriptor> {
        SchemeId::ALL
            .iter()
            .filter_map(|id| self.schemes.get(id))
            .map(RegisteredScheme::descriptor)
            .collect()
    }

    /// Whether `name` parses and is registered
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_ok()
    }

    pub fn len(&self) -> usize {
        self.schemes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemes.is_empty()
    }

    /// The configured default scheme of `family`, if it is registered
    pub fn default_scheme(&self, family: SchemeFamily) -> AdapterResult<SchemeId> {
        let id = self.defaults.for_family(family);
        if self.schemes.contains_key(&id) {
            Ok(id)
        } else {
            Err(AdapterError::UnknownScheme(id.name().to_string()))
        }
    }
}

impl Default for PrimitiveRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn mismatch(registered: &RegisteredScheme, expected: SchemeFamily) -> AdapterError {
    let actual = registered.descriptor().family;
    log::debug!(
        "{}: requested as {} but registered as {}",
        registered.id(),
        expected,
        actual
    );
    AdapterError::FamilyMismatch {
        scheme: registered.id(),
        expected,
        actual,
    }
}

fn construct(
    id: SchemeId,
    config: &RegistryConfig,
    entropy: EntropyPolicy,
) -> AdapterResult<RegisteredScheme> {
    let not_in_family = || AdapterError::unavailable(id, "no adapter for this parameter set");

    match id.family() {
        SchemeFamily::Signature => {
            let variant = DilithiumVariant::from_scheme_id(id).ok_or_else(not_in_family)?;
            let scheme = Dilithium::with_entropy_policy(variant, entropy)?;
            Ok(RegisteredScheme::signature_scheme(Arc::new(scheme)))
        }
        SchemeFamily::CompactSignature => {
            let variant = FalconVariant::from_scheme_id(id).ok_or_else(not_in_family)?;
            let scheme = Falcon::with_entropy_policy(variant, entropy)?;
            Ok(RegisteredScheme::signature_scheme(Arc::new(scheme)))
        }
        SchemeFamily::HashSignature => {
            let variant = SphincsVariant::from_scheme_id(id).ok_or_else(not_in_family)?;
            let scheme = Sphincs::with_config(variant, &config.hash_signature, entropy)?;
            Ok(RegisteredScheme::hash_signature_scheme(Arc::new(scheme)))
        }
        SchemeFamily::Kem => {
            let variant = KyberVariant::from_scheme_id(id).ok_or_else(not_in_family)?;
            let scheme = Kyber::with_entropy_policy(variant, entropy)?;
            Ok(RegisteredScheme::kem_scheme(Arc::new(scheme)))
        }
    }
}
