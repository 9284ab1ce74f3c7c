/*!
 * Post-Quantum Primitive Adapter Layer
 *
 * This crate puts a uniform, type-safe contract over the post-quantum
 * primitives of the liboqs library so that driver programs can exercise any
 * supported parameter set the same way.
 *
 * The supported families are:
 *
 * - CRYSTALS-Dilithium for lattice-based signatures
 * - Falcon for compact lattice-based signatures
 * - SPHINCS+ (SHAKE, simple) for stateless hash-based signatures
 * - CRYSTALS-Kyber for key encapsulation
 *
 * Every adapter validates the sizes of what it is handed and of what the
 * primitive hands back, keeps secret material in zeroizing buffers, and
 * translates the primitive's status reports into [`AdapterError`].
 * Adapters are built once, either standalone or through the
 * [`PrimitiveRegistry`], and are safe to share between threads.
 */

// Skips a test when the linked primitive library was built without one of the
// named algorithms
#[cfg(test)]
macro_rules! skip_if_unavailable {
    ($($id:expr),+ $(,)?) => {
        if !($($id.is_available())&&+) {
            println!("Skipping test: algorithm not enabled in the primitive library");
            return;
        }
    };
}

/// Error taxonomy for every adapter operation
pub mod error;

/// Scheme identifiers, families and descriptors
pub mod scheme;

/// Secure memory handling utilities
pub mod secure_memory;

/// Size-checked keys, signatures, ciphertexts and shared secrets
pub mod keys;

/// Randomness availability checks
pub mod entropy;

/// The sign/verify contract shared by all signature families
pub mod signature;

/// The key encapsulation contract
pub mod kem;

/// CRYSTALS-Dilithium signatures
pub mod dilithium;

/// Falcon compact signatures
pub mod falcon;

/// SPHINCS+ hash-based signatures
pub mod sphincsplus;

/// CRYSTALS-Kyber key encapsulation
pub mod kyber;

/// Registry configuration
pub mod config;

/// Registry of constructed adapters
pub mod registry;

pub use config::RegistryConfig;
pub use error::{AdapterError, AdapterResult};
pub use kem::KemScheme;
pub use keys::{Ciphertext, KeyPair, PublicKey, SecretKey, SharedSecret, Signature};
pub use registry::PrimitiveRegistry;
pub use scheme::{SchemeDescriptor, SchemeFamily, SchemeId, SignatureLength};
pub use signature::{SignatureScheme, VerifyResult};
pub use sphincsplus::HashSignatureScheme;

/// Initialize the primitive library.
///
/// Adapters call this themselves before touching the primitive library, so
/// calling it explicitly is optional. Repeated calls are cheap.
///
/// # Example
///
/// ```
/// pqadapter::init();
/// ```
pub fn init() {
    oqs::init();
}

/// The types and traits most driver programs need
pub mod prelude {
    pub use crate::config::{FamilyDefaults, HashSignatureConfig, RegistryConfig};
    pub use crate::dilithium::{Dilithium, DilithiumVariant};
    pub use crate::entropy::EntropyPolicy;
    pub use crate::error::{AdapterError, AdapterResult, Operation};
    pub use crate::falcon::{Falcon, FalconVariant};
    pub use crate::init;
    pub use crate::kem::KemScheme;
    pub use crate::keys::{Ciphertext, KeyPair, PublicKey, SecretKey, SharedSecret, Signature};
    pub use crate::kyber::{Kyber, KyberVariant};
    pub use crate::registry::PrimitiveRegistry;
    pub use crate::scheme::{SchemeDescriptor, SchemeFamily, SchemeId, SignatureLength};
    pub use crate::signature::{SignatureScheme, VerifyResult};
    pub use crate::sphincsplus::{HashSignatureScheme, Sphincs, SphincsProfile, SphincsVariant};
}
