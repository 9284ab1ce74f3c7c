//! Typed key, signature, ciphertext and shared-secret buffers
//!
//! Every buffer is tagged with the scheme that produced it and is only ever
//! constructed with the exact length that scheme declares (or, for
//! variable-length signatures, a length within its bound). A value of one of
//! these types is therefore always fully initialised and well-sized.

use sha3::{Digest, Sha3_256};
use std::fmt;

use crate::error::{AdapterError, AdapterResult};
use crate::scheme::{SchemeDescriptor, SchemeId};
use crate::secure_memory::SecureBytes;

/// Number of digest bytes shown in a public key fingerprint
const FINGERPRINT_LEN: usize = 8;

fn check_exact(
    descriptor: &SchemeDescriptor,
    item: &'static str,
    expected: usize,
    actual: usize,
) -> AdapterResult<()> {
    if expected != actual {
        return Err(AdapterError::invalid_length(descriptor.id, item, expected, actual));
    }
    Ok(())
}

fn kem_len(descriptor: &SchemeDescriptor, len: Option<usize>) -> AdapterResult<usize> {
    len.ok_or(AdapterError::FamilyMismatch {
        scheme: descriptor.id,
        expected: crate::scheme::SchemeFamily::Kem,
        actual: descriptor.family,
    })
}

/// Accessors shared by the non-secret buffer types
macro_rules! public_bytes {
    ($name:ident, $label:literal) => {
        impl $name {
            /// The scheme this value belongs to
            pub fn scheme(&self) -> SchemeId {
                self.scheme
            }

            /// Get a reference to the underlying bytes
            pub fn as_bytes(&self) -> &[u8] {
                &self.bytes
            }

            /// Length in bytes
            pub fn len(&self) -> usize {
                self.bytes.len()
            }

            /// Always false for a constructed value; provided for API symmetry
            pub fn is_empty(&self) -> bool {
                self.bytes.is_empty()
            }
        }

        impl AsRef<[u8]> for $name {
            fn as_ref(&self) -> &[u8] {
                &self.bytes
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({}, {} bytes)", $label, self.scheme, self.bytes.len())
            }
        }
    };
}

/// Public key of a signature or KEM parameter set
#[derive(Clone, PartialEq, Eq)]
pub struct PublicKey {
    scheme: SchemeId,
    bytes: Vec<u8>,
}

public_bytes!(PublicKey, "PublicKey");

impl PublicKey {
    /// Build a public key from caller-supplied bytes, rejecting a wrong length
    pub fn from_bytes(descriptor: &SchemeDescriptor, bytes: &[u8]) -> AdapterResult<Self> {
        Self::from_vec(descriptor, bytes.to_vec())
    }

    pub(crate) fn from_vec(descriptor: &SchemeDescriptor, bytes: Vec<u8>) -> AdapterResult<Self> {
        check_exact(descriptor, "public key", descriptor.public_key_len, bytes.len())?;
        Ok(Self {
            scheme: descriptor.id,
            bytes,
        })
    }

    /// Short SHA3-256 fingerprint, suitable for log lines
    pub fn fingerprint(&self) -> String {
        let digest = Sha3_256::digest(&self.bytes);
        hex::encode(&digest[..FINGERPRINT_LEN])
    }
}

/// Secret key of a signature or KEM parameter set
///
/// Zeroed when dropped. Deliberately not `Clone`: a key pair is the only owner
/// of its secret key.
pub struct SecretKey {
    scheme: SchemeId,
    bytes: SecureBytes,
}

impl SecretKey {
    /// Build a secret key from caller-supplied bytes, rejecting a wrong length
    pub fn from_bytes(descriptor: &SchemeDescriptor, bytes: &[u8]) -> AdapterResult<Self> {
        check_exact(descriptor, "secret key", descriptor.secret_key_len, bytes.len())?;
        Ok(Self {
            scheme: descriptor.id,
            bytes: SecureBytes::new(bytes),
        })
    }

    /// Takes ownership of a buffer from the primitive library; the buffer is
    /// zeroed on drop even when the length check fails.
    pub(crate) fn from_secure(
        descriptor: &SchemeDescriptor,
        bytes: SecureBytes,
    ) -> AdapterResult<Self> {
        check_exact(descriptor, "secret key", descriptor.secret_key_len, bytes.len())?;
        Ok(Self {
            scheme: descriptor.id,
            bytes,
        })
    }

    /// The scheme this key belongs to
    pub fn scheme(&self) -> SchemeId {
        self.scheme
    }

    /// Get a reference to the secret bytes
    pub fn as_bytes(&self) -> &[u8] {
        self.bytes.as_bytes()
    }

    /// Length in bytes
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Always false for a constructed key; provided for API symmetry
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretKey({}, [REDACTED; {}])", self.scheme, self.bytes.len())
    }
}

/// A public key and its matching secret key
///
/// Produced only by a scheme's `generate_keypair`; immutable afterwards.
#[derive(Debug)]
pub struct KeyPair {
    public_key: PublicKey,
    secret_key: SecretKey,
}

impl KeyPair {
    pub(crate) fn new(public_key: PublicKey, secret_key: SecretKey) -> Self {
        debug_assert_eq!(public_key.scheme(), secret_key.scheme());
        Self {
            public_key,
            secret_key,
        }
    }

    /// The scheme this key pair belongs to
    pub fn scheme(&self) -> SchemeId {
        self.public_key.scheme
    }

    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    pub fn secret_key(&self) -> &SecretKey {
        &self.secret_key
    }

    /// Split the key pair, e.g. to hand the public key to another party
    pub fn into_parts(self) -> (PublicKey, SecretKey) {
        (self.public_key, self.secret_key)
    }
}

/// A signature produced by a signature scheme
#[derive(Clone, PartialEq, Eq)]
pub struct Signature {
    scheme: SchemeId,
    bytes: Vec<u8>,
}

public_bytes!(Signature, "Signature");

impl Signature {
    /// Build a signature from caller-supplied bytes, rejecting a length the
    /// scheme's signature policy does not admit
    pub fn from_bytes(descriptor: &SchemeDescriptor, bytes: &[u8]) -> AdapterResult<Self> {
        Self::from_vec(descriptor, bytes.to_vec())
    }

    pub(crate) fn from_vec(descriptor: &SchemeDescriptor, bytes: Vec<u8>) -> AdapterResult<Self> {
        let policy = descriptor.signature.ok_or(AdapterError::FamilyMismatch {
            scheme: descriptor.id,
            expected: crate::scheme::SchemeFamily::Signature,
            actual: descriptor.family,
        })?;
        if !policy.admits(bytes.len()) {
            return Err(AdapterError::invalid_length(
                descriptor.id,
                "signature",
                policy,
                bytes.len(),
            ));
        }
        Ok(Self {
            scheme: descriptor.id,
            bytes,
        })
    }
}

/// KEM ciphertext produced by encapsulation
#[derive(Clone, PartialEq, Eq)]
pub struct Ciphertext {
    scheme: SchemeId,
    bytes: Vec<u8>,
}

public_bytes!(Ciphertext, "Ciphertext");

impl Ciphertext {
    /// Build a ciphertext from caller-supplied bytes, rejecting a wrong length
    pub fn from_bytes(descriptor: &SchemeDescriptor, bytes: &[u8]) -> AdapterResult<Self> {
        Self::from_vec(descriptor, bytes.to_vec())
    }

    pub(crate) fn from_vec(descriptor: &SchemeDescriptor, bytes: Vec<u8>) -> AdapterResult<Self> {
        let expected = kem_len(descriptor, descriptor.ciphertext_len)?;
        check_exact(descriptor, "ciphertext", expected, bytes.len())?;
        Ok(Self {
            scheme: descriptor.id,
            bytes,
        })
    }
}

/// Shared secret agreed through a KEM
///
/// Zeroed when dropped; compared in constant time.
#[derive(PartialEq, Eq)]
pub struct SharedSecret {
    scheme: SchemeId,
    bytes: SecureBytes,
}

impl SharedSecret {
    pub(crate) fn from_secure(
        descriptor: &SchemeDescriptor,
        bytes: SecureBytes,
    ) -> AdapterResult<Self> {
        let expected = kem_len(descriptor, descriptor.shared_secret_len)?;
        check_exact(descriptor, "shared secret", expected, bytes.len())?;
        Ok(Self {
            scheme: descriptor.id,
            bytes,
        })
    }

    /// The scheme this secret was agreed with
    pub fn scheme(&self) -> SchemeId {
        self.scheme
    }

    /// Get a reference to the secret bytes
    pub fn as_bytes(&self) -> &[u8] {
        self.bytes.as_bytes()
    }

    /// Length in bytes
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Always false for a constructed secret; provided for API symmetry
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl fmt::Debug for SharedSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SharedSecret({}, [REDACTED; {}])", self.scheme, self.bytes.len())
    }
}
