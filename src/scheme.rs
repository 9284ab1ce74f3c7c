//! Scheme identifiers and static descriptors
//!
//! A [`SchemeId`] names one parameter set of one primitive family. Its
//! [`SchemeDescriptor`] carries the byte sizes every key, signature, ciphertext
//! and shared secret of that parameter set must have.

use serde::{Deserialize, Serialize};
use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;

use crate::error::AdapterError;

/// The four capability families of the adapter layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SchemeFamily {
    /// Lattice-based signatures (CRYSTALS-Dilithium)
    Signature,
    /// Compact lattice-based signatures (Falcon)
    CompactSignature,
    /// Stateless hash-based signatures (SPHINCS+)
    HashSignature,
    /// Lattice-based key encapsulation (CRYSTALS-Kyber)
    Kem,
}

impl SchemeFamily {
    /// Whether schemes of this family implement the sign/verify contract
    pub fn is_signature(&self) -> bool {
        !matches!(self, SchemeFamily::Kem)
    }
}

impl fmt::Display for SchemeFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemeFamily::Signature => write!(f, "signature"),
            SchemeFamily::CompactSignature => write!(f, "compact signature"),
            SchemeFamily::HashSignature => write!(f, "hash-based signature"),
            SchemeFamily::Kem => write!(f, "KEM"),
        }
    }
}

/// Every parameter set the adapter layer knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum SchemeId {
    /// Dilithium2 (NIST security level 2)
    Dilithium2,
    /// Dilithium3 (NIST security level 3)
    Dilithium3,
    /// Dilithium5 (NIST security level 5)
    Dilithium5,
    /// Falcon-512 (NIST security level 1)
    Falcon512,
    /// Falcon-1024 (NIST security level 5)
    Falcon1024,
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
    /// Kyber512 (NIST security level 1)
    Kyber512,
    /// Kyber768 (NIST security level 3)
    Kyber768,
    /// Kyber1024 (NIST security level 5)
    Kyber1024,
}

impl SchemeId {
    /// All known parameter sets, in registration order
    pub const ALL: [SchemeId; 14] = [
        SchemeId::Dilithium2,
        SchemeId::Dilithium3,
        SchemeId::Dilithium5,
        SchemeId::Falcon512,
        SchemeId::Falcon1024,
        SchemeId::Sphincs128f,
        SchemeId::Sphincs128s,
        SchemeId::Sphincs192f,
        SchemeId::Sphincs192s,
        SchemeId::Sphincs256f,
        SchemeId::Sphincs256s,
        SchemeId::Kyber512,
        SchemeId::Kyber768,
        SchemeId::Kyber1024,
    ];

    /// Canonical name, as printed and as accepted by the registry
    pub fn name(&self) -> &'static str {
        match self {
            SchemeId::Dilithium2 => "Dilithium2",
            SchemeId::Dilithium3 => "Dilithium3",
            SchemeId::Dilithium5 => "Dilithium5",
            SchemeId::Falcon512 => "Falcon-512",
            SchemeId::Falcon1024 => "Falcon-1024",
            SchemeId::Sphincs128f => "SPHINCS+-SHAKE-128f-simple",
            SchemeId::Sphincs128s => "SPHINCS+-SHAKE-128s-simple",
            SchemeId::Sphincs192f => "SPHINCS+-SHAKE-192f-simple",
            SchemeId::Sphincs192s => "SPHINCS+-SHAKE-192s-simple",
            SchemeId::Sphincs256f => "SPHINCS+-SHAKE-256f-simple",
            SchemeId::Sphincs256s => "SPHINCS+-SHAKE-256s-simple",
            SchemeId::Kyber512 => "Kyber512",
            SchemeId::Kyber768 => "Kyber768",
            SchemeId::Kyber1024 => "Kyber1024",
        }
    }

    /// Short alias accepted in addition to the canonical name
    fn alias(&self) -> &'static str {
        match self {
            SchemeId::Sphincs128f => "sphincs128f",
            SchemeId::Sphincs128s => "sphincs128s",
            SchemeId::Sphincs192f => "sphincs192f",
            SchemeId::Sphincs192s => "sphincs192s",
            SchemeId::Sphincs256f => "sphincs256f",
            SchemeId::Sphincs256s => "sphincs256s",
            // The canonical names of the other families are already short
            _ => "",
        }
    }

    /// The capability family this parameter set belongs to
    pub fn family(&self) -> SchemeFamily {
        match self {
            SchemeId::Dilithium2 | SchemeId::Dilithium3 | SchemeId::Dilithium5 => {
                SchemeFamily::Signature
            }
            SchemeId::Falcon512 | SchemeId::Falcon1024 => SchemeFamily::CompactSignature,
            SchemeId::Sphincs128f
            | SchemeId::Sphincs128s
            | SchemeId::Sphincs192f
            | SchemeId::Sphincs192s
            | SchemeId::Sphincs256f
            | SchemeId::Sphincs256s => SchemeFamily::HashSignature,
            SchemeId::Kyber512 | SchemeId::Kyber768 | SchemeId::Kyber1024 => SchemeFamily::Kem,
        }
    }

    /// Get the NIST security level of this parameter set
    pub fn security_level(&self) -> u8 {
        match self {
            SchemeId::Dilithium2 => 2,
            SchemeId::Dilithium3 => 3,
            SchemeId::Dilithium5 => 5,
            SchemeId::Falcon512 => 1,
            SchemeId::Falcon1024 => 5,
            SchemeId::Sphincs128f | SchemeId::Sphincs128s => 1,
            SchemeId::Sphincs192f | SchemeId::Sphincs192s => 3,
            SchemeId::Sphincs256f | SchemeId::Sphincs256s => 5,
            SchemeId::Kyber512 => 1,
            SchemeId::Kyber768 => 3,
            SchemeId::Kyber1024 => 5,
        }
    }

    /// Whether the linked primitive library was built with this algorithm
    pub fn is_available(&self) -> bool {
        match self.family() {
            SchemeFamily::Kem => crate::kem::oqs_algorithm(*self)
                .map(|alg| alg.is_enabled())
                .unwrap_or(false),
            _ => crate::signature::oqs_algorithm(*self)
                .map(|alg| alg.is_enabled())
                .unwrap_or(false),
        }
    }
}

impl fmt::Display for SchemeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, '-' | '_' | '+' | ' '))
        .flat_map(|c| c.to_lowercase())
        .collect()
}

impl FromStr for SchemeId {
    type Err = AdapterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        if wanted.is_empty() {
            return Err(AdapterError::UnknownScheme(s.to_string()));
        }

        SchemeId::ALL
            .iter()
            .copied()
            .find(|id| normalize(id.name()) == wanted || id.alias() == wanted)
            .ok_or_else(|| AdapterError::UnknownScheme(s.to_string()))
    }
}

impl TryFrom<String> for SchemeId {
    type Error = AdapterError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SchemeId> for String {
    fn from(id: SchemeId) -> Self {
        id.name().to_string()
    }
}

/// Signature-length policy of a signature parameter set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SignatureLength {
    /// Every signature has exactly this many bytes
    Fixed(usize),
    /// Signatures have an actual length, reported by the primitive, of at most this many bytes
    Bounded(usize),
}

impl SignatureLength {
    /// The largest signature this policy admits
    pub fn max_len(&self) -> usize {
        match self {
            SignatureLength::Fixed(len) | SignatureLength::Bounded(len) => *len,
        }
    }

    /// Whether a signature of `len` bytes satisfies this policy
    pub fn admits(&self, len: usize) -> bool {
        match self {
            SignatureLength::Fixed(expected) => len == *expected,
            SignatureLength::Bounded(max) => len > 0 && len <= *max,
        }
    }
}

impl fmt::Display for SignatureLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SignatureLength::Fixed(len) => write!(f, "{}", len),
            SignatureLength::Bounded(max) => write!(f, "at most {}", max),
        }
    }
}

/// Static metadata for one registered parameter set
///
/// Built once when an adapter is constructed, from the sizes the primitive
/// library reports, and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchemeDescriptor {
    pub id: SchemeId,
    pub name: &'static str,
    pub family: SchemeFamily,
    pub security_level: u8,
    pub public_key_len: usize,
    pub secret_key_len: usize,
    /// Signature-length policy (signature families only)
    pub signature: Option<SignatureLength>,
    /// Ciphertext length (KEM only)
    pub ciphertext_len: Option<usize>,
    /// Shared secret length (KEM only)
    pub shared_secret_len: Option<usize>,
}

impl SchemeDescriptor {
    /// Descriptor for a signature parameter set
    pub fn for_signature(
        id: SchemeId,
        public_key_len: usize,
        secret_key_len: usize,
        signature: SignatureLength,
    ) -> Self {
        Self {
            id,
            name: id.name(),
            family: id.family(),
            security_level: id.security_level(),
            public_key_len,
            secret_key_len,
            signature: Some(signature),
            ciphertext_len: None,
            shared_secret_len: None,
        }
    }

    /// Descriptor for a KEM parameter set
    pub fn for_kem(
        id: SchemeId,
        public_key_len: usize,
        secret_key_len: usize,
        ciphertext_len: usize,
        shared_secret_len: usize,
    ) -> Self {
        Self {
            id,
            name: id.name(),
            family: id.family(),
            security_level: id.security_level(),
            public_key_len,
            secret_key_len,
            signature: None,
            ciphertext_len: Some(ciphertext_len),
            shared_secret_len: Some(shared_secret_len),
        }
    }
}
