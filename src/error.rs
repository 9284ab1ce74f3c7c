/*!
 * Error handling for the post-quantum adapter layer
 *
 * Every status reported by the primitive library is translated here into a
 * typed taxonomy. Each error carries the scheme and operation that produced it,
 * a numeric error code, and a user-facing message.
 */

use std::fmt;
use thiserror::Error;

use crate::scheme::{SchemeFamily, SchemeId};

/// Operations exposed by the adapters, used to label errors and log lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    KeyGeneration,
    Sign,
    Verify,
    Encapsulate,
    Decapsulate,
    Lookup,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::KeyGeneration => write!(f, "key_generation"),
            Operation::Sign => write!(f, "sign"),
            Operation::Verify => write!(f, "verify"),
            Operation::Encapsulate => write!(f, "encapsulate"),
            Operation::Decapsulate => write!(f, "decapsulate"),
            Operation::Lookup => write!(f, "lookup"),
        }
    }
}

/// Error type for all adapter operations
#[derive(Debug, Error)]
pub enum AdapterError {
    #[error("{scheme}: randomness unavailable during {operation} - {cause}")]
    EntropyUnavailable {
        scheme: SchemeId,
        operation: Operation,
        cause: String,
    },

    #[error("{scheme}: signing failed - {cause}")]
    SigningFailure { scheme: SchemeId, cause: String },

    #[error("{scheme}: encapsulation failed - {cause}")]
    EncapsulationFailure { scheme: SchemeId, cause: String },

    #[error("{scheme}: decapsulation failed - {cause}")]
    DecapsulationFailure { scheme: SchemeId, cause: String },

    #[error("{scheme}: signature did not verify")]
    InvalidSignature { scheme: SchemeId },

    #[error("Unknown scheme: {0}")]
    UnknownScheme(String),

    #[error("{scheme}: not available in the primitive library - {cause}")]
    SchemeUnavailable { scheme: SchemeId, cause: String },

    #[error("{scheme}: invalid {item} length - expected {expected}, got {actual}")]
    InvalidLength {
        scheme: SchemeId,
        item: &'static str,
        expected: String,
        actual: usize,
    },

    #[error("{scheme}: registered as {actual}, requested as {expected}")]
    FamilyMismatch {
        scheme: SchemeId,
        expected: SchemeFamily,
        actual: SchemeFamily,
    },

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Error code constants for different error categories
pub mod error_codes {
    // Randomness errors: 1000-1999
    pub const ENTROPY_UNAVAILABLE: u32 = 1001;

    // Primitive operation errors: 2000-2999
    pub const SIGNING_FAILED: u32 = 2001;
    pub const ENCAPSULATION_FAILED: u32 = 2002;
    pub const DECAPSULATION_FAILED: u32 = 2003;

    // Verification outcome: 3000-3999
    pub const INVALID_SIGNATURE: u32 = 3001;

    // Input validation errors: 4000-4999
    pub const INVALID_LENGTH: u32 = 4001;

    // Registry and configuration errors: 5000-5999
    pub const UNKNOWN_SCHEME: u32 = 5001;
    pub const SCHEME_UNAVAILABLE: u32 = 5002;
    pub const FAMILY_MISMATCH: u32 = 5003;
    pub const CONFIG_INVALID: u32 = 5004;
}

impl AdapterError {
    /// Get the numeric error code for this error
    pub fn error_code(&self) -> u32 {
        match self {
            AdapterError::EntropyUnavailable { .. } => error_codes::ENTROPY_UNAVAILABLE,
            AdapterError::SigningFailure { .. } => error_codes::SIGNING_FAILED,
            AdapterError::EncapsulationFailure { .. } => error_codes::ENCAPSULATION_FAILED,
            AdapterError::DecapsulationFailure { .. } => error_codes::DECAPSULATION_FAILED,
            AdapterError::InvalidSignature { .. } => error_codes::INVALID_SIGNATURE,
            AdapterError::InvalidLength { .. } => error_codes::INVALID_LENGTH,
            AdapterError::UnknownScheme(_) => error_codes::UNKNOWN_SCHEME,
            AdapterError::SchemeUnavailable { .. } => error_codes::SCHEME_UNAVAILABLE,
            AdapterError::FamilyMismatch { .. } => error_codes::FAMILY_MISMATCH,
            AdapterError::ConfigError(_) => error_codes::CONFIG_INVALID,
        }
    }

    /// The scheme this error belongs to, if any
    pub fn scheme(&self) -> Option<SchemeId> {
        match self {
            AdapterError::EntropyUnavailable { scheme, .. }
            | AdapterError::SigningFailure { scheme, .. }
            | AdapterError::EncapsulationFailure { scheme, .. }
            | AdapterError::DecapsulationFailure { scheme, .. }
            | AdapterError::InvalidSignature { scheme }
            | AdapterError::SchemeUnavailable { scheme, .. }
            | AdapterError::InvalidLength { scheme, .. }
            | AdapterError::FamilyMismatch { scheme, .. } => Some(*scheme),
            AdapterError::UnknownScheme(_) | AdapterError::ConfigError(_) => None,
        }
    }

    /// The operation during which this error was raised, if any
    pub fn operation(&self) -> Option<Operation> {
        match self {
            AdapterError::EntropyUnavailable { operation, .. } => Some(*operation),
            AdapterError::SigningFailure { .. } => Some(Operation::Sign),
            AdapterError::EncapsulationFailure { .. } => Some(Operation::Encapsulate),
            AdapterError::DecapsulationFailure { .. } => Some(Operation::Decapsulate),
            AdapterError::InvalidSignature { .. } => Some(Operation::Verify),
            AdapterError::UnknownScheme(_) | AdapterError::FamilyMismatch { .. } => {
                Some(Operation::Lookup)
            }
            _ => None,
        }
    }

    /// Whether the caller is expected to branch on this error as a routine outcome
    ///
    /// A signature that does not verify is recoverable. A randomness failure is
    /// fatal to the call but may be retried by the caller; everything else
    /// indicates a malfunction or a configuration mistake.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, AdapterError::InvalidSignature { .. })
    }

    /// Whether retrying the same call may succeed
    pub fn is_retryable(&self) -> bool {
        matches!(self, AdapterError::EntropyUnavailable { .. })
    }

    /// Get a user-friendly error message
    pub fn user_friendly_message(&self) -> String {
        match self {
            AdapterError::EntropyUnavailable { scheme, .. } => format!(
                "Could not read the system random number generator for {}. Try again later.",
                scheme
            ),
            AdapterError::SigningFailure { scheme, .. } => format!(
                "Signing with {} failed. The secret key may be malformed.",
                scheme
            ),
            AdapterError::EncapsulationFailure { scheme, .. } => format!(
                "Key encapsulation with {} failed. The public key may be malformed.",
                scheme
            ),
            AdapterError::DecapsulationFailure { scheme, .. } => format!(
                "Key decapsulation with {} failed. The ciphertext is structurally invalid.",
                scheme
            ),
            AdapterError::InvalidSignature { .. } => {
                "The signature does not match the message.".to_string()
            }
            AdapterError::UnknownScheme(name) => {
                format!("No scheme named '{}' is registered.", name)
            }
            AdapterError::SchemeUnavailable { scheme, .. } => format!(
                "{} is not compiled into the installed primitive library.",
                scheme
            ),
            AdapterError::InvalidLength { scheme, item, .. } => {
                format!("The {} does not have the size {} requires.", item, scheme)
            }
            AdapterError::FamilyMismatch {
                scheme, expected, ..
            } => format!("{} cannot be used as a {} scheme.", scheme, expected),
            AdapterError::ConfigError(_) => {
                "The adapter configuration is invalid.".to_string()
            }
        }
    }
}

/// Convenience constructors for errors raised in several adapters
impl AdapterError {
    pub fn entropy(scheme: SchemeId, operation: Operation, cause: impl fmt::Display) -> Self {
        AdapterError::EntropyUnavailable {
            scheme,
            operation,
            cause: cause.to_string(),
        }
    }

    pub fn signing(scheme: SchemeId, cause: impl fmt::Display) -> Self {
        AdapterError::SigningFailure {
            scheme,
            cause: cause.to_string(),
        }
    }

    pub fn encapsulation(scheme: SchemeId, cause: impl fmt::Display) -> Self {
        AdapterError::EncapsulationFailure {
            scheme,
            cause: cause.to_string(),
        }
    }

    pub fn decapsulation(scheme: SchemeId, cause: impl fmt::Display) -> Self {
        AdapterError::DecapsulationFailure {
            scheme,
            cause: cause.to_string(),
        }
    }

    pub fn unavailable(scheme: SchemeId, cause: impl fmt::Display) -> Self {
        AdapterError::SchemeUnavailable {
            scheme,
            cause: cause.to_string(),
        }
    }

    pub fn invalid_length(
        scheme: SchemeId,
        item: &'static str,
        expected: impl fmt::Display,
        actual: usize,
    ) -> Self {
        AdapterError::InvalidLength {
            scheme,
            item,
            expected: expected.to_string(),
            actual,
        }
    }
}

impl From<serde_json::Error> for AdapterError {
    fn from(err: serde_json::Error) -> Self {
        AdapterError::ConfigError(err.to_string())
    }
}

/// Result type alias for adapter operations
pub type AdapterResult<T> = Result<T, AdapterError>;
