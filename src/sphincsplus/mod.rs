//! SPHINCS+ hash-based signature adapter
//!
//! SPHINCS+ is a stateless hash-based signature scheme that was selected by NIST
//! as part of the post-quantum cryptography standardization process.
//!
//! This module exposes the SHAKE "simple" parameter sets for the three security
//! levels, each in a fast and a small profile.

mod parameters;
mod sphincsplus;

pub use parameters::{SphincsParameters, SphincsProfile};
pub use sphincsplus::{HashSignatureScheme, Sphincs, SphincsVariant};
