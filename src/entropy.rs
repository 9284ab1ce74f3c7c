//! Randomness availability probe
//!
//! The primitive library draws its randomness from the operating system. Before
//! key generation or encapsulation the adapters read a few bytes from the same
//! source so that a missing or unreadable generator surfaces as
//! `EntropyUnavailable` instead of an opaque primitive failure. The read is
//! non-blocking from the caller's point of view: it either succeeds or fails
//! immediately.

use rand::rngs::OsRng;
use rand::RngCore;
use zeroize::Zeroize;

use crate::error::{AdapterError, AdapterResult, Operation};
use crate::scheme::SchemeId;

const PROBE_LEN: usize = 32;

/// Whether adapters probe the randomness source before consuming it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntropyPolicy {
    Probe,
    Trust,
}

impl Default for EntropyPolicy {
    fn default() -> Self {
        EntropyPolicy::Probe
    }
}

impl From<bool> for EntropyPolicy {
    fn from(probe: bool) -> Self {
        if probe {
            EntropyPolicy::Probe
        } else {
            EntropyPolicy::Trust
        }
    }
}

/// Check that the OS randomness source can be read
pub fn ensure_available(
    policy: EntropyPolicy,
    scheme: SchemeId,
    operation: Operation,
) -> AdapterResult<()> {
    ensure_available_with(&mut OsRng, policy, scheme, operation)
}

/// Check that `rng` can be read, mapping a failed read to `EntropyUnavailable`
pub fn ensure_available_with<R: RngCore + ?Sized>(
    rng: &mut R,
    policy: EntropyPolicy,
    scheme: SchemeId,
    operation: Operation,
) -> AdapterResult<()> {
    if policy == EntropyPolicy::Trust {
        return Ok(());
    }

    let mut probe = [0u8; PROBE_LEN];
    let result = rng.try_fill_bytes(&mut probe);
    probe.zeroize();

    result.map_err(|e| {
        log::warn!("{}: randomness probe failed before {}: {}", scheme, operation, e);
        AdapterError::entropy(scheme, operation, e)
    })
}
