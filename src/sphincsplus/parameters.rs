//! SPHINCS+ parameter sets
//!
//! Structural parameters of the SHAKE "simple" instances (SPHINCS+ round 3.1).
//! They are informational: sizes used for validation come from the primitive
//! library, these describe the trade-off each parameter set makes.

use serde::Serialize;

use crate::sphincsplus::SphincsVariant;

/// Performance profile of a SPHINCS+ parameter set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SphincsProfile {
    /// Faster signing, larger signatures ("f" parameter sets)
    Fast,
    /// Smaller signatures, much slower signing ("s" parameter sets)
    Small,
}

/// Parameters for a SPHINCS+ instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SphincsParameters {
    /// Security parameter n, in bytes
    pub n: u8,
    /// Total height of the hypertree
    pub h: u8,
    /// Number of hypertree layers
    pub d: u8,
    /// Height of each FORS tree
    pub fors_height: u8,
    /// Number of FORS trees
    pub fors_trees: u8,
    /// Winternitz parameter
    pub w: u8,
    pub profile: SphincsProfile,
}

impl SphincsParameters {
    /// Get parameters for a specific SPHINCS+ variant
    pub fn for_variant(variant: SphincsVariant) -> Self {
        let (n, h, d, fors_height, fors_trees, profile) = match variant {
            SphincsVariant::Sphincs128f => (16, 66, 22, 6, 33, SphincsProfile::Fast),
            SphincsVariant::Sphincs128s => (16, 63, 7, 12, 14, SphincsProfile::Small),
            SphincsVariant::Sphincs192f => (24, 66, 22, 8, 33, SphincsProfile::Fast),
            SphincsVariant::Sphincs192s => (24, 63, 7, 14, 17, SphincsProfile::Small),
            SphincsVariant::Sphincs256f => (32, 68, 17, 9, 35, SphincsProfile::Fast),
            SphincsVariant::Sphincs256s => (32, 64, 8, 14, 22, SphincsProfile::Small),
        };

        Self {
            n,
            h,
            d,
            fors_height,
            fors_trees,
            w: 16,
            profile,
        }
    }

    /// Height of each subtree in the hypertree
    pub fn subtree_height(&self) -> u8 {
        self.h / self.d
    }
}
