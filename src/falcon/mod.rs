/*!
 * Falcon adapter for compact lattice-based signatures
 *
 * Falcon signatures are considerably smaller than Dilithium's; the primitive
 * reports the actual length of each signature as an output, bounded by the
 * parameter set's maximum.
 */

mod falcon;

pub use falcon::*;
