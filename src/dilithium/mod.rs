/*!
 * CRYSTALS-Dilithium adapter for quantum-resistant digital signatures
 *
 * This module wraps the CRYSTALS-Dilithium parameter sets of the primitive
 * library behind the [`SignatureScheme`](crate::signature::SignatureScheme)
 * contract.
 */

mod dilithium;

pub use dilithium::*;
