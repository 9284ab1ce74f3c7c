/*!
 * CRYSTALS-Kyber adapter for quantum-resistant key encapsulation
 *
 * This module wraps the CRYSTALS-Kyber parameter sets of the primitive library
 * behind the [`KemScheme`](crate::kem::KemScheme) contract.
 */

mod kyber;

pub use kyber::*;

#[cfg(test)]
mod tests;
