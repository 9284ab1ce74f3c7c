// Shared helpers for the integration tests

#![allow(dead_code)]

use pqadapter::prelude::*;

/// Skip the calling test when an algorithm is not compiled into the primitive library
#[allow(unused_macros)]
macro_rules! skip_if_unavailable {
    ($($id:expr),+ $(,)?) => {
        if !($($id.is_available())&&+) {
            println!("Skipping test: algorithm not enabled in the primitive library");
            return;
        }
    };
}

/// Every signature parameter set compiled into the primitive library
pub fn available_signature_schemes() -> Vec<SchemeId> {
    SchemeId::ALL
        .iter()
        .copied()
        .filter(|id| id.family().is_signature() && id.is_available())
        .collect()
}

/// Every KEM parameter set compiled into the primitive library
pub fn available_kem_schemes() -> Vec<SchemeId> {
    SchemeId::ALL
        .iter()
        .copied()
        .filter(|id| id.family() == SchemeFamily::Kem && id.is_available())
        .collect()
}

/// The fast signature parameter sets, one per family, used where a test
/// signs many times
pub fn quick_signature_schemes() -> Vec<SchemeId> {
    [SchemeId::Dilithium2, SchemeId::Falcon512, SchemeId::Sphincs128f]
        .into_iter()
        .filter(|id| id.is_available())
        .collect()
}

/// Build a standalone signature adapter for `id`
pub fn signature_scheme(id: SchemeId) -> Box<dyn SignatureScheme> {
    if let Some(variant) = DilithiumVariant::from_scheme_id(id) {
        return Box::new(Dilithium::new(variant).unwrap());
    }
    if let Some(variant) = FalconVariant::from_scheme_id(id) {
        return Box::new(Falcon::new(variant).unwrap());
    }
    if let Some(variant) = SphincsVariant::from_scheme_id(id) {
        return Box::new(Sphincs::new(variant).unwrap());
    }
    panic!("{} is not a signature scheme", id);
}
