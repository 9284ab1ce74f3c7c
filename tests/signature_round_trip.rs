// End-to-end tests of the signature contract across every signature family

#[macro_use]
mod common;

use pqadapter::prelude::*;

#[test]
fn test_round_trip_every_signature_scheme() {
    for id in common::available_signature_schemes() {
        let scheme = common::signature_scheme(id);
        let key_pair = scheme.generate_keypair().unwrap();
        let message = format!("round trip through {}", id);

        let signature = scheme.sign(message.as_bytes(), key_pair.secret_key()).unwrap();
        assert_eq!(signature.scheme(), id);
        assert_eq!(
            scheme
                .verify(&signature, message.as_bytes(), key_pair.public_key())
                .unwrap(),
            VerifyResult::Valid,
            "{} failed to verify its own signature",
            id
        );
    }
}

#[test]
fn test_empty_message_signs_and_verifies() {
    for id in common::quick_signature_schemes() {
        let scheme = common::signature_scheme(id);
        let key_pair = scheme.generate_keypair().unwrap();

        let signature = scheme.sign(b"", key_pair.secret_key()).unwrap();
        assert!(scheme
            .verify(&signature, b"", key_pair.public_key())
            .unwrap()
            .is_valid());
        assert!(!scheme
            .verify(&signature, b"\0", key_pair.public_key())
            .unwrap()
            .is_valid());
    }
}

#[test]
fn test_size_invariants() {
    for id in common::available_signature_schemes() {
        let scheme = common::signature_scheme(id);
        let descriptor = scheme.descriptor().clone();
        assert_eq!(descriptor.id, id);
        assert_eq!(descriptor.family, id.family());
        assert_eq!(descriptor.ciphertext_len, None);

        let policy = descriptor.signature.unwrap();
        match id.family() {
            SchemeFamily::CompactSignature => {
                assert!(matches!(policy, SignatureLength::Bounded(_)))
            }
            _ => assert!(matches!(policy, SignatureLength::Fixed(_))),
        }

        let key_pair = scheme.generate_keypair().unwrap();
        assert_eq!(key_pair.public_key().len(), descriptor.public_key_len);
        assert_eq!(key_pair.secret_key().len(), descriptor.secret_key_len);

        let signature = scheme.sign(b"size check", key_pair.secret_key()).unwrap();
        assert!(policy.admits(signature.len()));
        assert!(signature.len() <= policy.max_len());
    }
}

#[test]
fn test_dilithium_hello_scenario() {
    skip_if_unavailable!(SchemeId::Dilithium2);

    let dilithium = Dilithium::new(DilithiumVariant::Dilithium2).unwrap();
    let key_pair = dilithium.generate_keypair().unwrap();
    let signature = dilithium
        .sign(b"Hello, Dilithium!", key_pair.secret_key())
        .unwrap();

    dilithium
        .verify_strict(&signature, b"Hello, Dilithium!", key_pair.public_key())
        .unwrap();

    match dilithium.verify_strict(&signature, b"Hello, Dilithium?", key_pair.public_key()) {
        Err(err @ AdapterError::InvalidSignature { .. }) => {
            assert!(err.is_recoverable());
            assert_eq!(err.scheme(), Some(SchemeId::Dilithium2));
        }
        other => panic!("expected InvalidSignature, got {:?}", other),
    }
}

#[test]
fn test_falcon_reports_actual_signature_length() {
    skip_if_unavailable!(SchemeId::Falcon512);

    let falcon = Falcon::new(FalconVariant::Falcon512).unwrap();
    let key_pair = falcon.generate_keypair().unwrap();
    assert_eq!(key_pair.public_key().len(), 897);

    let mut message = [0u8; 32];
    message[..15].copy_from_slice(b"Falcon test msg");

    let signature = falcon.sign(&message, key_pair.secret_key()).unwrap();
    assert!(signature.len() <= falcon.max_signature_len());

    // Re-parsing the bytes keeps the actual length
    let parsed = falcon.signature_from_bytes(signature.as_bytes()).unwrap();
    assert_eq!(parsed.len(), signature.len());
    assert!(falcon
        .verify(&parsed, &message, key_pair.public_key())
        .unwrap()
        .is_valid());
}

#[test]
fn test_cross_key_rejection() {
    const TRIALS: usize = 16;

    for id in common::quick_signature_schemes() {
        let scheme = common::signature_scheme(id);
        for trial in 0..TRIALS {
            let signer = scheme.generate_keypair().unwrap();
            let other = scheme.generate_keypair().unwrap();
            let message = format!("trial {}", trial);

            let signature = scheme.sign(message.as_bytes(), signer.secret_key()).unwrap();
            assert_eq!(
                scheme
                    .verify(&signature, message.as_bytes(), other.public_key())
                    .unwrap(),
                VerifyResult::InvalidSignature,
                "{} accepted a signature under an unrelated key",
                id
            );
        }
    }
}

#[test]
fn test_cross_scheme_signatures_are_invalid() {
    let schemes = common::quick_signature_schemes();
    for signer_id in &schemes {
        let signer = common::signature_scheme(*signer_id);
        let keys = signer.generate_keypair().unwrap();
        let signature = signer.sign(b"cross scheme", keys.secret_key()).unwrap();

        for verifier_id in schemes.iter().filter(|id| *id != signer_id) {
            let verifier = common::signature_scheme(*verifier_id);
            let verifier_keys = verifier.generate_keypair().unwrap();

            // Foreign signature under a native key, and a foreign key
            assert_eq!(
                verifier
                    .verify(&signature, b"cross scheme", verifier_keys.public_key())
                    .unwrap(),
                VerifyResult::InvalidSignature
            );
            assert_eq!(
                verifier
                    .verify(&signature, b"cross scheme", keys.public_key())
                    .unwrap(),
                VerifyResult::InvalidSignature
            );

            // Signing with a foreign secret key is a failure, not a signature
            assert!(matches!(
                verifier.sign(b"cross scheme", keys.secret_key()),
                Err(AdapterError::SigningFailure { .. })
            ));
        }
    }
}

#[test]
fn test_key_bytes_round_trip_through_validating_constructors() {
    for id in common::quick_signature_schemes() {
        let scheme = common::signature_scheme(id);
        let (public_key, secret_key) = scheme.generate_keypair().unwrap().into_parts();

        let public_key = scheme.public_key_from_bytes(public_key.as_bytes()).unwrap();
        let secret_key = scheme.secret_key_from_bytes(secret_key.as_bytes()).unwrap();

        let signature = scheme.sign(b"restored keys", &secret_key).unwrap();
        assert!(scheme
            .verify(&signature, b"restored keys", &public_key)
            .unwrap()
            .is_valid());

        let short = &public_key.as_bytes()[1..];
        assert!(matches!(
            scheme.public_key_from_bytes(short),
            Err(AdapterError::InvalidLength { .. })
        ));
    }
}
