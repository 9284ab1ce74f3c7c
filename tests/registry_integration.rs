// Registry, configuration and concurrency tests

#[macro_use]
mod common;

use std::sync::Arc;
use std::thread;

use pqadapter::prelude::*;

#[test]
fn test_registry_registers_every_available_scheme() {
    let registry = PrimitiveRegistry::new();
    for id in SchemeId::ALL {
        assert_eq!(registry.contains(id.name()), id.is_available(), "{}", id);
    }

    let names: Vec<&str> = registry.descriptors().iter().map(|d| d.name).collect();
    let expected: Vec<&str> = SchemeId::ALL
        .iter()
        .filter(|id| id.is_available())
        .map(|id| id.name())
        .collect();
    assert_eq!(names, expected);
}

#[test]
fn test_unknown_and_mismatched_lookups() {
    skip_if_unavailable!(SchemeId::Dilithium2, SchemeId::Kyber512);

    let registry = PrimitiveRegistry::global();
    assert!(matches!(
        registry.signature("NotAScheme").map(|_| ()),
        Err(AdapterError::UnknownScheme(_))
    ));
    assert!(matches!(
        registry.kem("Dilithium2").map(|_| ()),
        Err(AdapterError::FamilyMismatch {
            expected: SchemeFamily::Kem,
            actual: SchemeFamily::Signature,
            ..
        })
    ));

    let err = registry.signature("kyber512").map(|_| ()).unwrap_err();
    assert_eq!(err.error_code(), pqadapter::error::error_codes::FAMILY_MISMATCH);
    assert_eq!(err.operation(), Some(Operation::Lookup));
}

#[test]
fn test_registry_from_json_config() {
    skip_if_unavailable!(SchemeId::Dilithium5, SchemeId::Sphincs128f, SchemeId::Kyber1024);

    let config = RegistryConfig::from_json(
        r#"{
            "schemes": ["Dilithium5", "SPHINCS+-SHAKE-128f-simple", "kyber1024"],
            "entropy_probe": true,
            "defaults": {
                "signature": "Dilithium5",
                "hash_signature": "sphincs128f",
                "kem": "Kyber1024"
            },
            "hash_signature": { "max_message_len": 32 }
        }"#,
    )
    .unwrap();
    let registry = PrimitiveRegistry::from_config(&config).unwrap();
    assert_eq!(registry.len(), 3);

    let default_kem = registry.default_scheme(SchemeFamily::Kem).unwrap();
    assert_eq!(default_kem, SchemeId::Kyber1024);

    // The configured message limit reaches the hash-based adapter
    let sphincs = registry.hash_signature("sphincs128f").unwrap();
    assert_eq!(sphincs.max_message_len(), Some(32));
    assert_eq!(sphincs.profile(), SphincsProfile::Fast);

    let key_pair = sphincs.generate_keypair().unwrap();
    assert!(sphincs.sign(&[7u8; 32], key_pair.secret_key()).is_ok());
    assert!(matches!(
        sphincs.sign(&[7u8; 33], key_pair.secret_key()),
        Err(AdapterError::SigningFailure { .. })
    ));
}

#[test]
fn test_descriptors_serialize_for_listing() {
    skip_if_unavailable!(SchemeId::Kyber512);

    let registry = PrimitiveRegistry::global();
    let json = serde_json::to_value(registry.descriptor("Kyber512").unwrap()).unwrap();
    assert_eq!(json["name"], "Kyber512");
    assert_eq!(json["ciphertext_len"], 768);
    assert_eq!(json["shared_secret_len"], 32);
    assert!(json["signature"].is_null());
}

#[test]
fn test_concurrent_verification_through_global_registry() {
    const THREADS: usize = 8;
    const ROUNDS: usize = 4;

    skip_if_unavailable!(SchemeId::Dilithium2);

    let scheme = PrimitiveRegistry::global().signature("Dilithium2").unwrap();
    let key_pair = scheme.generate_keypair().unwrap();
    let message = b"shared across threads";
    let signature = scheme.sign(message, key_pair.secret_key()).unwrap();

    let public_key = Arc::new(key_pair.public_key().clone());
    let signature = Arc::new(signature);

    let handles: Vec<_> = (0..THREADS)
        .map(|i| {
            let public_key = Arc::clone(&public_key);
            let signature = Arc::clone(&signature);
            thread::spawn(move || {
                let scheme = PrimitiveRegistry::global().signature("Dilithium2").unwrap();
                for _ in 0..ROUNDS {
                    assert!(scheme
                        .verify(&signature, message, &public_key)
                        .unwrap()
                        .is_valid());
                    let wrong = format!("thread {}", i);
                    assert!(!scheme
                        .verify(&signature, wrong.as_bytes(), &public_key)
                        .unwrap()
                        .is_valid());
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
fn test_concurrent_encapsulation_through_global_registry() {
    const THREADS: usize = 4;

    skip_if_unavailable!(SchemeId::Kyber768);

    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            thread::spawn(|| {
                let kem = PrimitiveRegistry::global().kem("Kyber768").unwrap();
                let key_pair = kem.generate_keypair().unwrap();
                let (ciphertext, secret) = kem.encapsulate(key_pair.public_key()).unwrap();
                assert_eq!(kem.decapsulate(&ciphertext, key_pair.secret_key()).unwrap(), secret);
                hex::encode(secret.as_bytes())
            })
        })
        .collect();

    let mut secrets: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    secrets.sort();
    secrets.dedup();
    assert_eq!(secrets.len(), THREADS);
}
