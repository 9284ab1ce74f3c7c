use super::*;
use crate::error::AdapterError;
use crate::kem::KemScheme;
use crate::scheme::SchemeId;

#[test]
fn test_kyber_key_generation() {
    // Test key generation for each variant
    for variant in [
        KyberVariant::Kyber512,
        KyberVariant::Kyber768,
        KyberVariant::Kyber1024,
    ]
    .iter()
    {
        if !variant.scheme_id().is_available() {
            continue;
        }
        let kyber = Kyber::new(*variant).unwrap();
        let key_pair = kyber.generate_keypair().unwrap();
        assert_eq!(key_pair.public_key().len(), kyber.descriptor().public_key_len);
        assert_eq!(key_pair.secret_key().len(), kyber.descriptor().secret_key_len);
    }
}

#[test]
fn test_kyber512_sizes() {
    skip_if_unavailable!(SchemeId::Kyber512);

    let kyber = Kyber::new(KyberVariant::Kyber512).unwrap();
    let descriptor = kyber.descriptor();
    assert_eq!(descriptor.public_key_len, 800);
    assert_eq!(descriptor.secret_key_len, 1632);
    assert_eq!(descriptor.ciphertext_len, Some(768));
    assert_eq!(descriptor.shared_secret_len, Some(32));
    assert_eq!(descriptor.signature, None);
}

#[test]
fn test_kyber_encapsulation_decapsulation() {
    skip_if_unavailable!(SchemeId::Kyber768);

    // Test the full encapsulation/decapsulation cycle
    let kyber = Kyber::new(KyberVariant::Kyber768).unwrap();
    let key_pair = kyber.generate_keypair().unwrap();
    let (ciphertext, shared_secret1) = kyber.encapsulate(key_pair.public_key()).unwrap();

    let shared_secret2 = kyber.decapsulate(&ciphertext, key_pair.secret_key()).unwrap();

    // Verify both shared secrets match
    assert_eq!(shared_secret1.as_bytes(), shared_secret2.as_bytes());
}

#[test]
fn test_kyber_public_key_handed_over() {
    skip_if_unavailable!(SchemeId::Kyber512);

    let kyber = Kyber::new(KyberVariant::Kyber512).unwrap();
    let (public_key, secret_key) = kyber.generate_keypair().unwrap().into_parts();

    // The sender only ever sees the public key bytes
    let received = kyber.public_key_from_bytes(public_key.as_bytes()).unwrap();
    let (ciphertext, sender_secret) = kyber.encapsulate(&received).unwrap();

    let receiver_secret = kyber.decapsulate(&ciphertext, &secret_key).unwrap();
    assert_eq!(sender_secret, receiver_secret);
}

#[test]
fn test_kyber_tampered_ciphertext_is_implicitly_rejected() {
    skip_if_unavailable!(SchemeId::Kyber512);

    let kyber = Kyber::new(KyberVariant::Kyber512).unwrap();
    let key_pair = kyber.generate_keypair().unwrap();
    let (ciphertext, shared_secret) = kyber.encapsulate(key_pair.public_key()).unwrap();

    let mut tampered = ciphertext.as_bytes().to_vec();
    tampered[0] ^= 0x01;
    let tampered = kyber.ciphertext_from_bytes(&tampered).unwrap();

    let rejected = kyber.decapsulate(&tampered, key_pair.secret_key()).unwrap();
    assert_eq!(rejected.len(), shared_secret.len());
    assert_ne!(rejected, shared_secret);
}

#[test]
fn test_kyber_wrong_length_ciphertext() {
    skip_if_unavailable!(SchemeId::Kyber512);

    let kyber = Kyber::new(KyberVariant::Kyber512).unwrap();
    match kyber.ciphertext_from_bytes(&[0u8; 767]) {
        Err(AdapterError::InvalidLength { item, actual, .. }) => {
            assert_eq!(item, "ciphertext");
            assert_eq!(actual, 767);
        }
        other => panic!("expected InvalidLength, got {:?}", other),
    }
}

#[test]
fn test_kyber_cross_variant_inputs() {
    skip_if_unavailable!(SchemeId::Kyber512, SchemeId::Kyber768);

    let k512 = Kyber::new(KyberVariant::Kyber512).unwrap();
    let k768 = Kyber::new(KyberVariant::Kyber768).unwrap();
    let keys_512 = k512.generate_keypair().unwrap();
    let keys_768 = k768.generate_keypair().unwrap();

    assert!(matches!(
        k512.encapsulate(keys_768.public_key()),
        Err(AdapterError::EncapsulationFailure { .. })
    ));

    let (ciphertext_768, _) = k768.encapsulate(keys_768.public_key()).unwrap();
    assert!(matches!(
        k512.decapsulate(&ciphertext_768, keys_512.secret_key()),
        Err(AdapterError::DecapsulationFailure { .. })
    ));
}
