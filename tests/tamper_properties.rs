// Property tests: a single flipped bit in a signature or a message is always detected

mod common;

use proptest::collection::vec;
use proptest::prelude::*;
use std::sync::OnceLock;

use pqadapter::prelude::*;

const MESSAGE: &[u8] = b"property tested message";

struct Fixture {
    scheme: Box<dyn SignatureScheme>,
    key_pair: KeyPair,
    signature: Signature,
}

// Key generation and signing dominate the cost, so each scheme signs once
fn fixtures() -> &'static [Fixture] {
    static FIXTURES: OnceLock<Vec<Fixture>> = OnceLock::new();
    FIXTURES.get_or_init(|| {
        common::quick_signature_schemes()
            .into_iter()
            .map(|id| {
                let scheme = common::signature_scheme(id);
                let key_pair = scheme.generate_keypair().unwrap();
                let signature = scheme.sign(MESSAGE, key_pair.secret_key()).unwrap();
                Fixture {
                    scheme,
                    key_pair,
                    signature,
                }
            })
            .collect()
    })
}

fn flip_bit(bytes: &[u8], bit: usize) -> Vec<u8> {
    let mut flipped = bytes.to_vec();
    let bit = bit % (flipped.len() * 8);
    flipped[bit / 8] ^= 1 << (bit % 8);
    flipped
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_flipped_signature_bit_is_rejected(bit in any::<usize>()) {
        for fixture in fixtures() {
            let tampered = flip_bit(fixture.signature.as_bytes(), bit);
            // Same length, so the validating constructor always accepts it
            let tampered = fixture.scheme.signature_from_bytes(&tampered).unwrap();

            let outcome = fixture
                .scheme
                .verify(&tampered, MESSAGE, fixture.key_pair.public_key())
                .unwrap();
            prop_assert_eq!(outcome, VerifyResult::InvalidSignature, "{}", fixture.scheme.id());
        }
    }

    #[test]
    fn prop_flipped_message_bit_is_rejected(bit in any::<usize>()) {
        for fixture in fixtures() {
            let tampered = flip_bit(MESSAGE, bit);

            let outcome = fixture
                .scheme
                .verify(&fixture.signature, &tampered, fixture.key_pair.public_key())
                .unwrap();
            prop_assert_eq!(outcome, VerifyResult::InvalidSignature, "{}", fixture.scheme.id());
        }
    }

    #[test]
    fn prop_wrong_length_signature_is_rejected(extra in 1usize..64) {
        for fixture in fixtures() {
            let policy = fixture.scheme.descriptor().signature.unwrap();
            let mut oversized = fixture.signature.as_bytes().to_vec();
            oversized.resize(policy.max_len() + extra, 0);

            let rejected = matches!(
                fixture.scheme.signature_from_bytes(&oversized),
                Err(AdapterError::InvalidLength { .. })
            );
            prop_assert!(rejected);
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn prop_arbitrary_messages_round_trip(message in vec(any::<u8>(), 0..512)) {
        for fixture in fixtures() {
            let signature = fixture
                .scheme
                .sign(&message, fixture.key_pair.secret_key())
                .unwrap();
            let outcome = fixture
                .scheme
                .verify(&signature, &message, fixture.key_pair.public_key())
                .unwrap();
            prop_assert!(outcome.is_valid());
        }
    }

    #[test]
    fn prop_kyber_tampered_ciphertext_changes_secret(bit in any::<usize>()) {
        if !SchemeId::Kyber512.is_available() {
            return Ok(());
        }
        let kyber = Kyber::new(KyberVariant::Kyber512).unwrap();
        let key_pair = kyber.generate_keypair().unwrap();
        let (ciphertext, secret) = kyber.encapsulate(key_pair.public_key()).unwrap();

        let tampered = kyber
            .ciphertext_from_bytes(&flip_bit(ciphertext.as_bytes(), bit))
            .unwrap();
        let rejected = kyber.decapsulate(&tampered, key_pair.secret_key()).unwrap();
        prop_assert_ne!(rejected, secret);
    }
}
