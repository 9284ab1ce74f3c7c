use pqadapter::prelude::*;

/// Message signed by the lattice-based demo
const DILITHIUM_MESSAGE: &[u8] = b"Hello, Dilithium!";
/// Message signed by the hash-based demo
const SPHINCS_MESSAGE: &[u8] = b"Hello, Sphincs+!";
/// The compact-signature demo signs a fixed 32-byte buffer holding this text
const FALCON_MESSAGE: &[u8] = b"Falcon test msg";
const FALCON_BUFFER_LEN: usize = 32;

/// Bytes of each shared secret printed by the KEM demo
const SECRET_PREVIEW_LEN: usize = 16;

fn main() -> AdapterResult<()> {
    println!("Post-quantum primitive adapter demo");
    init();

    let registry = PrimitiveRegistry::global();
    let requested: Vec<String> = std::env::args().skip(1).collect();

    let schemes = if requested.is_empty() {
        default_schemes(registry)
    } else {
        requested
            .iter()
            .map(|name| registry.get(name).map(|scheme| scheme.id()))
            .collect::<AdapterResult<Vec<_>>>()?
    };

    for id in schemes {
        match id.family() {
            SchemeFamily::Signature => run_signature(registry, id, DILITHIUM_MESSAGE)?,
            SchemeFamily::CompactSignature => {
                let mut buffer = [0u8; FALCON_BUFFER_LEN];
                buffer[..FALCON_MESSAGE.len()].copy_from_slice(FALCON_MESSAGE);
                run_signature(registry, id, &buffer)?
            }
            SchemeFamily::HashSignature => run_hash_signature(registry, id, SPHINCS_MESSAGE)?,
            SchemeFamily::Kem => run_kem(registry, id)?,
        }
    }

    Ok(())
}

fn default_schemes(registry: &PrimitiveRegistry) -> Vec<SchemeId> {
    [
        SchemeFamily::Signature,
        SchemeFamily::CompactSignature,
        SchemeFamily::HashSignature,
        SchemeFamily::Kem,
    ]
    .into_iter()
    .filter_map(|family| match registry.default_scheme(family) {
        Ok(id) => Some(id),
        Err(e) => {
            println!("Skipping {} demo: {}", family, e);
            None
        }
    })
    .collect()
}

fn run_signature(registry: &PrimitiveRegistry, id: SchemeId, message: &[u8]) -> AdapterResult<()> {
    println!("\n=== {} ===", id);
    let scheme = registry.signature(id.name())?;
    sign_and_verify(scheme.as_ref(), message)
}

fn run_hash_signature(
    registry: &PrimitiveRegistry,
    id: SchemeId,
    message: &[u8],
) -> AdapterResult<()> {
    println!("\n=== {} ===", id);
    let scheme = registry.hash_signature(id.name())?;
    let parameters = scheme.parameters();
    println!(
        "Profile: {:?} (n={}, h={}, d={})",
        scheme.profile(),
        parameters.n,
        parameters.h,
        parameters.d
    );
    sign_and_verify(scheme.as_ref(), message)
}

fn sign_and_verify<S: SignatureScheme + ?Sized>(scheme: &S, message: &[u8]) -> AdapterResult<()> {
    let key_pair = scheme.generate_keypair()?;
    println!("PK size: {} bytes", key_pair.public_key().len());
    println!("SK size: {} bytes", key_pair.secret_key().len());

    let signature = scheme.sign(message, key_pair.secret_key())?;
    println!("Sig size: {} bytes", signature.len());

    match scheme.verify(&signature, message, key_pair.public_key())? {
        VerifyResult::Valid => println!("Success! {} signature verified.", scheme.id()),
        VerifyResult::InvalidSignature => println!("Verification failed"),
    }

    Ok(())
}

fn run_kem(registry: &PrimitiveRegistry, id: SchemeId) -> AdapterResult<()> {
    println!("\n=== {} ===", id);
    let kem = registry.kem(id.name())?;

    let key_pair = kem.generate_keypair()?;
    println!("PK generated ({} bytes)", key_pair.public_key().len());

    let (ciphertext, sender_secret) = kem.encapsulate(key_pair.public_key())?;
    println!("CT size: {} bytes", ciphertext.len());
    println!("SS1: {}", preview(&sender_secret));

    let receiver_secret = kem.decapsulate(&ciphertext, key_pair.secret_key())?;
    println!("SS2: {}", preview(&receiver_secret));

    if sender_secret == receiver_secret {
        println!("Match! Secure KEM.");
    } else {
        println!("Shared secrets differ");
    }

    Ok(())
}

fn preview(secret: &SharedSecret) -> String {
    let bytes = secret.as_bytes();
    hex::encode(&bytes[..SECRET_PREVIEW_LEN.min(bytes.len())])
}
