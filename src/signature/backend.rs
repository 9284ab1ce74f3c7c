//! Shared signature backend over the primitive library
//!
//! Translates the primitive's status codes into [`AdapterError`] and enforces
//! the descriptor's size invariants on everything it hands back.

use oqs::sig::{Algorithm, Sig};

use crate::entropy::{self, EntropyPolicy};
use crate::error::{AdapterError, AdapterResult, Operation};
use crate::keys::{KeyPair, PublicKey, SecretKey, Signature};
use crate::scheme::{SchemeDescriptor, SchemeFamily, SchemeId, SignatureLength};
use crate::secure_memory::SecureBytes;
use crate::signature::VerifyResult;

#[derive(Debug, Clone)]
pub(crate) struct SigBackend {
    descriptor: SchemeDescriptor,
    algorithm: Algorithm,
    entropy: EntropyPolicy,
}

impl SigBackend {
    /// Create the backend and build the descriptor from the sizes the
    /// primitive library reports for this parameter set
    pub(crate) fn new(id: SchemeId, entropy: EntropyPolicy) -> AdapterResult<Self> {
        let algorithm = super::oqs_algorithm(id).ok_or(AdapterError::FamilyMismatch {
            scheme: id,
            expected: SchemeFamily::Signature,
            actual: id.family(),
        })?;
        let sig = instance(id, algorithm)?;

        // Falcon reports the actual signature length as an output; the other
        // families always fill the whole buffer.
        let policy = match id.family() {
            SchemeFamily::CompactSignature => SignatureLength::Bounded(sig.length_signature()),
            _ => SignatureLength::Fixed(sig.length_signature()),
        };
        let descriptor = SchemeDescriptor::for_signature(
            id,
            sig.length_public_key(),
            sig.length_secret_key(),
            policy,
        );

        Ok(Self {
            descriptor,
            algorithm,
            entropy,
        })
    }

    pub(crate) fn descriptor(&self) -> &SchemeDescriptor {
        &self.descriptor
    }

    fn id(&self) -> SchemeId {
        self.descriptor.id
    }

    pub(crate) fn generate_keypair(&self) -> AdapterResult<KeyPair> {
        let id = self.id();
        entropy::ensure_available(self.entropy, id, Operation::KeyGeneration)?;

        let sig = instance(id, self.algorithm)?;
        // Key generation only fails when the primitive cannot draw randomness
        let (public_key, secret_key) = sig
            .keypair()
            .map_err(|e| AdapterError::entropy(id, Operation::KeyGeneration, e))?;

        let secret_key =
            SecretKey::from_secure(&self.descriptor, SecureBytes::from(secret_key.into_vec()))?;
        let public_key = PublicKey::from_vec(&self.descriptor, public_key.into_vec())?;

        log::debug!("{}: generated key pair {}", id, public_key.fingerprint());
        Ok(KeyPair::new(public_key, secret_key))
    }

    pub(crate) fn sign(&self, message: &[u8], secret_key: &SecretKey) -> AdapterResult<Signature> {
        let id = self.id();
        if secret_key.scheme() != id {
            return Err(AdapterError::signing(
                id,
                format!("secret key belongs to {}", secret_key.scheme()),
            ));
        }

        let sig = instance(id, self.algorithm)?;
        let sk = sig
            .secret_key_from_bytes(secret_key.as_bytes())
            .ok_or_else(|| AdapterError::signing(id, "failed to create secret key from bytes"))?;

        let signature = sig
            .sign(message, &sk)
            .map_err(|e| AdapterError::signing(id, e))?;

        let signature = Signature::from_vec(&self.descriptor, signature.into_vec())
            .map_err(|e| AdapterError::signing(id, e))?;

        log::debug!(
            "{}: signed {} byte message, signature {} bytes",
            id,
            message.len(),
            signature.len()
        );
        Ok(signature)
    }

    pub(crate) fn verify(
        &self,
        signature: &Signature,
        message: &[u8],
        public_key: &PublicKey,
    ) -> AdapterResult<VerifyResult> {
        let id = self.id();
        if signature.scheme() != id || public_key.scheme() != id {
            log::debug!(
                "{}: rejecting signature of {} under key of {}",
                id,
                signature.scheme(),
                public_key.scheme()
            );
            return Ok(VerifyResult::InvalidSignature);
        }

        let sig = instance(id, self.algorithm)?;
        let pk = match sig.public_key_from_bytes(public_key.as_bytes()) {
            Some(pk) => pk,
            None => return Ok(VerifyResult::InvalidSignature),
        };
        let sig_obj = match sig.signature_from_bytes(signature.as_bytes()) {
            Some(s) => s,
            None => return Ok(VerifyResult::InvalidSignature),
        };

        match sig.verify(message, &sig_obj, &pk) {
            Ok(_) => Ok(VerifyResult::Valid),
            Err(_) => {
                log::debug!("{}: signature did not verify", id);
                Ok(VerifyResult::InvalidSignature)
            }
        }
    }
}

fn instance(id: SchemeId, algorithm: Algorithm) -> AdapterResult<Sig> {
    crate::init();
    Sig::new(algorithm).map_err(|e| AdapterError::unavailable(id, e))
}
