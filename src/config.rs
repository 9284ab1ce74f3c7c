/*!
 * Registry configuration
 *
 * Selects which parameter sets are registered, whether the randomness source is
 * probed before use, the default scheme of each family, and the tuning of the
 * hash-based family. Loadable from JSON.
 */

use serde::{Deserialize, Serialize};

use crate::error::{AdapterError, AdapterResult};
use crate::scheme::{SchemeFamily, SchemeId};

/// Tuning specific to the hash-based signature family
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HashSignatureConfig {
    /// Largest message accepted for signing; `None` leaves it unbounded
    pub max_message_len: Option<usize>,
}

/// Scheme handed out when a driver asks for "the" scheme of a family
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FamilyDefaults {
    pub signature: SchemeId,
    pub compact_signature: SchemeId,
    pub hash_signature: SchemeId,
    pub kem: SchemeId,
}

impl Default for FamilyDefaults {
    fn default() -> Self {
        Self {
            signature: SchemeId::Dilithium2,
            compact_signature: SchemeId::Falcon512,
            hash_signature: SchemeId::Sphincs256s,
            kem: SchemeId::Kyber512,
        }
    }
}

impl FamilyDefaults {
    pub fn for_family(&self, family: SchemeFamily) -> SchemeId {
        match family {
            SchemeFamily::Signature => self.signature,
            SchemeFamily::CompactSignature => self.compact_signature,
            SchemeFamily::HashSignature => self.hash_signature,
            SchemeFamily::Kem => self.kem,
        }
    }

    fn entries(&self) -> [(SchemeFamily, SchemeId); 4] {
        [
            (SchemeFamily::Signature, self.signature),
            (SchemeFamily::CompactSignature, self.compact_signature),
            (SchemeFamily::HashSignature, self.hash_signature),
            (SchemeFamily::Kem, self.kem),
        ]
    }
}

/// Configuration of a [`PrimitiveRegistry`](crate::registry::PrimitiveRegistry)
///
/// # Example
///
/// ```
/// use pqadapter::config::RegistryConfig;
/// use pqadapter::scheme::SchemeId;
///
/// let config = RegistryConfig::from_json(r#"{
///     "schemes": ["Dilithium2", "falcon512", "sphincs128f", "Kyber768"],
///     "defaults": {
///         "hash_signature": "sphincs128f",
///         "kem": "Kyber768"
///     },
///     "hash_signature": { "max_message_len": 65536 }
/// }"#).unwrap();
///
/// assert_eq!(config.schemes.len(), 4);
/// assert_eq!(config.defaults.kem, SchemeId::Kyber768);
/// assert!(config.entropy_probe);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Parameter sets to register
    pub schemes: Vec<SchemeId>,
    /// Probe the OS randomness source before key generation and encapsulation
    pub entropy_probe: bool,
    pub defaults: FamilyDefaults,
    pub hash_signature: HashSignatureConfig,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            schemes: SchemeId::ALL.to_vec(),
            entropy_probe: true,
            defaults: FamilyDefaults::default(),
            hash_signature: HashSignatureConfig::default(),
        }
    }
}

impl RegistryConfig {
    /// Parse and validate a JSON configuration
    pub fn from_json(json: &str) -> AdapterResult<Self> {
        let config: RegistryConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to pretty-printed JSON
    pub fn to_json(&self) -> AdapterResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check that the configuration is coherent
    ///
    /// A family default must be of that family. It must also be one of the
    /// configured schemes whenever that family is configured at all.
    pub fn validate(&self) -> AdapterResult<()> {
        if self.schemes.is_empty() {
            return Err(AdapterError::ConfigError(
                "at least one scheme must be configured".to_string(),
            ));
        }

        for (family, id) in self.defaults.entries() {
            if id.family() != family {
                return Err(AdapterError::ConfigError(format!(
                    "default {} scheme {} is a {} scheme",
                    family,
                    id,
                    id.family()
                )));
            }

            let family_configured = self.schemes.iter().any(|s| s.family() == family);
            if family_configured && !self.schemes.contains(&id) {
                return Err(AdapterError::ConfigError(format!(
                    "default {} scheme {} is not among the configured schemes",
                    family, id
                )));
            }
        }

        if self.hash_signature.max_message_len == Some(0) {
            return Err(AdapterError::ConfigError(
                "hash_signature.max_message_len must be positive".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = RegistryConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.schemes.len(), SchemeId::ALL.len());
        assert!(config.entropy_probe);
        assert_eq!(config.defaults.for_family(SchemeFamily::Kem), SchemeId::Kyber512);
        assert_eq!(
            config.defaults.for_family(SchemeFamily::HashSignature),
            SchemeId::Sphincs256s
        );
    }

    #[test]
    fn test_empty_json_uses_defaults() {
        let config = RegistryConfig::from_json("{}").unwrap();
        assert_eq!(config, RegistryConfig::default());
    }

    #[test]
    fn test_json_round_trip() {
        let config = RegistryConfig {
            schemes: vec![SchemeId::Dilithium3, SchemeId::Kyber1024],
            entropy_probe: false,
            defaults: FamilyDefaults {
                signature: SchemeId::Dilithium3,
                kem: SchemeId::Kyber1024,
                ..FamilyDefaults::default()
            },
            hash_signature: HashSignatureConfig {
                max_message_len: Some(1024),
            },
        };
        let json = config.to_json().unwrap();
        assert!(json.contains("\"Dilithium3\""));
        assert_eq!(RegistryConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_unknown_scheme_in_json() {
        let result = RegistryConfig::from_json(r#"{ "schemes": ["Rainbow1"] }"#);
        assert!(matches!(result, Err(AdapterError::ConfigError(_))));
    }

    #[test]
    fn test_default_of_wrong_family() {
        let result = RegistryConfig::from_json(r#"{ "defaults": { "kem": "Dilithium2" } }"#);
        match result {
            Err(AdapterError::ConfigError(msg)) => assert!(msg.contains("Dilithium2")),
            other => panic!("expected ConfigError, got {:?}", other),
        }
    }

    #[test]
    fn test_default_not_configured() {
        let result = RegistryConfig::from_json(r#"{ "schemes": ["Kyber768"] }"#);
        match result {
            Err(AdapterError::ConfigError(msg)) => assert!(msg.contains("Kyber512")),
            other => panic!("expected ConfigError, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_empty_scheme_list_and_zero_limit() {
        assert!(RegistryConfig::from_json(r#"{ "schemes": [] }"#).is_err());
        assert!(
            RegistryConfig::from_json(r#"{ "hash_signature": { "max_message_len": 0 } }"#).is_err()
        );
    }
}
