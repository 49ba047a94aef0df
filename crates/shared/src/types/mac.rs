//! Digest algorithm selection for request MACs.
//!
//! The gateway's legacy contract is MD5. The algorithm is still a
//! configuration value so a deployment can move to a stronger digest
//! without touching the signing code.

use serde::{Deserialize, Serialize};

/// Digest used to compute the `mac` field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MacAlgorithm {
    /// MD5, 32 hex characters. Wire compatible with the live gateway.
    #[default]
    Md5,
    /// SHA-256, 64 hex characters.
    Sha256,
}

impl MacAlgorithm {
    /// Length of the rendered hex signature.
    #[must_use]
    pub const fn hex_len(self) -> usize {
        match self {
            Self::Md5 => 32,
            Self::Sha256 => 64,
        }
    }
}

impl std::fmt::Display for MacAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Md5 => write!(f, "md5"),
            Self::Sha256 => write!(f, "sha256"),
        }
    }
}

impl std::str::FromStr for MacAlgorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "md5" => Ok(Self::Md5),
            "sha256" | "sha-256" => Ok(Self::Sha256),
            _ => Err(format!("Unknown MAC algorithm: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_default_is_md5() {
        assert_eq!(MacAlgorithm::default(), MacAlgorithm::Md5);
    }

    #[test]
    fn test_hex_len() {
        assert_eq!(MacAlgorithm::Md5.hex_len(), 32);
        assert_eq!(MacAlgorithm::Sha256.hex_len(), 64);
    }

    #[test]
    fn test_display() {
        assert_eq!(MacAlgorithm::Md5.to_string(), "md5");
        assert_eq!(MacAlgorithm::Sha256.to_string(), "sha256");
    }

    #[test]
    fn test_from_str() {
        assert_eq!(MacAlgorithm::from_str("MD5").unwrap(), MacAlgorithm::Md5);
        assert_eq!(
            MacAlgorithm::from_str("sha-256").unwrap(),
            MacAlgorithm::Sha256
        );
        assert!(MacAlgorithm::from_str("crc32").is_err());
        assert!(MacAlgorithm::from_str("").is_err());
    }

    #[test]
    fn test_serde_lowercase() {
        let parsed: MacAlgorithm = serde_json::from_str("\"sha256\"").unwrap();
        assert_eq!(parsed, MacAlgorithm::Sha256);
        assert_eq!(serde_json::to_string(&MacAlgorithm::Md5).unwrap(), "\"md5\"");
    }
}
