// src/models/did.rs
//! DID string codec for the `did:baa` method.
//!
//! A DID string is the public, stable identity of a DID:
//!
//! ```text
//! did:baa:<64-hex-char-hash>      (mainnet)
//! did:baa:t:<64-hex-char-hash>    (testnet)
//! ```
//!
//! The hash segment is the full hash of the property-set transaction minted
//! at creation; it never changes across document updates. The network tag
//! exists only in the DID string and is not stored in the record.

use crate::constants::{DID_HASH_LENGTH, DID_PREFIX_MAINNET, DID_PREFIX_TESTNET};
use crate::error::ResolverError;
use std::fmt;
use std::str::FromStr;

/// Ledger network a DID string is tagged with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetworkType {
    Mainnet,
    Testnet,
}

/// Parsed `did:baa` identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Did {
    /// Network the DID lives on.
    pub network: NetworkType,
    /// Hex full hash of the genesis property-set transaction.
    pub full_hash: String,
}

impl Did {
    /// Builds a DID from a network tag and a transaction full hash.
    pub fn new(network: NetworkType, full_hash: String) -> Self {
        Did { network, full_hash }
    }
}

impl fmt::Display for Did {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = match self.network {
            NetworkType::Mainnet => DID_PREFIX_MAINNET,
            NetworkType::Testnet => DID_PREFIX_TESTNET,
        };
        write!(f, "{}{}", prefix, self.full_hash)
    }
}

impl FromStr for Did {
    type Err = ResolverError;

    /// Parses a DID string.
    ///
    /// # Errors
    /// Returns [`ResolverError::MalformedDid`] if the prefix matches neither
    /// known scheme, or the hash segment has the wrong length or contains
    /// non-hex characters.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Testnet first: the mainnet prefix is a prefix of the testnet one.
        let (network, hash) = if let Some(rest) = s.strip_prefix(DID_PREFIX_TESTNET) {
            (NetworkType::Testnet, rest)
        } else if let Some(rest) = s.strip_prefix(DID_PREFIX_MAINNET) {
            (NetworkType::Mainnet, rest)
        } else {
            return Err(ResolverError::MalformedDid(format!(
                "'{}' does not start with a known did:baa prefix",
                s
            )));
        };

        if hash.len() != DID_HASH_LENGTH || !hash.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ResolverError::MalformedDid(format!(
                "hash segment '{}' is not {} hex characters",
                hash, DID_HASH_LENGTH
            )));
        }

        Ok(Did {
            network,
            full_hash: hash.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    const HASH: &str = "5ca5fb0b6c59f126f674eb504b7302c69ede9cf431d01dba07809314302e565f";

    #[test]
    fn test_mainnet_round_trip() {
        let did = Did::new(NetworkType::Mainnet, HASH.to_string());
        let encoded = did.to_string();
        assert_eq!(encoded, format!("did:baa:{}", HASH));
        assert_eq!(encoded.parse::<Did>().unwrap(), did);
    }

    #[test]
    fn test_testnet_round_trip() {
        let did = Did::new(NetworkType::Testnet, HASH.to_string());
        let encoded = did.to_string();
        assert_eq!(encoded, format!("did:baa:t:{}", HASH));
        assert_eq!(encoded.parse::<Did>().unwrap(), did);
    }

    #[test]
    fn test_rejects_unknown_prefix() {
        let err = format!("did:web:{}", HASH).parse::<Did>().unwrap_err();
        assert_eq!(err.code(), ErrorCode::MalformedDid);
    }

    #[test]
    fn test_rejects_wrong_hash_length() {
        let err = "did:baa:5ca5fb0b".parse::<Did>().unwrap_err();
        assert_eq!(err.code(), ErrorCode::MalformedDid);
    }

    #[test]
    fn test_rejects_non_hex_hash() {
        let bad = format!("did:baa:{}", "z".repeat(64));
        let err = bad.parse::<Did>().unwrap_err();
        assert_eq!(err.code(), ErrorCode::MalformedDid);
    }
}
