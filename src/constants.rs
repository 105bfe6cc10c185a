// src/constants.rs
//! Protocol constants for the did:baa method.

/// Tagged-data name under which DID document payloads are uploaded.
pub const DATA_CLOUD_NAME: &str = "blobaa-did-document-payload";

/// Prefix of the account property that anchors a DID.
pub const DID_ID_PREFIX: &str = "did://";

/// Length of the random nonce portion of a DID's property name.
pub const DID_ID_LENGTH: usize = 20;

/// Record format version understood by this resolver.
pub const RECORD_VERSION: &str = "001";

/// Default value of the pass-through metadata segment of a record.
///
/// The segment is reserved for redeem-account rotation metadata and is
/// never interpreted by this resolver.
pub const RECORD_METADATA_DEFAULT: &str = "0000-0000-0000-00000";

/// DID scheme prefix for mainnet identifiers.
pub const DID_PREFIX_MAINNET: &str = "did:baa:";

/// DID scheme prefix for testnet identifiers.
pub const DID_PREFIX_TESTNET: &str = "did:baa:t:";

/// Length in characters of the hex transaction hash inside a DID string.
pub const DID_HASH_LENGTH: usize = 64;
