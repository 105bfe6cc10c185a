// src/error.rs
//! Error taxonomy for the DID resolver core.
//!
//! Every failure carries a stable [`ErrorCode`] alongside its human-readable
//! description. Callers branch on the code, not the message text. All errors
//! are fail-fast: no retry or partial-state repair happens in this crate.

use thiserror::Error;

/// Stable machine-checkable error codes.
///
/// The code is the contract; descriptions may change between releases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// A stored record string does not parse as a DID record.
    MalformedRecord,
    /// A DID string does not parse as a did:baa identifier.
    MalformedDid,
    /// The attestation check failed: the requester is not the controller.
    WrongControllerAccount,
    /// An update was attempted on a revoked DID.
    Revoked,
    /// The external ledger reported or caused a failure.
    Ledger,
}

/// Errors surfaced by the resolver core.
#[derive(Debug, Error)]
pub enum ResolverError {
    /// Record string violates the pipe-delimited wire format.
    #[error("malformed DID record: {0}")]
    MalformedRecord(String),

    /// DID string violates the `did:baa:` wire format.
    #[error("malformed DID string: {0}")]
    MalformedDid(String),

    /// The property-set transaction was not issued by and to the requester's
    /// account, indicating a hijacked or misattributed DID.
    #[error("wrong controller account: {0}")]
    WrongControllerAccount(String),

    /// The DID's record is in the revoked state and cannot be updated.
    #[error("DID is revoked: {0}")]
    Revoked(String),

    /// Pass-through failure from the external ledger client (network error,
    /// node-reported error, unconfirmed transaction, ...).
    #[error("ledger error: {0}")]
    Ledger(String),
}

impl ResolverError {
    /// Returns the stable code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            ResolverError::MalformedRecord(_) => ErrorCode::MalformedRecord,
            ResolverError::MalformedDid(_) => ErrorCode::MalformedDid,
            ResolverError::WrongControllerAccount(_) => ErrorCode::WrongControllerAccount,
            ResolverError::Revoked(_) => ErrorCode::Revoked,
            ResolverError::Ledger(_) => ErrorCode::Ledger,
        }
    }
}

impl From<reqwest::Error> for ResolverError {
    fn from(err: reqwest::Error) -> Self {
        ResolverError::Ledger(err.to_string())
    }
}

impl From<serde_json::Error> for ResolverError {
    fn from(err: serde_json::Error) -> Self {
        ResolverError::Ledger(format!("payload serialization failed: {}", err))
    }
}
