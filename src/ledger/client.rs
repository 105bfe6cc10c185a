// src/ledger/client.rs
//! Abstract ledger client capability required by the resolver core.
//!
//! The resolver needs exactly four things from a ledger: content-addressed
//! blob upload, account property replacement, transaction lookup by full
//! hash, and passphrase-to-address derivation. Everything else (consensus,
//! fees, confirmation tracking, timeouts, retries) is the concrete client's
//! concern and is out of scope here.

use crate::error::ResolverError;
use async_trait::async_trait;

/// Result of a blob upload: the content hash the ledger stored it under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlobUpload {
    /// Hex content hash; tamper-evident reference to the stored data.
    pub content_hash: String,
}

/// Result of a property-set: the full hash of the minted transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertySet {
    pub tx_hash: String,
}

/// Property name/value pair attached to a property-set transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionAttachment {
    pub property: String,
    pub value: String,
}

/// A confirmed ledger transaction, as seen by the attestation verifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    /// Account that issued the transaction.
    pub sender_address: String,
    /// Account the transaction targets (for property-sets, the property owner).
    pub recipient_address: String,
    /// Property name and value carried by the transaction.
    pub attachment: TransactionAttachment,
    pub block_height: u64,
    pub block_timestamp: u64,
}

/// Ledger operations the resolver core depends on.
///
/// Implementations perform remote calls; the core awaits them strictly in
/// sequence because each step's output feeds the next. Any failure surfaces
/// as [`ResolverError::Ledger`] and propagates unchanged.
#[async_trait]
pub trait LedgerClient: Send + Sync {
    /// Uploads `data` as a named, content-addressed blob.
    async fn upload_blob(
        &self,
        data: &[u8],
        name: &str,
        secret: &str,
    ) -> Result<BlobUpload, ResolverError>;

    /// Replaces the value of `property` on `recipient`'s account.
    ///
    /// Each replacement is a new transaction; the prior value stays
    /// inspectable in ledger history.
    async fn set_account_property(
        &self,
        property: &str,
        value: &str,
        recipient: &str,
        secret: &str,
    ) -> Result<PropertySet, ResolverError>;

    /// Fetches a confirmed transaction by its full hash.
    async fn get_transaction_by_hash(
        &self,
        full_hash: &str,
    ) -> Result<Transaction, ResolverError>;

    /// Derives the ledger account address controlled by `secret`.
    async fn derive_address(&self, secret: &str) -> Result<String, ResolverError>;
}
