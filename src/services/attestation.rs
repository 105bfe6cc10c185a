// src/services/attestation.rs
//! Attestation-chain verification.
//!
//! Before any update is written, the verifier confirms that the party
//! presenting a passphrase is the same party that created the DID or was
//! its most recent legitimate updater. The check walks the ledger
//! transaction that set the DID's current property value: a property set by
//! anyone other than the account it targets, or a requester who is not that
//! account, indicates a hijacked or misattributed DID.

use crate::error::ResolverError;
use crate::ledger::client::LedgerClient;
use crate::models::did::Did;
use crate::models::record::{DidRecord, State};
use log::{debug, warn};
use std::sync::Arc;

/// Successful verification result, carrying everything the updater needs to
/// write the superseding record.
#[derive(Debug, Clone)]
pub struct Attestation {
    /// Ledger property name the DID is anchored under.
    pub property: String,
    /// Account address of the DID's controller.
    pub controller: String,
    /// The DID's current record.
    pub record: DidRecord,
}

/// Verifies controller continuity for a DID against the ledger.
pub struct AttestationVerifier {
    client: Arc<dyn LedgerClient>,
}

impl AttestationVerifier {
    pub fn new(client: Arc<dyn LedgerClient>) -> Self {
        AttestationVerifier { client }
    }

    /// Runs the attestation check for `did` on behalf of
    /// `requester_address`.
    ///
    /// # Algorithm
    /// 1. Fetch the transaction that set the DID's current property value,
    ///    keyed by the DID's hash segment.
    /// 2. Decode the attachment's property value into a record.
    /// 3. Require the requester's address to equal both the sender and the
    ///    recipient of that transaction.
    /// 4. Refuse updates to a revoked DID.
    ///
    /// # Errors
    /// - [`ResolverError::MalformedRecord`] if the stored value does not
    ///   parse (format corruption).
    /// - [`ResolverError::WrongControllerAccount`] if the equality check of
    ///   step 3 fails.
    /// - [`ResolverError::Revoked`] if the record's state is revoked.
    /// - [`ResolverError::Ledger`] if the transaction lookup fails.
    ///
    /// No ledger write happens in any failure case.
    pub async fn verify(
        &self,
        did: &Did,
        requester_address: &str,
    ) -> Result<Attestation, ResolverError> {
        let tx = self.client.get_transaction_by_hash(&did.full_hash).await?;
        debug!(
            "attestation transaction for {}: sender {}, recipient {}",
            did, tx.sender_address, tx.recipient_address
        );

        let record = DidRecord::decode(&tx.attachment.value)?;

        if tx.sender_address != tx.recipient_address
            || requester_address != tx.sender_address
        {
            warn!(
                "controller mismatch for {}: requester {}, sender {}, recipient {}",
                did, requester_address, tx.sender_address, tx.recipient_address
            );
            return Err(ResolverError::WrongControllerAccount(format!(
                "account {} does not control {}",
                requester_address, did
            )));
        }

        if record.state == State::Revoked {
            return Err(ResolverError::Revoked(did.to_string()));
        }

        Ok(Attestation {
            property: tx.attachment.property,
            controller: tx.recipient_address,
            record,
        })
    }
}
