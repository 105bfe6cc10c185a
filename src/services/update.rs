// src/services/update.rs
//! DID document update service.
//!
//! Replaces a DID's document while keeping its public identifier stable:
//! the attestation verifier must pass first, then the new document is
//! uploaded and a superseding record is written under the attested property
//! name. On any verifier failure no ledger write happens at all, not even
//! the blob upload.
//!
//! Two racing updates against the same DID can both pass verification
//! against the same prior record and then race to set the property; the
//! ledger's transaction ordering is the only arbiter and the loser is
//! silently superseded. That last-write-wins race is accepted and not
//! coordinated here.

use crate::constants::DATA_CLOUD_NAME;
use crate::error::ResolverError;
use crate::ledger::client::LedgerClient;
use crate::models::did::Did;
use crate::models::record::DidRecord;
use crate::services::attestation::AttestationVerifier;
use log::info;
use serde_json::Value;
use std::sync::Arc;

/// Inputs for updating a DID's document.
#[derive(Debug, Clone)]
pub struct UpdateDidDocumentParams {
    /// The `did:baa` string identifying the DID to update.
    pub did: String,
    /// Controller account passphrase.
    pub passphrase: String,
    /// Replacement DID document; opaque to this crate.
    pub new_did_document: Value,
}

/// Result of a successful update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateDidDocumentResponse {
    /// The DID string, unchanged from the request (stable identity).
    pub did: String,
    /// The document now anchored by the DID.
    pub new_did_document: Value,
}

/// Orchestrates attestation, blob upload and property replacement for a
/// document update.
pub struct UpdateService {
    client: Arc<dyn LedgerClient>,
    verifier: AttestationVerifier,
}

impl UpdateService {
    pub fn new(client: Arc<dyn LedgerClient>) -> Self {
        UpdateService {
            verifier: AttestationVerifier::new(client.clone()),
            client,
        }
    }

    /// Writes a superseding record pointing at the new document.
    ///
    /// The new record keeps the format version and active state, inherits
    /// the prior record's pass-through metadata segment, and carries the new
    /// blob's content hash. The returned DID string equals the input.
    ///
    /// # Errors
    /// Verifier failures ([`ResolverError::WrongControllerAccount`],
    /// [`ResolverError::Revoked`], [`ResolverError::MalformedRecord`]) and
    /// DID parse failures propagate before any write; ledger failures
    /// propagate unchanged.
    pub async fn run(
        &self,
        params: UpdateDidDocumentParams,
    ) -> Result<UpdateDidDocumentResponse, ResolverError> {
        let did: Did = params.did.parse()?;
        let requester = self.client.derive_address(&params.passphrase).await?;
        let attestation = self.verifier.verify(&did, &requester).await?;

        let document = serde_json::to_vec(&params.new_did_document)?;
        let upload = self
            .client
            .upload_blob(&document, DATA_CLOUD_NAME, &params.passphrase)
            .await?;

        let mut record = DidRecord::active(upload.content_hash);
        record.metadata = attestation.record.metadata;

        self.client
            .set_account_property(
                &attestation.property,
                &record.encode(),
                &attestation.controller,
                &params.passphrase,
            )
            .await?;
        info!("superseded record for {}", did);

        Ok(UpdateDidDocumentResponse {
            did: params.did,
            new_did_document: params.new_did_document,
        })
    }
}
