// src/services/creation.rs
//! DID creation service.
//!
//! Mints a new DID by uploading the document payload as a blob, anchoring an
//! active record under a freshly drawn property name on the creator's own
//! account, and encoding the property-set transaction's full hash into the
//! public DID string.
//!
//! Creation is not idempotent: a partial failure (blob uploaded, property-set
//! failed) leaves an orphaned blob, which is harmless because blobs are
//! content-addressed and inert without a referencing property. Callers retry
//! the whole operation; a fresh nonce is drawn each attempt, so retries are
//! safe.

use crate::constants::{DATA_CLOUD_NAME, DID_ID_LENGTH, DID_ID_PREFIX};
use crate::error::ResolverError;
use crate::ledger::client::LedgerClient;
use crate::models::did::{Did, NetworkType};
use crate::models::record::DidRecord;
use crate::utils::nonce;
use log::info;
use serde_json::Value;
use std::sync::Arc;

/// Inputs for minting a new DID.
#[derive(Debug, Clone)]
pub struct CreateDidParams {
    /// DID document payload; opaque to this crate.
    pub payload: Value,
    /// Controller account passphrase.
    pub passphrase: String,
    /// Tag the resulting DID string for testnet instead of mainnet.
    pub is_testnet_did: bool,
}

/// Result of a successful creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateDidResponse {
    /// The minted `did:baa` string.
    pub did: String,
}

/// Orchestrates blob upload and property-set to mint a new DID.
pub struct CreationService {
    client: Arc<dyn LedgerClient>,
}

impl CreationService {
    pub fn new(client: Arc<dyn LedgerClient>) -> Self {
        CreationService { client }
    }

    /// Mints a new DID.
    ///
    /// Remote calls run strictly in sequence: each step's output is the next
    /// step's input. Ledger failures propagate unchanged; no retry happens
    /// here.
    pub async fn run(&self, params: CreateDidParams) -> Result<CreateDidResponse, ResolverError> {
        let payload = serde_json::to_vec(&params.payload)?;
        let upload = self
            .client
            .upload_blob(&payload, DATA_CLOUD_NAME, &params.passphrase)
            .await?;

        let did_id = format!("{}{}", DID_ID_PREFIX, nonce::generate(DID_ID_LENGTH));
        let record = DidRecord::active(upload.content_hash);

        let controller = self.client.derive_address(&params.passphrase).await?;
        let property = self
            .client
            .set_account_property(&did_id, &record.encode(), &controller, &params.passphrase)
            .await?;

        let network = if params.is_testnet_did {
            NetworkType::Testnet
        } else {
            NetworkType::Mainnet
        };
        let did = Did::new(network, property.tx_hash);
        info!("minted {} under property {}", did, did_id);

        Ok(CreateDidResponse {
            did: did.to_string(),
        })
    }
}
