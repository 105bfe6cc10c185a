// src/resolver.rs
//! Public resolver facade.
//!
//! Wires the creation and update services over one shared ledger client and
//! exposes the two operations of the did:baa method.

use crate::error::ResolverError;
use crate::ledger::client::LedgerClient;
use crate::services::creation::{CreateDidParams, CreateDidResponse, CreationService};
use crate::services::update::{
    UpdateDidDocumentParams, UpdateDidDocumentResponse, UpdateService,
};
use std::sync::Arc;

/// Entry point for minting and updating DIDs.
///
/// All operations are single-flow request/response sequences against the
/// ledger; the resolver holds no mutable state of its own.
pub struct Resolver {
    creation: CreationService,
    update: UpdateService,
}

impl Resolver {
    /// Creates a resolver over the given ledger client.
    pub fn new(client: Arc<dyn LedgerClient>) -> Self {
        Resolver {
            creation: CreationService::new(client.clone()),
            update: UpdateService::new(client),
        }
    }

    /// Mints a new DID anchoring `params.payload`.
    pub async fn create_did_document(
        &self,
        params: CreateDidParams,
    ) -> Result<CreateDidResponse, ResolverError> {
        self.creation.run(params).await
    }

    /// Replaces the document of an existing DID after verifying that the
    /// requester controls it.
    pub async fn update_did_document(
        &self,
        params: UpdateDidDocumentParams,
    ) -> Result<UpdateDidDocumentResponse, ResolverError> {
        self.update.run(params).await
    }
}
