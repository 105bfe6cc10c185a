// src/lib.rs

//! # did-baa
//!
//! Resolver core for the `did:baa` DID method: anchors DID documents on an
//! append-only ledger that offers content-addressed blob storage and mutable
//! per-account key/value properties.
//!
//! ## Architecture Overview
//! 1. **Models**: the pipe-delimited record codec and the DID string codec
//! 2. **Ledger Layer**: the abstract [`LedgerClient`] capability and an
//!    Ardor node implementation
//! 3. **Services Layer**: attestation verification plus the creation and
//!    update orchestration services
//! 4. **Facade**: [`Resolver`] wiring the services over one shared client
//!
//! ## Example
//! ```no_run
//! use did_baa::{ArdorClient, CreateDidParams, Resolver};
//! use std::sync::Arc;
//!
//! # async fn demo() -> Result<(), did_baa::ResolverError> {
//! let resolver = Resolver::new(Arc::new(ArdorClient::new(
//!     "https://testardor.jelurida.com",
//! )));
//! let response = resolver
//!     .create_did_document(CreateDidParams {
//!         payload: serde_json::json!({ "name": "alice" }),
//!         passphrase: "secret passphrase".to_string(),
//!         is_testnet_did: true,
//!     })
//!     .await?;
//! println!("minted {}", response.did);
//! # Ok(())
//! # }
//! ```

pub mod constants;   // Protocol constants
pub mod error;       // Error taxonomy with stable codes
pub mod ledger;      // Ledger client capability and Ardor implementation
pub mod models;      // Record and DID string codecs
pub mod resolver;    // Public facade
pub mod services;    // Attestation, creation and update services
pub mod utils;       // Nonce generation

pub use error::{ErrorCode, ResolverError};
pub use ledger::ardor::ArdorClient;
pub use ledger::client::{
    BlobUpload, LedgerClient, PropertySet, Transaction, TransactionAttachment,
};
pub use models::did::{Did, NetworkType};
pub use models::record::{DidRecord, PayloadKind, State};
pub use resolver::Resolver;
pub use services::attestation::{Attestation, AttestationVerifier};
pub use services::creation::{CreateDidParams, CreateDidResponse};
pub use services::update::{UpdateDidDocumentParams, UpdateDidDocumentResponse};
