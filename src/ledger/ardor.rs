// src/ledger/ardor.rs
//! Ardor node client implementing the [`LedgerClient`] capability.
//!
//! Talks to an Ardor node's HTTP API (`<node>/nxt`) on the IGNIS child
//! chain, which provides the two ledger primitives this crate builds on:
//! tagged-data upload (content-addressed blobs) and account properties
//! (mutable-by-replacement key/value slots).
//!
//! # Error Reporting
//! Ardor nodes report API failures as a 200 response whose body carries
//! `errorCode`/`errorDescription`; those surface as
//! [`ResolverError::Ledger`], as do transport-level failures.

use crate::error::ResolverError;
use crate::ledger::client::{
    BlobUpload, LedgerClient, PropertySet, Transaction, TransactionAttachment,
};
use async_trait::async_trait;
use log::debug;
use serde::Deserialize;
use serde_json::Value;

/// Child chain id of IGNIS, the chain carrying tagged data and properties.
const CHAIN_IGNIS: &str = "2";

/// Ardor transaction as returned by `getTransaction`.
#[derive(Deserialize)]
struct TransactionWire {
    #[serde(rename = "senderRS")]
    sender_rs: String,
    #[serde(rename = "recipientRS")]
    recipient_rs: String,
    attachment: AttachmentWire,
    #[serde(default)]
    height: u64,
    #[serde(default, rename = "blockTimestamp")]
    block_timestamp: u64,
}

#[derive(Deserialize)]
struct AttachmentWire {
    #[serde(default)]
    property: String,
    #[serde(default)]
    value: String,
}

/// HTTP client for one Ardor node.
#[derive(Clone)]
pub struct ArdorClient {
    http: reqwest::Client,
    /// Full API endpoint, e.g. `https://testardor.jelurida.com/nxt`.
    api_url: String,
}

impl ArdorClient {
    /// Creates a client for the node at `node_url` (scheme + host, no path).
    pub fn new(node_url: &str) -> Self {
        ArdorClient {
            http: reqwest::Client::new(),
            api_url: format!("{}/nxt", node_url.trim_end_matches('/')),
        }
    }

    /// Posts one API request and returns the parsed JSON body.
    ///
    /// # Errors
    /// Returns [`ResolverError::Ledger`] on transport failure, a non-JSON
    /// body, or a node-reported `errorDescription`.
    async fn call(&self, request_type: &str, params: &[(&str, &str)]) -> Result<Value, ResolverError> {
        debug!("ardor request: {}", request_type);

        let mut form = vec![("requestType", request_type)];
        form.extend_from_slice(params);

        let body: Value = self
            .http
            .post(&self.api_url)
            .form(&form)
            .send()
            .await?
            .json()
            .await?;

        if let Some(description) = body.get("errorDescription").and_then(Value::as_str) {
            return Err(ResolverError::Ledger(format!(
                "{} failed: {}",
                request_type, description
            )));
        }
        Ok(body)
    }

    /// Extracts a required string field from a response body.
    fn string_field(body: &Value, field: &str) -> Result<String, ResolverError> {
        body.get(field)
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| {
                ResolverError::Ledger(format!("node response is missing '{}'", field))
            })
    }
}

#[async_trait]
impl LedgerClient for ArdorClient {
    async fn upload_blob(
        &self,
        data: &[u8],
        name: &str,
        secret: &str,
    ) -> Result<BlobUpload, ResolverError> {
        let data = std::str::from_utf8(data)
            .map_err(|e| ResolverError::Ledger(format!("blob is not valid UTF-8: {}", e)))?;

        let body = self
            .call(
                "uploadTaggedData",
                &[
                    ("chain", CHAIN_IGNIS),
                    ("name", name),
                    ("data", data),
                    ("secretPhrase", secret),
                ],
            )
            .await?;

        Ok(BlobUpload {
            content_hash: Self::string_field(&body, "fullHash")?,
        })
    }

    async fn set_account_property(
        &self,
        property: &str,
        value: &str,
        recipient: &str,
        secret: &str,
    ) -> Result<PropertySet, ResolverError> {
        let body = self
            .call(
                "setAccountProperty",
                &[
                    ("chain", CHAIN_IGNIS),
                    ("property", property),
                    ("value", value),
                    ("recipient", recipient),
                    ("secretPhrase", secret),
                ],
            )
            .await?;

        Ok(PropertySet {
            tx_hash: Self::string_field(&body, "fullHash")?,
        })
    }

    async fn get_transaction_by_hash(
        &self,
        full_hash: &str,
    ) -> Result<Transaction, ResolverError> {
        let body = self
            .call(
                "getTransaction",
                &[("chain", CHAIN_IGNIS), ("fullHash", full_hash)],
            )
            .await?;

        let wire: TransactionWire = serde_json::from_value(body).map_err(|e| {
            ResolverError::Ledger(format!("unexpected getTransaction response: {}", e))
        })?;

        Ok(Transaction {
            sender_address: wire.sender_rs,
            recipient_address: wire.recipient_rs,
            attachment: TransactionAttachment {
                property: wire.attachment.property,
                value: wire.attachment.value,
            },
            block_height: wire.height,
            block_timestamp: wire.block_timestamp,
        })
    }

    async fn derive_address(&self, secret: &str) -> Result<String, ResolverError> {
        let body = self
            .call("getAccountId", &[("secretPhrase", secret)])
            .await?;
        Self::string_field(&body, "accountRS")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;

    #[tokio::test]
    async fn test_upload_blob_parses_content_hash() {
        // The mock server is shared between tests; match on the request
        // type so each mock only answers its own call.
        let _m = mockito::mock("POST", "/nxt")
            .match_body(Matcher::UrlEncoded(
                "requestType".into(),
                "uploadTaggedData".into(),
            ))
            .with_header("content-type", "application/json")
            .with_body(r#"{"fullHash":"3648ae8aa18516650a24054ecfe8c29d6b5698907629c552e296fdbda49abb82"}"#)
            .create();

        let client = ArdorClient::new(&mockito::server_url());
        let upload = client
            .upload_blob(b"{\"name\":\"alice\"}", "blobaa-did-document-payload", "secret")
            .await
            .unwrap();

        assert_eq!(
            upload.content_hash,
            "3648ae8aa18516650a24054ecfe8c29d6b5698907629c552e296fdbda49abb82"
        );
    }

    #[tokio::test]
    async fn test_node_error_surfaces_as_ledger_error() {
        let _m = mockito::mock("POST", "/nxt")
            .match_body(Matcher::UrlEncoded("fullHash".into(), "00".into()))
            .with_header("content-type", "application/json")
            .with_body(r#"{"errorCode":5,"errorDescription":"Unknown transaction"}"#)
            .create();

        let client = ArdorClient::new(&mockito::server_url());
        let err = client
            .get_transaction_by_hash("00")
            .await
            .unwrap_err();

        assert_eq!(err.code(), crate::error::ErrorCode::Ledger);
        assert!(err.to_string().contains("Unknown transaction"));
    }

    #[tokio::test]
    async fn test_get_transaction_maps_wire_fields() {
        let _m = mockito::mock("POST", "/nxt")
            .match_body(Matcher::UrlEncoded(
                "fullHash".into(),
                "5ca5fb0b6c59f126f674eb504b7302c69ede9cf431d01dba07809314302e565f".into(),
            ))
            .with_header("content-type", "application/json")
            .with_body(
                r#"{
                    "senderRS": "ARDOR-ALICE",
                    "recipientRS": "ARDOR-ALICE",
                    "attachment": {
                        "property": "did://dUZPPiukfaKyLuAaGUcZ",
                        "value": "001|a|0000-0000-0000-00000|c|1ec58d15c6fa43de48fee4702cec26c2ac96002c2a114b06e87fdef72e795340"
                    },
                    "height": 10,
                    "blockTimestamp": 1000
                }"#,
            )
            .create();

        let client = ArdorClient::new(&mockito::server_url());
        let tx = client
            .get_transaction_by_hash(
                "5ca5fb0b6c59f126f674eb504b7302c69ede9cf431d01dba07809314302e565f",
            )
            .await
            .unwrap();

        assert_eq!(tx.sender_address, "ARDOR-ALICE");
        assert_eq!(tx.recipient_address, "ARDOR-ALICE");
        assert_eq!(tx.attachment.property, "did://dUZPPiukfaKyLuAaGUcZ");
        assert_eq!(tx.block_height, 10);
        assert_eq!(tx.block_timestamp, 1000);
    }
}
