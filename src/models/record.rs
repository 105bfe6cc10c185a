// src/models/record.rs
//! DID record codec.
//!
//! A record is the value stored under a DID's account property and encodes
//! the current state of one DID as exactly five pipe-delimited fields:
//!
//! ```text
//! <version>|<state>|<metadata>|<kind>|<payload hash>
//! 001|a|0000-0000-0000-00000|c|1ec58d15c6fa43de48fee4702cec26c2ac96002c2a114b06e87fdef72e795340
//! ```
//!
//! Fields must not themselves contain `|`; this is a format constraint the
//! call sites uphold (hashes are hex, the metadata segment is dash-shaped),
//! not something the encoder checks defensively.

use crate::constants::{RECORD_METADATA_DEFAULT, RECORD_VERSION};
use crate::error::ResolverError;

/// Number of pipe-delimited fields in a record.
const FIELD_COUNT: usize = 5;

/// Lifecycle state of a DID, stored as a single-character tag.
///
/// The set is closed: decoding any other tag is a format error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// `a` - the DID is active and may be updated by its controller.
    Active,
    /// `r` - the DID has been revoked; updates must be refused.
    Revoked,
}

impl State {
    fn tag(&self) -> &'static str {
        match self {
            State::Active => "a",
            State::Revoked => "r",
        }
    }

    fn from_tag(tag: &str) -> Result<Self, ResolverError> {
        match tag {
            "a" => Ok(State::Active),
            "r" => Ok(State::Revoked),
            other => Err(ResolverError::MalformedRecord(format!(
                "unknown state tag '{}'",
                other
            ))),
        }
    }
}

/// Kind of the record's payload field, stored as a single-character tag.
///
/// Currently only content references exist; the set is closed but may grow
/// with future format versions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadKind {
    /// `c` - the payload field is a content hash referencing a stored blob.
    ContentReference,
}

impl PayloadKind {
    fn tag(&self) -> &'static str {
        match self {
            PayloadKind::ContentReference => "c",
        }
    }

    fn from_tag(tag: &str) -> Result<Self, ResolverError> {
        match tag {
            "c" => Ok(PayloadKind::ContentReference),
            other => Err(ResolverError::MalformedRecord(format!(
                "unknown payload kind tag '{}'",
                other
            ))),
        }
    }
}

/// Versioned metadata record stored as a ledger property value.
///
/// Records are created once with state [`State::Active`] and superseded, never
/// mutated in place; only the latest property value transaction is
/// authoritative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DidRecord {
    /// Format version tag, currently `"001"`.
    pub version: String,
    /// Lifecycle state of the DID.
    pub state: State,
    /// Opaque pass-through segment; never interpreted by the protocol.
    pub metadata: String,
    /// Kind of the payload field.
    pub kind: PayloadKind,
    /// Hex content hash of the blob the record points at.
    pub payload_hash: String,
}

impl DidRecord {
    /// Builds a fresh active record for the given payload hash, using the
    /// current format version and the default metadata segment.
    pub fn active(payload_hash: String) -> Self {
        DidRecord {
            version: RECORD_VERSION.to_string(),
            state: State::Active,
            metadata: RECORD_METADATA_DEFAULT.to_string(),
            kind: PayloadKind::ContentReference,
            payload_hash,
        }
    }

    /// Encodes the record into its pipe-delimited wire form.
    ///
    /// Always emits exactly five fields in fixed order; for any well-formed
    /// record `r`, `DidRecord::decode(&r.encode()) == r`.
    pub fn encode(&self) -> String {
        [
            self.version.as_str(),
            self.state.tag(),
            self.metadata.as_str(),
            self.kind.tag(),
            self.payload_hash.as_str(),
        ]
        .join("|")
    }

    /// Decodes a record from its pipe-delimited wire form.
    ///
    /// # Errors
    /// Returns [`ResolverError::MalformedRecord`] if the field count is not
    /// five, the version is not one this decoder understands, the state or
    /// payload kind tag is outside its closed set, or the payload hash is
    /// empty or not hex. No deeper validation of the hash happens here; that
    /// is the attestation verifier's job.
    pub fn decode(value: &str) -> Result<Self, ResolverError> {
        let fields: Vec<&str> = value.split('|').collect();
        if fields.len() != FIELD_COUNT {
            return Err(ResolverError::MalformedRecord(format!(
                "expected {} fields, got {}",
                FIELD_COUNT,
                fields.len()
            )));
        }

        let version = fields[0];
        if version != RECORD_VERSION {
            return Err(ResolverError::MalformedRecord(format!(
                "unsupported record version '{}'",
                version
            )));
        }

        let state = State::from_tag(fields[1])?;
        let kind = PayloadKind::from_tag(fields[3])?;

        let payload_hash = fields[4];
        if payload_hash.is_empty() || !payload_hash.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ResolverError::MalformedRecord(format!(
                "payload hash '{}' is not a hex string",
                payload_hash
            )));
        }

        Ok(DidRecord {
            version: version.to_string(),
            state,
            metadata: fields[2].to_string(),
            kind,
            payload_hash: payload_hash.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    const HASH: &str = "1ec58d15c6fa43de48fee4702cec26c2ac96002c2a114b06e87fdef72e795340";

    fn assert_malformed(result: Result<DidRecord, ResolverError>) {
        match result {
            Err(e) => assert_eq!(e.code(), ErrorCode::MalformedRecord),
            Ok(r) => panic!("expected MalformedRecord, decoded {:?}", r),
        }
    }

    #[test]
    fn test_encode_fixed_field_order() {
        let record = DidRecord::active(HASH.to_string());
        assert_eq!(
            record.encode(),
            format!("001|a|0000-0000-0000-00000|c|{}", HASH)
        );
    }

    #[test]
    fn test_round_trip() {
        let record = DidRecord {
            version: "001".to_string(),
            state: State::Revoked,
            metadata: "1234-5678-9012-34567".to_string(),
            kind: PayloadKind::ContentReference,
            payload_hash: HASH.to_string(),
        };
        let decoded = DidRecord::decode(&record.encode()).unwrap();
        assert_eq!(decoded, record);
    }

    #[test]
    fn test_decode_known_wire_value() {
        let value = format!("001|a|0000-0000-0000-00000|c|{}", HASH);
        let record = DidRecord::decode(&value).unwrap();
        assert_eq!(record.state, State::Active);
        assert_eq!(record.metadata, "0000-0000-0000-00000");
        assert_eq!(record.kind, PayloadKind::ContentReference);
        assert_eq!(record.payload_hash, HASH);
    }

    #[test]
    fn test_decode_rejects_wrong_field_count() {
        assert_malformed(DidRecord::decode("001|a|meta|c"));
        assert_malformed(DidRecord::decode(&format!(
            "001|a|meta|c|{}|extra",
            HASH
        )));
        assert_malformed(DidRecord::decode(""));
    }

    #[test]
    fn test_decode_rejects_unknown_version() {
        assert_malformed(DidRecord::decode(&format!(
            "002|a|0000-0000-0000-00000|c|{}",
            HASH
        )));
    }

    #[test]
    fn test_decode_rejects_unknown_state() {
        assert_malformed(DidRecord::decode(&format!(
            "001|x|0000-0000-0000-00000|c|{}",
            HASH
        )));
    }

    #[test]
    fn test_decode_rejects_unknown_kind() {
        assert_malformed(DidRecord::decode(&format!(
            "001|a|0000-0000-0000-00000|z|{}",
            HASH
        )));
    }

    #[test]
    fn test_decode_rejects_non_hex_hash() {
        assert_malformed(DidRecord::decode("001|a|0000-0000-0000-00000|c|"));
        assert_malformed(DidRecord::decode(
            "001|a|0000-0000-0000-00000|c|not-a-hash",
        ));
    }

    #[test]
    fn test_metadata_passes_through_unmodified() {
        let value = format!("001|r|whatever-shape-here|c|{}", HASH);
        let record = DidRecord::decode(&value).unwrap();
        assert_eq!(record.metadata, "whatever-shape-here");
        assert_eq!(record.encode(), value);
    }
}
