// src/models/mod.rs
//! Data structures: the DID string codec and the record codec.

pub mod did;
pub mod record;
