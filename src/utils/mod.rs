// src/utils/mod.rs
//! Helper functions shared across the crate.

pub mod nonce;
