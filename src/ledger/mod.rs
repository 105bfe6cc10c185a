// src/ledger/mod.rs
//! Ledger interaction layer: the abstract client capability and the Ardor
//! node implementation.

pub mod ardor;
pub mod client;
